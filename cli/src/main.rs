//! pdfprobe CLI - inspect extracted PDF page fixtures

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;

use pdfprobe::{reconstruct, session, Document};

#[derive(Parser)]
#[command(name = "pdfprobe")]
#[command(version)]
#[command(about = "Inspect extracted PDF page fixtures", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print cleaned text, one page or the whole flattened document
    Text {
        /// Pages fixture file (extractor JSON output)
        #[arg(value_name = "FIXTURE")]
        fixture: PathBuf,

        /// Page to print (0-based); whole document when omitted
        #[arg(short, long)]
        page: Option<usize>,
    },

    /// Print the reconstructed paragraphs of one page
    Paragraphs {
        /// Pages fixture file
        #[arg(value_name = "FIXTURE")]
        fixture: PathBuf,

        /// Page to reconstruct (0-based)
        #[arg(short, long)]
        page: usize,
    },

    /// Print the unique URLs found on one page
    Links {
        /// Pages fixture file
        #[arg(value_name = "FIXTURE")]
        fixture: PathBuf,

        /// Page to scan (0-based)
        #[arg(short, long)]
        page: usize,
    },

    /// Print the pages whose raw lines match a keyword
    Find {
        /// Pages fixture file
        #[arg(value_name = "FIXTURE")]
        fixture: PathBuf,

        /// Case-insensitive keyword pattern
        #[arg(value_name = "KEYWORD")]
        keyword: String,
    },

    /// Decode a session JWT and report its expiry state
    Token {
        /// The JWT to inspect
        #[arg(value_name = "JWT")]
        jwt: String,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> pdfprobe::Result<()> {
    match command {
        Commands::Text { fixture, page } => {
            let doc = Document::from_json_file(fixture)?;
            match page {
                Some(page) => {
                    for line in reconstruct::extract_text_from_page(&doc, page)? {
                        println!("{line}");
                    }
                }
                None => println!("{}", reconstruct::extract_all_text(&doc)),
            }
        }

        Commands::Paragraphs { fixture, page } => {
            let doc = Document::from_json_file(fixture)?;
            for (i, paragraph) in reconstruct::extract_paragraphs_from_page(&doc, page)?
                .iter()
                .enumerate()
            {
                println!("{} {paragraph}", format!("[{i}]").dimmed());
            }
        }

        Commands::Links { fixture, page } => {
            let doc = Document::from_json_file(fixture)?;
            // set semantics upstream; sort for stable CLI output
            let mut links: Vec<_> = reconstruct::extract_links_from_page(&doc, page)?
                .into_iter()
                .collect();
            links.sort();
            for link in links {
                println!("{}", link.blue());
            }
        }

        Commands::Find { fixture, keyword } => {
            let doc = Document::from_json_file(fixture)?;
            let hits = reconstruct::find_pages_with_keyword(&doc, &keyword)?;
            if hits.is_empty() {
                println!("{}", "no matching pages".yellow());
            } else {
                for page in hits {
                    println!("{page}");
                }
            }
        }

        Commands::Token { jwt } => {
            let claims = session::decode_claims(&jwt)?;
            println!("user:    {}", claims.user_id);
            println!("roles:   {}", claims.roles.join(", "));
            println!("expires: {}", claims.expires_at().to_rfc3339());
            if claims.is_expired() {
                println!("status:  {}", "expired".red().bold());
            } else {
                println!("status:  {}", "valid".green().bold());
            }
        }
    }

    Ok(())
}
