//! # pdfprobe
//!
//! Test-automation helpers for validating downloaded PDF documents.
//!
//! End-to-end suites drive a browser (elsewhere), download a PDF, and run it
//! through a raw text extractor that yields ordered pages of raw lines. This
//! crate turns that low-level output into things a test can assert on:
//! cleaned lines, reconstructed paragraphs, hyperlinks, a flattened
//! full-document string, and keyword-indexed page lookups. It also carries
//! the thin glue around such suites: a cached-session JWT expiry check, a
//! JSON config store, and staging-directory helpers for downloads.
//!
//! ## Quick Start
//!
//! ```
//! use pdfprobe::{reconstruct, Document, Page};
//!
//! fn main() -> pdfprobe::Result<()> {
//!     let doc = Document::from_pages(vec![Page::from_lines([
//!         "Invoice #42",
//!         "Total due: 10 EUR, see",
//!         "https://pay.example.com/42 for details",
//!     ])]);
//!
//!     let paragraphs = reconstruct::extract_paragraphs_from_page(&doc, 0)?;
//!     assert_eq!(paragraphs.len(), 2);
//!
//!     let links = reconstruct::extract_links_from_page(&doc, 0)?;
//!     assert!(links.contains("https://pay.example.com/42"));
//!
//!     let hits = reconstruct::find_pages_with_keyword(&doc, "total")?;
//!     assert_eq!(hits, vec![0]);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod reconstruct;
pub mod session;
pub mod staging;

// Re-export commonly used types
pub use config::{ConfigStore, Settings, DEFAULT_CONFIG_PATH};
pub use error::{Error, Result};
pub use model::{Document, Page};
pub use reconstruct::{
    extract_all_text, extract_links_from_page, extract_paragraphs_from_page,
    extract_text_from_page, find_pages_with_keyword, ReconstructOptions, PAGE_BREAK,
};
pub use session::Claims;
