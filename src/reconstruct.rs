//! Document reconstruction: the core of the crate.
//!
//! Takes the low-level extractor output (ordered pages of raw text lines) and
//! derives higher-level artifacts: cleaned lines, paragraphs, hyperlinks,
//! keyword locations, and a single flattened document string. Everything here
//! is a pure function of its arguments; nothing mutates the input
//! [`Document`] and repeated calls yield identical results.
//!
//! Paragraph boundaries are information the extractor has already lost, so
//! [`extract_paragraphs_from_page`] reconstructs them heuristically: a line
//! starting with a lowercase ASCII letter or a digit is treated as the
//! continuation of the previous line. Mis-segmentation at sentence-initial
//! lowercase words is an accepted false positive.

use std::collections::HashSet;

use regex::{Regex, RegexBuilder};

use crate::error::Result;
use crate::model::{Document, Page};

/// Separator inserted between pages by [`extract_all_text`].
pub const PAGE_BREAK: &str = "\n\n--- Page Break ---\n\n";

/// Pattern matchers driving the reconstruction heuristics.
///
/// The defaults reproduce the stock rules (lowercase/digit continuation,
/// `http(s)://` link shape). Tests and callers with unusual corpora can swap
/// either pattern without touching the traversal logic.
#[derive(Debug, Clone)]
pub struct ReconstructOptions {
    /// Matches a cleaned line that continues the current paragraph.
    pub continuation: Regex,
    /// Matches one URL inside the joined page text.
    pub link: Regex,
}

impl Default for ReconstructOptions {
    fn default() -> Self {
        // known-valid literals
        Self {
            continuation: Regex::new(r"^[a-z0-9]").unwrap(),
            link: Regex::new(r"https?://[^\s)]+").unwrap(),
        }
    }
}

/// Extract the cleaned lines of one page.
///
/// Each raw line is trimmed; lines that become empty are discarded. The
/// relative order of surviving lines is preserved and nothing is
/// deduplicated. Fails with [`Error::PageOutOfRange`] when `page_number` is
/// outside `[0, page_count - 1]`.
///
/// [`Error::PageOutOfRange`]: crate::Error::PageOutOfRange
pub fn extract_text_from_page(doc: &Document, page_number: usize) -> Result<Vec<String>> {
    let page = doc.try_page(page_number)?;
    Ok(cleaned_lines(page))
}

fn cleaned_lines(page: &Page) -> Vec<String> {
    page.lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Reconstruct the paragraphs of one page with the default continuation rule.
///
/// Propagates the out-of-range failure of [`extract_text_from_page`]
/// unchanged. A page with zero cleaned lines yields exactly one empty-string
/// paragraph; callers that care should check for it explicitly.
pub fn extract_paragraphs_from_page(doc: &Document, page_number: usize) -> Result<Vec<String>> {
    extract_paragraphs_with(doc, page_number, &ReconstructOptions::default())
}

/// Reconstruct paragraphs using a caller-supplied continuation pattern.
pub fn extract_paragraphs_with(
    doc: &Document,
    page_number: usize,
    options: &ReconstructOptions,
) -> Result<Vec<String>> {
    let lines = extract_text_from_page(doc, page_number)?;
    Ok(assemble_paragraphs(&lines, |line| {
        options.continuation.is_match(line)
    }))
}

/// Merge cleaned lines into paragraphs according to a continuation predicate.
///
/// The buffer starts with the first line (or empty for a line-less page);
/// each subsequent line either extends the buffer, separated by a single
/// space, or flushes it and starts the next paragraph. The final buffer is
/// always appended, which is where the degenerate empty paragraph for an
/// empty page comes from.
fn assemble_paragraphs<F>(lines: &[String], continues: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut paragraphs = Vec::new();
    let mut buffer = String::new();

    let mut iter = lines.iter();
    if let Some(first) = iter.next() {
        buffer.push_str(first);
    }

    for line in iter {
        if continues(line) {
            buffer.push(' ');
            buffer.push_str(line);
        } else {
            paragraphs.push(std::mem::take(&mut buffer));
            buffer.push_str(line);
        }
    }

    paragraphs.push(buffer);
    paragraphs
}

/// Extract the unique URLs mentioned on one page.
///
/// Cleaned lines are joined with single spaces and scanned for
/// `http://`/`https://` runs; a closing parenthesis terminates a match so
/// URLs written as `(https://...)` come out clean. Result is a set, so each
/// distinct URL appears once and no order is guaranteed.
pub fn extract_links_from_page(doc: &Document, page_number: usize) -> Result<HashSet<String>> {
    extract_links_with(doc, page_number, &ReconstructOptions::default())
}

/// Extract unique URLs using a caller-supplied link pattern.
pub fn extract_links_with(
    doc: &Document,
    page_number: usize,
    options: &ReconstructOptions,
) -> Result<HashSet<String>> {
    let joined = extract_text_from_page(doc, page_number)?.join(" ");
    Ok(options
        .link
        .find_iter(&joined)
        .map(|m| m.as_str().to_owned())
        .collect())
}

/// Flatten the whole document into a single string.
///
/// Each page contributes its cleaned lines joined with newlines; pages are
/// joined with [`PAGE_BREAK`]. Deterministic for a given input, so the result
/// is suitable for full-text assertions and snapshots. The entire output is
/// held in memory, which is fine for test fixtures.
pub fn extract_all_text(doc: &Document) -> String {
    doc.pages
        .iter()
        .map(|page| cleaned_lines(page).join("\n"))
        .collect::<Vec<_>>()
        .join(PAGE_BREAK)
}

/// Find the pages whose raw lines match a keyword pattern.
///
/// The keyword is compiled as a case-insensitive regex before any page is
/// scanned; a malformed pattern fails with [`Error::InvalidPattern`] up
/// front. A page matches when any single raw line matches. Note the
/// asymmetry with the other views: search runs over the *raw* extractor
/// lines, not the cleaned ones, matching the unprocessed output the caller
/// saw. Returns 0-based page indices in ascending order; no match anywhere
/// yields an empty vec.
///
/// [`Error::InvalidPattern`]: crate::Error::InvalidPattern
pub fn find_pages_with_keyword(doc: &Document, keyword: &str) -> Result<Vec<usize>> {
    let pattern = RegexBuilder::new(keyword).case_insensitive(true).build()?;

    Ok(doc
        .pages
        .iter()
        .enumerate()
        .filter(|(_, page)| page.lines.iter().any(|line| pattern.is_match(line)))
        .map(|(index, _)| index)
        .collect())
}
