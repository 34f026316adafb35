//! Document-level types.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Page;
use crate::error::{Error, Result};

/// An extracted PDF document: an ordered sequence of pages, indexed 0..N-1.
///
/// Immutable input to the reconstruction functions; no derived state is ever
/// stored back on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Pages in reading order.
    pub pages: Vec<Page>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from pages.
    pub fn from_pages(pages: Vec<Page>) -> Self {
        Self { pages }
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Get a page by 0-based index.
    pub fn get_page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    /// Get a page by 0-based index, failing with the valid interval when the
    /// index is outside the document.
    pub fn try_page(&self, index: usize) -> Result<&Page> {
        self.pages.get(index).ok_or(Error::PageOutOfRange {
            index,
            pages: self.pages.len(),
        })
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Parse a document from the extractor's JSON output
    /// (`{"pages": [{"lines": [...]}]}`).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a pages fixture file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn test_try_page_bounds() {
        let doc = Document::from_pages(vec![Page::from_lines(["x"])]);
        assert!(doc.try_page(0).is_ok());
        let err = doc.try_page(1).unwrap_err();
        assert!(matches!(
            err,
            Error::PageOutOfRange { index: 1, pages: 1 }
        ));
    }

    #[test]
    fn test_from_json() {
        let doc = Document::from_json(r#"{"pages":[{"lines":["a",""]},{"lines":[]}]}"#).unwrap();
        assert_eq!(doc.page_count(), 2);
        assert_eq!(doc.pages[0].lines, vec!["a".to_string(), String::new()]);
        assert!(doc.pages[1].is_empty());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Document::from_json("not json").unwrap_err(),
            Error::Json(_)
        ));
    }
}
