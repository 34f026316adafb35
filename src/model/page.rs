//! Page-level types.

use serde::{Deserialize, Serialize};

/// A single page of extracted PDF content.
///
/// `lines` holds the raw extractor output in top-to-bottom reading order.
/// Entries may be empty or whitespace-only; cleaning happens in
/// [`crate::reconstruct`], never here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Raw text lines, order significant.
    pub lines: Vec<String>,
}

impl Page {
    /// Create a page from raw lines.
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Create a page from anything yielding line-like values.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Check whether the page carries no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of raw lines on the page.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_lines() {
        let page = Page::from_lines(["a", "b"]);
        assert_eq!(page.lines, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(page.line_count(), 2);
        assert!(!page.is_empty());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Page::default().is_empty());
    }
}
