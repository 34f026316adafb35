//! Error types for the pdfprobe library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pdfprobe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reconstructing documents or using the
/// session/config helpers.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A page index outside the document was requested.
    #[error("page index {index} is out of range (valid interval: [0, {}])", .pages.saturating_sub(1))]
    PageOutOfRange {
        /// The offending 0-based page index.
        index: usize,
        /// Number of pages in the document.
        pages: usize,
    },

    /// A keyword search pattern failed to compile.
    #[error("invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// A JWT could not be decoded into claims.
    #[error("invalid token: {0}")]
    InvalidToken(String),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The config file exists but could not be parsed.
    #[error("unable to load config from {}: {reason}", .path.display())]
    ConfigLoad {
        /// Path of the config file.
        path: PathBuf,
        /// Parse failure detail.
        reason: String,
    },
}
