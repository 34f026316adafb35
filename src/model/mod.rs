//! Data model for extracted PDF content.
//!
//! The shape mirrors the raw extractor's output: an ordered sequence of
//! pages, each an ordered sequence of text lines. Everything else in this
//! crate is a read-only view derived from it.

mod document;
mod page;

pub use document::Document;
pub use page::Page;
