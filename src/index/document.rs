//! Stored document metadata.

use serde::{Deserialize, Serialize};

/// Stored metadata for one indexed document.
///
/// The index keeps enough of each document to format a result report:
/// the title, the stored content text used for snippet extraction, and the
/// token count used for length normalization during scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocEntry {
    /// Document id: dense, 0-based, equal to the entry's index position.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Stored text, the source for snippet generation.
    pub content: String,
    /// Number of tokens the indexed content produced.
    pub token_count: u32,
}

impl DocEntry {
    /// Create a document entry.
    pub fn new(id: u32, title: impl Into<String>, content: impl Into<String>, token_count: u32) -> Self {
        DocEntry {
            id,
            title: title.into(),
            content: content.into(),
            token_count,
        }
    }
}
