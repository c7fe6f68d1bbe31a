//! Positional posting lists.

use serde::{Deserialize, Serialize};

/// One document's occurrence data for a single term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingEntry {
    /// Document id.
    #[serde(rename = "doc")]
    pub doc_id: u32,
    /// Term frequency within the document.
    #[serde(rename = "tf")]
    pub term_freq: u32,
    /// Ordered token positions of each occurrence.
    pub positions: Vec<u32>,
}

impl PostingEntry {
    /// Create an entry from a document id and its occurrence positions.
    pub fn new(doc_id: u32, positions: Vec<u32>) -> Self {
        PostingEntry {
            doc_id,
            term_freq: positions.len() as u32,
            positions,
        }
    }
}

/// A term's posting list: entries sorted by ascending document id.
pub type PostingList = Vec<PostingEntry>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_entry_term_freq() {
        let entry = PostingEntry::new(3, vec![1, 4, 9]);
        assert_eq!(entry.doc_id, 3);
        assert_eq!(entry.term_freq, 3);
        assert_eq!(entry.positions, vec![1, 4, 9]);
    }

    #[test]
    fn test_posting_entry_json_field_names() {
        let entry = PostingEntry::new(0, vec![2]);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"doc\":0"));
        assert!(json.contains("\"tf\":1"));
    }
}
