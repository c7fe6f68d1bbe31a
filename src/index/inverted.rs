//! Immutable inverted index over a static document corpus.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SedumError};
use crate::index::document::DocEntry;
use crate::index::posting::{PostingEntry, PostingList};

/// Precomputed inverted mapping from token to posting list, plus the
/// stored document entries the postings refer to.
///
/// The index is immutable after construction and is `Send + Sync`; share
/// it behind an `Arc` for concurrent evaluations. It is normally produced
/// by an external indexing pipeline and loaded from a JSON artifact
/// ([`InvertedIndex::from_file`]); [`crate::index::IndexBuilder`] builds
/// one in-process for tests and small corpora.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvertedIndex {
    docs: Vec<DocEntry>,
    postings: AHashMap<String, PostingList>,
}

impl InvertedIndex {
    /// Assemble an index from stored documents and a postings map,
    /// validating internal consistency.
    pub fn from_parts(docs: Vec<DocEntry>, postings: AHashMap<String, PostingList>) -> Result<Self> {
        let index = InvertedIndex { docs, postings };
        index.validate()?;
        Ok(index)
    }

    /// The posting list for a term, if the term occurs in the corpus.
    pub fn postings(&self, term: &str) -> Option<&[PostingEntry]> {
        self.postings.get(term).map(Vec::as_slice)
    }

    /// The stored entry for a document id.
    pub fn doc(&self, doc_id: u32) -> Option<&DocEntry> {
        self.docs.get(doc_id as usize)
    }

    /// All stored document entries, ordered by id.
    pub fn docs(&self) -> &[DocEntry] {
        &self.docs
    }

    /// Number of documents in the corpus.
    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    /// Number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Average document length in tokens.
    pub fn avg_doc_len(&self) -> f32 {
        if self.docs.is_empty() {
            return 0.0;
        }
        let total: u64 = self.docs.iter().map(|d| u64::from(d.token_count)).sum();
        total as f32 / self.docs.len() as f32
    }

    /// Deserialize an index from its JSON artifact.
    pub fn from_json(json: &str) -> Result<Self> {
        let index: InvertedIndex = serde_json::from_str(json)?;
        index.validate()?;
        info!(
            "loaded index: {} documents, {} terms",
            index.doc_count(),
            index.term_count()
        );
        Ok(index)
    }

    /// Serialize the index to its JSON artifact form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load an index artifact from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write the index artifact to a file.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Check structural invariants: dense document ids, posting lists
    /// sorted by document id, positions sorted, and no posting referring
    /// to an unknown document.
    fn validate(&self) -> Result<()> {
        for (i, doc) in self.docs.iter().enumerate() {
            if doc.id as usize != i {
                return Err(SedumError::index(format!(
                    "document id {} at entry {i} is not dense",
                    doc.id
                )));
            }
        }
        let doc_count = self.docs.len() as u32;
        for (term, list) in &self.postings {
            if list.is_empty() {
                return Err(SedumError::index(format!(
                    "term `{term}` has an empty posting list"
                )));
            }
            let mut prev_doc = None;
            for entry in list {
                if entry.doc_id >= doc_count {
                    return Err(SedumError::index(format!(
                        "term `{term}` refers to unknown document {}",
                        entry.doc_id
                    )));
                }
                if let Some(prev) = prev_doc {
                    if entry.doc_id <= prev {
                        return Err(SedumError::index(format!(
                            "posting list for `{term}` is not sorted by document id"
                        )));
                    }
                }
                prev_doc = Some(entry.doc_id);
                if entry.positions.is_empty() || !entry.positions.is_sorted() {
                    return Err(SedumError::index(format!(
                        "positions for `{term}` in document {} are empty or unsorted",
                        entry.doc_id
                    )));
                }
            }
        }
        Ok(())
    }
}
