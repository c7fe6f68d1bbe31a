//! In-process index construction.
//!
//! The production index artifact is expected to come from an external
//! indexing pipeline; this builder covers tests, small corpora, and the
//! CLI `index` command.

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::{Analyzer, StandardAnalyzer};
use crate::error::Result;
use crate::index::document::DocEntry;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::{PostingEntry, PostingList};

/// Builds an [`InvertedIndex`] from documents, assigning dense document
/// ids in insertion order.
#[derive(Debug)]
pub struct IndexBuilder {
    analyzer: Arc<dyn Analyzer>,
    docs: Vec<DocEntry>,
    postings: AHashMap<String, PostingList>,
}

impl IndexBuilder {
    /// Create a builder that analyzes content with the given analyzer.
    ///
    /// The same analyzer must be used for query parsing against the
    /// resulting index.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        IndexBuilder {
            analyzer,
            docs: Vec::new(),
            postings: AHashMap::new(),
        }
    }

    /// Create a builder backed by a [`StandardAnalyzer`].
    pub fn with_standard_analyzer() -> Self {
        IndexBuilder::new(Arc::new(StandardAnalyzer::new()))
    }

    /// Index one document and return its assigned id.
    ///
    /// The content is analyzed into positional postings; the title is
    /// stored for display only and is not indexed.
    pub fn add_document(&mut self, title: impl Into<String>, content: impl Into<String>) -> u32 {
        let doc_id = self.docs.len() as u32;
        let content = content.into();
        let tokens = self.analyzer.analyze(&content);

        let mut doc_positions: AHashMap<&str, Vec<u32>> = AHashMap::new();
        for token in &tokens {
            doc_positions
                .entry(token.text.as_str())
                .or_default()
                .push(token.position);
        }
        for (term, positions) in doc_positions {
            // Insertion order gives ascending doc ids per list.
            self.postings
                .entry(term.to_string())
                .or_default()
                .push(PostingEntry::new(doc_id, positions));
        }

        self.docs
            .push(DocEntry::new(doc_id, title, content, tokens.len() as u32));
        doc_id
    }

    /// Number of documents added so far.
    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    /// Finish building and validate the index.
    pub fn build(self) -> Result<InvertedIndex> {
        InvertedIndex::from_parts(self.docs, self.postings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_small_corpus() {
        let mut builder = IndexBuilder::with_standard_analyzer();
        let a = builder.add_document("First", "yellow and green");
        let b = builder.add_document("Second", "green, green again");
        assert_eq!((a, b), (0, 1));

        let index = builder.build().unwrap();
        assert_eq!(index.doc_count(), 2);

        let green = index.postings("green").unwrap();
        assert_eq!(green.len(), 2);
        assert_eq!(green[0].doc_id, 0);
        assert_eq!(green[0].term_freq, 1);
        assert_eq!(green[1].doc_id, 1);
        assert_eq!(green[1].term_freq, 2);
        assert_eq!(green[1].positions, vec![0, 1]);

        assert_eq!(index.doc(0).unwrap().token_count, 3);
        assert!(index.postings("and").is_some());
    }

    #[test]
    fn test_title_is_not_indexed() {
        let mut builder = IndexBuilder::with_standard_analyzer();
        builder.add_document("Unsearchable Title", "plain body");
        let index = builder.build().unwrap();
        assert!(index.postings("unsearchable").is_none());
        assert!(index.postings("plain").is_some());
    }

    #[test]
    fn test_positions_follow_analysis() {
        let mut builder = IndexBuilder::with_standard_analyzer();
        builder.add_document("Doc", "Two bright colours");
        let index = builder.build().unwrap();
        assert_eq!(index.postings("two").unwrap()[0].positions, vec![0]);
        assert_eq!(index.postings("colours").unwrap()[0].positions, vec![2]);
    }

    #[test]
    fn test_empty_builder() {
        let index = IndexBuilder::with_standard_analyzer().build().unwrap();
        assert_eq!(index.doc_count(), 0);
        assert_eq!(index.term_count(), 0);
    }
}
