//! Ranked search results.

/// Score and match evidence for a single document.
///
/// Created per query evaluation and discarded after report formatting;
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentScore {
    /// Document id.
    pub doc_id: u32,
    /// Relevance score (higher is better).
    pub score: f32,
    /// Display form of each query term that matched this document.
    pub matched_terms: Vec<String>,
}

/// A finite, restartable sequence of document scores ordered by
/// descending score, ties broken by ascending document id.
///
/// The sequence can be iterated any number of times ([`SearchResults::iter`]),
/// and consumed lazily: formatting only the first page touches only the
/// first page of hits.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    hits: Vec<DocumentScore>,
}

impl SearchResults {
    /// Wrap ranked hits. Callers must pass hits already in rank order.
    pub(crate) fn new(hits: Vec<DocumentScore>) -> Self {
        SearchResults { hits }
    }

    /// The ranked hits as a slice.
    pub fn hits(&self) -> &[DocumentScore] {
        &self.hits
    }

    /// Number of matching documents.
    pub fn len(&self) -> usize {
        self.hits.len()
    }

    /// Whether no document matched.
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// Iterate over the ranked hits. Restartable: each call starts a
    /// fresh pass from the top-ranked hit.
    pub fn iter(&self) -> std::slice::Iter<'_, DocumentScore> {
        self.hits.iter()
    }
}

impl<'a> IntoIterator for &'a SearchResults {
    type Item = &'a DocumentScore;
    type IntoIter = std::slice::Iter<'a, DocumentScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.iter()
    }
}

impl IntoIterator for SearchResults {
    type Item = DocumentScore;
    type IntoIter = std::vec::IntoIter<DocumentScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}
