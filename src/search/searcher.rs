//! Query evaluation and ranking against an inverted index.

use std::cmp::Ordering;
use std::sync::Arc;

use ahash::{AHashMap, AHashSet};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SedumError};
use crate::index::InvertedIndex;
use crate::query::{Occur, ParsedQuery, TermKind};
use crate::search::phrase::phrase_occurrences;
use crate::search::results::{DocumentScore, SearchResults};
use crate::search::scorer::LengthNorm;

/// Configuration for query evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchParams {
    /// Maximum distance between successive phrase words. `1` requires
    /// exactly consecutive positions.
    pub adjacency_window: u32,
    /// Upper bound on the candidate set after inclusion/exclusion
    /// filtering; exceeding it fails with
    /// [`SedumError::ResourceLimitExceeded`]. `None` means unbounded.
    pub max_candidates: Option<usize>,
    /// Document-length normalization for scoring.
    pub length_norm: LengthNorm,
    /// Minimum score a hit must reach to be returned.
    pub min_score: f32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            adjacency_window: 1,
            max_candidates: None,
            length_norm: LengthNorm::default(),
            min_score: 0.0,
        }
    }
}

/// Per-term match data resolved against the index.
struct TermMatches {
    /// Display form of the term, used in match evidence.
    label: String,
    occur: Occur,
    /// Document id → term frequency (phrase occurrence count for phrases).
    docs: AHashMap<u32, u32>,
}

/// Evaluates parsed queries against an immutable index.
///
/// The searcher holds an `Arc` to the index and never mutates it, so any
/// number of searchers (or threads) may evaluate concurrently.
#[derive(Debug)]
pub struct Searcher {
    index: Arc<InvertedIndex>,
    params: SearchParams,
}

impl Searcher {
    /// Create a searcher over the given index.
    pub fn new(index: Arc<InvertedIndex>, params: SearchParams) -> Self {
        Searcher { index, params }
    }

    /// The evaluation parameters.
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Evaluate a parsed query, producing ranked results.
    ///
    /// Documents qualify only through positive evidence: at least one
    /// matching Should term, or presence of every Must term. MustNot
    /// terms remove documents outright. An empty query, or one with only
    /// exclusions, matches nothing.
    pub fn search(&self, query: &ParsedQuery) -> Result<SearchResults> {
        if !query.has_positive_terms() {
            debug!("query `{query}` has no positive terms, returning no results");
            return Ok(SearchResults::default());
        }

        let mut positives: Vec<TermMatches> = Vec::new();
        let mut exclusions: Vec<AHashSet<u32>> = Vec::new();
        for term in query.terms() {
            let docs = self.match_term(&term.kind);
            if term.occur == Occur::MustNot {
                exclusions.push(docs.into_keys().collect());
            } else {
                positives.push(TermMatches {
                    label: term.kind.to_string(),
                    occur: term.occur,
                    docs,
                });
            }
        }

        // Candidate set: union of positive matches, restricted to the
        // intersection of Must matches, minus exclusions.
        let mut candidates: AHashSet<u32> = positives
            .iter()
            .flat_map(|tm| tm.docs.keys().copied())
            .collect();
        for tm in positives.iter().filter(|tm| tm.occur == Occur::Must) {
            candidates.retain(|doc_id| tm.docs.contains_key(doc_id));
        }
        for excluded in &exclusions {
            candidates.retain(|doc_id| !excluded.contains(doc_id));
        }

        if let Some(limit) = self.params.max_candidates {
            if candidates.len() > limit {
                return Err(SedumError::ResourceLimitExceeded {
                    candidates: candidates.len(),
                    limit,
                });
            }
        }

        let avg_doc_len = self.index.avg_doc_len();
        let mut hits: Vec<DocumentScore> = Vec::with_capacity(candidates.len());
        for doc_id in candidates {
            let mut raw_score = 0u32;
            let mut matched_terms = Vec::new();
            for tm in &positives {
                if let Some(&tf) = tm.docs.get(&doc_id) {
                    raw_score += tf;
                    matched_terms.push(tm.label.clone());
                }
            }
            let doc_len = self
                .index
                .doc(doc_id)
                .map(|d| d.token_count)
                .unwrap_or_default();
            let score =
                raw_score as f32 / self.params.length_norm.factor(doc_len, avg_doc_len);
            if score >= self.params.min_score {
                hits.push(DocumentScore {
                    doc_id,
                    score,
                    matched_terms,
                });
            }
        }

        // Descending score; equal scores resolve by ascending document id
        // so ranking is deterministic.
        hits.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.doc_id.cmp(&b.doc_id))
        });

        debug!("query `{query}` matched {} documents", hits.len());
        Ok(SearchResults::new(hits))
    }

    /// Resolve one term kind to its matching documents and frequencies.
    fn match_term(&self, kind: &TermKind) -> AHashMap<u32, u32> {
        match kind {
            TermKind::Word(word) => self
                .index
                .postings(word)
                .into_iter()
                .flatten()
                .map(|entry| (entry.doc_id, entry.term_freq))
                .collect(),
            TermKind::Phrase(words) => self.match_phrase(words),
        }
    }

    /// Documents containing the phrase, with occurrence counts.
    fn match_phrase(&self, words: &[String]) -> AHashMap<u32, u32> {
        let mut lists = Vec::with_capacity(words.len());
        for word in words {
            match self.index.postings(word) {
                Some(list) => lists.push(list),
                // A word absent from the corpus rules out the phrase.
                None => return AHashMap::new(),
            }
        }
        let Some((first, rest)) = lists.split_first() else {
            return AHashMap::new();
        };

        let mut matches = AHashMap::new();
        for entry in *first {
            let mut position_lists: Vec<&[u32]> = Vec::with_capacity(lists.len());
            position_lists.push(&entry.positions);
            let mut present = true;
            for list in rest {
                // Posting lists are sorted by document id.
                match list.binary_search_by_key(&entry.doc_id, |e| e.doc_id) {
                    Ok(i) => position_lists.push(&list[i].positions),
                    Err(_) => {
                        present = false;
                        break;
                    }
                }
            }
            if !present {
                continue;
            }
            let occurrences =
                phrase_occurrences(&position_lists, self.params.adjacency_window);
            if occurrences > 0 {
                matches.insert(entry.doc_id, occurrences);
            }
        }
        matches
    }
}
