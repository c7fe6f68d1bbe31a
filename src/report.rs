//! Report formatting: ranked scores into displayable entries.

use std::sync::Arc;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::analysis::Analyzer;
use crate::index::InvertedIndex;
use crate::search::SearchResults;

/// One formatted result for the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    /// Document id.
    pub doc_id: u32,
    /// Document title.
    pub title: String,
    /// Text snippet around the first matched term occurrence.
    pub snippet: String,
    /// Relevance score.
    pub score: f32,
}

/// Configuration for report formatting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Maximum number of entries in a report.
    pub max_results: usize,
    /// Characters of context kept on each side of the matched term.
    pub snippet_radius: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            max_results: 10,
            snippet_radius: 60,
        }
    }
}

/// Formats ranked results into report entries.
///
/// Pure and side-effect-free: formatting reads the stored document
/// entries and never touches the postings. The formatter re-analyzes
/// stored content with the engine's analyzer to locate the first matched
/// term occurrence for the snippet.
#[derive(Debug)]
pub struct ReportFormatter {
    analyzer: Arc<dyn Analyzer>,
    config: ReportConfig,
}

impl ReportFormatter {
    /// Create a formatter.
    pub fn new(analyzer: Arc<dyn Analyzer>, config: ReportConfig) -> Self {
        ReportFormatter { analyzer, config }
    }

    /// The formatting configuration.
    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Format ranked results, truncated to the configured maximum.
    pub fn format(&self, results: &SearchResults, index: &InvertedIndex) -> Vec<ReportEntry> {
        results
            .iter()
            .take(self.config.max_results)
            .filter_map(|hit| {
                let doc = index.doc(hit.doc_id)?;
                Some(ReportEntry {
                    doc_id: hit.doc_id,
                    title: doc.title.clone(),
                    snippet: self.snippet(&doc.content, &hit.matched_terms),
                    score: hit.score,
                })
            })
            .collect()
    }

    /// Extract a snippet centered on the first occurrence of any matched
    /// term word; falls back to a content prefix when no stored
    /// occurrence is found.
    fn snippet(&self, content: &str, matched_terms: &[String]) -> String {
        let words: AHashSet<&str> = matched_terms
            .iter()
            .flat_map(|term| term.trim_matches('"').split_whitespace())
            .collect();

        let tokens = self.analyzer.analyze(content);
        match tokens.iter().find(|t| words.contains(t.text.as_str())) {
            Some(token) => self.window(content, token.start, token.end),
            None => self.window(content, 0, 0),
        }
    }

    /// A window of `snippet_radius` characters on each side of the byte
    /// span, aligned to char boundaries and elided with `…` markers.
    fn window(&self, content: &str, span_start: usize, span_end: usize) -> String {
        let radius = self.config.snippet_radius;
        let mut begin = span_start.saturating_sub(radius);
        while !content.is_char_boundary(begin) {
            begin -= 1;
        }
        let mut end = usize::min(span_end + radius, content.len());
        while !content.is_char_boundary(end) {
            end += 1;
        }

        let mut snippet = String::with_capacity(end - begin + 6);
        if begin > 0 {
            snippet.push('…');
        }
        snippet.push_str(content[begin..end].trim());
        if end < content.len() {
            snippet.push('…');
        }
        snippet
    }
}
