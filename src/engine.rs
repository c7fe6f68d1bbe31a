//! High-level search engine facade.

use std::sync::Arc;

use log::debug;

use crate::analysis::{Analyzer, StandardAnalyzer};
use crate::error::Result;
use crate::index::InvertedIndex;
use crate::query::{ParsedQuery, QueryParser};
use crate::report::{ReportConfig, ReportEntry, ReportFormatter};
use crate::search::{SearchParams, SearchResults, Searcher};

/// Configuration for a [`SearchEngine`].
///
/// All collaborators are injected here; the engine holds no global state.
#[derive(Debug)]
pub struct EngineConfig {
    /// Analyzer shared by query parsing and snippet extraction. Must
    /// match the analyzer the index was built with.
    pub analyzer: Arc<dyn Analyzer>,
    /// Query evaluation parameters.
    pub search: SearchParams,
    /// Report formatting parameters.
    pub report: ReportConfig,
}

impl EngineConfig {
    /// Start building a configuration.
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            analyzer: Arc::new(StandardAnalyzer::new()),
            search: SearchParams::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Builder for [`EngineConfig`].
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    analyzer: Option<Arc<dyn Analyzer>>,
    search: Option<SearchParams>,
    report: Option<ReportConfig>,
}

impl EngineConfigBuilder {
    /// Set the analyzer.
    pub fn analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = Some(analyzer);
        self
    }

    /// Set the query evaluation parameters.
    pub fn search(mut self, search: SearchParams) -> Self {
        self.search = Some(search);
        self
    }

    /// Set the report formatting parameters.
    pub fn report(mut self, report: ReportConfig) -> Self {
        self.report = Some(report);
        self
    }

    /// Build the configuration, filling unset parts with defaults.
    pub fn build(self) -> EngineConfig {
        EngineConfig {
            analyzer: self
                .analyzer
                .unwrap_or_else(|| Arc::new(StandardAnalyzer::new())),
            search: self.search.unwrap_or_default(),
            report: self.report.unwrap_or_default(),
        }
    }
}

/// The static search engine: parse, evaluate, format.
///
/// The engine owns an immutable index behind an `Arc` and is safe to
/// share across threads; each call to [`SearchEngine::search`] runs to
/// completion synchronously.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use sedum::engine::SearchEngine;
/// use sedum::index::IndexBuilder;
///
/// let mut builder = IndexBuilder::with_standard_analyzer();
/// builder.add_document("Sunflower", "yellow petals with a green stem");
/// let index = Arc::new(builder.build()?);
///
/// let engine = SearchEngine::with_defaults(index);
/// let report = engine.search("+yellow green")?;
/// assert_eq!(report[0].title, "Sunflower");
/// # Ok::<(), sedum::SedumError>(())
/// ```
#[derive(Debug)]
pub struct SearchEngine {
    index: Arc<InvertedIndex>,
    parser: QueryParser,
    searcher: Searcher,
    formatter: ReportFormatter,
}

impl SearchEngine {
    /// Create an engine over the given index.
    pub fn new(index: Arc<InvertedIndex>, config: EngineConfig) -> Self {
        let parser = QueryParser::new(Arc::clone(&config.analyzer));
        let searcher = Searcher::new(Arc::clone(&index), config.search);
        let formatter = ReportFormatter::new(config.analyzer, config.report);
        SearchEngine {
            index,
            parser,
            searcher,
            formatter,
        }
    }

    /// Create an engine with default configuration.
    pub fn with_defaults(index: Arc<InvertedIndex>) -> Self {
        SearchEngine::new(index, EngineConfig::default())
    }

    /// The index this engine evaluates against.
    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    /// Parse a raw query string.
    pub fn parse(&self, raw: &str) -> Result<ParsedQuery> {
        self.parser.parse(raw)
    }

    /// Parse and evaluate a raw query, returning ranked scores.
    pub fn evaluate(&self, raw: &str) -> Result<SearchResults> {
        let query = self.parser.parse(raw)?;
        self.searcher.search(&query)
    }

    /// Handle one search request end to end: parse the raw query,
    /// evaluate it, and format the ranked results into a report.
    pub fn search(&self, raw: &str) -> Result<Vec<ReportEntry>> {
        let started = std::time::Instant::now();
        let results = self.evaluate(raw)?;
        let report = self.formatter.format(&results, &self.index);
        debug!(
            "search `{raw}`: {} hits, {} reported, {:?}",
            results.len(),
            report.len(),
            started.elapsed()
        );
        Ok(report)
    }
}
