//! # Sedum
//!
//! A static full-text search engine for Rust: query parsing and document
//! ranking over a precomputed, immutable inverted index.
//!
//! ## Features
//!
//! - Query syntax with `+required`, `-excluded`, and `"exact phrase"` terms
//! - Positional phrase matching with a configurable adjacency window
//! - Term-frequency scoring with configurable length normalization
//! - Deterministic ranking (ties resolve by ascending document id)
//! - JSON index artifacts produced by an external pipeline or the
//!   in-process [`index::IndexBuilder`]
//! - Snippet-generating report formatting
//!
//! ## Quickstart
//!
//! ```
//! use std::sync::Arc;
//! use sedum::{IndexBuilder, SearchEngine};
//!
//! let mut builder = IndexBuilder::with_standard_analyzer();
//! builder.add_document("Sunflower", "yellow petals, two colours in one plant");
//! builder.add_document("Poppy", "red petals and a green stem");
//! let index = Arc::new(builder.build()?);
//!
//! let engine = SearchEngine::with_defaults(index);
//! for entry in engine.search("+yellow -red \"two colours\"")? {
//!     println!("{} ({:.3}): {}", entry.title, entry.score, entry.snippet);
//! }
//! # Ok::<(), sedum::SedumError>(())
//! ```

// Core modules
pub mod analysis;
pub mod engine;
mod error;
pub mod index;
pub mod query;
pub mod report;
pub mod search;

// Re-exports for the public API
pub use analysis::{Analyzer, SimpleAnalyzer, StandardAnalyzer};
pub use engine::{EngineConfig, EngineConfigBuilder, SearchEngine};
pub use error::{Result, SedumError};
pub use index::{DocEntry, IndexBuilder, InvertedIndex, PostingEntry};
pub use query::{Occur, ParsedQuery, QueryParser, QueryTerm, TermKind};
pub use report::{ReportConfig, ReportEntry, ReportFormatter};
pub use search::{DocumentScore, LengthNorm, SearchParams, SearchResults, Searcher};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
