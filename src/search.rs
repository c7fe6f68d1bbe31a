//! Query evaluation and ranking.
//!
//! The [`Searcher`] walks a parsed query against an [`crate::index::InvertedIndex`]:
//! Must terms restrict the candidate set to their intersection, MustNot
//! terms remove documents, phrase terms check positional adjacency, and
//! surviving candidates are scored by term-frequency sums under a
//! configurable length normalization. Results come back as a ranked,
//! restartable [`SearchResults`] sequence.

pub mod phrase;
pub mod results;
pub mod scorer;
pub mod searcher;

// Re-exports
pub use results::{DocumentScore, SearchResults};
pub use scorer::LengthNorm;
pub use searcher::{SearchParams, Searcher};
