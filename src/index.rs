//! Inverted index structures: postings, stored documents, loading, and
//! in-process construction.
//!
//! The index is a precomputed artifact: built once (normally by an
//! external pipeline), immutable for the engine's lifetime, and queried
//! read-only during evaluation. The JSON artifact form holds the stored
//! document entries plus a map from term to positional posting list.

pub mod builder;
pub mod document;
pub mod inverted;
pub mod posting;

// Re-exports
pub use builder::IndexBuilder;
pub use document::DocEntry;
pub use inverted::InvertedIndex;
pub use posting::{PostingEntry, PostingList};
