//! Error types for the sedum search engine.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, SedumError>;

/// Errors surfaced by the search engine.
#[derive(Error, Debug)]
pub enum SedumError {
    /// Malformed query syntax. Carries a human-readable reason and the
    /// offending substring of the raw query.
    #[error("parse error: {reason} (at `{fragment}`)")]
    Parse {
        /// Why the query could not be parsed.
        reason: String,
        /// The substring of the raw query that triggered the error.
        fragment: String,
    },

    /// The candidate set for a query exceeded the configured bound.
    /// The caller may retry with a narrower query.
    #[error("resource limit exceeded: {candidates} candidate documents (limit {limit})")]
    ResourceLimitExceeded {
        /// Number of candidate documents the query produced.
        candidates: usize,
        /// The configured bound.
        limit: usize,
    },

    /// Malformed or internally inconsistent index artifact.
    #[error("index error: {0}")]
    Index(String),

    /// I/O failure while reading or writing an index artifact.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization failure for an index artifact or report.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SedumError {
    /// Create a parse error.
    pub fn parse(reason: impl Into<String>, fragment: impl Into<String>) -> Self {
        SedumError::Parse {
            reason: reason.into(),
            fragment: fragment.into(),
        }
    }

    /// Create an index error.
    pub fn index(message: impl Into<String>) -> Self {
        SedumError::Index(message.into())
    }
}
