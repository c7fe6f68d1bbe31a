//! Query model and parsing.
//!
//! A raw query string like `+yellow -red "two colours" green` parses into a
//! [`ParsedQuery`]: an ordered set of [`QueryTerm`]s, each a word or phrase
//! tagged with an occurrence flag ([`Occur`]). Parsed queries round-trip
//! through [`std::fmt::Display`].
//!
//! # Examples
//!
//! ```
//! use sedum::query::{Occur, QueryParser};
//!
//! let parser = QueryParser::with_standard_analyzer();
//! let query = parser.parse("+yellow -red \"two colours\" green")?;
//! assert_eq!(query.len(), 4);
//! assert_eq!(query.terms_by_occur(Occur::Must).count(), 1);
//! # Ok::<(), sedum::SedumError>(())
//! ```

pub mod parser;
pub mod term;

// Re-exports
pub use parser::QueryParser;
pub use term::{Occur, ParsedQuery, QueryTerm, TermKind};
