//! Text analysis: tokenizers, token filters, and analyzers.
//!
//! The analysis pipeline follows a simple flow:
//!
//! ```text
//! Text → Tokenizer → Token Stream → Token Filters → Analyzed Tokens
//! ```
//!
//! Tokens carry their word position and byte span in the source text, so
//! downstream consumers can do positional (phrase) matching and map tokens
//! back to the original text for snippets.
//!
//! # Examples
//!
//! ```
//! use sedum::analysis::{Analyzer, StandardAnalyzer};
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens = analyzer.analyze("Hello World!");
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["hello", "world"]);
//! ```

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-exports
pub use analyzer::{Analyzer, SimpleAnalyzer, StandardAnalyzer};
pub use token::Token;
pub use token_filter::{AsciiFoldingFilter, LowercaseFilter, StopwordFilter, TokenFilter};
pub use tokenizer::{Tokenizer, WordTokenizer};
