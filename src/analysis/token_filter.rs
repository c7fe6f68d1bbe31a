//! Token filters transforming or dropping tokens after tokenization.

use ahash::AHashSet;
use lazy_static::lazy_static;
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::analysis::token::Token;

/// Transforms a token stream after tokenization.
///
/// Filters may rewrite token text or drop tokens entirely. Word positions
/// of surviving tokens are left untouched, so position gaps from dropped
/// tokens remain visible to phrase matching.
pub trait TokenFilter: Send + Sync + std::fmt::Debug {
    /// Apply this filter to a token stream.
    fn apply(&self, tokens: Vec<Token>) -> Vec<Token>;
}

/// Lowercases token text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl TokenFilter for LowercaseFilter {
    fn apply(&self, mut tokens: Vec<Token>) -> Vec<Token> {
        for token in &mut tokens {
            if token.text.chars().any(|c| c.is_uppercase()) {
                token.text = token.text.to_lowercase();
            }
        }
        tokens
    }
}

/// Strips diacritics by NFKD decomposition, removing combining marks.
///
/// `café` folds to `cafe`, `naïve` to `naive`. Tokens whose text becomes
/// empty after folding are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFoldingFilter;

impl AsciiFoldingFilter {
    /// Create a new folding filter.
    pub fn new() -> Self {
        AsciiFoldingFilter
    }

    fn fold(text: &str) -> String {
        text.nfkd().filter(|c| !is_combining_mark(*c)).collect()
    }
}

impl TokenFilter for AsciiFoldingFilter {
    fn apply(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter_map(|mut token| {
                if !token.text.is_ascii() {
                    token.text = Self::fold(&token.text);
                }
                (!token.text.is_empty()).then_some(token)
            })
            .collect()
    }
}

lazy_static! {
    static ref DEFAULT_STOPWORDS: AHashSet<&'static str> = [
        "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is",
        "it", "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there",
        "these", "they", "this", "to", "was", "will", "with",
    ]
    .iter()
    .copied()
    .collect();
}

/// Drops stopword tokens.
///
/// Expects lowercased input, so it should run after [`LowercaseFilter`].
/// Positions of surviving tokens are preserved.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: AHashSet<String>,
}

impl StopwordFilter {
    /// Create a filter with the default English stopword list.
    pub fn new() -> Self {
        StopwordFilter {
            words: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Create a filter with a custom stopword list.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopwordFilter {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether the given word is a stopword.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenFilter for StopwordFilter {
    fn apply(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .filter(|token| !self.words.contains(&token.text))
            .collect()
    }
}
