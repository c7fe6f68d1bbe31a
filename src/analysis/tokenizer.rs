//! Text tokenization strategies.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::token::Token;

/// Splits source text into raw tokens.
///
/// Tokenizers produce tokens in source order with 0-based word positions
/// and byte spans into the source text. Normalization (case folding,
/// diacritic stripping) is the job of token filters, not the tokenizer.
pub trait Tokenizer: Send + Sync + std::fmt::Debug {
    /// Tokenize the given text.
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// Tokenizer that splits on Unicode word boundaries (UAX #29).
///
/// Punctuation-only and whitespace spans are dropped; word-internal
/// punctuation such as the apostrophe in `don't` is preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        text.unicode_word_indices()
            .enumerate()
            .map(|(position, (start, word))| {
                Token::new(word, position as u32, start, start + word.len())
            })
            .collect()
    }
}
