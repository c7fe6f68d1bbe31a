//! Analyzers combine a tokenizer with a chain of token filters.

use crate::analysis::token::Token;
use crate::analysis::token_filter::{
    AsciiFoldingFilter, LowercaseFilter, StopwordFilter, TokenFilter,
};
use crate::analysis::tokenizer::{Tokenizer, WordTokenizer};

/// A complete text analysis pipeline.
///
/// The same analyzer must be used at indexing time and at query time so
/// that query terms and indexed tokens normalize identically.
pub trait Analyzer: Send + Sync + std::fmt::Debug {
    /// Run the full pipeline on the given text.
    fn analyze(&self, text: &str) -> Vec<Token>;
}

/// Word tokenization, lowercasing, and diacritic folding.
///
/// This is the default analyzer for both indexing and query parsing.
/// Stopwords are kept by default so that phrases over common words keep
/// their exact positions; use [`StandardAnalyzer::with_stopwords`] to
/// filter them.
#[derive(Debug)]
pub struct StandardAnalyzer {
    tokenizer: WordTokenizer,
    filters: Vec<Box<dyn TokenFilter>>,
}

impl StandardAnalyzer {
    /// Create a standard analyzer without stopword removal.
    pub fn new() -> Self {
        StandardAnalyzer {
            tokenizer: WordTokenizer::new(),
            filters: vec![
                Box::new(LowercaseFilter::new()),
                Box::new(AsciiFoldingFilter::new()),
            ],
        }
    }

    /// Create a standard analyzer that also removes the default English
    /// stopwords.
    pub fn with_stopwords() -> Self {
        let mut analyzer = Self::new();
        analyzer.filters.push(Box::new(StopwordFilter::new()));
        analyzer
    }

    /// Append a custom filter to the pipeline.
    pub fn push_filter(&mut self, filter: Box<dyn TokenFilter>) {
        self.filters.push(filter);
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);
        for filter in &self.filters {
            tokens = filter.apply(tokens);
        }
        tokens
    }
}

/// Word tokenization and lowercasing only.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAnalyzer {
    tokenizer: WordTokenizer,
}

impl SimpleAnalyzer {
    /// Create a simple analyzer.
    pub fn new() -> Self {
        SimpleAnalyzer {
            tokenizer: WordTokenizer::new(),
        }
    }
}

impl Analyzer for SimpleAnalyzer {
    fn analyze(&self, text: &str) -> Vec<Token> {
        LowercaseFilter::new().apply(self.tokenizer.tokenize(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new();
        let tokens = analyzer.analyze("Hello, World!");
        assert_eq!(texts(&tokens), vec!["hello", "world"]);
    }

    #[test]
    fn test_standard_analyzer_folds_diacritics() {
        let analyzer = StandardAnalyzer::new();
        let tokens = analyzer.analyze("Café Naïve");
        assert_eq!(texts(&tokens), vec!["cafe", "naive"]);
    }

    #[test]
    fn test_standard_analyzer_keeps_stopwords() {
        let analyzer = StandardAnalyzer::new();
        let tokens = analyzer.analyze("the two colours");
        assert_eq!(texts(&tokens), vec!["the", "two", "colours"]);
    }

    #[test]
    fn test_standard_analyzer_with_stopwords() {
        let analyzer = StandardAnalyzer::with_stopwords();
        let tokens = analyzer.analyze("the two colours");
        assert_eq!(texts(&tokens), vec!["two", "colours"]);
    }

    #[test]
    fn test_simple_analyzer() {
        let analyzer = SimpleAnalyzer::new();
        let tokens = analyzer.analyze("Two Colours");
        assert_eq!(texts(&tokens), vec!["two", "colours"]);
    }

    #[test]
    fn test_analyze_offsets_refer_to_source() {
        let analyzer = StandardAnalyzer::new();
        let source = "A Café in Paris";
        let tokens = analyzer.analyze(source);
        // Normalized text differs, but spans still index the source.
        let cafe = tokens.iter().find(|t| t.text == "cafe").unwrap();
        assert_eq!(&source[cafe.start..cafe.end], "Café");
    }
}
