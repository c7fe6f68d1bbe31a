//! Query term model: words, phrases, and occurrence flags.

use std::fmt;

/// Occurrence requirement for a query term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Occur {
    /// The term may match and contributes to scoring (no modifier).
    Should,
    /// The term must match; documents lacking it are excluded (`+` prefix).
    Must,
    /// The term must not match; documents containing it are excluded
    /// (`-` prefix).
    MustNot,
}

/// The matchable content of a query term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TermKind {
    /// A single normalized word.
    Word(String),
    /// An ordered sequence of at least one word that must occur
    /// consecutively (within the adjacency window) in a document.
    Phrase(Vec<String>),
}

impl TermKind {
    /// Whether this is a phrase.
    pub fn is_phrase(&self) -> bool {
        matches!(self, TermKind::Phrase(_))
    }

    /// The constituent words of this term, in order.
    pub fn words(&self) -> &[String] {
        match self {
            TermKind::Word(word) => std::slice::from_ref(word),
            TermKind::Phrase(words) => words,
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermKind::Word(word) => f.write_str(word),
            TermKind::Phrase(words) => write!(f, "\"{}\"", words.join(" ")),
        }
    }
}

/// One constraint of a parsed query: a word or phrase plus its occurrence
/// requirement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryTerm {
    /// The word or phrase to match.
    pub kind: TermKind,
    /// How the match affects document eligibility.
    pub occur: Occur,
}

impl QueryTerm {
    /// Create a term from a kind and occurrence flag.
    pub fn new(kind: TermKind, occur: Occur) -> Self {
        QueryTerm { kind, occur }
    }

    /// An unmodified word term.
    pub fn plain(text: impl Into<String>) -> Self {
        QueryTerm::new(TermKind::Word(text.into()), Occur::Should)
    }

    /// A required word term (`+word`).
    pub fn must_include(text: impl Into<String>) -> Self {
        QueryTerm::new(TermKind::Word(text.into()), Occur::Must)
    }

    /// An excluded word term (`-word`).
    pub fn must_exclude(text: impl Into<String>) -> Self {
        QueryTerm::new(TermKind::Word(text.into()), Occur::MustNot)
    }

    /// An unmodified phrase term (`"two colours"`).
    pub fn phrase<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        QueryTerm::new(
            TermKind::Phrase(words.into_iter().map(Into::into).collect()),
            Occur::Should,
        )
    }
}

impl fmt::Display for QueryTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.occur {
            Occur::Should => {}
            Occur::Must => f.write_str("+")?,
            Occur::MustNot => f.write_str("-")?,
        }
        self.kind.fmt(f)
    }
}

/// A parsed query: an ordered, de-duplicated sequence of terms.
///
/// Invariants upheld by the parser: no term text is empty, phrases hold at
/// least one word, and no word is both required and excluded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedQuery {
    terms: Vec<QueryTerm>,
}

impl ParsedQuery {
    /// Create an empty query.
    pub fn new() -> Self {
        ParsedQuery::default()
    }

    /// Append a term, dropping exact duplicates.
    pub fn push(&mut self, term: QueryTerm) {
        if !self.terms.contains(&term) {
            self.terms.push(term);
        }
    }

    /// The terms of this query in parse order.
    pub fn terms(&self) -> &[QueryTerm] {
        &self.terms
    }

    /// Number of terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the query has no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Iterate over terms with the given occurrence flag.
    pub fn terms_by_occur(&self, occur: Occur) -> impl Iterator<Item = &QueryTerm> {
        self.terms.iter().filter(move |t| t.occur == occur)
    }

    /// Whether the query carries any positive evidence (a Should or Must
    /// term). Queries without positive terms cannot match any document.
    pub fn has_positive_terms(&self) -> bool {
        self.terms.iter().any(|t| t.occur != Occur::MustNot)
    }
}

impl fmt::Display for ParsedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            term.fmt(f)?;
        }
        Ok(())
    }
}

impl FromIterator<QueryTerm> for ParsedQuery {
    fn from_iter<I: IntoIterator<Item = QueryTerm>>(iter: I) -> Self {
        let mut query = ParsedQuery::new();
        for term in iter {
            query.push(term);
        }
        query
    }
}
