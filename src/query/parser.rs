//! Query string parser for the `+required -excluded "exact phrase"` syntax.

use std::sync::Arc;

use crate::analysis::{Analyzer, StandardAnalyzer};
use crate::error::{Result, SedumError};
use crate::query::term::{Occur, ParsedQuery, QueryTerm, TermKind};

/// Parses raw query strings into [`ParsedQuery`] structures.
///
/// # Syntax
///
/// - Terms are separated by whitespace.
/// - A double-quoted span is a single phrase unit and may contain spaces:
///   `"two colours"`.
/// - A leading `+` requires the next word or phrase; a leading `-`
///   excludes it. A modifier binds to exactly one following unit.
/// - Term words are normalized through the same analyzer used at indexing
///   time, so `+Yellow` and `+yellow` parse identically.
///
/// An empty (or all-whitespace) input parses to an empty query. Malformed
/// input — an unterminated quote, a dangling modifier, or a word both
/// required and excluded — is a [`SedumError::Parse`].
#[derive(Debug)]
pub struct QueryParser {
    analyzer: Arc<dyn Analyzer>,
}

impl QueryParser {
    /// Create a parser that normalizes terms with the given analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        QueryParser { analyzer }
    }

    /// Create a parser backed by a [`StandardAnalyzer`].
    pub fn with_standard_analyzer() -> Self {
        QueryParser::new(Arc::new(StandardAnalyzer::new()))
    }

    /// Parse a raw query string.
    pub fn parse(&self, raw: &str) -> Result<ParsedQuery> {
        let mut query = ParsedQuery::new();
        let mut chars = raw.char_indices().peekable();

        while let Some(&(start, c)) = chars.peek() {
            if c.is_whitespace() {
                chars.next();
                continue;
            }

            let occur = match c {
                '+' => {
                    chars.next();
                    Some(Occur::Must)
                }
                '-' => {
                    chars.next();
                    Some(Occur::MustNot)
                }
                _ => None,
            };

            match chars.peek().copied() {
                None => {
                    // Only reachable when a modifier was just consumed.
                    return Err(SedumError::parse(
                        "modifier is not attached to a term",
                        &raw[start..],
                    ));
                }
                Some((_, next)) if next.is_whitespace() => {
                    return Err(SedumError::parse(
                        "modifier is not attached to a term",
                        &raw[start..start + c.len_utf8()],
                    ));
                }
                Some((quote_start, '"')) => {
                    chars.next();
                    let words = self.parse_quoted(raw, quote_start, &mut chars)?;
                    // A phrase whose words all normalize away is dropped.
                    if !words.is_empty() {
                        query.push(QueryTerm::new(
                            TermKind::Phrase(words),
                            occur.unwrap_or(Occur::Should),
                        ));
                    }
                }
                Some((word_start, _)) => {
                    let mut word_end = word_start;
                    while let Some(&(i, wc)) = chars.peek() {
                        if wc.is_whitespace() || wc == '"' {
                            break;
                        }
                        word_end = i + wc.len_utf8();
                        chars.next();
                    }
                    let words: Vec<String> = self
                        .analyzer
                        .analyze(&raw[word_start..word_end])
                        .into_iter()
                        .map(|t| t.text)
                        .collect();
                    match Self::term_kind(words) {
                        Some(kind) => {
                            query.push(QueryTerm::new(kind, occur.unwrap_or(Occur::Should)));
                        }
                        None if occur.is_some() => {
                            return Err(SedumError::parse(
                                "modifier is not attached to a term",
                                &raw[start..word_end],
                            ));
                        }
                        // A bare word that normalizes to nothing is dropped.
                        None => {}
                    }
                }
            }
        }

        self.check_conflicts(&query)?;
        Ok(query)
    }

    /// Scan a quoted span (opening quote already consumed) and analyze its
    /// contents into phrase words.
    fn parse_quoted(
        &self,
        raw: &str,
        quote_start: usize,
        chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    ) -> Result<Vec<String>> {
        let content_start = quote_start + 1;
        let mut closing = None;
        for (i, c) in chars.by_ref() {
            if c == '"' {
                closing = Some(i);
                break;
            }
        }
        let Some(content_end) = closing else {
            return Err(SedumError::parse("unterminated quote", &raw[quote_start..]));
        };
        Ok(self
            .analyzer
            .analyze(&raw[content_start..content_end])
            .into_iter()
            .map(|t| t.text)
            .collect())
    }

    /// Turn the analyzed words of a bare (unquoted) input unit into a term
    /// kind. Several words become a phrase: a hyphenated input like
    /// `foo-bar` analyzes to two words and keeps its adjacency requirement.
    fn term_kind(mut words: Vec<String>) -> Option<TermKind> {
        match words.len() {
            0 => None,
            1 => Some(TermKind::Word(words.remove(0))),
            _ => Some(TermKind::Phrase(words)),
        }
    }

    /// Reject queries that require and exclude the same word or phrase.
    fn check_conflicts(&self, query: &ParsedQuery) -> Result<()> {
        for required in query.terms_by_occur(Occur::Must) {
            let conflict = query
                .terms_by_occur(Occur::MustNot)
                .any(|excluded| excluded.kind == required.kind);
            if conflict {
                return Err(SedumError::parse(
                    "term is both required and excluded",
                    required.kind.to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<ParsedQuery> {
        QueryParser::with_standard_analyzer().parse(raw)
    }

    #[test]
    fn test_parse_single_plain_term() {
        let query = parse("appearance").unwrap();
        assert_eq!(query.terms(), &[QueryTerm::plain("appearance")]);
    }

    #[test]
    fn test_parse_modifiers_phrase_and_plain() {
        let query = parse("+yellow  -red \"two colours\"  green").unwrap();
        assert_eq!(
            query.terms(),
            &[
                QueryTerm::must_include("yellow"),
                QueryTerm::must_exclude("red"),
                QueryTerm::phrase(["two", "colours"]),
                QueryTerm::plain("green"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_query() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("   \t ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_normalizes_case_and_diacritics() {
        let query = parse("+Yellow CAFÉ").unwrap();
        assert_eq!(
            query.terms(),
            &[
                QueryTerm::must_include("yellow"),
                QueryTerm::plain("cafe"),
            ]
        );
    }

    #[test]
    fn test_parse_modified_phrase() {
        let query = parse("+\"two colours\"").unwrap();
        assert_eq!(
            query.terms(),
            &[QueryTerm::new(
                TermKind::Phrase(vec!["two".into(), "colours".into()]),
                Occur::Must
            )]
        );

        let query = parse("-\"two colours\"").unwrap();
        assert_eq!(query.terms()[0].occur, Occur::MustNot);
    }

    #[test]
    fn test_parse_single_word_quoted_is_phrase() {
        let query = parse("\"appearance\"").unwrap();
        assert_eq!(
            query.terms(),
            &[QueryTerm::phrase(["appearance"])]
        );
    }

    #[test]
    fn test_parse_unterminated_quote() {
        let err = parse("green \"two colours").unwrap_err();
        match err {
            SedumError::Parse { reason, fragment } => {
                assert!(reason.contains("unterminated"));
                assert_eq!(fragment, "\"two colours");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_trailing_modifier() {
        let err = parse("green +").unwrap_err();
        assert!(matches!(err, SedumError::Parse { .. }));
        let err = parse("green -").unwrap_err();
        assert!(matches!(err, SedumError::Parse { .. }));
    }

    #[test]
    fn test_parse_detached_modifier() {
        let err = parse("+ green").unwrap_err();
        match err {
            SedumError::Parse { fragment, .. } => assert_eq!(fragment, "+"),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_modifier_on_punctuation_only_word() {
        // "..." normalizes to nothing, so the modifier binds to nothing.
        let err = parse("+...").unwrap_err();
        assert!(matches!(err, SedumError::Parse { .. }));
    }

    #[test]
    fn test_parse_drops_punctuation_only_word() {
        let query = parse("green ... yellow").unwrap();
        assert_eq!(
            query.terms(),
            &[QueryTerm::plain("green"), QueryTerm::plain("yellow")]
        );
    }

    #[test]
    fn test_parse_conflicting_modifiers() {
        let err = parse("+yellow -yellow").unwrap_err();
        match err {
            SedumError::Parse { reason, fragment } => {
                assert!(reason.contains("required and excluded"));
                assert_eq!(fragment, "yellow");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_plain_and_excluded_same_word_allowed() {
        // Exclusion simply wins at evaluation time; not a parse error.
        let query = parse("yellow -yellow").unwrap();
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_parse_hyphenated_word_becomes_phrase() {
        let query = parse("twenty-two").unwrap();
        assert_eq!(
            query.terms(),
            &[QueryTerm::phrase(["twenty", "two"])]
        );
    }

    #[test]
    fn test_parse_dedups_repeated_terms() {
        let query = parse("green green green").unwrap();
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn test_display_round_trip() {
        let parser = QueryParser::with_standard_analyzer();
        for raw in [
            "appearance",
            "+yellow -red \"two colours\" green",
            "-\"two colours\" +green",
            "\"one two three\"",
        ] {
            let query = parser.parse(raw).unwrap();
            let reparsed = parser.parse(&query.to_string()).unwrap();
            assert_eq!(query, reparsed, "round trip failed for {raw:?}");
        }
    }
}
