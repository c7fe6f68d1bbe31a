//! Phrase occurrence matching over positional postings.

/// Count occurrences of a phrase in one document, given the position
/// lists of its constituent words in phrase order.
///
/// Each successive word must appear after the previous one, at most
/// `window` positions away: `window == 1` requires exactly consecutive
/// words, larger windows tolerate gaps (dropped stopwords, intervening
/// words). Position lists must be sorted ascending, as posting lists are.
pub(crate) fn phrase_occurrences(position_lists: &[&[u32]], window: u32) -> u32 {
    let Some((first, rest)) = position_lists.split_first() else {
        return 0;
    };
    if rest.is_empty() {
        return first.len() as u32;
    }

    let mut count = 0;
    for &start in *first {
        let mut cursor = start;
        let mut matched = true;
        for list in rest {
            // Smallest position strictly after the cursor.
            let idx = list.partition_point(|&p| p <= cursor);
            match list.get(idx) {
                Some(&next) if next - cursor <= window => cursor = next,
                _ => {
                    matched = false;
                    break;
                }
            }
        }
        if matched {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consecutive_match() {
        // "two colours" at positions (3,4).
        assert_eq!(phrase_occurrences(&[&[3], &[4]], 1), 1);
    }

    #[test]
    fn test_non_consecutive_no_match_at_window_one() {
        // "two ... colours" with a word in between.
        assert_eq!(phrase_occurrences(&[&[3], &[5]], 1), 0);
    }

    #[test]
    fn test_window_allows_gap() {
        assert_eq!(phrase_occurrences(&[&[3], &[5]], 2), 1);
    }

    #[test]
    fn test_order_matters() {
        // "colours two" does not match "two colours".
        assert_eq!(phrase_occurrences(&[&[4], &[3]], 1), 0);
    }

    #[test]
    fn test_multiple_occurrences() {
        assert_eq!(phrase_occurrences(&[&[0, 10], &[1, 11]], 1), 2);
    }

    #[test]
    fn test_three_word_phrase() {
        assert_eq!(phrase_occurrences(&[&[2], &[3], &[4]], 1), 1);
        assert_eq!(phrase_occurrences(&[&[2], &[3], &[6]], 1), 0);
    }

    #[test]
    fn test_single_word_phrase_counts_occurrences() {
        assert_eq!(phrase_occurrences(&[&[1, 5, 9]], 1), 3);
    }

    #[test]
    fn test_repeated_word_phrase() {
        // "buffalo buffalo" over positions [0, 1, 2]: chains 0→1 and 1→2.
        assert_eq!(phrase_occurrences(&[&[0, 1, 2], &[0, 1, 2]], 1), 2);
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(phrase_occurrences(&[], 1), 0);
        assert_eq!(phrase_occurrences(&[&[]], 1), 0);
        assert_eq!(phrase_occurrences(&[&[1], &[]], 1), 0);
    }
}
