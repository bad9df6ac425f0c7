//! Adjacent-keyword phrase assembly.
//!
//! Ranking scores single words; this stage walks the original token order
//! and joins keyword pairs that appear side by side, so "big" and "data"
//! next to each other come back as "big data".

use crate::errors::{KeyRankError, Result};
use rustc_hash::FxHashSet;

/// A merged phrase and the index where it starts in the scanned sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedPhrase {
    /// One or two space-joined words
    pub text: String,
    /// Index of the phrase's first token
    pub position: usize,
}

/// Join adjacent keywords in `tokens` into two-word phrases.
///
/// `tokens` is the full token sequence of the document and `keywords` the
/// selected keyword set, both under the same normalization. Scans each
/// consecutive pair: two unconsumed keywords merge into one phrase and both
/// words are consumed (by value, so every later occurrence counts as
/// consumed too); an unconsumed keyword next to a non-keyword is emitted
/// standalone. The last token is checked on the final pair since the scan
/// otherwise only evaluates leading elements. Phrases are deduplicated,
/// kept in first-emission order.
///
/// Fails with `AmbiguousInput` when the sequence length equals the keyword
/// count (every token is a keyword, so there is no merge signal) without
/// producing a partial result.
pub fn merge_adjacent<S: AsRef<str>>(
    tokens: &[S],
    keywords: &FxHashSet<String>,
) -> Result<Vec<MergedPhrase>> {
    if tokens.len() == keywords.len() {
        return Err(KeyRankError::AmbiguousInput { len: tokens.len() });
    }

    let mut phrases: Vec<MergedPhrase> = Vec::new();
    let mut emitted: FxHashSet<String> = FxHashSet::default();
    let mut consumed: FxHashSet<&str> = FxHashSet::default();

    let last_pair = tokens.len().saturating_sub(2);
    for i in 0..tokens.len().saturating_sub(1) {
        let first = tokens[i].as_ref();
        let second = tokens[i + 1].as_ref();
        let first_is_keyword = keywords.contains(first) && !consumed.contains(first);
        let second_is_keyword = keywords.contains(second) && !consumed.contains(second);

        if first_is_keyword && second_is_keyword {
            let text = format!("{first} {second}");
            if emitted.insert(text.clone()) {
                phrases.push(MergedPhrase { text, position: i });
            }
            consumed.insert(first);
            consumed.insert(second);
        } else if first_is_keyword {
            if emitted.insert(first.to_string()) {
                phrases.push(MergedPhrase {
                    text: first.to_string(),
                    position: i,
                });
            }
        } else if i == last_pair && second_is_keyword {
            // The trailing token never leads a pair; give it its own check
            if emitted.insert(second.to_string()) {
                phrases.push(MergedPhrase {
                    text: second.to_string(),
                    position: i + 1,
                });
            }
        }
    }

    Ok(phrases)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyword_set(words: &[&str]) -> FxHashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_adjacent_keywords_merge() {
        let tokens = ["big", "data", "systems", "are", "hard"];
        let keywords = keyword_set(&["big", "data", "systems"]);

        let phrases = merge_adjacent(&tokens, &keywords).unwrap();
        let texts: Vec<_> = phrases.iter().map(|p| p.text.as_str()).collect();
        // "big data" merges; "systems" stands alone because "are" is not a keyword
        assert_eq!(texts, vec!["big data", "systems"]);
        assert_eq!(phrases[0].position, 0);
        assert_eq!(phrases[1].position, 2);
    }

    #[test]
    fn test_equal_lengths_is_ambiguous() {
        let tokens = ["alpha", "beta", "gamma"];
        let keywords = keyword_set(&["alpha", "beta", "gamma"]);

        let err = merge_adjacent(&tokens, &keywords).unwrap_err();
        assert_eq!(err, KeyRankError::AmbiguousInput { len: 3 });
    }

    #[test]
    fn test_empty_versus_empty_is_ambiguous() {
        let tokens: [&str; 0] = [];
        let err = merge_adjacent(&tokens, &FxHashSet::default()).unwrap_err();
        assert_eq!(err, KeyRankError::AmbiguousInput { len: 0 });
    }

    #[test]
    fn test_trailing_keyword_pair_merges() {
        let tokens = ["the", "big", "data"];
        let keywords = keyword_set(&["big", "data"]);

        let phrases = merge_adjacent(&tokens, &keywords).unwrap();
        let texts: Vec<_> = phrases.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["big data"]);
        assert_eq!(phrases[0].position, 1);
    }

    #[test]
    fn test_trailing_standalone_keyword() {
        let tokens = ["we", "love", "data"];
        let keywords = keyword_set(&["data"]);

        let phrases = merge_adjacent(&tokens, &keywords).unwrap();
        assert_eq!(
            phrases,
            vec![MergedPhrase {
                text: "data".to_string(),
                position: 2,
            }]
        );
    }

    #[test]
    fn test_consumed_words_not_emitted_standalone() {
        // After "big data" merges, neither member may reappear on its own
        let tokens = ["big", "data", "rules", "data", "big"];
        let keywords = keyword_set(&["big", "data"]);

        let phrases = merge_adjacent(&tokens, &keywords).unwrap();
        let texts: Vec<_> = phrases.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["big data"]);
    }

    #[test]
    fn test_chain_merges_pairwise() {
        // Three keywords in a row: the first two merge and consume
        // themselves, the third pairs with nothing and stands alone
        let tokens = ["stream", "graph", "rank", "now"];
        let keywords = keyword_set(&["stream", "graph", "rank"]);

        let phrases = merge_adjacent(&tokens, &keywords).unwrap();
        let texts: Vec<_> = phrases.iter().map(|p| p.text.as_str()).collect();
        assert_eq!(texts, vec!["stream graph", "rank"]);
    }

    #[test]
    fn test_repeated_standalone_deduplicated() {
        let tokens = ["data", "beats", "data", "noise"];
        let keywords = keyword_set(&["data"]);

        let phrases = merge_adjacent(&tokens, &keywords).unwrap();
        assert_eq!(phrases.len(), 1);
        assert_eq!(phrases[0].text, "data");
        assert_eq!(phrases[0].position, 0);
    }

    #[test]
    fn test_no_keywords_yields_nothing() {
        let tokens = ["just", "plain", "words"];
        let phrases = merge_adjacent(&tokens, &FxHashSet::default()).unwrap();
        assert!(phrases.is_empty());
    }

    #[test]
    fn test_single_token_no_keywords() {
        let tokens = ["alone"];
        let phrases = merge_adjacent(&tokens, &FxHashSet::default()).unwrap();
        assert!(phrases.is_empty());
    }
}
