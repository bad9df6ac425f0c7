//! Part-of-speech candidate filtering.
//!
//! The first pipeline stage: keeps tokens whose tag is in the allowed set,
//! optionally dropping stopwords, and records each survivor's position so
//! the merge stage can reconstruct adjacency later.

use crate::types::{Candidate, TaggedToken};
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Tags kept by default: noun, proper noun, adjective (Penn Treebank).
pub const DEFAULT_ALLOWED_TAGS: [&str; 3] = ["NN", "NNP", "JJ"];

/// Filters tagged tokens down to graph candidates.
///
/// A token survives when its tag is in the allowed set and its text is not
/// a stopword. The stopword set starts empty; a language list or custom
/// words are opt-in.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    allowed_tags: FxHashSet<String>,
    stopwords: FxHashSet<String>,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self::new(DEFAULT_ALLOWED_TAGS)
    }
}

impl CandidateFilter {
    /// Create a filter for the given allowed tags
    pub fn new<I, T>(allowed_tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        Self {
            allowed_tags: allowed_tags
                .into_iter()
                .map(|t| t.as_ref().to_string())
                .collect(),
            stopwords: FxHashSet::default(),
        }
    }

    /// Also drop stopwords of the given language ("en", "german", ...).
    ///
    /// Unknown languages fall back to English.
    pub fn with_language(mut self, language: &str) -> Self {
        self.stopwords.extend(load_stopwords(language));
        self
    }

    /// Add custom stopwords
    pub fn add_stopwords<I, T>(&mut self, words: I)
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Allow one more tag
    pub fn allow_tag(&mut self, tag: &str) {
        self.allowed_tags.insert(tag.to_string());
    }

    /// Check whether a tag is in the allowed set
    pub fn is_allowed(&self, tag: &str) -> bool {
        self.allowed_tags.contains(tag)
    }

    /// Check a word against the stopword set (case-insensitive)
    pub fn is_stopword(&self, word: &str) -> bool {
        !self.stopwords.is_empty() && self.stopwords.contains(&word.to_lowercase())
    }

    /// Keep tokens whose tag is allowed, preserving order and duplicates.
    ///
    /// Each candidate records its index in `tokens`. Pure: the input is
    /// untouched and repeated calls give the same answer.
    pub fn filter(&self, tokens: &[TaggedToken]) -> Vec<Candidate> {
        tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| self.is_allowed(&token.tag) && !self.is_stopword(&token.text))
            .map(|(position, token)| Candidate::new(token.text.clone(), position))
            .collect()
    }
}

/// Load a stopword list from the `stop-words` crate.
fn load_stopwords(language: &str) -> Vec<String> {
    let lang = match language.to_lowercase().as_str() {
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        _ => LANGUAGE::English,
    };
    get(lang).iter().map(|w| w.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(pairs: &[(&str, &str)]) -> Vec<TaggedToken> {
        pairs
            .iter()
            .map(|(text, tag)| TaggedToken::new(*text, *tag))
            .collect()
    }

    #[test]
    fn test_default_tags() {
        let filter = CandidateFilter::default();
        assert!(filter.is_allowed("NN"));
        assert!(filter.is_allowed("NNP"));
        assert!(filter.is_allowed("JJ"));
        assert!(!filter.is_allowed("VB"));
        assert!(!filter.is_allowed("DT"));
    }

    #[test]
    fn test_filter_keeps_order_and_duplicates() {
        let filter = CandidateFilter::default();
        let input = tokens(&[
            ("big", "JJ"),
            ("data", "NN"),
            ("are", "VBP"),
            ("data", "NN"),
            ("hard", "JJ"),
        ]);

        let candidates = filter.filter(&input);
        let texts: Vec<_> = candidates.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["big", "data", "data", "hard"]);
    }

    #[test]
    fn test_filter_records_positions() {
        let filter = CandidateFilter::default();
        let input = tokens(&[("the", "DT"), ("quick", "JJ"), ("fox", "NN")]);

        let candidates = filter.filter(&input);
        assert_eq!(candidates[0].position, 1);
        assert_eq!(candidates[1].position, 2);
    }

    #[test]
    fn test_filter_is_pure() {
        let filter = CandidateFilter::default();
        let input = tokens(&[("fox", "NN"), ("runs", "VBZ")]);

        let first = filter.filter(&input);
        let second = filter.filter(&input);
        assert_eq!(first, second);
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn test_stopwords_off_by_default() {
        let filter = CandidateFilter::default();
        let input = tokens(&[("thing", "NN")]);
        assert_eq!(filter.filter(&input).len(), 1);
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_language_stopwords() {
        let filter = CandidateFilter::default().with_language("en");
        // "own" is tag-eligible as JJ but a common English stopword
        assert!(filter.is_stopword("own"));
        let input = tokens(&[("own", "JJ"), ("goal", "NN")]);
        let texts: Vec<_> = filter
            .filter(&input)
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(texts, vec!["goal"]);
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = CandidateFilter::default();
        filter.add_stopwords(["Noise"]);
        assert!(filter.is_stopword("noise"));
        assert!(filter.is_stopword("NOISE"));

        let input = tokens(&[("noise", "NN"), ("signal", "NN")]);
        let texts: Vec<_> = filter
            .filter(&input)
            .into_iter()
            .map(|c| c.text)
            .collect();
        assert_eq!(texts, vec!["signal"]);
    }

    #[test]
    fn test_empty_input() {
        let filter = CandidateFilter::default();
        assert!(filter.filter(&[]).is_empty());
    }

    #[test]
    fn test_custom_tag_set() {
        let mut filter = CandidateFilter::new(["NN"]);
        assert!(!filter.is_allowed("JJ"));
        filter.allow_tag("JJ");
        assert!(filter.is_allowed("JJ"));
    }
}
