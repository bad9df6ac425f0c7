//! Core types shared across the extraction pipeline.

use crate::errors::{KeyRankError, Result};
use serde::{Deserialize, Serialize};

/// A token paired with its part-of-speech tag.
///
/// Tags are opaque strings from whatever tagger produced the input; the
/// defaults elsewhere assume the Penn Treebank vocabulary ("NN", "JJ", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface form of the token
    pub text: String,
    /// Part-of-speech tag
    pub tag: String,
}

impl TaggedToken {
    /// Create a new tagged token
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

/// A token that survived part-of-speech filtering.
///
/// Carries its index in the original token sequence so later stages can
/// reconstruct adjacency and first-occurrence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Surface form, not yet normalized
    pub text: String,
    /// Index into the original token sequence
    pub position: usize,
}

impl Candidate {
    /// Create a new candidate
    pub fn new(text: impl Into<String>, position: usize) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

/// A ranked key phrase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyPhrase {
    /// One or two space-joined normalized words
    pub text: String,
    /// Importance score propagated from the term graph
    pub score: f64,
    /// Index where the phrase starts in the original token sequence
    pub position: usize,
}

/// Outcome of a full extraction run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extraction {
    /// Phrases in descending score order, ties broken by first occurrence
    pub phrases: Vec<KeyPhrase>,
    /// Whether ranking converged before the iteration cap
    pub converged: bool,
    /// Ranking iterations actually run
    pub iterations: usize,
}

/// Configuration for the extraction pipeline.
///
/// All fields are defaulted; the distance function is plugged in on the
/// extractor itself since it is code, not data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Tags whose tokens become graph candidates
    pub allowed_tags: Vec<String>,
    /// Damping factor for rank propagation, in (0, 1)
    pub damping: f64,
    /// Upper bound on ranking iterations
    pub max_iterations: usize,
    /// L1 convergence tolerance
    pub epsilon: f64,
    /// Insert each pair edge in both directions
    pub bidirectional_edges: bool,
    /// Top-ranked terms kept as keywords; 0 keeps a third of the distinct terms
    pub top_n: usize,
    /// Load the stopword list for this language and drop those tokens
    pub stopword_language: Option<String>,
    /// Additional words excluded from candidacy
    pub extra_stopwords: Vec<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            allowed_tags: vec!["NN".to_string(), "NNP".to_string(), "JJ".to_string()],
            damping: 0.85,
            max_iterations: 100,
            epsilon: 1e-4,
            bidirectional_edges: true,
            top_n: 0,
            stopword_language: None,
            extra_stopwords: Vec::new(),
        }
    }
}

impl ExtractorConfig {
    /// Configuration with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allowed part-of-speech tags
    pub fn with_allowed_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.allowed_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Insert pair edges in one direction only when `false`
    pub fn with_bidirectional_edges(mut self, bidirectional: bool) -> Self {
        self.bidirectional_edges = bidirectional;
        self
    }

    /// Set how many top-ranked terms become keywords (0 = a third)
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Drop stopwords of the given language from candidacy
    pub fn with_stopword_language(mut self, language: impl Into<String>) -> Self {
        self.stopword_language = Some(language.into());
        self
    }

    /// Add custom words excluded from candidacy
    pub fn with_extra_stopwords<I, T>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.extra_stopwords = words.into_iter().map(Into::into).collect();
        self
    }

    /// Check every value against its documented domain.
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(KeyRankError::InvalidConfig {
                field: "damping",
                reason: format!("must be in (0, 1), got {}", self.damping),
            });
        }
        if self.max_iterations == 0 {
            return Err(KeyRankError::InvalidConfig {
                field: "max_iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(KeyRankError::InvalidConfig {
                field: "epsilon",
                reason: format!("must be a positive finite number, got {}", self.epsilon),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.allowed_tags, vec!["NN", "NNP", "JJ"]);
        assert_eq!(config.damping, 0.85);
        assert_eq!(config.max_iterations, 100);
        assert_eq!(config.epsilon, 1e-4);
        assert!(config.bidirectional_edges);
        assert_eq!(config.top_n, 0);
        assert!(config.stopword_language.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = ExtractorConfig::new()
            .with_allowed_tags(["NN", "VB"])
            .with_damping(0.9)
            .with_max_iterations(50)
            .with_epsilon(1e-6)
            .with_bidirectional_edges(false)
            .with_top_n(5)
            .with_stopword_language("en")
            .with_extra_stopwords(["foo"]);

        assert_eq!(config.allowed_tags, vec!["NN", "VB"]);
        assert_eq!(config.damping, 0.9);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.epsilon, 1e-6);
        assert!(!config.bidirectional_edges);
        assert_eq!(config.top_n, 5);
        assert_eq!(config.stopword_language.as_deref(), Some("en"));
        assert_eq!(config.extra_stopwords, vec!["foo"]);
    }

    #[test]
    fn test_validate_rejects_bad_damping() {
        for damping in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let config = ExtractorConfig::new().with_damping(damping);
            assert!(
                matches!(
                    config.validate(),
                    Err(KeyRankError::InvalidConfig { field: "damping", .. })
                ),
                "damping {damping} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let config = ExtractorConfig::new().with_max_iterations(0);
        assert!(matches!(
            config.validate(),
            Err(KeyRankError::InvalidConfig {
                field: "max_iterations",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_bad_epsilon() {
        for epsilon in [0.0, -1e-4, f64::NAN, f64::INFINITY] {
            let config = ExtractorConfig::new().with_epsilon(epsilon);
            assert!(
                matches!(
                    config.validate(),
                    Err(KeyRankError::InvalidConfig { field: "epsilon", .. })
                ),
                "epsilon {epsilon} should be rejected"
            );
        }
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = ExtractorConfig::new()
            .with_top_n(7)
            .with_stopword_language("de");
        let json = serde_json::to_string(&config).unwrap();
        let back: ExtractorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_config_deserializes_missing_fields_to_defaults() {
        let config: ExtractorConfig = serde_json::from_str(r#"{"top_n": 3}"#).unwrap();
        assert_eq!(config.top_n, 3);
        assert_eq!(config.damping, 0.85);
        assert_eq!(config.allowed_tags, vec!["NN", "NNP", "JJ"]);
    }

    #[test]
    fn test_extraction_serializes_to_json() {
        let extraction = Extraction {
            phrases: vec![KeyPhrase {
                text: "big data".to_string(),
                score: 0.42,
                position: 0,
            }],
            converged: true,
            iterations: 12,
        };
        let json = serde_json::to_string(&extraction).unwrap();
        assert!(json.contains("\"big data\""));
        assert!(json.contains("\"converged\":true"));
    }
}
