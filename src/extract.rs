//! End-to-end key-phrase extraction.
//!
//! Wires the pipeline: tag filtering → term graph → ranking → phrase
//! merging, under one owned configuration.

use crate::errors::Result;
use crate::graph::builder::TermGraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::nlp::normalize::normalize;
use crate::nlp::tags::CandidateFilter;
use crate::pagerank::standard::PageRank;
use crate::phrase::merger::merge_adjacent;
use crate::similarity::{Levenshtein, Similarity};
use crate::types::{Extraction, ExtractorConfig, KeyPhrase, TaggedToken};
use rustc_hash::{FxHashMap, FxHashSet};

macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("extract_stage", stage = $name).entered();
    };
}

/// Extracts ranked key phrases from tagged tokens.
///
/// Generic over the pairwise distance function; defaults to Levenshtein
/// edit distance.
#[derive(Debug, Clone)]
pub struct KeyPhraseExtractor<S = Levenshtein> {
    config: ExtractorConfig,
    filter: CandidateFilter,
    builder: TermGraphBuilder<S>,
}

impl KeyPhraseExtractor<Levenshtein> {
    /// Extractor with default configuration
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Extractor with the given configuration
    pub fn with_config(config: ExtractorConfig) -> Self {
        let mut filter = CandidateFilter::new(&config.allowed_tags);
        if let Some(language) = &config.stopword_language {
            filter = filter.with_language(language);
        }
        if !config.extra_stopwords.is_empty() {
            filter.add_stopwords(&config.extra_stopwords);
        }
        let builder = TermGraphBuilder::new().with_bidirectional(config.bidirectional_edges);
        Self {
            config,
            filter,
            builder,
        }
    }
}

impl Default for KeyPhraseExtractor<Levenshtein> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Similarity + Sync> KeyPhraseExtractor<S> {
    /// Swap in another distance function, keeping the configuration
    pub fn with_similarity<S2: Similarity + Sync>(
        self,
        similarity: S2,
    ) -> KeyPhraseExtractor<S2> {
        KeyPhraseExtractor {
            config: self.config,
            filter: self.filter,
            builder: self.builder.with_similarity(similarity),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Run the full pipeline over one document's tokens.
    ///
    /// Empty input (or input with no eligible candidates) produces an empty
    /// extraction, not an error.
    pub fn extract(&self, tokens: &[TaggedToken]) -> Result<Extraction> {
        self.config.validate()?;

        trace_stage!("filter");
        let candidates = self.filter.filter(tokens);

        trace_stage!("graph");
        let graph = self.builder.build(&candidates)?;
        let csr = CsrGraph::from_graph(&graph);

        trace_stage!("rank");
        let ranking = PageRank::new()
            .with_damping(self.config.damping)
            .with_max_iterations(self.config.max_iterations)
            .with_epsilon(self.config.epsilon)
            .run(&csr);

        let keywords: FxHashSet<String> = ranking
            .top(self.keyword_count(graph.node_count()))
            .into_iter()
            .filter_map(|(id, _)| graph.value(id).cloned())
            .collect();

        if keywords.is_empty() {
            return Ok(Extraction {
                phrases: Vec::new(),
                converged: ranking.converged,
                iterations: ranking.iterations,
            });
        }

        trace_stage!("merge");
        let words: Vec<String> = tokens.iter().map(|t| normalize(&t.text)).collect();
        let merged = merge_adjacent(&words, &keywords)?;

        let mut term_scores: FxHashMap<&str, f64> = FxHashMap::default();
        for (id, term) in graph.nodes() {
            term_scores.insert(term.as_str(), ranking.score(id));
        }

        // A phrase inherits the summed scores of its member terms
        let mut phrases: Vec<KeyPhrase> = merged
            .into_iter()
            .map(|phrase| {
                let score = phrase
                    .text
                    .split(' ')
                    .map(|word| term_scores.get(word).copied().unwrap_or(0.0))
                    .sum();
                KeyPhrase {
                    text: phrase.text,
                    score,
                    position: phrase.position,
                }
            })
            .collect();

        phrases.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| a.position.cmp(&b.position))
        });

        Ok(Extraction {
            phrases,
            converged: ranking.converged,
            iterations: ranking.iterations,
        })
    }

    /// How many top terms become keywords: `top_n` when set, else a third
    /// of the distinct terms (rounded up), the classic TextRank share.
    fn keyword_count(&self, distinct_terms: usize) -> usize {
        if self.config.top_n > 0 {
            self.config.top_n
        } else {
            (distinct_terms + 2) / 3
        }
    }
}

/// One-call convenience over [`KeyPhraseExtractor`].
pub fn extract_key_phrases(tokens: &[TaggedToken], config: &ExtractorConfig) -> Result<Extraction> {
    KeyPhraseExtractor::with_config(config.clone()).extract(tokens)
}
