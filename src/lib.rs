//! Graph-based key-phrase extraction from part-of-speech tagged text.
//!
//! Eligible tokens (nouns and adjectives by default) become nodes of a
//! term graph whose edge weights come from a pluggable string distance.
//! PageRank scores the terms, the top share become keywords, and adjacent
//! keywords in the original token stream merge into multi-word phrases.
//!
//! ```
//! use keyrank::{extract_key_phrases, ExtractorConfig, TaggedToken};
//!
//! let tokens = vec![
//!     TaggedToken::new("graph", "NN"),
//!     TaggedToken::new("algorithms", "NN"),
//!     TaggedToken::new("rank", "VBP"),
//!     TaggedToken::new("keywords", "NN"),
//! ];
//! let config = ExtractorConfig::default().with_top_n(2);
//! let extraction = extract_key_phrases(&tokens, &config)?;
//!
//! for phrase in &extraction.phrases {
//!     println!("{}: {:.4}", phrase.text, phrase.score);
//! }
//! # Ok::<(), keyrank::KeyRankError>(())
//! ```
//!
//! The pieces compose individually as well: [`CandidateFilter`] for tag
//! filtering, [`TermGraphBuilder`] and [`CsrGraph`] for graph construction,
//! [`PageRank`] for scoring, [`merge_adjacent`] for phrase assembly.

pub mod errors;
pub mod extract;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod phrase;
pub mod similarity;
pub mod types;

pub use errors::{KeyRankError, Result};
pub use extract::{extract_key_phrases, KeyPhraseExtractor};
pub use graph::builder::TermGraphBuilder;
pub use graph::csr::CsrGraph;
pub use graph::directed::DirectedGraph;
pub use nlp::tags::CandidateFilter;
pub use pagerank::standard::PageRank;
pub use pagerank::Ranking;
pub use phrase::merger::{merge_adjacent, MergedPhrase};
pub use similarity::{Levenshtein, Similarity};
pub use types::{Candidate, Extraction, ExtractorConfig, KeyPhrase, TaggedToken};

/// Crate version, as published
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
