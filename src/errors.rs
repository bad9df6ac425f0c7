//! Error types for graph construction, configuration, and phrase merging.
//!
//! Ranking itself never fails: an empty graph yields an empty score table,
//! and hitting the iteration cap is reported through the result's
//! `converged` flag rather than an error.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, KeyRankError>;

/// Errors surfaced by the extraction pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KeyRankError {
    /// Edge insertion was given a negative, NaN, or infinite weight.
    ///
    /// The graph is left unchanged: the weight is validated before either
    /// endpoint node is created.
    #[error("invalid edge weight {weight}: must be finite and non-negative")]
    InvalidWeight { weight: f64 },

    /// Phrase merging was invoked with a token sequence in which every token
    /// is a keyword (sequence length equals keyword-set size). There is no
    /// merge signal in that case, so no partial result is produced.
    #[error("cannot merge phrases: all {len} tokens are keywords")]
    AmbiguousInput { len: usize },

    /// A configuration value is outside its documented domain.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}
