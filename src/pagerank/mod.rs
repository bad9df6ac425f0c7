//! Score propagation over the term graph
//!
//! The engine lives in [`standard`]; this module holds the result type.

pub mod standard;

/// Outcome of a ranking run.
#[derive(Debug, Clone)]
pub struct Ranking {
    /// Per-node scores, indexed by node id
    pub scores: Vec<f64>,
    /// Iterations actually run
    pub iterations: usize,
    /// Final L1 distance between the last two rounds
    pub delta: f64,
    /// Whether the run converged before the iteration cap
    pub converged: bool,
}

impl Ranking {
    /// Create a new ranking result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Top `n` nodes by score, descending; ties keep id order
    pub fn top(&self, n: usize) -> Vec<(u32, f64)> {
        let mut indexed: Vec<_> = self
            .scores
            .iter()
            .enumerate()
            .map(|(i, &s)| (i as u32, s))
            .collect();
        indexed.sort_by(|a, b| b.1.total_cmp(&a.1));
        indexed.truncate(n);
        indexed
    }

    /// Score of one node; 0.0 when out of range
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Sum of all scores (≈ 1.0 for a non-empty graph)
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    /// Number of ranked nodes
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if the ranking is empty
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}
