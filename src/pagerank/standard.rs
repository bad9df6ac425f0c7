//! Power-iteration ranking with dangling-mass redistribution.
//!
//! Implements the classic damped propagation: each round a node keeps the
//! teleport share and receives the damped mass its in-neighbors push along
//! their weighted out-edges. Mass parked on dangling nodes is spread
//! uniformly so the score vector stays a probability distribution.

use super::Ranking;
use crate::graph::csr::CsrGraph;

/// Iterative PageRank-style propagation over a frozen term graph.
#[derive(Debug, Clone)]
pub struct PageRank {
    /// Damping factor: the share of mass that follows edges
    pub damping: f64,
    /// Iteration cap
    pub max_iterations: usize,
    /// L1 convergence tolerance
    pub epsilon: f64,
}

impl Default for PageRank {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            epsilon: 1e-4,
        }
    }
}

impl PageRank {
    /// Create a new engine with default settings
    pub fn new() -> Self {
        Self::default()
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

    /// Run the propagation to convergence or the iteration cap.
    ///
    /// An empty graph yields an empty, converged result. Hitting the cap is
    /// reported through `converged`; the scores are still a usable best
    /// effort.
    pub fn run(&self, graph: &CsrGraph) -> Ranking {
        let n = graph.num_nodes;
        if n == 0 {
            return Ranking::new(vec![], 0, 0.0, true);
        }

        let initial = 1.0 / n as f64;
        let mut scores = vec![initial; n];
        let mut new_scores = vec![0.0; n];

        let dangling = graph.dangling_nodes();
        let teleport = (1.0 - self.damping) / n as f64;
        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.epsilon {
            iterations += 1;

            // Mass parked on dangling nodes is spread uniformly
            let dangling_mass: f64 = dangling.iter().map(|&d| scores[d as usize]).sum();
            new_scores.fill(teleport + self.damping * dangling_mass / n as f64);

            // Each node pushes its damped mass along its out-edges,
            // proportional to edge weight
            for (node, &score) in scores.iter().enumerate() {
                let out_sum = graph.out_weight_sum(node as u32);
                if out_sum > 0.0 {
                    for (target, weight) in graph.neighbors(node as u32) {
                        new_scores[target as usize] += self.damping * score * weight / out_sum;
                    }
                }
            }

            // L1 distance between rounds
            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            // Commit the round; round k+1 reads only round k's snapshot
            std::mem::swap(&mut scores, &mut new_scores);
        }

        // Guard against numerical drift; the sum is already ~1
        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        Ranking::new(scores, iterations, delta, delta <= self.epsilon)
    }
}
