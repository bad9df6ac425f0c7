//! Builds the term graph from filtered candidates.
//!
//! Every unordered pair of distinct normalized terms gets an edge weighted
//! by a pluggable distance function. By default both directions are inserted
//! so ranking sees a symmetric similarity relation rather than an
//! enumeration-order artifact.

use crate::errors::Result;
use crate::graph::directed::DirectedGraph;
use crate::nlp::normalize::normalize;
use crate::similarity::{Levenshtein, Similarity};
use crate::types::Candidate;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Below this many distinct terms the pairwise weights are computed
/// sequentially; the quadratic pair count only pays for rayon past it.
const PARALLEL_THRESHOLD: usize = 64;

/// Builds a weighted term graph from candidate terms.
#[derive(Debug, Clone)]
pub struct TermGraphBuilder<S = Levenshtein> {
    similarity: S,
    bidirectional: bool,
}

impl TermGraphBuilder<Levenshtein> {
    /// Builder with Levenshtein distance and bidirectional edges
    pub fn new() -> Self {
        Self {
            similarity: Levenshtein,
            bidirectional: true,
        }
    }
}

impl Default for TermGraphBuilder<Levenshtein> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Similarity + Sync> TermGraphBuilder<S> {
    /// Replace the distance function.
    ///
    /// `Sync` is required so pair weights can be computed in parallel.
    pub fn with_similarity<S2: Similarity + Sync>(self, similarity: S2) -> TermGraphBuilder<S2> {
        TermGraphBuilder {
            similarity,
            bidirectional: self.bidirectional,
        }
    }

    /// Insert each pair edge in one direction only when `false`
    pub fn with_bidirectional(mut self, bidirectional: bool) -> Self {
        self.bidirectional = bidirectional;
        self
    }

    /// Normalize, deduplicate, and connect every unordered pair of terms.
    ///
    /// Terms that normalize to the empty string are dropped; the rest keep
    /// first-seen order, which is also the enumeration order for pairs (each
    /// unordered pair is generated exactly once). A distance function that
    /// returns a non-finite or negative weight surfaces `InvalidWeight`.
    pub fn build(&self, candidates: &[Candidate]) -> Result<DirectedGraph<String>> {
        let terms = dedup_normalized(candidates);
        let mut graph = DirectedGraph::with_capacity(terms.len());

        // A lone term still becomes a node even though it has no pairs
        for term in &terms {
            graph.get_or_create_node(term.clone());
        }

        if terms.len() >= PARALLEL_THRESHOLD {
            self.add_pair_edges_parallel(&terms, &mut graph)?;
        } else {
            self.add_pair_edges(&terms, &mut graph)?;
        }

        Ok(graph)
    }

    fn add_pair_edges(&self, terms: &[String], graph: &mut DirectedGraph<String>) -> Result<()> {
        for i in 0..terms.len() {
            for j in (i + 1)..terms.len() {
                let weight = self.similarity.distance(&terms[i], &terms[j]);
                self.insert_pair(graph, &terms[i], &terms[j], weight)?;
            }
        }
        Ok(())
    }

    /// Distances are mutually independent, so they are computed in parallel
    /// and inserted sequentially in the same (i, j) order as the sequential
    /// path, producing an identical graph.
    fn add_pair_edges_parallel(
        &self,
        terms: &[String],
        graph: &mut DirectedGraph<String>,
    ) -> Result<()> {
        let weights: Vec<(usize, usize, f64)> = (0..terms.len())
            .into_par_iter()
            .flat_map_iter(|i| {
                let similarity = &self.similarity;
                ((i + 1)..terms.len())
                    .map(move |j| (i, j, similarity.distance(&terms[i], &terms[j])))
            })
            .collect();

        for (i, j, weight) in weights {
            self.insert_pair(graph, &terms[i], &terms[j], weight)?;
        }
        Ok(())
    }

    fn insert_pair(
        &self,
        graph: &mut DirectedGraph<String>,
        a: &str,
        b: &str,
        weight: f64,
    ) -> Result<()> {
        graph.add_edge(a.to_string(), b.to_string(), weight)?;
        if self.bidirectional {
            graph.add_edge(b.to_string(), a.to_string(), weight)?;
        }
        Ok(())
    }
}

/// Normalize candidate texts and deduplicate preserving first-seen order.
fn dedup_normalized(candidates: &[Candidate]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut terms = Vec::new();
    for candidate in candidates {
        let term = normalize(&candidate.text);
        if term.is_empty() {
            continue;
        }
        if seen.insert(term.clone()) {
            terms.push(term);
        }
    }
    terms
}
