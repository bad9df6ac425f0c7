//! Compressed Sparse Row (CSR) snapshot of the term graph.
//!
//! Ranking iterates every edge once per round; CSR keeps the out-edges
//! contiguous and freezes the graph while scores are computed, so the
//! mutable graph cannot change mid-ranking.

use super::directed::DirectedGraph;
use std::hash::Hash;

/// Frozen out-edge adjacency in CSR form.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Edge target node ids
    pub col_idx: Vec<u32>,
    /// Edge weights, parallel to col_idx
    pub weights: Vec<f64>,
    /// Sum of outgoing weights per node
    pub out_weight: Vec<f64>,
}

impl CsrGraph {
    /// Freeze a directed graph into CSR form.
    ///
    /// Edges are sorted by target id within each row so iteration order is
    /// deterministic regardless of hash-map insertion history.
    pub fn from_graph<T: Eq + Hash + Clone>(graph: &DirectedGraph<T>) -> Self {
        let num_nodes = graph.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut out_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);
        for (id, _) in graph.nodes() {
            let mut edges: Vec<(u32, f64)> = graph.out_neighbors(id).collect();
            edges.sort_by_key(|&(target, _)| target);

            out_weight.push(edges.iter().map(|&(_, w)| w).sum());
            for (target, weight) in edges {
                col_idx.push(target);
                weights.push(weight);
            }
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            out_weight,
        }
    }

    /// Iterate (target, weight) pairs of a node's out-edges
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Total outgoing weight of a node
    pub fn out_weight_sum(&self, node: u32) -> f64 {
        self.out_weight[node as usize]
    }

    /// Nodes with zero outgoing weight.
    ///
    /// A node whose edges all carry zero weight sheds no mass either, so the
    /// test is on the weight sum rather than the degree.
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.out_weight[n as usize] == 0.0)
            .collect()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Number of directed edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            out_weight: Vec::new(),
        }
    }
}
