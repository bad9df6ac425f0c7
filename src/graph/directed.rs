//! Weighted directed graph with value-deduplicated nodes.
//!
//! Nodes live in a dense arena indexed by `u32`; a value-to-index map
//! provides the dedup lookup, so two insertions of equal values resolve to
//! one node. Edges are hash-keyed per node in both directions and repeated
//! insertion for the same ordered pair accumulates the weight.

use crate::errors::{KeyRankError, Result};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// One arena slot: the node value plus adjacency in both directions.
#[derive(Debug, Clone)]
struct NodeEntry<T> {
    value: T,
    out_edges: FxHashMap<u32, f64>,
    in_edges: FxHashMap<u32, f64>,
}

impl<T> NodeEntry<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            out_edges: FxHashMap::default(),
            in_edges: FxHashMap::default(),
        }
    }
}

/// A weighted directed graph keyed by node value identity.
///
/// Weights must be finite and non-negative. Self-loops are permitted.
#[derive(Debug, Clone)]
pub struct DirectedGraph<T> {
    value_to_id: FxHashMap<T, u32>,
    nodes: Vec<NodeEntry<T>>,
}

impl<T: Eq + Hash + Clone> Default for DirectedGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> DirectedGraph<T> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            value_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph with pre-allocated node capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            value_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create the node for a value, returning its id
    pub fn get_or_create_node(&mut self, value: T) -> u32 {
        if let Some(&id) = self.value_to_id.get(&value) {
            return id;
        }

        let id = self.nodes.len() as u32;
        self.value_to_id.insert(value.clone(), id);
        self.nodes.push(NodeEntry::new(value));
        id
    }

    /// Insert or accumulate a directed edge, creating missing nodes.
    ///
    /// A repeated insertion for the same ordered pair sums onto the existing
    /// weight; there is never more than one edge per pair. Fails with
    /// `InvalidWeight` on a negative, NaN, or infinite weight and leaves the
    /// graph untouched, node creation included.
    pub fn add_edge(&mut self, source: T, destination: T, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(KeyRankError::InvalidWeight { weight });
        }

        let from = self.get_or_create_node(source);
        let to = self.get_or_create_node(destination);
        *self.nodes[from as usize].out_edges.entry(to).or_insert(0.0) += weight;
        *self.nodes[to as usize].in_edges.entry(from).or_insert(0.0) += weight;
        Ok(())
    }

    /// All nodes as (id, value) pairs, in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &T)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, &n.value))
    }

    /// Outgoing (neighbor, weight) pairs of a node
    pub fn out_neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.nodes
            .get(node as usize)
            .into_iter()
            .flat_map(|n| n.out_edges.iter().map(|(&target, &weight)| (target, weight)))
    }

    /// Incoming (neighbor, weight) pairs of a node
    pub fn in_neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.nodes
            .get(node as usize)
            .into_iter()
            .flat_map(|n| n.in_edges.iter().map(|(&source, &weight)| (source, weight)))
    }

    /// Sum of outgoing edge weights; 0.0 marks a dangling node
    pub fn out_weight_sum(&self, node: u32) -> f64 {
        self.nodes
            .get(node as usize)
            .map(|n| n.out_edges.values().sum::<f64>())
            .unwrap_or(0.0)
    }

    /// Node id for a value, if present
    pub fn node_id(&self, value: &T) -> Option<u32> {
        self.value_to_id.get(value).copied()
    }

    /// Value stored at a node id
    pub fn value(&self, id: u32) -> Option<&T> {
        self.nodes.get(id as usize).map(|n| &n.value)
    }

    /// Number of distinct nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.out_edges.len()).sum()
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
