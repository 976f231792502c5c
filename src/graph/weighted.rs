//! Always-directed weighted adjacency used by the shortest-path engine.

use std::collections::BTreeMap;

use crate::types::{Edge, Vertex};

/// A directed weighted graph.
///
/// A two-way relationship is two independent directed edges, so each
/// direction may carry its own weight.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V: Vertex> {
    adjacency: BTreeMap<V, Vec<Edge<V>>>,
}

impl<V: Vertex> WeightedGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    /// Add a vertex. No-op if it already exists.
    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Add a directed edge, creating both endpoints if needed.
    pub fn add_edge(&mut self, source: V, target: V, weight: f64) {
        self.add_vertex(target.clone());
        self.adjacency
            .entry(source)
            .or_default()
            .push(Edge::new(target, weight));
    }

    /// Add the same weight in both directions.
    pub fn add_two_way_edge(&mut self, a: V, b: V, weight: f64) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    /// Outgoing edges of a vertex (empty if the vertex is absent).
    pub fn neighbors(&self, vertex: &V) -> &[Edge<V>] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the vertex exists.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// All vertices, ascending.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.adjacency.keys()
    }

    /// Iterate `(source, outgoing edges)` pairs, sources ascending.
    pub fn adjacency(&self) -> impl Iterator<Item = (&V, &[Edge<V>])> + '_ {
        self.adjacency.iter().map(|(v, edges)| (v, edges.as_slice()))
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}
