//! Core graph structure: vertices plus per-source adjacency lists.

use std::collections::BTreeMap;

use crate::types::{Edge, Vertex, DEFAULT_WEIGHT};

use super::WeightedGraph;

/// A directed or undirected graph over an ordered vertex key.
///
/// Vertices iterate in ascending key order. Each adjacency list keeps edges
/// in insertion order and is never deduplicated.
#[derive(Debug, Clone)]
pub struct Graph<V: Vertex> {
    /// Adjacency lists, keyed by source vertex.
    adjacency: BTreeMap<V, Vec<Edge<V>>>,
    /// Fixed at construction.
    directed: bool,
}

impl<V: Vertex> Graph<V> {
    /// Create a new empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            adjacency: BTreeMap::new(),
            directed,
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Add a vertex. No-op if it already exists.
    pub fn add_vertex(&mut self, vertex: V) {
        if !self.adjacency.contains_key(&vertex) {
            log::debug!("vertex {:?} added", vertex);
            self.adjacency.insert(vertex, Vec::new());
        }
    }

    /// Add an edge with the default weight.
    pub fn add_edge(&mut self, source: V, target: V) {
        self.add_weighted_edge(source, target, DEFAULT_WEIGHT);
    }

    /// Add an edge, creating both endpoints if needed.
    ///
    /// Undirected graphs also store the reciprocal entry.
    pub fn add_weighted_edge(&mut self, source: V, target: V, weight: f64) {
        self.add_vertex(source.clone());
        self.add_vertex(target.clone());

        log::debug!(
            "edge {:?} {} {:?} (weight {}) added",
            source,
            if self.directed { "->" } else { "<->" },
            target,
            weight
        );

        if !self.directed {
            self.adjacency
                .entry(target.clone())
                .or_default()
                .push(Edge::new(source.clone(), weight));
        }
        self.adjacency
            .entry(source)
            .or_default()
            .push(Edge::new(target, weight));
    }

    /// Remove every edge from `source` to `target` (and the reciprocal
    /// entries when undirected). Returns whether anything was removed from
    /// the `source` list.
    pub fn remove_edge(&mut self, source: &V, target: &V) -> bool {
        let removed = match self.adjacency.get_mut(source) {
            Some(edges) => {
                let before = edges.len();
                edges.retain(|e| e.target != *target);
                edges.len() != before
            }
            None => return false,
        };

        if !self.directed {
            if let Some(edges) = self.adjacency.get_mut(target) {
                edges.retain(|e| e.target != *source);
            }
        }

        if removed {
            log::debug!("edge {:?} -> {:?} removed", source, target);
        }
        removed
    }

    /// Whether at least one edge `source -> target` is stored.
    pub fn edge_exists(&self, source: &V, target: &V) -> bool {
        self.adjacency
            .get(source)
            .is_some_and(|edges| edges.iter().any(|e| e.target == *target))
    }

    /// Outgoing edges of a vertex (empty if the vertex is absent).
    pub fn neighbors(&self, vertex: &V) -> &[Edge<V>] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of stored outgoing edges.
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.neighbors(vertex).len()
    }

    /// Number of edges pointing at `vertex`. Scans every adjacency list.
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.adjacency
            .values()
            .flatten()
            .filter(|e| e.target == *vertex)
            .count()
    }

    /// Out + in degree for directed graphs, out-degree for undirected ones.
    pub fn degree(&self, vertex: &V) -> usize {
        if self.directed {
            self.out_degree(vertex) + self.in_degree(vertex)
        } else {
            self.out_degree(vertex)
        }
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

    /// Number of logical edges. Each undirected edge occupies two list slots.
    pub fn edge_count(&self) -> usize {
        let total: usize = self.adjacency.values().map(Vec::len).sum();
        if self.directed {
            total
        } else {
            total / 2
        }
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Copy into an always-directed weighted graph. Undirected edges become
    /// two directed edges with the same weight.
    pub fn to_weighted(&self) -> WeightedGraph<V> {
        let mut weighted = WeightedGraph::new();
        for (source, edges) in &self.adjacency {
            weighted.add_vertex(source.clone());
            for edge in edges {
                weighted.add_edge(source.clone(), edge.target.clone(), edge.weight);
            }
        }
        weighted
    }
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::directed()
    }
}
