//! Fluent API for building Graph instances.

use crate::types::{Vertex, DEFAULT_WEIGHT};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
pub struct GraphBuilder<V: Vertex> {
    directed: bool,
    vertices: Vec<V>,
    edges: Vec<(V, V, f64)>,
}

impl<V: Vertex> GraphBuilder<V> {
    /// Start a directed graph.
    pub fn directed() -> Self {
        Self {
            directed: true,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Start an undirected graph.
    pub fn undirected() -> Self {
        Self {
            directed: false,
            ..Self::directed()
        }
    }

    /// Add an isolated vertex.
    pub fn vertex(mut self, vertex: impl Into<V>) -> Self {
        self.vertices.push(vertex.into());
        self
    }

    /// Add an edge with weight 1.0.
    pub fn edge(self, source: impl Into<V>, target: impl Into<V>) -> Self {
        self.weighted_edge(source, target, DEFAULT_WEIGHT)
    }

    /// Add an edge with an explicit weight.
    pub fn weighted_edge(mut self, source: impl Into<V>, target: impl Into<V>, weight: f64) -> Self {
        self.edges.push((source.into(), target.into(), weight));
        self
    }

    /// Add a chain of unit edges `a - b - c - ...`.
    pub fn path<I, T>(mut self, vertices: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<V>,
    {
        let mut previous: Option<V> = None;
        for vertex in vertices {
            let vertex = vertex.into();
            if let Some(prev) = previous.take() {
                self.edges.push((prev, vertex.clone(), DEFAULT_WEIGHT));
            } else {
                self.vertices.push(vertex.clone());
            }
            previous = Some(vertex);
        }
        self
    }

    /// Build the final Graph. Edges are inserted in the order they were given.
    pub fn build(self) -> Graph<V> {
        let mut graph = Graph::new(self.directed);
        for vertex in self.vertices {
            graph.add_vertex(vertex);
        }
        for (source, target, weight) in self.edges {
            graph.add_weighted_edge(source, target, weight);
        }
        graph
    }
}
