//! Traversal engine: visit orders, hop distances and hop-based analysis.

use std::collections::{BTreeMap, BTreeSet};

use crate::graph::traversal::{self, dfs_sweep, DfsStrategy};
use crate::graph::Graph;
use crate::types::{GraphResult, Vertex};

/// Result of a full traversal query.
pub struct TraversalResult<V> {
    /// The root vertex.
    pub start: V,
    /// Vertices in discovery order.
    pub visited: Vec<V>,
    /// Hop count at which each vertex was found (BFS only).
    pub depths: BTreeMap<V, usize>,
}

/// Stateless engine for unweighted traversal over a [`Graph`].
pub struct TraversalEngine;

impl TraversalEngine {
    /// Create a new traversal engine.
    pub fn new() -> Self {
        Self
    }

    /// Breadth-first discovery order.
    pub fn bfs<V: Vertex>(&self, graph: &Graph<V>, start: &V) -> GraphResult<Vec<V>> {
        traversal::bfs_order(graph, start)
    }

    /// BFS order together with hop depths.
    pub fn traverse<V: Vertex>(&self, graph: &Graph<V>, start: &V) -> GraphResult<TraversalResult<V>> {
        let visited = traversal::bfs_order(graph, start)?;
        let depths = traversal::bfs_distances(graph, start)?;
        Ok(TraversalResult {
            start: start.clone(),
            visited,
            depths,
        })
    }

    /// Hop distances from `start`; unreachable vertices are absent.
    pub fn bfs_distances<V: Vertex>(
        &self,
        graph: &Graph<V>,
        start: &V,
    ) -> GraphResult<BTreeMap<V, usize>> {
        traversal::bfs_distances(graph, start)
    }

    /// Fewest-hop path, or `None` if `goal` is unreachable.
    pub fn bfs_shortest_path<V: Vertex>(
        &self,
        graph: &Graph<V>,
        start: &V,
        goal: &V,
    ) -> GraphResult<Option<Vec<V>>> {
        traversal::bfs_shortest_path(graph, start, goal)
    }

    /// Recursive depth-first discovery order.
    pub fn dfs_recursive<V: Vertex>(&self, graph: &Graph<V>, start: &V) -> GraphResult<Vec<V>> {
        traversal::dfs_recursive(graph, start)
    }

    /// Stack-based depth-first discovery order.
    pub fn dfs_iterative<V: Vertex>(&self, graph: &Graph<V>, start: &V) -> GraphResult<Vec<V>> {
        traversal::dfs_iterative(graph, start)
    }

    /// Depth-first discovery order with an explicit strategy.
    pub fn dfs<V: Vertex>(
        &self,
        graph: &Graph<V>,
        start: &V,
        strategy: DfsStrategy,
    ) -> GraphResult<Vec<V>> {
        traversal::dfs(graph, start, strategy)
    }

    /// Group vertices into components by sweeping from each unvisited vertex.
    ///
    /// Only outgoing edges are followed. On a directed graph the result is a
    /// set of reachability clusters, not strongly connected components.
    pub fn connected_components<V: Vertex>(&self, graph: &Graph<V>) -> Vec<Vec<V>> {
        let mut visited: BTreeSet<&V> = BTreeSet::new();
        let mut components = Vec::new();

        for vertex in graph.vertices() {
            if visited.contains(vertex) {
                continue;
            }
            let mut component = Vec::new();
            dfs_sweep(graph, vertex, &mut visited, &mut component);
            components.push(component);
        }

        components
    }

    /// Largest hop count between any ordered pair of mutually reachable
    /// vertices. O(V·(V+E)).
    pub fn diameter<V: Vertex>(&self, graph: &Graph<V>) -> usize {
        graph
            .vertices()
            .filter_map(|v| traversal::bfs_distances(graph, v).ok())
            .flat_map(|distances| distances.into_values())
            .max()
            .unwrap_or(0)
    }

    /// Vertex with the smallest mean hop distance to the vertices it reaches
    /// (itself included at distance 0). Ties go to the first vertex in
    /// ascending order.
    pub fn central_vertex<V: Vertex>(&self, graph: &Graph<V>) -> Option<V> {
        let mut best: Option<(&V, f64)> = None;

        for vertex in graph.vertices() {
            let Ok(distances) = traversal::bfs_distances(graph, vertex) else {
                continue;
            };
            if distances.is_empty() {
                continue;
            }
            let sum: usize = distances.values().sum();
            let mean = sum as f64 / distances.len() as f64;

            if best.map_or(true, |(_, b)| mean < b) {
                best = Some((vertex, mean));
            }
        }

        best.map(|(v, _)| v.clone())
    }
}

impl Default for TraversalEngine {
    fn default() -> Self {
        Self::new()
    }
}
