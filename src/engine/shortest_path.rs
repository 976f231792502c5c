//! Weighted shortest paths with Dijkstra and Floyd-Warshall, plus derived metrics.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use crate::graph::WeightedGraph;
use crate::types::{GraphError, GraphResult, Vertex};

/// Entry in the Dijkstra priority queue.
///
/// Ordered by distance, then by vertex, both reversed so the max-heap pops
/// the smallest `(distance, vertex)` first.
struct QueueEntry<'g, V> {
    distance: f64,
    vertex: &'g V,
}

impl<V: Ord> PartialEq for QueueEntry<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Ord> Eq for QueueEntry<'_, V> {}

impl<V: Ord> PartialOrd for QueueEntry<'_, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for QueueEntry<'_, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(self.vertex))
    }
}

/// Single-source distances and the predecessor tree that produced them.
#[derive(Debug, Clone)]
pub struct DijkstraResult<V> {
    /// The source vertex.
    pub source: V,
    /// Distance to every vertex; `f64::INFINITY` when unreachable.
    pub distances: BTreeMap<V, f64>,
    /// Predecessor on the shortest path; `None` for the source and for
    /// unreachable vertices.
    pub parents: BTreeMap<V, Option<V>>,
}

impl<V: Vertex> DijkstraResult<V> {
    /// Distance to `target`, `None` if the vertex is unknown.
    pub fn distance_to(&self, target: &V) -> Option<f64> {
        self.distances.get(target).copied()
    }

    /// Shortest path from the source to `target`.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        reconstruct_path(&self.source, target, &self.parents)
    }
}

/// Walk predecessor links from `dest` back to `source`.
///
/// Returns `None` if `dest` is unknown or was never reached.
pub fn reconstruct_path<V: Vertex>(
    source: &V,
    dest: &V,
    parents: &BTreeMap<V, Option<V>>,
) -> Option<Vec<V>> {
    match parents.get(dest) {
        None => return None,
        Some(None) if dest != source => return None,
        Some(_) => {}
    }

    let mut path = Vec::new();
    let mut node = Some(dest);
    while let Some(v) = node {
        path.push(v.clone());
        if path.len() > parents.len() {
            return None;
        }
        node = parents.get(v).and_then(Option::as_ref);
    }
    path.reverse();
    Some(path)
}

/// All-pairs distances and next-hop table from Floyd-Warshall.
#[derive(Debug, Clone)]
pub struct AllPairsResult<V> {
    vertices: Vec<V>,
    index: BTreeMap<V, usize>,
    dist: Vec<Vec<f64>>,
    next: Vec<Vec<Option<usize>>>,
}

impl<V: Vertex> AllPairsResult<V> {
    /// Vertices in table order (ascending).
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Distance from `from` to `to`; `f64::INFINITY` when unreachable,
    /// `None` when either vertex is unknown.
    pub fn distance(&self, from: &V, to: &V) -> Option<f64> {
        let i = *self.index.get(from)?;
        let j = *self.index.get(to)?;
        Some(self.dist[i][j])
    }

    /// Shortest path from `from` to `to` by following next-hop pointers.
    ///
    /// The path from a vertex to itself is `[v]`, not `None`.
    pub fn path(&self, from: &V, to: &V) -> Option<Vec<V>> {
        let i = *self.index.get(from)?;
        let j = *self.index.get(to)?;

        let mut path = vec![self.vertices[i].clone()];
        let mut current = i;
        while current != j {
            current = self.next[current][j]?;
            path.push(self.vertices[current].clone());
            if path.len() > self.vertices.len() {
                return None;
            }
        }
        Some(path)
    }

    /// Row of distances from `from`, keyed by destination.
    pub fn distances_from(&self, from: &V) -> Option<BTreeMap<V, f64>> {
        let i = *self.index.get(from)?;
        Some(
            self.vertices
                .iter()
                .cloned()
                .zip(self.dist[i].iter().copied())
                .collect(),
        )
    }
}

/// Stateless engine for weighted shortest-path queries.
pub struct ShortestPathEngine;

impl ShortestPathEngine {
    /// Create a new shortest-path engine.
    pub fn new() -> Self {
        Self
    }

    /// Single-source shortest distances. O((V+E) log V).
    ///
    /// Decreased distances are pushed as new heap entries; entries for
    /// already finalized vertices are skipped when popped.
    pub fn dijkstra<V: Vertex>(
        &self,
        graph: &WeightedGraph<V>,
        source: &V,
    ) -> GraphResult<DijkstraResult<V>> {
        if !graph.contains_vertex(source) {
            return Err(GraphError::invalid_vertex(source));
        }

        let mut distances: BTreeMap<&V, f64> =
            graph.vertices().map(|v| (v, f64::INFINITY)).collect();
        let mut parents: BTreeMap<&V, Option<&V>> = graph.vertices().map(|v| (v, None)).collect();
        let mut finalized: BTreeSet<&V> = BTreeSet::new();
        let mut heap = BinaryHeap::new();

        distances.insert(source, 0.0);
        heap.push(QueueEntry {
            distance: 0.0,
            vertex: source,
        });

        while let Some(QueueEntry { distance, vertex }) = heap.pop() {
            if !finalized.insert(vertex) {
                continue;
            }

            for edge in graph.neighbors(vertex) {
                if finalized.contains(&edge.target) {
                    continue;
                }
                let candidate = distance + edge.weight;
                let current = distances
                    .get(&edge.target)
                    .copied()
                    .unwrap_or(f64::INFINITY);
                if candidate < current {
                    distances.insert(&edge.target, candidate);
                    parents.insert(&edge.target, Some(vertex));
                    heap.push(QueueEntry {
                        distance: candidate,
                        vertex: &edge.target,
                    });
                }
            }
        }

        log::debug!(
            "dijkstra from {:?}: {} of {} vertices reached",
            source,
            finalized.len(),
            graph.vertex_count()
        );

        Ok(DijkstraResult {
            source: source.clone(),
            distances: distances
                .into_iter()
                .map(|(v, d)| (v.clone(), d))
                .collect(),
            parents: parents
                .into_iter()
                .map(|(v, p)| (v.clone(), p.cloned()))
                .collect(),
        })
    }

    /// Shortest path from `source` to `dest` using an earlier Dijkstra run's
    /// predecessor map.
    pub fn reconstruct_path<V: Vertex>(
        &self,
        source: &V,
        dest: &V,
        parents: &BTreeMap<V, Option<V>>,
    ) -> Option<Vec<V>> {
        reconstruct_path(source, dest, parents)
    }

    /// All-pairs shortest distances. O(V³).
    ///
    /// Fails with `NegativeCycleDetected` if any vertex ends up with a
    /// negative distance to itself.
    pub fn floyd_warshall<V: Vertex>(&self, graph: &WeightedGraph<V>) -> GraphResult<AllPairsResult<V>> {
        let vertices: Vec<V> = graph.vertices().cloned().collect();
        let index: BTreeMap<V, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), i))
            .collect();
        let n = vertices.len();

        let mut dist = vec![vec![f64::INFINITY; n]; n];
        let mut next: Vec<Vec<Option<usize>>> = vec![vec![None; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = 0.0;
        }

        // Parallel edges keep the lightest weight.
        for (source, edges) in graph.adjacency() {
            let u = index[source];
            for edge in edges {
                let v = index[&edge.target];
                if edge.weight < dist[u][v] {
                    dist[u][v] = edge.weight;
                    next[u][v] = Some(v);
                }
            }
        }

        for k in 0..n {
            for i in 0..n {
                let d_ik = dist[i][k];
                if d_ik == f64::INFINITY {
                    continue;
                }
                for j in 0..n {
                    let through_k = d_ik + dist[k][j];
                    if through_k < dist[i][j] {
                        dist[i][j] = through_k;
                        next[i][j] = next[i][k];
                    }
                }
            }
        }

        if let Some(i) = (0..n).find(|&i| dist[i][i] < 0.0) {
            log::warn!("negative cycle through {:?}", vertices[i]);
            return Err(GraphError::NegativeCycleDetected {
                vertex: format!("{:?}", vertices[i]),
            });
        }

        Ok(AllPairsResult {
            vertices,
            index,
            dist,
            next,
        })
    }

    /// Mean of the finite, strictly positive distances from `vertex`.
    /// `f64::INFINITY` if it reaches nothing.
    pub fn average_distance<V: Vertex>(&self, graph: &WeightedGraph<V>, vertex: &V) -> GraphResult<f64> {
        let result = self.dijkstra(graph, vertex)?;
        let reachable: Vec<f64> = result
            .distances
            .values()
            .copied()
            .filter(|d| d.is_finite() && *d > 0.0)
            .collect();

        if reachable.is_empty() {
            return Ok(f64::INFINITY);
        }
        Ok(reachable.iter().sum::<f64>() / reachable.len() as f64)
    }

    /// Vertex with the smallest finite average distance. Ties go to the first
    /// vertex in ascending order.
    pub fn most_central_vertex<V: Vertex>(&self, graph: &WeightedGraph<V>) -> Option<V> {
        let mut best: Option<(&V, f64)> = None;
        for vertex in graph.vertices() {
            let Ok(average) = self.average_distance(graph, vertex) else {
                continue;
            };
            if average < best.map_or(f64::INFINITY, |(_, b)| b) {
                best = Some((vertex, average));
            }
        }
        best.map(|(v, _)| v.clone())
    }

    /// Largest finite shortest-path distance between any ordered pair.
    pub fn max_distance<V: Vertex>(&self, graph: &WeightedGraph<V>) -> f64 {
        let mut max = 0.0_f64;
        for vertex in graph.vertices() {
            let Ok(result) = self.dijkstra(graph, vertex) else {
                continue;
            };
            for &d in result.distances.values() {
                if d.is_finite() && d > max {
                    max = d;
                }
            }
        }
        max
    }
}

impl Default for ShortestPathEngine {
    fn default() -> Self {
        Self::new()
    }
}
