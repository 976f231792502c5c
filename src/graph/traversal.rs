//! Graph traversal primitives (BFS and DFS).

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use crate::types::{GraphError, GraphResult, Vertex};

use super::Graph;

/// Depth-first strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DfsStrategy {
    /// Call-stack recursion.
    #[default]
    Recursive,
    /// Explicit stack; safe on very deep graphs.
    Iterative,
}

fn require_vertex<V: Vertex>(graph: &Graph<V>, start: &V) -> GraphResult<()> {
    if graph.contains_vertex(start) {
        Ok(())
    } else {
        Err(GraphError::invalid_vertex(start))
    }
}

/// Breadth-first visit order from `start`.
pub fn bfs_order<V: Vertex>(graph: &Graph<V>, start: &V) -> GraphResult<Vec<V>> {
    require_vertex(graph, start)?;

    let mut visited: BTreeSet<&V> = BTreeSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut queue: VecDeque<&V> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());
        for edge in graph.neighbors(current) {
            if visited.insert(&edge.target) {
                queue.push_back(&edge.target);
            }
        }
    }

    Ok(order)
}

/// Hop count from `start` to every vertex it reaches. Unreachable vertices
/// are absent from the map.
pub fn bfs_distances<V: Vertex>(graph: &Graph<V>, start: &V) -> GraphResult<BTreeMap<V, usize>> {
    require_vertex(graph, start)?;

    let mut depths: BTreeMap<&V, usize> = BTreeMap::new();
    let mut queue: VecDeque<(&V, usize)> = VecDeque::new();

    depths.insert(start, 0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for edge in graph.neighbors(current) {
            if !depths.contains_key(&edge.target) {
                depths.insert(&edge.target, depth + 1);
                queue.push_back((&edge.target, depth + 1));
            }
        }
    }

    Ok(depths.into_iter().map(|(v, d)| (v.clone(), d)).collect())
}

/// Fewest-hop path from `start` to `goal`, both ends included.
///
/// Returns `Ok(None)` when `goal` is unreachable or absent.
pub fn bfs_shortest_path<V: Vertex>(
    graph: &Graph<V>,
    start: &V,
    goal: &V,
) -> GraphResult<Option<Vec<V>>> {
    require_vertex(graph, start)?;

    let mut parent: BTreeMap<&V, Option<&V>> = BTreeMap::new();
    let mut queue: VecDeque<&V> = VecDeque::new();
    let mut found = false;

    parent.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            found = true;
            break;
        }
        for edge in graph.neighbors(current) {
            if !parent.contains_key(&edge.target) {
                parent.insert(&edge.target, Some(current));
                queue.push_back(&edge.target);
            }
        }
    }

    if !found {
        return Ok(None);
    }

    let mut path = Vec::new();
    let mut node = Some(goal);
    while let Some(v) = node {
        path.push(v.clone());
        node = parent.get(v).copied().flatten();
    }
    path.reverse();
    Ok(Some(path))
}

/// Depth-first pre-order from `start` using recursion.
pub fn dfs_recursive<V: Vertex>(graph: &Graph<V>, start: &V) -> GraphResult<Vec<V>> {
    require_vertex(graph, start)?;

    let mut visited = BTreeSet::new();
    let mut order = Vec::new();
    dfs_visit(graph, start, &mut visited, &mut order);
    Ok(order)
}

pub(crate) fn dfs_visit<'g, V: Vertex>(
    graph: &'g Graph<V>,
    vertex: &'g V,
    visited: &mut BTreeSet<&'g V>,
    order: &mut Vec<V>,
) {
    visited.insert(vertex);
    order.push(vertex.clone());
    for edge in graph.neighbors(vertex) {
        if !visited.contains(&edge.target) {
            dfs_visit(graph, &edge.target, visited, order);
        }
    }
}

/// Depth-first pre-order from `start` using an explicit stack.
///
/// Produces the same order as [`dfs_recursive`].
pub fn dfs_iterative<V: Vertex>(graph: &Graph<V>, start: &V) -> GraphResult<Vec<V>> {
    require_vertex(graph, start)?;

    let mut visited = BTreeSet::new();
    let mut order = Vec::new();
    dfs_sweep(graph, start, &mut visited, &mut order);
    Ok(order)
}

pub(crate) fn dfs_sweep<'g, V: Vertex>(
    graph: &'g Graph<V>,
    start: &'g V,
    visited: &mut BTreeSet<&'g V>,
    order: &mut Vec<V>,
) {
    let mut stack: Vec<&V> = vec![start];

    while let Some(current) = stack.pop() {
        // Duplicates are skipped here rather than at push time.
        if !visited.insert(current) {
            continue;
        }
        order.push(current.clone());

        // Reverse push so the first neighbor is popped first.
        for edge in graph.neighbors(current).iter().rev() {
            if !visited.contains(&edge.target) {
                stack.push(&edge.target);
            }
        }
    }
}

/// Depth-first order with the chosen strategy.
pub fn dfs<V: Vertex>(graph: &Graph<V>, start: &V, strategy: DfsStrategy) -> GraphResult<Vec<V>> {
    match strategy {
        DfsStrategy::Recursive => dfs_recursive(graph, start),
        DfsStrategy::Iterative => dfs_iterative(graph, start),
    }
}
