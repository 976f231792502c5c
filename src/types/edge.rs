//! The adjacency-list edge record.

use serde::Serialize;

use super::DEFAULT_WEIGHT;

/// An outgoing edge stored in a source vertex's adjacency list.
///
/// The source is implied by the list the edge lives in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<V> {
    /// Destination vertex.
    pub target: V,
    /// Edge weight.
    pub weight: f64,
}

impl<V> Edge<V> {
    /// Create an edge with an explicit weight.
    pub fn new(target: V, weight: f64) -> Self {
        Self { target, weight }
    }

    /// Create an edge with the default weight of 1.0.
    pub fn unit(target: V) -> Self {
        Self::new(target, DEFAULT_WEIGHT)
    }
}
