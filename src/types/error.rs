//! Error types for the graph toolkit.

use thiserror::Error;

/// All errors that can occur in the graph toolkit.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A traversal or shortest-path run was started from a vertex the graph does not contain.
    #[error("Vertex {0} does not exist in the graph")]
    InvalidVertex(String),

    /// Floyd-Warshall found a negative self-distance.
    #[error("Negative cycle detected at vertex {vertex}")]
    NegativeCycleDetected { vertex: String },

    /// An edge-list line could not be parsed (strict import only).
    #[error("Malformed edge-list line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Build an `InvalidVertex` error from any vertex key.
    pub fn invalid_vertex<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::InvalidVertex(format!("{:?}", vertex))
    }
}

/// Convenience result type for graph toolkit operations.
pub type GraphResult<T> = Result<T, GraphError>;
