//! graph-toolkit: graph store, traversal, shortest paths and degree-sequence checks.
//!
//! Graphs are adjacency lists over any ordered vertex key. The traversal and
//! shortest-path engines borrow a graph for the duration of one call and keep
//! nothing; the degree-sequence validator works on plain integer sequences or
//! on degrees pulled from a graph.

pub mod cli;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;
pub mod validate;

// Re-export commonly used types at the crate root
pub use engine::{AllPairsResult, DijkstraResult, ShortestPathEngine, TraversalEngine, TraversalResult};
pub use format::{EdgeListReader, EdgeListWriter, ImportMode};
pub use graph::{DfsStrategy, Graph, GraphBuilder, WeightedGraph};
pub use types::{Edge, GraphError, GraphResult, Vertex, DEFAULT_WEIGHT};
pub use validate::{DegreeReport, DegreeSequenceValidator};
