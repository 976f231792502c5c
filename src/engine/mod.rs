//! High-level operations: traversal engine and shortest-path engine.

pub mod shortest_path;
pub mod traversal;

pub use shortest_path::{reconstruct_path, AllPairsResult, DijkstraResult, ShortestPathEngine};
pub use traversal::{TraversalEngine, TraversalResult};
