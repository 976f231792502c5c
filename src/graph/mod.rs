//! In-memory graph structures and traversal primitives.

pub mod builder;
pub mod graph_store;
pub mod traversal;
pub mod weighted;

pub use builder::GraphBuilder;
pub use graph_store::Graph;
pub use traversal::{
    bfs_distances, bfs_order, bfs_shortest_path, dfs, dfs_iterative, dfs_recursive, DfsStrategy,
};
pub use weighted::WeightedGraph;
