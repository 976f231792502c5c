//! Shared data types for the graph toolkit.

pub mod edge;
pub mod error;

use std::fmt::Debug;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A vertex key: any totally ordered, cloneable identifier.
///
/// Vertices carry no payload. Text import/export additionally needs
/// `FromStr`/`Display`, required only where used.
pub trait Vertex: Clone + Ord + Debug {}

impl<T: Clone + Ord + Debug> Vertex for T {}
