//! Edge-list text I/O.

pub mod reader;
pub mod writer;

pub use reader::{EdgeListReader, ImportMode};
pub use writer::{EdgeListWriter, DEFAULT_PRECISION};
