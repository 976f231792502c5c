//! Structural validation of degree data.

pub mod degree;

pub use degree::{DegreeReport, DegreeSequenceValidator};
