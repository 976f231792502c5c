//! Command implementations behind the `gkit` binary.

pub mod commands;

pub use commands::LoadOptions;
