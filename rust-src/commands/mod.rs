//! CLI command implementations.

mod input;

pub mod render;
pub mod summary;
