//! CLI command implementations

pub mod bfs;
pub mod build;
pub mod completions;
pub mod config;
pub mod render;
