//! Trellis Core - Attributed graph model
//!
//! This crate provides the in-memory graph model, its DOT serializer and a
//! breadth-first builder that grows a graph from an arbitrary relation.
//! Rendering to images is delegated to a [`Renderer`] implementation.

pub mod attribute;
pub mod dot;
pub mod error;
pub mod graph;
pub mod handle;
pub mod id;
pub mod render;
pub mod traversal;

pub use attribute::{AttrValue, Attributes};
pub use error::{Error, RenderError, RenderResult, Result};
pub use graph::{Graph, GraphOptions};
pub use handle::{Edge, Node, Subgraph};
pub use id::IdAllocator;
pub use render::{dot_to, Format, Renderer};
pub use traversal::{bfs_build, BfsBuilder, BuildResult, BuildStats, Decoration};
