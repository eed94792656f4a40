//! Trellis Render - Renderer backends
//!
//! Implementations of [`trellis_core::Renderer`]: a Graphviz subprocess
//! backend and an in-memory backend that records what it was asked to draw.

#[cfg(feature = "graphviz")]
pub mod graphviz;

pub mod memory;

#[cfg(feature = "graphviz")]
pub use graphviz::GraphvizRenderer;

pub use memory::RecordingRenderer;
pub use trellis_core::{Format, RenderError, RenderResult, Renderer};
