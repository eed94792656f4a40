//! Error types for Trellis Core

use thiserror::Error;

/// Result type alias using Trellis' Error
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for renderer calls
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Graph model error types
///
/// Every variant except `Render` is a usage error: the caller referenced
/// something the graph does not hold, or reused an id held by another element. The graph is left exactly as it was
/// after the last successful operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Edge not found: {0}")]
    EdgeNotFound(String),

    #[error("Subgraph not found: {0}")]
    SubgraphNotFound(String),

    #[error("Self-loop on {0} is not allowed in a strict graph")]
    SelfLoop(String),

    #[error("Id already used by another element: {0}")]
    DuplicateId(String),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Errors reported by an external renderer
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Renderer unavailable: {0}")]
    Unavailable(String),

    #[error("Renderer rejected input (status {status}): {diagnostic}")]
    Rejected { status: i32, diagnostic: String },

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error was caused by misuse of the graph API
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, Self::Render(_))
    }
}
