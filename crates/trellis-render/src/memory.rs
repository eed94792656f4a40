//! In-memory renderer for testing and dry runs

use std::sync::{Mutex, PoisonError};

use trellis_core::{Format, RenderError, RenderResult, Renderer};

/// What a [`RecordingRenderer`] answers with
#[derive(Debug, Clone)]
enum Response {
    /// Return the DOT text itself
    Echo,
    Bytes(Vec<u8>),
    Reject(String),
}

/// Renderer that records every request instead of drawing anything
///
/// Useful for testing and for previewing what would be sent to a real
/// renderer.
pub struct RecordingRenderer {
    response: Response,
    requests: Mutex<Vec<(String, Format)>>,
}

impl RecordingRenderer {
    /// Answer every request with the DOT text it was given
    pub fn new() -> Self {
        Self::with_response(Response::Echo)
    }

    /// Answer every request with `bytes`
    pub fn returning(bytes: impl Into<Vec<u8>>) -> Self {
        Self::with_response(Response::Bytes(bytes.into()))
    }

    /// Reject every request with `diagnostic`
    pub fn rejecting(diagnostic: impl Into<String>) -> Self {
        Self::with_response(Response::Reject(diagnostic.into()))
    }

    fn with_response(response: Response) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, oldest first
    pub fn requests(&self) -> Vec<(String, Format)> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&self, dot: &str, format: Format) -> RenderResult<Vec<u8>> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((dot.to_string(), format));

        match &self.response {
            Response::Echo => Ok(dot.as_bytes().to_vec()),
            Response::Bytes(bytes) => Ok(bytes.clone()),
            Response::Reject(diagnostic) => Err(RenderError::Rejected {
                status: 1,
                diagnostic: diagnostic.clone(),
            }),
        }
    }
}
