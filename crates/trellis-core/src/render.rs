//! Renderer collaborator contract
//!
//! Layout and drawing happen outside this crate. A [`Renderer`] takes DOT
//! text and hands back the rendered bytes, or a [`RenderError`] carrying the
//! renderer's own diagnostic.

use crate::error::{RenderError, RenderResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Dot,
    Svg,
    Png,
    Pdf,
}

impl Format {
    /// Name as understood by Graphviz' `-T` flag
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Pdf => "pdf",
        }
    }

    /// Whether the rendered output is text
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Dot | Self::Svg)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dot" | "gv" => Ok(Self::Dot),
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "pdf" => Ok(Self::Pdf),
            other => Err(RenderError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Trait for external renderers
///
/// Implementations block until output is ready. They must return the
/// renderer's bytes untouched and pass its failures through rather than
/// substituting output.
pub trait Renderer {
    fn render(&self, dot: &str, format: Format) -> RenderResult<Vec<u8>>;
}

/// Convert existing DOT text to `format` with `renderer`
pub fn dot_to(renderer: &dyn Renderer, dot: &str, format: Format) -> RenderResult<Vec<u8>> {
    if format == Format::Dot {
        return Ok(dot.as_bytes().to_vec());
    }
    renderer.render(dot, format)
}
