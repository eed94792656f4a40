//! Graphviz subprocess renderer

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use trellis_core::{Format, RenderError, RenderResult, Renderer};

/// Renders by piping DOT text through a Graphviz program (`dot` by default)
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    program: PathBuf,
    layout: Option<String>,
}

impl GraphvizRenderer {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("dot"),
            layout: None,
        }
    }

    /// Use a different executable
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    /// Layout engine passed as `-K<engine>` (neato, fdp, circo, ...)
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = Some(layout.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn args(&self, format: Format) -> Vec<String> {
        let mut args = vec![format!("-T{}", format.as_str())];
        if let Some(layout) = &self.layout {
            args.push(format!("-K{layout}"));
        }
        args
    }
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for GraphvizRenderer {
    fn render(&self, dot: &str, format: Format) -> RenderResult<Vec<u8>> {
        let args = self.args(format);
        tracing::debug!("Running {} {}", self.program.display(), args.join(" "));

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                    RenderError::Unavailable(format!("{}: {}", self.program.display(), e))
                }
                _ => RenderError::Io(e),
            })?;

        // Feed stdin from another thread so a chatty renderer cannot block on
        // a full stdout pipe while we are still writing.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| RenderError::Unavailable("renderer stdin not captured".to_string()))?;
        let input = dot.to_owned();
        let writer = std::thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child.wait_with_output()?;

        match writer.join() {
            Ok(Ok(())) => {}
            // The renderer may exit before reading everything; its status says why
            Ok(Err(e)) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(RenderError::Io(e)),
            Err(_) => {
                return Err(RenderError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "renderer input writer panicked",
                )))
            }
        }

        if !output.status.success() {
            let diagnostic = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::warn!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                diagnostic
            );
            return Err(RenderError::Rejected {
                status: output.status.code().unwrap_or(-1),
                diagnostic,
            });
        }

        tracing::debug!("Rendered {} bytes of {}", output.stdout.len(), format);
        Ok(output.stdout)
    }
}
