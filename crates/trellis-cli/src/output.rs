//! Output formatting utilities

use std::io::Write;
use std::path::Path;

use clap::ValueEnum;
use trellis_core::Format;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Dot,
    Svg,
    Png,
    Pdf,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Dot => Format::Dot,
            OutputFormat::Svg => Format::Svg,
            OutputFormat::Png => Format::Png,
            OutputFormat::Pdf => Format::Pdf,
        }
    }
}

/// Write rendered bytes to `path`, or to stdout when no path is given
pub fn write_output(bytes: &[u8], path: Option<&Path>) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, bytes)?;
            tracing::info!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_output_format_maps_to_core_format() {
        assert_eq!(Format::from(OutputFormat::Dot), Format::Dot);
        assert_eq!(Format::from(OutputFormat::Pdf), Format::Pdf);
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.svg");

        write_output(b"<svg/>", Some(&path)).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"<svg/>".to_vec());
    }
}
