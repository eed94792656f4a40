//! CLI configuration

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use trellis_core::{Format, GraphOptions};
use trellis_render::GraphvizRenderer;

/// Get default config file path
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("trellis")
        .join("config.toml")
}

/// Configuration for the CLI
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub output: OutputConfig,
    pub graph: GraphConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Graphviz executable
    pub program: String,

    /// Layout engine (`-K`), Graphviz' choice when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            program: "dot".to_string(),
            layout: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Format,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub directed: bool,
    pub strict: bool,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: true,
            strict: false,
        }
    }
}

impl Config {
    /// Load from `path`, falling back to defaults when the file is missing
    /// or unreadable
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!("Cannot read config {}: {}; using defaults", path.display(), e);
                return Self::default();
            }
        };
        toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Invalid config {}: {}; using defaults", path.display(), e);
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn keys() -> &'static [&'static str] {
        &[
            "render.program",
            "render.layout",
            "output.format",
            "graph.directed",
            "graph.strict",
        ]
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "render.program" => Some(self.render.program.clone()),
            "render.layout" => Some(self.render.layout.clone().unwrap_or_default()),
            "output.format" => Some(self.output.format.to_string()),
            "graph.directed" => Some(self.graph.directed.to_string()),
            "graph.strict" => Some(self.graph.strict.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "render.program" => self.render.program = value.to_string(),
            "render.layout" => {
                self.render.layout = Some(value.to_string()).filter(|v| !v.is_empty())
            }
            "output.format" => self.output.format = value.parse()?,
            "graph.directed" => self.graph.directed = parse_bool(key, value)?,
            "graph.strict" => self.graph.strict = parse_bool(key, value)?,
            _ => anyhow::bail!(
                "Unknown config key: {}. Available keys: {}",
                key,
                Self::keys().join(", ")
            ),
        }
        Ok(())
    }

    pub fn graph_options(&self) -> GraphOptions {
        GraphOptions {
            directed: self.graph.directed,
            strict: self.graph.strict,
        }
    }

    pub fn renderer(&self) -> GraphvizRenderer {
        let renderer = GraphvizRenderer::new().with_program(&self.render.program);
        match &self.render.layout {
            Some(layout) => renderer.with_layout(layout),
            None => renderer,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> anyhow::Result<bool> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("{} expects true or false, got '{}'", key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.get("render.program").as_deref(), Some("dot"));
        assert_eq!(config.get("output.format").as_deref(), Some("dot"));
        assert_eq!(config.graph_options(), GraphOptions::default());
    }

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();
        config.set("output.format", "svg").unwrap();
        config.set("graph.strict", "true").unwrap();
        config.set("render.layout", "neato").unwrap();

        assert_eq!(config.output.format, Format::Svg);
        assert!(config.graph_options().strict);
        assert_eq!(config.get("render.layout").as_deref(), Some("neato"));

        assert!(config.set("graph.strict", "maybe").is_err());
        assert!(config.set("output.format", "bmp").is_err());
        assert!(config.set("no.such.key", "x").is_err());
        assert!(config.get("no.such.key").is_none());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("render.program", "/usr/local/bin/dot").unwrap();
        config.set("graph.directed", "false").unwrap();
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path), config);
    }

    #[test]
    fn test_missing_or_invalid_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(Config::load(&dir.path().join("absent.toml")), Config::default());

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "render = 3").unwrap();
        assert_eq!(Config::load(&bad), Config::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[output]\nformat = \"png\"\n").unwrap();

        let config = Config::load(&path);
        assert_eq!(config.output.format, Format::Png);
        assert_eq!(config.render.program, "dot");
    }
}
