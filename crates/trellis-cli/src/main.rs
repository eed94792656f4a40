//! Trellis CLI - Build, grow and render attributed graphs

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod document;
mod output;

use commands::{bfs, build, completions, render};
use config::Config;
use output::{write_output, OutputFormat};
use trellis_core::{Format, Graph, Renderer};
use trellis_render::RecordingRenderer;

#[derive(Parser)]
#[command(name = "trellis")]
#[command(author, version, about = "Build and render attributed graphs")]
pub struct Cli {
    /// Config file
    #[arg(long, global = true, env = "TRELLIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (default: output.format from the config)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file (stdout if omitted)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Write the DOT that would be handed to the renderer instead of running it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(config::default_config_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a graph from a JSON or TOML description
    Build(build::BuildArgs),
    /// Grow a graph breadth-first from a start node
    Bfs(bfs::BfsArgs),
    /// Convert a DOT file to another format
    Render(render::RenderArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded config and renderer
pub struct AppContext {
    pub config: Config,
    pub format: Format,
    renderer: Box<dyn Renderer>,
}

impl AppContext {
    pub fn new(cli: &Cli) -> Self {
        let config_path = cli.config_path();
        tracing::debug!("Using config at: {:?}", config_path);

        let config = Config::load(&config_path);
        let format = cli.format.map(Format::from).unwrap_or(config.output.format);
        let renderer: Box<dyn Renderer> = if cli.dry_run {
            Box::new(RecordingRenderer::new())
        } else {
            Box::new(config.renderer())
        };

        Self {
            config,
            format,
            renderer,
        }
    }

    pub fn renderer(&self) -> &dyn Renderer {
        self.renderer.as_ref()
    }

    /// Serialize `graph` in the selected format and write it out
    pub fn emit(&self, graph: &Graph, cli: &Cli) -> anyhow::Result<()> {
        let bytes = graph.output(self.format, self.renderer())?;
        write_output(&bytes, cli.output.as_deref())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting trellis CLI");

    let ctx = AppContext::new(&cli);

    match &cli.command {
        Commands::Build(args) => build::run(args, &cli, &ctx)?,
        Commands::Bfs(args) => bfs::run(args, &cli, &ctx)?,
        Commands::Render(args) => render::run(args, &cli, &ctx)?,
        Commands::Config(args) => commands::config::run(args, &cli)?,
        Commands::Completions(args) => completions::run(args)?,
    }

    Ok(())
}
