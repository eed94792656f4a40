//! Build command

use std::path::PathBuf;

use clap::Args;

use crate::document::GraphDocument;
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct BuildArgs {
    /// Graph description (.json or .toml)
    pub file: PathBuf,
}

pub fn run(args: &BuildArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let document = GraphDocument::load(&args.file)?;
    let graph = document.to_graph(ctx.config.graph_options())?;
    ctx.emit(&graph, cli)
}
