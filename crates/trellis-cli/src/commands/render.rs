//! Render command

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use trellis_core::dot_to;

use crate::output::write_output;
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct RenderArgs {
    /// DOT file ("-" reads stdin)
    pub file: PathBuf,
}

pub fn run(args: &RenderArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let dot = if args.file.as_os_str() == "-" {
        let mut dot = String::new();
        std::io::stdin().read_to_string(&mut dot)?;
        dot
    } else {
        std::fs::read_to_string(&args.file)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", args.file.display(), e))?
    };

    let bytes = dot_to(ctx.renderer(), &dot, ctx.format)?;
    write_output(&bytes, cli.output.as_deref())
}
