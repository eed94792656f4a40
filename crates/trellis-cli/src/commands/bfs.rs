//! Breadth-first build command

use std::path::PathBuf;

use clap::Args;
use trellis_core::{BfsBuilder, Graph, Node};

use crate::document::GraphDocument;
use crate::{AppContext, Cli};

#[derive(Args)]
pub struct BfsArgs {
    /// Graph description whose edges define the relation (.json or .toml)
    pub file: PathBuf,

    /// Node to start from
    #[arg(short, long)]
    pub start: String,

    /// Attribute set on each discovered node (repeatable)
    #[arg(long = "node-attr", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub node_attrs: Vec<(String, String)>,

    /// Attribute set on each added edge (repeatable)
    #[arg(long = "edge-attr", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub edge_attrs: Vec<(String, String)>,
}

/// Parse a `key=value` pair. The value may itself contain `=`.
pub fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

pub fn run(args: &BfsArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let document = GraphDocument::load(&args.file)?;
    let adjacency = document.adjacency();

    let mut graph = document.empty_graph(ctx.config.graph_options());
    let start = materialize(&mut graph, &document, &args.start)?;

    let builder = BfsBuilder::new(start)
        .with_node_decoration(args.node_attrs.iter().cloned().collect())
        .with_edge_decoration(args.edge_attrs.iter().cloned().collect());

    let mut failure = None;
    let result = builder.run(&mut graph, |graph, node| {
        let Some(successors) = adjacency.get(node.id()) else {
            return Vec::new();
        };
        successors
            .iter()
            .filter_map(|id| match materialize(graph, &document, id) {
                Ok(node) => Some(node),
                Err(e) => {
                    failure.get_or_insert(e);
                    None
                }
            })
            .collect()
    })?;
    if let Some(e) = failure {
        return Err(e.into());
    }

    let visited: Vec<&str> = result.visited.iter().map(Node::id).collect();
    tracing::info!("Visited {} nodes: {}", visited.len(), visited.join(", "));
    tracing::debug!("Build stats: {:?}", result.stats);

    ctx.emit(&graph, cli)
}

/// Node `id` in `graph`, created with the document's attributes for it on
/// first sight
fn materialize(graph: &mut Graph, document: &GraphDocument, id: &str) -> trellis_core::Result<Node> {
    let node = Node::new(id);
    if graph.has_node(&node) {
        return Ok(node);
    }
    let node = graph.add_named_node(id)?;
    if let Some(entry) = document.node(id) {
        entry.apply(graph, &node)?;
    }
    Ok(node)
}
