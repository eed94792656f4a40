//! Breadth-first graph construction
//!
//! Grows a [`Graph`] by walking a caller-supplied relation from a start
//! node, adding an edge for every related pair and decorating what it finds.

use crate::attribute::{AttrValue, Attributes};
use crate::error::Result;
use crate::graph::Graph;
use crate::handle::Node;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};

/// Attributes applied to discovered nodes or created edges
pub type Decoration = Attributes;

/// Breadth-first build (follows the builder pattern of a traversal query)
///
/// ```
/// use trellis_core::{BfsBuilder, Graph, Node};
///
/// let mut graph = Graph::new("calls");
/// let main = graph.add_named_node("main").unwrap();
/// let result = BfsBuilder::new(main)
///     .decorate_nodes("color", "blue")
///     .decorate_edges("style", "dashed")
///     .run(&mut graph, |g: &mut Graph, n: &Node| match n.id() {
///         "main" => vec![
///             g.add_named_node("parse").unwrap(),
///             g.add_named_node("eval").unwrap(),
///         ],
///         _ => vec![],
///     })
///     .unwrap();
///
/// assert_eq!(result.visited.len(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct BfsBuilder {
    /// Traversal root
    pub start: Node,

    /// Applied once to each node when first discovered
    pub node_decoration: Decoration,

    /// Applied to every edge the traversal adds, tree edge or not
    pub edge_decoration: Decoration,
}

/// Outcome of a breadth-first build
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildResult {
    /// Every node reached. The start node is only included if a cycle leads
    /// back to it.
    pub visited: BTreeSet<Node>,

    /// `visited` in discovery order
    pub discovery_order: Vec<Node>,

    pub stats: BuildStats,
}

/// Build statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildStats {
    pub nodes_discovered: usize,
    /// `add_edge` calls, including ones a strict graph resolved to an
    /// existing edge
    pub edges_visited: usize,
    /// Edges that did not exist before the build
    pub edges_added: usize,
    pub relation_calls: usize,
}

impl BfsBuilder {
    pub fn new(start: impl Into<Node>) -> Self {
        Self {
            start: start.into(),
            node_decoration: Decoration::new(),
            edge_decoration: Decoration::new(),
        }
    }

    /// Add a node decoration entry
    pub fn decorate_nodes(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.node_decoration.set(key, value);
        self
    }

    /// Add an edge decoration entry
    pub fn decorate_edges(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.edge_decoration.set(key, value);
        self
    }

    pub fn with_node_decoration(mut self, decoration: Decoration) -> Self {
        self.node_decoration = decoration;
        self
    }

    pub fn with_edge_decoration(mut self, decoration: Decoration) -> Self {
        self.edge_decoration = decoration;
        self
    }

    /// Run the traversal, mutating `graph` in place.
    ///
    /// `relation` maps a node to its children, in order. It receives the
    /// graph so it can create the nodes it returns. Errors from the graph
    /// (for instance a child the graph does not hold) abort the run and
    /// leave every addition made so far in place.
    ///
    /// The traversal does not bound itself: a relation that keeps producing
    /// new nodes never terminates.
    pub fn run<F>(&self, graph: &mut Graph, mut relation: F) -> Result<BuildResult>
    where
        F: FnMut(&mut Graph, &Node) -> Vec<Node>,
    {
        let edges_before = graph.edge_count();
        let mut visited = BTreeSet::new();
        let mut discovery_order = Vec::new();
        let mut stats = BuildStats::default();
        let mut queue = VecDeque::new();

        queue.push_back(self.start.clone());

        while let Some(current) = queue.pop_front() {
            stats.relation_calls += 1;

            for to in relation(graph, &current) {
                let edge = graph.add_edge(&current, &to)?;
                stats.edges_visited += 1;
                for (key, value) in self.edge_decoration.iter() {
                    graph.set_edge_attribute(&edge, key, value.clone())?;
                }

                if visited.insert(to.clone()) {
                    for (key, value) in self.node_decoration.iter() {
                        graph.set_node_attribute(&to, key, value.clone())?;
                    }
                    discovery_order.push(to.clone());
                    queue.push_back(to);
                }
            }
        }

        stats.nodes_discovered = visited.len();
        stats.edges_added = graph.edge_count().saturating_sub(edges_before);

        tracing::debug!(
            "BFS build from {} discovered {} nodes, visited {} edges ({} new)",
            self.start,
            stats.nodes_discovered,
            stats.edges_visited,
            stats.edges_added
        );

        Ok(BuildResult {
            visited,
            discovery_order,
            stats,
        })
    }
}

/// Grow `graph` breadth-first from `start` along `relation`.
///
/// Returns the set of nodes reached; see [`BfsBuilder::run`].
pub fn bfs_build<F>(
    graph: &mut Graph,
    start: &Node,
    relation: F,
    node_decoration: &Decoration,
    edge_decoration: &Decoration,
) -> Result<BTreeSet<Node>>
where
    F: FnMut(&mut Graph, &Node) -> Vec<Node>,
{
    BfsBuilder::new(start.clone())
        .with_node_decoration(node_decoration.clone())
        .with_edge_decoration(edge_decoration.clone())
        .run(graph, relation)
        .map(|result| result.visited)
}
