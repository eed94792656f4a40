//! Graph description files read by `build` and `bfs`

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};
use trellis_core::{AttrValue, Graph, GraphOptions, Node, Subgraph};

/// A graph as written in a JSON or TOML description file
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub name: String,

    /// Falls back to `graph.directed` from the config when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,

    /// Falls back to `graph.strict` from the config when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    #[serde(default)]
    pub subgraphs: Vec<SubgraphEntry>,

    #[serde(default)]
    pub nodes: Vec<NodeEntry>,

    #[serde(default)]
    pub edges: Vec<EdgeEntry>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SubgraphEntry {
    pub id: String,

    /// Enclosing subgraph; must be declared earlier in the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NodeEntry {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subgraph: Option<String>,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Attribute keys whose values are emitted as `<...>` literals
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub literal: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EdgeEntry {
    pub from: String,
    pub to: String,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl GraphDocument {
    /// Read a description file, choosing the parser by extension (`.toml`,
    /// anything else is JSON)
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {}: {}", path.display(), e))?;

        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        let document = if is_toml {
            toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Invalid graph file {}: {}", path.display(), e))?
        } else {
            serde_json::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Invalid graph file {}: {}", path.display(), e))?
        };
        Ok(document)
    }

    pub fn options(&self, defaults: GraphOptions) -> GraphOptions {
        GraphOptions {
            directed: self.directed.unwrap_or(defaults.directed),
            strict: self.strict.unwrap_or(defaults.strict),
        }
    }

    /// An empty graph carrying this document's name, options and graph
    /// attributes
    pub fn empty_graph(&self, defaults: GraphOptions) -> Graph {
        let mut graph = Graph::with_options(&self.name, self.options(defaults));
        for (key, value) in &self.attributes {
            graph.set_attribute(key, value);
        }
        graph
    }

    /// Build the whole described graph
    pub fn to_graph(&self, defaults: GraphOptions) -> trellis_core::Result<Graph> {
        let mut graph = self.empty_graph(defaults);

        for entry in &self.subgraphs {
            let subgraph = match &entry.parent {
                Some(parent) => graph.add_nested_subgraph(&Subgraph::new(parent), &entry.id)?,
                None => graph.add_subgraph(&entry.id)?,
            };
            for (key, value) in &entry.attributes {
                graph.set_subgraph_attribute(&subgraph, key, value)?;
            }
        }

        for entry in &self.nodes {
            let node = match &entry.subgraph {
                Some(subgraph) => graph.add_named_node_to(&entry.id, &Subgraph::new(subgraph))?,
                None => graph.add_named_node(&entry.id)?,
            };
            entry.apply(&mut graph, &node)?;
        }

        for entry in &self.edges {
            let edge = graph.add_edge(&Node::new(&entry.from), &Node::new(&entry.to))?;
            for (key, value) in &entry.attributes {
                graph.set_edge_attribute(&edge, key, value)?;
            }
        }

        tracing::debug!(
            "Built graph '{}': {} nodes, {} edges, {} subgraphs",
            graph.name(),
            graph.node_count(),
            graph.edge_count(),
            graph.subgraph_count()
        );
        Ok(graph)
    }

    /// Successors of each node id, in file order
    pub fn adjacency(&self) -> HashMap<&str, Vec<&str>> {
        let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
        for edge in &self.edges {
            adjacency
                .entry(edge.from.as_str())
                .or_default()
                .push(edge.to.as_str());
        }
        adjacency
    }

    pub fn node(&self, id: &str) -> Option<&NodeEntry> {
        self.nodes.iter().find(|node| node.id == id)
    }
}

impl NodeEntry {
    /// Set this entry's attributes on `node`
    pub fn apply(&self, graph: &mut Graph, node: &Node) -> trellis_core::Result<()> {
        for (key, value) in &self.attributes {
            let value = if self.literal.contains(key) {
                AttrValue::literal(value)
            } else {
                AttrValue::plain(value)
            };
            graph.set_node_attribute(node, key, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use trellis_core::Error;

    const JSON: &str = r#"{
        "name": "deps",
        "attributes": { "rankdir": "LR" },
        "subgraphs": [
            { "id": "cluster_core", "attributes": { "label": "core" } },
            { "id": "cluster_inner", "parent": "cluster_core" }
        ],
        "nodes": [
            { "id": "a", "subgraph": "cluster_core" },
            { "id": "b", "subgraph": "cluster_inner", "attributes": { "label": "<b>B</b>" }, "literal": ["label"] },
            { "id": "c" }
        ],
        "edges": [
            { "from": "a", "to": "b", "attributes": { "color": "red" } },
            { "from": "a", "to": "c" }
        ]
    }"#;

    #[test]
    fn test_to_graph() {
        let document: GraphDocument = serde_json::from_str(JSON).unwrap();
        let graph = document.to_graph(GraphOptions::default()).unwrap();

        assert_eq!(graph.name(), "deps");
        assert_eq!(graph.attribute("rankdir"), "LR");
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(
            graph.subgraph_of(&Node::new("b")).unwrap(),
            Some(Subgraph::new("cluster_inner"))
        );

        let label = graph.node_attributes(&Node::new("b")).unwrap().value("label").unwrap();
        assert!(label.literal);

        let edge = graph.edge(&Node::new("a"), &Node::new("b")).unwrap();
        assert_eq!(graph.edge_attribute(&edge, "color").unwrap(), "red");
    }

    #[test]
    fn test_options_fall_back_to_defaults() {
        let document: GraphDocument = serde_json::from_str(r#"{ "strict": true }"#).unwrap();

        let options = document.options(GraphOptions::undirected());

        assert!(!options.directed);
        assert!(options.strict);
    }

    #[test]
    fn test_unknown_endpoint_is_rejected() {
        let document: GraphDocument = serde_json::from_str(
            r#"{ "nodes": [{ "id": "a" }], "edges": [{ "from": "a", "to": "ghost" }] }"#,
        )
        .unwrap();

        let err = document.to_graph(GraphOptions::default()).unwrap_err();

        assert!(matches!(err, Error::NodeNotFound(ref id) if id == "ghost"));
    }

    #[test]
    fn test_adjacency_keeps_file_order() {
        let document: GraphDocument = serde_json::from_str(JSON).unwrap();

        let adjacency = document.adjacency();

        assert_eq!(adjacency["a"], vec!["b", "c"]);
        assert!(!adjacency.contains_key("c"));
    }

    #[test]
    fn test_load_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.toml");
        std::fs::write(
            &path,
            r#"
name = "t"
directed = false

[[nodes]]
id = "x"

[[nodes]]
id = "y"

[[edges]]
from = "x"
to = "y"
"#,
        )
        .unwrap();

        let document = GraphDocument::load(&path).unwrap();
        let graph = document.to_graph(GraphOptions::default()).unwrap();

        assert!(!graph.is_directed());
        assert!(graph.has_edge(&Node::new("y"), &Node::new("x")));
    }

    #[test]
    fn test_load_reports_bad_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("graph.json");
        std::fs::write(&path, "{ nodes: ").unwrap();

        let err = GraphDocument::load(&path).unwrap_err();

        assert!(err.to_string().contains("Invalid graph file"));
    }
}
