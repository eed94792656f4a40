//! DOT serializer
//!
//! Output layout:
//!
//! ```text
//! strict digraph name {
//!   key="value";
//!   subgraph cluster {
//!     key="value";
//!     "1" [label="member"];
//!     subgraph nested { ... }
//!   }
//!   "2" [shape="box"];
//!   "1" -> "2" [color="red"];
//! }
//! ```
//!
//! Plain attribute values are always double-quoted and escaped. Literal
//! values are written between `<` and `>` without escaping.

use crate::attribute::{AttrValue, Attributes};
use crate::graph::Graph;

const INDENT: &str = "  ";

const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

impl Graph {
    /// Serialize to DOT text
    pub fn to_dot(&self) -> String {
        let mut w = DotWriter::default();

        let mut header = String::new();
        if self.is_subgraph() {
            header.push_str("subgraph ");
        } else {
            if self.is_strict() {
                header.push_str("strict ");
            }
            header.push_str(if self.is_directed() { "digraph " } else { "graph " });
        }
        if !self.name().is_empty() {
            header.push_str(&quote_id(self.name()));
            header.push(' ');
        }
        header.push('{');
        w.open(&header);

        w.statements(self.attributes());
        self.write_subgraphs(&mut w, None);
        for (id, attrs) in self.root_nodes() {
            w.node(id, attrs);
        }

        let op = if self.is_directed() { "->" } else { "--" };
        for (from, to, attrs) in self.edge_list() {
            w.line(&format!(
                "{} {} {}{};",
                quote_id(from),
                op,
                quote_id(to),
                attr_list(attrs)
            ));
        }

        w.close();
        w.finish()
    }

    fn write_subgraphs(&self, w: &mut DotWriter, parent: Option<&str>) {
        for (id, attrs) in self.child_subgraphs(parent) {
            w.open(&format!("subgraph {} {{", quote_id(id)));
            w.statements(attrs);
            for (node, node_attrs) in self.subgraph_members(id) {
                w.node(node, node_attrs);
            }
            self.write_subgraphs(w, Some(id));
            w.close();
        }
    }
}

#[derive(Default)]
struct DotWriter {
    out: String,
    depth: usize,
}

impl DotWriter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn open(&mut self, text: &str) {
        self.line(text);
        self.depth += 1;
    }

    fn close(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        self.line("}");
    }

    /// `key=value;` lines for graph or subgraph attributes
    fn statements(&mut self, attrs: &Attributes) {
        for (key, value) in attrs.iter() {
            self.line(&format!("{}={};", quote_id(key), attr_value(value)));
        }
    }

    fn node(&mut self, id: &str, attrs: &Attributes) {
        self.line(&format!("{}{};", quote_id(id), attr_list(attrs)));
    }

    fn finish(self) -> String {
        self.out
    }
}

fn attr_list(attrs: &Attributes) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let items: Vec<String> = attrs
        .iter()
        .map(|(key, value)| format!("{}={}", quote_id(key), attr_value(value)))
        .collect();
    format!(" [{}]", items.join(", "))
}

fn attr_value(value: &AttrValue) -> String {
    if value.literal {
        format!("<{}>", value.value)
    } else {
        format!("\"{}\"", escape(&value.value))
    }
}

/// Escape text for use inside a double-quoted DOT string
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Bare identifier when DOT accepts one, quoted string otherwise
pub fn quote_id(id: &str) -> String {
    if is_bare_id(id) {
        id.to_string()
    } else {
        format!("\"{}\"", escape(id))
    }
}

fn is_bare_id(id: &str) -> bool {
    let mut chars = id.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphOptions;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape() {
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape("say \"hi\""), "say \\\"hi\\\"");
        assert_eq!(escape("line1\r\nline2"), "line1\\nline2");
        assert_eq!(escape("C:\\tmp"), "C:\\\\tmp");
    }

    #[test]
    fn test_quote_id() {
        assert_eq!(quote_id("main"), "main");
        assert_eq!(quote_id("_x1"), "_x1");
        assert_eq!(quote_id("1"), "\"1\"");
        assert_eq!(quote_id("a b"), "\"a b\"");
        assert_eq!(quote_id("Node"), "\"Node\"");
        assert_eq!(quote_id(""), "\"\"");
    }

    #[test]
    fn test_empty_graphs() {
        assert_eq!(Graph::new("").to_dot(), "digraph {\n}\n");
        assert_eq!(
            Graph::with_options("g", GraphOptions::undirected().strict()).to_dot(),
            "strict graph g {\n}\n"
        );
    }

    #[test]
    fn test_full_document() {
        let mut graph = Graph::new("deps");
        graph.set_attribute("rankdir", "LR");
        let cluster = graph.add_subgraph("cluster_core").unwrap();
        let inner = graph.add_nested_subgraph(&cluster, "inner").unwrap();
        let a = graph.add_named_node_to("a", &cluster).unwrap();
        let b = graph.add_named_node_to("b", &inner).unwrap();
        let c = graph.add_named_node("c").unwrap();
        graph.set_subgraph_attribute(&cluster, "label", "Core").unwrap();
        graph
            .set_node_attribute(&a, "label", AttrValue::literal("<b>A</b>"))
            .unwrap();
        graph.set_node_attribute(&c, "label", "say \"c\"").unwrap();
        let edge = graph.add_edge(&a, &c).unwrap();
        graph.set_edge_attribute(&edge, "color", "red").unwrap();
        graph.add_edge(&b, &c).unwrap();

        let expected = "\
digraph deps {
  rankdir=\"LR\";
  subgraph cluster_core {
    label=\"Core\";
    a [label=<<b>A</b>>];
    subgraph inner {
      b;
    }
  }
  c [label=\"say \\\"c\\\"\"];
  a -> c [color=\"red\"];
  b -> c;
}
";
        assert_eq!(graph.to_dot(), expected);
    }

    #[test]
    fn test_undirected_edge_operator() {
        let mut graph = Graph::with_options("u", GraphOptions::undirected());
        let a = graph.add_node();
        let b = graph.add_node();
        graph.add_edge(&a, &b).unwrap();

        assert!(graph.to_dot().contains("\"1\" -- \"2\";"));
    }

    #[test]
    fn test_extracted_subgraph_header() {
        let mut graph = Graph::with_options("g", GraphOptions::directed().strict());
        let cluster = graph.add_subgraph("cluster_x").unwrap();
        graph.add_named_node_to("x", &cluster).unwrap();

        let dot = graph.extract_subgraph(&cluster).unwrap().to_dot();
        assert_eq!(dot, "subgraph cluster_x {\n  x;\n}\n");
    }
}
