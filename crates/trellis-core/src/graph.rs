//! The attributed graph model
//!
//! [`Graph`] owns every node, edge and subgraph record. Callers only ever
//! see handles ([`Node`], [`Edge`], [`Subgraph`]) and the operations below;
//! the petgraph storage and its id indexes stay private to this module.

use crate::attribute::{AttrValue, Attributes};
use crate::error::{Error, Result};
use crate::handle::{Edge, Node, Subgraph};
use crate::id::IdAllocator;
use crate::render::{Format, Renderer};
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Options fixed when a graph is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphOptions {
    /// Edges are ordered pairs
    #[serde(default = "default_true")]
    pub directed: bool,

    /// No parallel edges and no self-loops
    #[serde(default)]
    pub strict: bool,
}

fn default_true() -> bool {
    true
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            directed: true,
            strict: false,
        }
    }
}

impl GraphOptions {
    pub fn directed() -> Self {
        Self::default()
    }

    pub fn undirected() -> Self {
        Self {
            directed: false,
            strict: false,
        }
    }

    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }
}

#[derive(Debug)]
struct NodeRecord {
    id: String,
    seq: u64,
    subgraph: Option<String>,
    attrs: Attributes,
}

#[derive(Debug)]
struct EdgeRecord {
    id: String,
    seq: u64,
    attrs: Attributes,
}

#[derive(Debug)]
struct SubgraphRecord {
    parent: Option<String>,
    attrs: Attributes,
}

/// An attributed graph
///
/// A `Graph` exclusively owns its elements and cannot be copied; share it
/// by reference.
///
/// ```compile_fail
/// let graph = trellis_core::Graph::new("g");
/// let copy = graph.clone();
/// ```
#[derive(Debug)]
pub struct Graph {
    name: String,
    options: GraphOptions,
    is_subgraph: bool,
    ids: IdAllocator,
    attrs: Attributes,

    /// Edges keep the orientation they were added with, even when the
    /// graph is undirected
    store: StableDiGraph<NodeRecord, EdgeRecord>,
    node_map: HashMap<String, NodeIndex>,
    edge_map: HashMap<String, EdgeIndex>,
    /// Edges joining each endpoint pair, oldest first
    pairs: HashMap<(NodeIndex, NodeIndex), Vec<EdgeIndex>>,
    /// Insertion order; petgraph reuses freed slots
    node_order: BTreeMap<u64, NodeIndex>,
    edge_order: BTreeMap<u64, EdgeIndex>,
    next_seq: u64,

    subgraphs: HashMap<String, SubgraphRecord>,
    subgraph_order: Vec<String>,

    /// Every live id, whichever kind of element holds it
    taken: HashSet<String>,
}

impl Graph {
    /// Create a directed, non-strict root graph
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_options(name, GraphOptions::default())
    }

    pub fn with_options(name: impl Into<String>, options: GraphOptions) -> Self {
        Self {
            name: name.into(),
            options,
            is_subgraph: false,
            ids: IdAllocator::new(),
            attrs: Attributes::new(),
            store: StableDiGraph::new(),
            node_map: HashMap::new(),
            edge_map: HashMap::new(),
            pairs: HashMap::new(),
            node_order: BTreeMap::new(),
            edge_order: BTreeMap::new(),
            next_seq: 0,
            subgraphs: HashMap::new(),
            subgraph_order: Vec::new(),
            taken: HashSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn is_strict(&self) -> bool {
        self.options.strict
    }

    /// True only for graphs produced by [`Graph::extract_subgraph`]
    pub fn is_subgraph(&self) -> bool {
        self.is_subgraph
    }

    pub fn node_count(&self) -> usize {
        self.store.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    pub fn subgraph_count(&self) -> usize {
        self.subgraphs.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Node Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a node with a generated id to the root graph
    pub fn add_node(&mut self) -> Node {
        let id = self.fresh_id();
        self.insert_node(id.clone(), None);
        Node::new(id)
    }

    /// Add a node with a generated id as a member of `subgraph`
    pub fn add_node_to(&mut self, subgraph: &Subgraph) -> Result<Node> {
        self.require_subgraph(subgraph)?;
        let id = self.fresh_id();
        self.insert_node(id.clone(), Some(subgraph.id.clone()));
        Ok(Node::new(id))
    }

    /// Add a node with a caller-chosen id to the root graph.
    ///
    /// Returns the existing node unchanged if a node already has the id, and
    /// [`Error::DuplicateId`] if an edge or subgraph does. An empty id falls
    /// back to a generated one.
    pub fn add_named_node(&mut self, id: impl Into<String>) -> Result<Node> {
        self.named_node(id.into(), None)
    }

    /// Like [`Graph::add_named_node`], placing a new node in `subgraph`
    pub fn add_named_node_to(&mut self, id: impl Into<String>, subgraph: &Subgraph) -> Result<Node> {
        self.require_subgraph(subgraph)?;
        self.named_node(id.into(), Some(subgraph.id.clone()))
    }

    pub fn has_node(&self, node: &Node) -> bool {
        self.node_map.contains_key(&node.id)
    }

    /// Remove a node and every edge touching it. No-op for unknown nodes.
    pub fn del_node(&mut self, node: &Node) {
        let Some(index) = self.node_map.remove(&node.id) else {
            return;
        };

        let mut incident: Vec<EdgeIndex> = self
            .store
            .edges_directed(index, Direction::Outgoing)
            .chain(self.store.edges_directed(index, Direction::Incoming))
            .map(|e| e.id())
            .collect();
        incident.sort_unstable();
        incident.dedup();
        for edge in &incident {
            self.remove_edge_at(*edge);
        }

        if let Some(record) = self.store.remove_node(index) {
            self.node_order.remove(&record.seq);
            self.taken.remove(&record.id);
        }
        tracing::debug!("Deleted node {} and {} incident edges", node.id, incident.len());
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.node_order
            .values()
            .map(|&index| Node::new(self.store[index].id.as_str()))
    }

    /// Subgraph the node was placed in, `None` for root graph members
    pub fn subgraph_of(&self, node: &Node) -> Result<Option<Subgraph>> {
        let record = self.node_record(node)?;
        Ok(record.subgraph.as_deref().map(Subgraph::new))
    }

    /// Targets of the node's outgoing edges, one entry per edge, in edge
    /// insertion order
    pub fn children(&self, node: &Node) -> Result<Vec<Node>> {
        let index = self.node_index(node)?;
        Ok(self.neighbours(index, Direction::Outgoing))
    }

    /// Sources of the node's incoming edges, one entry per edge, in edge
    /// insertion order
    pub fn parents(&self, node: &Node) -> Result<Vec<Node>> {
        let index = self.node_index(node)?;
        Ok(self.neighbours(index, Direction::Incoming))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edge Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add an edge between two existing nodes.
    ///
    /// In a strict graph an equivalent edge is returned instead of adding a
    /// parallel one, and self-loops are rejected. Undirected graphs treat
    /// `(a, b)` and `(b, a)` as the same pair.
    pub fn add_edge(&mut self, from: &Node, to: &Node) -> Result<Edge> {
        let source = self.node_index(from)?;
        let target = self.node_index(to)?;

        if self.options.strict {
            if source == target {
                return Err(Error::SelfLoop(from.id.clone()));
            }
            if let Some(existing) = self.find_edge(source, target) {
                let id = self.store[existing].id.as_str();
                tracing::trace!("Strict graph: reusing edge {} for {} -> {}", id, from, to);
                return Ok(Edge::new(id));
            }
        }

        let id = self.fresh_id();
        self.insert_edge(id.clone(), source, target, Attributes::new());
        Ok(Edge::new(id))
    }

    pub fn has_edge(&self, from: &Node, to: &Node) -> bool {
        self.lookup_edge(from, to).is_some()
    }

    /// The oldest edge joining `from` and `to`
    pub fn edge(&self, from: &Node, to: &Node) -> Option<Edge> {
        self.lookup_edge(from, to)
            .map(|index| Edge::new(self.store[index].id.as_str()))
    }

    /// Remove the oldest edge joining `from` and `to`. No-op if there is none.
    pub fn del_edge(&mut self, from: &Node, to: &Node) {
        if let Some(index) = self.lookup_edge(from, to) {
            self.remove_edge_at(index);
        }
    }

    /// Source and target of an edge
    pub fn endpoints(&self, edge: &Edge) -> Result<(Node, Node)> {
        let (source, target) = self
            .edge_map
            .get(&edge.id)
            .and_then(|&index| self.store.edge_endpoints(index))
            .ok_or_else(|| Error::EdgeNotFound(edge.id.clone()))?;
        Ok((
            Node::new(self.store[source].id.as_str()),
            Node::new(self.store[target].id.as_str()),
        ))
    }

    /// Edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edge_order
            .values()
            .map(|&index| Edge::new(self.store[index].id.as_str()))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Subgraph Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a top-level subgraph.
    ///
    /// An empty id gets a generated one. An id naming an existing subgraph
    /// returns that subgraph without creating another; an id held by a node
    /// or edge is [`Error::DuplicateId`].
    pub fn add_subgraph(&mut self, id: &str) -> Result<Subgraph> {
        self.insert_subgraph(id, None)
    }

    /// Add a subgraph nested inside `parent`, with the same id rules as
    /// [`Graph::add_subgraph`]
    pub fn add_nested_subgraph(&mut self, parent: &Subgraph, id: &str) -> Result<Subgraph> {
        self.require_subgraph(parent)?;
        self.insert_subgraph(id, Some(parent.id.clone()))
    }

    pub fn has_subgraph(&self, subgraph: &Subgraph) -> bool {
        self.subgraphs.contains_key(&subgraph.id)
    }

    /// Subgraphs in creation order
    pub fn subgraphs(&self) -> impl Iterator<Item = Subgraph> + '_ {
        self.subgraph_order.iter().map(|id| Subgraph::new(id.as_str()))
    }

    /// Copy a subgraph out into a graph of its own.
    ///
    /// The result has the same direction and strictness, holds the member
    /// nodes (nested members included) with their attributes, the edges
    /// whose endpoints are both members, and takes the subgraph's attributes
    /// as graph attributes.
    pub fn extract_subgraph(&self, subgraph: &Subgraph) -> Result<Graph> {
        let root = self.require_subgraph(subgraph)?;

        let mut extracted = Graph::with_options(subgraph.id.as_str(), self.options);
        extracted.is_subgraph = true;
        extracted.attrs = root.attrs.clone();

        for id in &self.subgraph_order {
            if id == &subgraph.id || !self.is_within(id, &subgraph.id) {
                continue;
            }
            if let Some(record) = self.subgraphs.get(id) {
                let parent = record.parent.clone().filter(|p| p != &subgraph.id);
                extracted.subgraphs.insert(
                    id.clone(),
                    SubgraphRecord {
                        parent,
                        attrs: record.attrs.clone(),
                    },
                );
                extracted.subgraph_order.push(id.clone());
                extracted.taken.insert(id.clone());
            }
        }

        // our node index -> extracted node index
        let mut members = HashMap::new();
        for &index in self.node_order.values() {
            let record = &self.store[index];
            let Some(owner) = record.subgraph.as_deref() else {
                continue;
            };
            if !self.is_within(owner, &subgraph.id) {
                continue;
            }
            let owner = Some(owner.to_string()).filter(|s| s != &subgraph.id);
            let copy = extracted.insert_node(record.id.clone(), owner);
            extracted.store[copy].attrs = record.attrs.clone();
            members.insert(index, copy);
        }

        for &index in self.edge_order.values() {
            let Some((source, target)) = self.store.edge_endpoints(index) else {
                continue;
            };
            if let (Some(&source), Some(&target)) = (members.get(&source), members.get(&target)) {
                let record = &self.store[index];
                extracted.insert_edge(record.id.clone(), source, target, record.attrs.clone());
            }
        }

        tracing::debug!(
            "Extracted subgraph {} with {} nodes and {} edges",
            subgraph.id,
            extracted.node_count(),
            extracted.edge_count()
        );
        Ok(extracted)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attribute Operations
    // ─────────────────────────────────────────────────────────────────────────

    /// Set a graph-level attribute
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.attrs.set(key, value);
    }

    /// Graph-level attribute, empty when unset
    pub fn attribute(&self, key: &str) -> &str {
        self.attrs.get(key)
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attrs
    }

    pub fn set_node_attribute(
        &mut self,
        node: &Node,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<()> {
        self.node_record_mut(node)?.attrs.set(key, value);
        Ok(())
    }

    /// Node attribute, empty when unset
    pub fn node_attribute(&self, node: &Node, key: &str) -> Result<&str> {
        Ok(self.node_record(node)?.attrs.get(key))
    }

    pub fn node_attributes(&self, node: &Node) -> Result<&Attributes> {
        Ok(&self.node_record(node)?.attrs)
    }

    /// Copy every attribute of `source` onto `target`
    pub fn copy_node_attributes(&mut self, target: &Node, source: &Node) -> Result<()> {
        let attrs = self.node_record(source)?.attrs.clone();
        self.node_record_mut(target)?.attrs.copy_from(&attrs);
        Ok(())
    }

    pub fn set_edge_attribute(
        &mut self,
        edge: &Edge,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<()> {
        self.edge_record_mut(edge)?.attrs.set(key, value);
        Ok(())
    }

    /// Edge attribute, empty when unset
    pub fn edge_attribute(&self, edge: &Edge, key: &str) -> Result<&str> {
        Ok(self.edge_record(edge)?.attrs.get(key))
    }

    pub fn edge_attributes(&self, edge: &Edge) -> Result<&Attributes> {
        Ok(&self.edge_record(edge)?.attrs)
    }

    /// Copy every attribute of `source` onto `target`
    pub fn copy_edge_attributes(&mut self, target: &Edge, source: &Edge) -> Result<()> {
        let attrs = self.edge_record(source)?.attrs.clone();
        self.edge_record_mut(target)?.attrs.copy_from(&attrs);
        Ok(())
    }

    pub fn set_subgraph_attribute(
        &mut self,
        subgraph: &Subgraph,
        key: impl Into<String>,
        value: impl Into<AttrValue>,
    ) -> Result<()> {
        self.subgraphs
            .get_mut(&subgraph.id)
            .ok_or_else(|| Error::SubgraphNotFound(subgraph.id.clone()))?
            .attrs
            .set(key, value);
        Ok(())
    }

    /// Subgraph attribute, empty when unset
    pub fn subgraph_attribute(&self, subgraph: &Subgraph, key: &str) -> Result<&str> {
        Ok(self.require_subgraph(subgraph)?.attrs.get(key))
    }

    pub fn subgraph_attributes(&self, subgraph: &Subgraph) -> Result<&Attributes> {
        Ok(&self.require_subgraph(subgraph)?.attrs)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────────

    /// Serialize to `format`. DOT is produced directly; every other format
    /// goes through `renderer` and its bytes are returned unmodified.
    pub fn output(&self, format: Format, renderer: &dyn Renderer) -> Result<Vec<u8>> {
        let dot = self.to_dot();
        if format == Format::Dot {
            return Ok(dot.into_bytes());
        }
        renderer.render(&dot, format).map_err(|e| {
            tracing::warn!("Rendering graph {:?} as {} failed: {}", self.name, format, e);
            Error::from(e)
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Serializer access
    // ─────────────────────────────────────────────────────────────────────────

    /// Root graph nodes with their attributes, in insertion order
    pub(crate) fn root_nodes(&self) -> impl Iterator<Item = (&str, &Attributes)> + '_ {
        self.members_of(None)
    }

    /// Direct members of a subgraph, in insertion order
    pub(crate) fn subgraph_members<'a>(
        &'a self,
        subgraph: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Attributes)> + 'a {
        self.members_of(Some(subgraph))
    }

    /// Subgraphs directly inside `parent` (`None` for top-level)
    pub(crate) fn child_subgraphs<'a>(
        &'a self,
        parent: Option<&'a str>,
    ) -> impl Iterator<Item = (&'a str, &'a Attributes)> + 'a {
        self.subgraph_order.iter().filter_map(move |id| {
            let record = self.subgraphs.get(id)?;
            (record.parent.as_deref() == parent).then_some((id.as_str(), &record.attrs))
        })
    }

    /// `(from, to, attributes)` in insertion order
    pub(crate) fn edge_list(&self) -> impl Iterator<Item = (&str, &str, &Attributes)> + '_ {
        self.edge_order.values().filter_map(|&index| {
            let (source, target) = self.store.edge_endpoints(index)?;
            Some((
                self.store[source].id.as_str(),
                self.store[target].id.as_str(),
                &self.store[index].attrs,
            ))
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    /// Generate an id not used by any element, including caller-named ones
    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.generate();
            if !self.taken.contains(&id) {
                return id;
            }
        }
    }

    fn claim(&self, id: &str) -> Result<()> {
        if self.taken.contains(id) {
            return Err(Error::DuplicateId(id.to_string()));
        }
        Ok(())
    }

    fn seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    fn named_node(&mut self, id: String, subgraph: Option<String>) -> Result<Node> {
        if self.node_map.contains_key(&id) {
            return Ok(Node::new(id));
        }
        let id = if id.is_empty() {
            self.fresh_id()
        } else {
            self.claim(&id)?;
            id
        };
        self.insert_node(id.clone(), subgraph);
        Ok(Node::new(id))
    }

    fn insert_node(&mut self, id: String, subgraph: Option<String>) -> NodeIndex {
        let seq = self.seq();
        let index = self.store.add_node(NodeRecord {
            id: id.clone(),
            seq,
            subgraph,
            attrs: Attributes::new(),
        });
        self.node_order.insert(seq, index);
        self.node_map.insert(id.clone(), index);
        self.taken.insert(id);
        index
    }

    fn insert_edge(
        &mut self,
        id: String,
        source: NodeIndex,
        target: NodeIndex,
        attrs: Attributes,
    ) -> EdgeIndex {
        let seq = self.seq();
        let index = self.store.add_edge(
            source,
            target,
            EdgeRecord {
                id: id.clone(),
                seq,
                attrs,
            },
        );
        let key = self.pair_key(source, target);
        self.pairs.entry(key).or_default().push(index);
        self.edge_order.insert(seq, index);
        self.edge_map.insert(id.clone(), index);
        self.taken.insert(id);
        index
    }

    fn remove_edge_at(&mut self, index: EdgeIndex) {
        let Some((source, target)) = self.store.edge_endpoints(index) else {
            return;
        };
        let key = self.pair_key(source, target);
        if let Some(list) = self.pairs.get_mut(&key) {
            list.retain(|&e| e != index);
            if list.is_empty() {
                self.pairs.remove(&key);
            }
        }
        if let Some(record) = self.store.remove_edge(index) {
            self.edge_order.remove(&record.seq);
            self.edge_map.remove(&record.id);
            self.taken.remove(&record.id);
        }
    }

    fn insert_subgraph(&mut self, id: &str, parent: Option<String>) -> Result<Subgraph> {
        if self.subgraphs.contains_key(id) {
            return Ok(Subgraph::new(id));
        }
        let id = if id.is_empty() {
            self.fresh_id()
        } else {
            self.claim(id)?;
            id.to_string()
        };
        self.subgraphs.insert(
            id.clone(),
            SubgraphRecord {
                parent,
                attrs: Attributes::new(),
            },
        );
        self.subgraph_order.push(id.clone());
        self.taken.insert(id.clone());
        Ok(Subgraph::new(id))
    }

    /// Key under which edges between two nodes are indexed. Undirected
    /// graphs ignore orientation.
    fn pair_key(&self, source: NodeIndex, target: NodeIndex) -> (NodeIndex, NodeIndex) {
        if self.options.directed || source <= target {
            (source, target)
        } else {
            (target, source)
        }
    }

    fn find_edge(&self, source: NodeIndex, target: NodeIndex) -> Option<EdgeIndex> {
        self.pairs
            .get(&self.pair_key(source, target))
            .and_then(|list| list.first().copied())
    }

    fn lookup_edge(&self, from: &Node, to: &Node) -> Option<EdgeIndex> {
        let source = *self.node_map.get(&from.id)?;
        let target = *self.node_map.get(&to.id)?;
        self.find_edge(source, target)
    }

    fn neighbours(&self, index: NodeIndex, direction: Direction) -> Vec<Node> {
        let mut found: Vec<(u64, NodeIndex)> = self
            .store
            .edges_directed(index, direction)
            .map(|e| {
                let other = match direction {
                    Direction::Outgoing => e.target(),
                    Direction::Incoming => e.source(),
                };
                (e.weight().seq, other)
            })
            .collect();
        found.sort_unstable_by_key(|(seq, _)| *seq);
        found
            .into_iter()
            .map(|(_, other)| Node::new(self.store[other].id.as_str()))
            .collect()
    }

    fn members_of<'a>(
        &'a self,
        subgraph: Option<&'a str>,
    ) -> impl Iterator<Item = (&'a str, &'a Attributes)> + 'a {
        self.node_order.values().filter_map(move |&index| {
            let record = &self.store[index];
            (record.subgraph.as_deref() == subgraph).then_some((record.id.as_str(), &record.attrs))
        })
    }

    /// Whether subgraph `id` is `ancestor` or nested somewhere below it
    fn is_within(&self, id: &str, ancestor: &str) -> bool {
        let mut current = Some(id);
        while let Some(cur) = current {
            if cur == ancestor {
                return true;
            }
            current = self.subgraphs.get(cur).and_then(|r| r.parent.as_deref());
        }
        false
    }

    fn node_index(&self, node: &Node) -> Result<NodeIndex> {
        self.node_map
            .get(&node.id)
            .copied()
            .ok_or_else(|| Error::NodeNotFound(node.id.clone()))
    }

    fn node_record(&self, node: &Node) -> Result<&NodeRecord> {
        let index = self.node_index(node)?;
        Ok(&self.store[index])
    }

    fn node_record_mut(&mut self, node: &Node) -> Result<&mut NodeRecord> {
        let index = self.node_index(node)?;
        Ok(&mut self.store[index])
    }

    fn edge_index(&self, edge: &Edge) -> Result<EdgeIndex> {
        self.edge_map
            .get(&edge.id)
            .copied()
            .ok_or_else(|| Error::EdgeNotFound(edge.id.clone()))
    }

    fn edge_record(&self, edge: &Edge) -> Result<&EdgeRecord> {
        let index = self.edge_index(edge)?;
        Ok(&self.store[index])
    }

    fn edge_record_mut(&mut self, edge: &Edge) -> Result<&mut EdgeRecord> {
        let index = self.edge_index(edge)?;
        Ok(&mut self.store[index])
    }

    fn require_subgraph(&self, subgraph: &Subgraph) -> Result<&SubgraphRecord> {
        self.subgraphs
            .get(&subgraph.id)
            .ok_or_else(|| Error::SubgraphNotFound(subgraph.id.clone()))
    }
}
