//! Handle types for graph elements
//!
//! Handles are plain values carrying only an id. They compare and order by
//! id, so they can key ordered and hashed containers. A handle says nothing
//! about whether its element still exists; ask the owning [`Graph`].
//!
//! [`Graph`]: crate::Graph

use serde::{Deserialize, Serialize};

/// Handle to a node (vertex)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Handle to an edge
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
}

impl Edge {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// Handle to a subgraph (a named grouping of nodes)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Subgraph {
    pub id: String,
}

impl Subgraph {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for Subgraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl From<&str> for Subgraph {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
