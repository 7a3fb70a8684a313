//! Graph Nodes
//!
//! This module defines the named vertices that live in an equation graph.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use super::edge::EdgeId;

/// Identifier for a node, assigned sequentially by its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    /// Get the raw ID value.
    pub fn raw(&self) -> u64 {
        self.0
    }

    /// The ID that follows this one.
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Incident edge list. Most nodes in practice have one or two edges.
pub type EdgeList = SmallVec<[EdgeId; 2]>;

/// A named vertex.
///
/// Nodes do not own their edges: they hold the IDs of edges stored in the
/// graph's edge arena, in the order the edges were added.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Unique identifier for this node.
    id: NodeId,

    /// Display name. Not required to be unique.
    name: String,

    /// Edges leaving this node.
    outgoing: EdgeList,

    /// Edges arriving at this node.
    incoming: EdgeList,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            outgoing: EdgeList::new(),
            incoming: EdgeList::new(),
        }
    }

    /// Get the node's ID.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Get the node's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Edges leaving this node, oldest first.
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Edges arriving at this node, oldest first.
    pub fn incoming(&self) -> &[EdgeId] {
        &self.incoming
    }

    /// A node with no incoming edges renders as its bare name.
    pub fn is_root(&self) -> bool {
        self.incoming.is_empty()
    }

    pub(crate) fn push_outgoing(&mut self, edge: EdgeId) {
        self.outgoing.push(edge);
    }

    pub(crate) fn push_incoming(&mut self, edge: EdgeId) {
        self.incoming.push(edge);
    }
}
