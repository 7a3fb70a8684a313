//! Graph Store
//!
//! [`EquationGraph`] is the single owner of every node and edge. Nodes live in
//! an id-keyed map that iterates in ascending ID order; edges live in a flat
//! arena and are referenced from both endpoints by [`EdgeId`].

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

use super::edge::{Edge, EdgeId};
use super::node::{Node, NodeId};
use crate::error::{GraphError, Result};
use crate::ops::Operation;

/// A directed graph of named nodes joined by operation-labelled edges.
///
/// The graph only grows: there is no way to remove a node or an edge, so IDs
/// are never reused.
#[derive(Debug, Clone)]
pub struct EquationGraph {
    /// All nodes, keyed by ID. Insertion order equals ascending ID order.
    nodes: IndexMap<NodeId, Node>,

    /// Edge arena, indexed by `EdgeId`.
    edges: Vec<Edge>,

    /// ID handed to the next `add_node` call.
    next_id: NodeId,
}

/// Borrowed view of a graph used for JSON export.
#[derive(Serialize)]
struct Snapshot<'a> {
    nodes: Vec<&'a Node>,
    edges: &'a [Edge],
}

impl EquationGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: IndexMap::new(),
            edges: Vec::new(),
            next_id: NodeId::from(0),
        }
    }

    /// Add a node named `name` and return its ID.
    ///
    /// The i-th call on a graph returns ID `i`.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = self.next_id;
        let node = Node::new(id, name);
        debug!(node = %id, name = node.name(), "added node");
        self.nodes.insert(id, node);
        self.next_id = id.next();
        id
    }

    /// Connect `from` to `to` with `operation`.
    ///
    /// Fails with [`GraphError::InvalidReference`] if either endpoint is not
    /// in the graph, in which case nothing is modified.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, operation: Operation) -> Result<EdgeId> {
        if !self.contains(from) || !self.contains(to) {
            warn!(%from, %to, %operation, "rejected edge with missing endpoint");
            return Err(GraphError::InvalidReference { from, to });
        }

        let id = EdgeId::from(self.edges.len());
        self.edges.push(Edge::new(id, from, to, operation));

        // Both lookups succeed: checked above and nodes are never removed.
        if let Some(source) = self.nodes.get_mut(&from) {
            source.push_outgoing(id);
        }
        if let Some(target) = self.nodes.get_mut(&to) {
            target.push_incoming(id);
        }

        debug!(edge = %id, %from, %to, %operation, "added edge");
        Ok(id)
    }

    /// Check whether `id` names a node of this graph.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Get a reference to a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Get a reference to an edge.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    /// All nodes in ascending ID order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Get the total number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Export nodes and edges as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Snapshot {
            nodes: self.nodes.values().collect(),
            edges: &self.edges,
        })
    }
}

impl Default for EquationGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EquationGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_equation())
    }
}
