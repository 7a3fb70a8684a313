//! Graph Edges

use std::fmt;

use serde::Serialize;

use super::node::NodeId;
use crate::ops::Operation;

/// Index of an edge in its graph's edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EdgeId(usize);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(idx: usize) -> Self {
        Self(idx)
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// A directed, operation-labelled connection between two nodes.
///
/// Endpoints are stored as IDs; the graph owns the nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    id: EdgeId,
    from: NodeId,
    to: NodeId,
    operation: Operation,
}

impl Edge {
    pub(crate) fn new(id: EdgeId, from: NodeId, to: NodeId, operation: Operation) -> Self {
        Self {
            id,
            from,
            to,
            operation,
        }
    }

    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Source node.
    pub fn from(&self) -> NodeId {
        self.from
    }

    /// Target node.
    pub fn to(&self) -> NodeId {
        self.to
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }
}
