//! Errors
//!
//! Every fallible operation in the crate returns [`GraphError`].

use thiserror::Error;

use crate::graph::NodeId;

/// Errors raised while building an equation graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge endpoint is not a node of the graph.
    #[error("both nodes must exist in the graph (from {from}, to {to})")]
    InvalidReference {
        /// Requested source node.
        from: NodeId,
        /// Requested target node.
        to: NodeId,
    },

    /// An operation name could not be parsed.
    #[error("unknown operation '{0}'")]
    UnknownOperation(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
