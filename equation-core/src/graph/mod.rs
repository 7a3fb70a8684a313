//! Equation Graph
//!
//! This module implements the directed graph that an equation is rendered
//! from.
//!
//! # Overview
//!
//! - Nodes are named vertices, identified by sequential [`NodeId`]s
//! - Edges connect two existing nodes and carry an [`Operation`](crate::ops::Operation)
//!
//! # Design Decisions
//!
//! 1. The graph is the only owner of nodes and edges. Edges live in a flat
//!    arena and refer to their endpoints by ID, so there are no back-pointers.
//!
//! 2. Nodes are indexed by ID for O(1) lookups, and iterate in ID order.
//!
//! 3. Each node records both incoming and outgoing edges; rendering only
//!    walks the incoming side.

mod edge;
mod node;
mod render;
mod store;

pub use edge::{Edge, EdgeId};
pub use node::{EdgeList, Node, NodeId};
pub use store::EquationGraph;
