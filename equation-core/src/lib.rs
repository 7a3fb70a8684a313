//! Equation Core
//!
//! This crate builds small directed graphs of named nodes joined by
//! operation-labelled edges and renders them as flat equation strings.
//! Operations are labels only: nothing is evaluated or simplified.
//!
//! # Architecture
//!
//! - `ops`: the fixed set of edge operations and their text fragments
//! - `graph`: node/edge storage and the rendering algorithm
//! - `style`: separators used while rendering
//! - `error`: the crate error type
//!
//! # Example
//!
//! ```rust
//! use equation_core::{EquationGraph, Operation};
//!
//! let mut graph = EquationGraph::new();
//! let a = graph.add_node("1,2");
//! let x = graph.add_node("x");
//! graph.add_edge(a, x, Operation::Multiplication)?;
//!
//! assert_eq!(graph.to_equation(), "1,2 * x");
//! # Ok::<(), equation_core::GraphError>(())
//! ```

pub mod error;
pub mod graph;
pub mod ops;
pub mod style;

pub use error::{GraphError, Result};
pub use graph::{Edge, EdgeId, EquationGraph, Node, NodeId};
pub use ops::Operation;
pub use style::EquationStyle;
