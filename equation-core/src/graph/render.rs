//! Equation Rendering
//!
//! Linearises a graph into a flat equation string.
//!
//! # Algorithm
//!
//! Nodes are visited in ascending ID order, skipping any node already marked
//! processed:
//!
//! 1. A node with no incoming edges contributes its bare name.
//! 2. Otherwise every incoming edge contributes `operation.apply(node.name)`,
//!    always with the *target* node's name. These terms are joined with the
//!    term separator into one fragment, and the source of each incoming edge
//!    is marked processed.
//! 3. The node itself is marked processed.
//!
//! Fragments are then deduplicated, keeping the first occurrence, and joined
//! with the fragment separator.
//!
//! Marking sources in step 2 means a source with a higher ID than its target
//! is never rendered at all. Chains built in ID order are unaffected; other
//! shapes (fan-in, edges pointing to lower IDs) lose those source nodes.

use std::collections::HashSet;

use indexmap::IndexSet;
use tracing::{debug, trace};

use super::node::NodeId;
use super::store::EquationGraph;
use crate::style::EquationStyle;

impl EquationGraph {
    /// Render the graph with the default [`EquationStyle`].
    pub fn to_equation(&self) -> String {
        self.to_equation_with(&EquationStyle::default())
    }

    /// Render the graph with custom separators.
    pub fn to_equation_with(&self, style: &EquationStyle) -> String {
        let fragments = self.fragments_with(style);
        let total = fragments.len();
        let unique: IndexSet<String> = fragments.into_iter().collect();

        debug!(fragments = total, unique = unique.len(), "rendered equation");

        unique
            .into_iter()
            .collect::<Vec<_>>()
            .join(style.fragment_separator.as_str())
    }

    /// The per-node fragments in visiting order, before deduplication.
    pub fn fragments(&self) -> Vec<String> {
        self.fragments_with(&EquationStyle::default())
    }

    /// Like [`fragments`](Self::fragments), joining edge terms with
    /// `style.term_separator`.
    pub fn fragments_with(&self, style: &EquationStyle) -> Vec<String> {
        let mut processed: HashSet<NodeId> = HashSet::new();
        let mut fragments = Vec::with_capacity(self.node_count());

        for node in self.nodes() {
            if processed.contains(&node.id()) {
                trace!(node = %node.id(), name = node.name(), "skipping processed node");
                continue;
            }

            if node.is_root() {
                fragments.push(node.name().to_string());
            } else {
                let terms: Vec<String> = node
                    .incoming()
                    .iter()
                    .filter_map(|&edge_id| self.edge(edge_id))
                    .map(|edge| {
                        processed.insert(edge.from());
                        edge.operation().apply(node.name())
                    })
                    .collect();
                fragments.push(terms.join(style.term_separator.as_str()));
            }

            processed.insert(node.id());
        }

        fragments
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::EquationGraph;
    use crate::ops::Operation;
    use crate::style::EquationStyle;

    #[test]
    fn empty_graph_renders_empty_string() {
        let graph = EquationGraph::new();
        assert_eq!(graph.to_equation(), "");
        assert!(graph.fragments().is_empty());
    }

    #[test]
    fn root_nodes_render_as_names() {
        let mut graph = EquationGraph::new();
        graph.add_node("a");
        graph.add_node("b");

        assert_eq!(graph.fragments(), vec!["a", "b"]);
        assert_eq!(graph.to_equation(), "a b");
    }

    #[test]
    fn each_operation_uses_target_name() {
        for op in Operation::ALL {
            let mut graph = EquationGraph::new();
            let from = graph.add_node("src");
            let to = graph.add_node("dst");
            graph.add_edge(from, to, op).unwrap();

            assert_eq!(graph.fragments(), vec!["src".to_string(), op.apply("dst")]);
        }
    }

    #[test]
    fn fan_in_joins_terms_and_skips_later_source() {
        let mut graph = EquationGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        graph.add_edge(a, b, Operation::Addition).unwrap();
        graph.add_edge(c, b, Operation::Multiplication).unwrap();

        // "c" is marked processed by its consumer "b" before it is visited.
        assert_eq!(graph.fragments(), vec!["a", "+ b + * b"]);
        assert_eq!(graph.to_equation(), "a + b + * b");
    }

    #[test]
    fn duplicate_fragments_keep_first_position() {
        let mut graph = EquationGraph::new();
        let x = graph.add_node("x");
        let y1 = graph.add_node("y");
        let z = graph.add_node("z");
        let y2 = graph.add_node("y");
        graph.add_edge(x, y1, Operation::Addition).unwrap();
        graph.add_edge(z, y2, Operation::Addition).unwrap();

        assert_eq!(graph.fragments(), vec!["x", "+ y", "z", "+ y"]);
        assert_eq!(graph.to_equation(), "x + y z");
    }

    #[test]
    fn custom_style_changes_separators() {
        let mut graph = EquationGraph::new();
        let a = graph.add_node("a");
        let b = graph.add_node("b");
        let c = graph.add_node("c");
        graph.add_edge(a, c, Operation::Subtraction).unwrap();
        graph.add_edge(b, c, Operation::Division).unwrap();

        let style = EquationStyle::new(" & ", " | ");
        assert_eq!(graph.to_equation_with(&style), "a | b | - c & / c");
    }
}
