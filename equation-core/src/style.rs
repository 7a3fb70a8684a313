//! Rendering configuration.

/// Separators used when rendering an equation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquationStyle {
    /// Joins the fragments produced by one node's incoming edges.
    pub term_separator: String,

    /// Joins the unique per-node fragments into the final equation.
    pub fragment_separator: String,
}

impl EquationStyle {
    pub fn new(term_separator: impl Into<String>, fragment_separator: impl Into<String>) -> Self {
        Self {
            term_separator: term_separator.into(),
            fragment_separator: fragment_separator.into(),
        }
    }
}

impl Default for EquationStyle {
    fn default() -> Self {
        Self::new(" + ", " ")
    }
}
