//! Edge Operations
//!
//! An [`Operation`] labels an edge. It never evaluates anything: given the
//! name of the node the edge points to, it produces the text fragment that
//! describes the relation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// The fixed set of operations an edge can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    /// Symbolic `d(operand)/dx`; no differentiation is performed.
    Differentiation,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Operation; 5] = [
        Operation::Addition,
        Operation::Subtraction,
        Operation::Multiplication,
        Operation::Division,
        Operation::Differentiation,
    ];

    /// Render the fragment for the right-hand operand `operand`.
    pub fn apply(&self, operand: &str) -> String {
        match self {
            Operation::Differentiation => format!("d({operand})/dx"),
            op => format!("{} {operand}", op.symbol()),
        }
    }

    /// Short symbol used when rendering.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operation::Addition => "+",
            Operation::Subtraction => "-",
            Operation::Multiplication => "*",
            Operation::Division => "/",
            Operation::Differentiation => "d",
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Addition => "addition",
            Operation::Subtraction => "subtraction",
            Operation::Multiplication => "multiplication",
            Operation::Division => "division",
            Operation::Differentiation => "differentiation",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == lowered)
            .ok_or_else(|| GraphError::UnknownOperation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_operations_prefix_symbol() {
        assert_eq!(Operation::Addition.apply("x"), "+ x");
        assert_eq!(Operation::Subtraction.apply("x"), "- x");
        assert_eq!(Operation::Multiplication.apply("x"), "* x");
        assert_eq!(Operation::Division.apply("x"), "/ x");
    }

    #[test]
    fn differentiation_wraps_operand() {
        assert_eq!(Operation::Differentiation.apply("t"), "d(t)/dx");
        assert_eq!(Operation::Differentiation.apply(""), "d()/dx");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Addition".parse::<Operation>(), Ok(Operation::Addition));
        assert_eq!(
            " DIFFERENTIATION ".parse::<Operation>(),
            Ok(Operation::Differentiation)
        );
        assert_eq!(
            "modulo".parse::<Operation>(),
            Err(GraphError::UnknownOperation("modulo".to_string()))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        for op in Operation::ALL {
            assert_eq!(op.to_string().parse::<Operation>(), Ok(op));
        }
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Operation::Multiplication).unwrap();
        assert_eq!(json, "\"multiplication\"");
    }
}
