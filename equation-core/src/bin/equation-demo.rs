//! Builds the example chain graph and prints its equation.
//!
//! Set `RUST_LOG=debug` to see graph construction on stderr.

use equation_core::{EquationGraph, Operation, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    init_tracing();

    let mut graph = EquationGraph::new();

    let ids: Vec<_> = ["1,2", "x", "3", "y", "1", "t"]
        .into_iter()
        .map(|name| graph.add_node(name))
        .collect();

    let ops = [
        Operation::Multiplication, // 1,2 * x
        Operation::Addition,       // x + 3
        Operation::Multiplication, // 3 * y
        Operation::Addition,       // y + 1
        Operation::Differentiation,
    ];
    for (pair, op) in ids.windows(2).zip(ops) {
        graph.add_edge(pair[0], pair[1], op)?;
    }

    info!(nodes = graph.node_count(), edges = graph.edge_count(), "graph built");
    println!("Equation: {}", graph.to_equation());
    Ok(())
}

/// Initialize tracing subscriber with environment filter, logging to stderr.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
