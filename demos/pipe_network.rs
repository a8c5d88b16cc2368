//! Builds the cheapest and the highest-capacity pipe network for a small
//! distribution system and prints how each edge was decided.
//!
//! Run with `cargo run --example pipe_network [min|max]`.

use std::env;

use spanning_forest::{build, Graph, Mode, Outcome, Result};

// Weights are the cost of a pipe (minimum) or its flow capacity (maximum).
fn distribution_network() -> Result<Graph<&'static str, u32>> {
    Graph::from_adjacency(vec![
        ("Plant",  vec![("Node_A", 10), ("Node_B", 6), ("Node_C", 5)]),
        ("Node_A", vec![("Plant", 10), ("Node_D", 15), ("Node_B", 4)]),
        ("Node_B", vec![("Plant", 6), ("Node_A", 4), ("Node_D", 12),
                        ("Node_E", 8), ("Node_C", 7)]),
        ("Node_C", vec![("Plant", 5), ("Node_B", 7), ("Node_E", 20)]),
        ("Node_D", vec![("Node_A", 15), ("Node_B", 12), ("Node_F", 9)]),
        ("Node_E", vec![("Node_B", 8), ("Node_C", 20), ("Node_F", 3)]),
        ("Node_F", vec![("Node_D", 9), ("Node_E", 3)]),
    ])
}

fn report(graph: &Graph<&'static str, u32>, mode: Mode) -> Result<()> {
    let forest = build(graph, mode)?;

    println!("\n--- Kruskal, {} total weight ---", mode);
    println!("{:<16} | {:<6} | {}", "Edge", "Weight", "Action");
    println!("{}", "-".repeat(40));

    for step in forest.steps() {
        let action = match step.outcome {
            Outcome::Accepted => "added (joins two components)",
            Outcome::Rejected => "discarded (would close a cycle)",
        };
        let label = format!("{}-{}", step.edge.a, step.edge.b);
        println!("{:<16} | {:<6} | {}", label, step.edge.weight, action);
    }

    println!("\nTotal weight: {}", forest.total_weight());
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let graph = distribution_network()?;

    let modes = match env::args().nth(1) {
        Some(arg) => vec![arg.parse::<Mode>()?],
        None => vec![Mode::Minimum, Mode::Maximum],
    };

    for mode in modes {
        report(&graph, mode)?;
    }

    Ok(())
}
