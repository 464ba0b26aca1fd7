//! Demo binary: builds the textbook 7-vertex weighted graph and prints its
//! minimum spanning tree.
//!
//! The graph is fixed (no flags or configuration): vertices a..g with 11
//! undirected weighted edges, the classic lecture-notes example. Each
//! undirected edge is stored as a pair of directed edges.

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spantree_core::{minimum_spanning_tree, total_weight, Graph};

/// The demonstration graph: 7 vertices, 11 undirected weighted edges
/// (22 directed edges).
fn build_example_graph() -> Result<Graph> {
    let mut graph = Graph::with_capacity(7, 22);
    for vertex in ["a", "b", "c", "d", "e", "f", "g"] {
        graph.add_vertex(vertex)?;
    }

    let weights = [
        ("a", "b", 4.0),
        ("a", "c", 8.0),
        ("b", "c", 9.0),
        ("b", "d", 8.0),
        ("b", "e", 10.0),
        ("c", "d", 2.0),
        ("c", "f", 1.0),
        ("d", "e", 7.0),
        ("d", "f", 9.0),
        ("e", "f", 5.0),
        ("e", "g", 6.0),
        ("f", "g", 2.0),
    ];
    for (a, b, weight) in weights {
        graph.add_undirected_edge(a, b, weight)?;
    }

    Ok(graph)
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let graph = build_example_graph()?;
    tracing::info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "built example graph"
    );

    let tree = minimum_spanning_tree(&graph);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["#", "Edge", "Weight"]);
    for (i, edge) in tree.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(format!("{} -> {}", edge.source(), edge.sink())),
            Cell::new(edge.weight()),
        ]);
    }

    println!("{}", "Minimum spanning tree:".bold());
    println!("{table}");
    println!(
        "{} {}",
        "Total weight:".bold(),
        total_weight(&tree).to_string().green()
    );

    Ok(())
}
