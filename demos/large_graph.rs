//! Color a large random graph and report how far a small palette gets.

use chroma_graph::{color_all, inspect, palette, ChromaResult, ColorGraph};
use rand::Rng;

const NODE_COUNT: usize = 50_000;
const LINKS_PER_NODE: usize = 6;

fn main() -> ChromaResult<()> {
    env_logger::init();

    let mut rng = rand::thread_rng();
    let mut graph = ColorGraph::new();
    for v in 0..NODE_COUNT {
        graph.add_node(v as i64);
    }
    for a in 0..NODE_COUNT {
        for _ in 0..LINKS_PER_NODE {
            let b = rng.gen_range(0..NODE_COUNT);
            if a != b {
                graph.add_neighbor(a as u64, b as u64)?;
                graph.add_neighbor(b as u64, a as u64)?;
            }
        }
    }

    let max_degree = graph
        .nodes()
        .iter()
        .map(|n| n.degree())
        .max()
        .unwrap_or(0);
    println!(
        "Graph: {} nodes, {} neighbor entries, max degree {}",
        graph.node_count(),
        graph.edge_count(),
        max_degree
    );

    // Deliberately small palette so some nodes starve
    let colors = palette((0..8).map(|i| format!("c{}", i)));
    color_all(&mut graph, &colors)?;

    let report = inspect(&graph);
    println!(
        "Colored {} of {} nodes with {} colors; {} left uncolored",
        report.colored,
        graph.node_count(),
        report.colors_used.len(),
        report.uncolored.len()
    );

    // A palette of max degree + 1 colors the rest
    let full = palette((0..=max_degree).map(|i| format!("c{}", i)));
    color_all(&mut graph, &full)?;

    let report = inspect(&graph);
    println!(
        "After widening the palette: {} colored, {} uncolored, proper = {}",
        report.colored,
        report.uncolored.len(),
        report.conflicts.is_empty()
    );

    Ok(())
}
