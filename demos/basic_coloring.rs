//! Basic build -> color -> inspect flow.

use chroma_graph::{color_all, inspect, palette, ChromaResult, GraphBuilder};

fn main() -> ChromaResult<()> {
    env_logger::init();

    // A small map: four regions, some of them bordering each other
    let mut builder = GraphBuilder::new();
    let north = builder.add_node(1);
    let east = builder.add_node(2);
    let south = builder.add_node(3);
    let west = builder.add_node(4);

    builder.link_undirected(north, east);
    builder.link_undirected(east, south);
    builder.link_undirected(south, west);
    builder.link_undirected(west, north);

    let mut graph = builder.build()?;
    let colors = palette(["red", "green", "blue"]);

    color_all(&mut graph, &colors)?;

    for node in graph.nodes() {
        match node.color() {
            Some(color) => println!("node {} (value {}) -> {}", node.id(), node.value(), color),
            None => println!("node {} (value {}) -> uncolored", node.id(), node.value()),
        }
    }

    let report = inspect(&graph);
    println!(
        "\n{} colored, {} uncolored, {} distinct colors used",
        report.colored,
        report.uncolored.len(),
        report.colors_used.len()
    );

    Ok(())
}
