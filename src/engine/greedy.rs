//! Greedy first-fit coloring pass.

use std::collections::HashSet;

use log::{debug, trace};

use crate::graph::ColorGraph;
use crate::types::{ChromaError, ChromaResult, Color};

/// Color the nodes listed in `order`, in sequence, with a first-fit scan
/// over `palette`.
///
/// Each node receives the first palette color not already assigned to one
/// of its neighbors; a node whose neighbors exhaust the palette is left
/// uncolored, without error. Earlier nodes constrain later ones, so both
/// the node order and the palette order shape the outcome. Already-colored
/// nodes keep their assignment.
///
/// Fails with `SelfLoop` on the first node that lists itself as a
/// neighbor; colors assigned before that point are kept. O(N + M) time,
/// O(D) working space in the maximum degree D.
pub fn color_nodes(graph: &mut ColorGraph, order: &[u64], palette: &[Color]) -> ChromaResult<()> {
    for &id in order {
        let node = graph.get_node(id).ok_or(ChromaError::NodeNotFound(id))?;
        if node.neighbors().contains(&id) {
            return Err(ChromaError::SelfLoop {
                id,
                value: node.value(),
            });
        }
        if node.has_color() {
            trace!("node {id} already colored, skipping");
            continue;
        }

        // Distinct colors currently held by neighbors; uncolored
        // neighbors contribute nothing.
        let used: HashSet<Color> = node
            .neighbors()
            .iter()
            .filter_map(|&n| graph.get_node(n))
            .filter_map(|n| n.color().cloned())
            .collect();

        match palette.iter().find(|c| !used.contains(*c)) {
            Some(color) => {
                trace!("node {id} (value {}) -> {color}", node.value());
                let chosen = color.clone();
                if let Some(node) = graph.get_node_mut(id) {
                    node.set_color(chosen);
                }
            }
            None => {
                debug!("palette exhausted for node {id}, leaving it uncolored");
            }
        }
    }
    Ok(())
}

/// Color every node of the graph in insertion order.
pub fn color_all(graph: &mut ColorGraph, palette: &[Color]) -> ChromaResult<()> {
    let order = graph.node_ids();
    color_nodes(graph, &order, palette)
}
