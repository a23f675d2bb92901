//! Post-run inspection of a coloring.

use std::collections::HashSet;

use crate::graph::ColorGraph;
use crate::types::Color;

/// Summary of a graph's coloring state.
///
/// Palette exhaustion is a silent outcome of the coloring pass, so a
/// caller needing a complete coloring checks `uncolored` here afterward.
pub struct ColoringReport {
    /// Number of colored nodes.
    pub colored: usize,
    /// IDs of nodes left uncolored, in insertion order.
    pub uncolored: Vec<u64>,
    /// Distinct colors in use, in first-seen order.
    pub colors_used: Vec<Color>,
    /// Directed pairs of same-colored neighbors, sorted.
    pub conflicts: Vec<(u64, u64)>,
}

impl ColoringReport {
    /// True iff every node is colored and no two neighbors share a color.
    pub fn is_complete_and_proper(&self) -> bool {
        self.uncolored.is_empty() && self.conflicts.is_empty()
    }
}

/// Inspect the current coloring of `graph`.
pub fn inspect(graph: &ColorGraph) -> ColoringReport {
    let mut colored = 0;
    let mut uncolored = Vec::new();
    let mut seen: HashSet<&Color> = HashSet::new();
    let mut colors_used = Vec::new();
    let mut conflicts = Vec::new();

    for node in graph.nodes() {
        match node.color() {
            Some(color) => {
                colored += 1;
                if seen.insert(color) {
                    colors_used.push(color.clone());
                }
            }
            None => uncolored.push(node.id()),
        }

        for &other in node.neighbors() {
            if other == node.id() {
                continue;
            }
            let same = graph
                .get_node(other)
                .and_then(|o| o.color())
                .is_some_and(|c| Some(c) == node.color());
            if same {
                conflicts.push((node.id(), other));
            }
        }
    }

    conflicts.sort_unstable();

    ColoringReport {
        colored,
        uncolored,
        colors_used,
        conflicts,
    }
}
