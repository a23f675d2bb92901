//! Fluent API for building ColorGraph instances.

use crate::types::ChromaResult;

use super::ColorGraph;

/// Fluent builder for constructing a ColorGraph.
pub struct GraphBuilder {
    values: Vec<i64>,
    links: Vec<(u64, u64)>,
}

impl GraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add a node, returns the ID it will have in the built graph.
    pub fn add_node(&mut self, value: i64) -> u64 {
        self.values.push(value);
        (self.values.len() - 1) as u64
    }

    /// Record `b` as a neighbor of `a` (one direction only).
    pub fn link(&mut self, a: u64, b: u64) -> &mut Self {
        self.links.push((a, b));
        self
    }

    /// Record `a` and `b` as neighbors of each other.
    pub fn link_undirected(&mut self, a: u64, b: u64) -> &mut Self {
        self.links.push((a, b));
        self.links.push((b, a));
        self
    }

    /// Build the final ColorGraph.
    ///
    /// Fails with `NodeNotFound` if a link references an ID that was never
    /// added.
    pub fn build(self) -> ChromaResult<ColorGraph> {
        let mut graph = ColorGraph::new();
        for value in self.values {
            graph.add_node(value);
        }
        for (a, b) in self.links {
            graph.add_neighbor(a, b)?;
        }
        Ok(graph)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
