//! Core graph structure — an arena of nodes with identity-keyed neighbor sets.

use std::collections::HashSet;

use crate::types::{ChromaError, ChromaResult, Node};

/// The in-memory graph holding nodes and their adjacency.
///
/// Neighbor entries are directed at the storage level: `add_neighbor(a, b)`
/// records `b` in `a`'s set only. Callers wanting undirected semantics must
/// add both directions; `GraphBuilder::link_undirected` does this for them.
#[derive(Debug)]
pub struct ColorGraph {
    /// All nodes, in insertion order.
    nodes: Vec<Node>,
    /// Next available node ID.
    next_id: u64,
}

impl ColorGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            next_id: 0,
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored neighbor entries (directed count: an undirected
    /// edge added both ways counts twice).
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum()
    }

    /// Get a node by ID (immutable).
    pub fn get_node(&self, id: u64) -> Option<&Node> {
        // IDs are assigned sequentially and nodes are never removed,
        // so a node's ID is its index.
        self.nodes.get(id as usize)
    }

    /// Get a node by ID (mutable, crate-internal).
    pub(crate) fn get_node_mut(&mut self, id: u64) -> Option<&mut Node> {
        self.nodes.get_mut(id as usize)
    }

    /// All nodes in insertion order (immutable slice).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All node IDs in insertion order.
    pub fn node_ids(&self) -> Vec<u64> {
        self.nodes.iter().map(Node::id).collect()
    }

    /// Add a node with the given value, returns the assigned ID.
    pub fn add_node(&mut self, value: i64) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.push(Node::new(id, value));
        id
    }

    /// Record `other` as a neighbor of `node`.
    ///
    /// Set semantics: re-adding an existing neighbor is a no-op. The
    /// reciprocal entry is not added automatically. A node may be recorded
    /// as its own neighbor here; a coloring run rejects such graphs when it
    /// reaches the offending node.
    pub fn add_neighbor(&mut self, node: u64, other: u64) -> ChromaResult<()> {
        if self.get_node(other).is_none() {
            return Err(ChromaError::NodeNotFound(other));
        }
        let entry = self
            .get_node_mut(node)
            .ok_or(ChromaError::NodeNotFound(node))?;
        entry.add_neighbor(other);
        Ok(())
    }

    /// The neighbor set of a node.
    pub fn neighbors(&self, id: u64) -> ChromaResult<&HashSet<u64>> {
        Ok(self
            .get_node(id)
            .ok_or(ChromaError::NodeNotFound(id))?
            .neighbors())
    }
}

impl Default for ColorGraph {
    fn default() -> Self {
        Self::new()
    }
}
