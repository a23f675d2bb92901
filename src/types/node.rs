//! Graph nodes — identity, neighbor set, color slot.

use std::collections::HashSet;

use super::Color;

/// A single graph node.
///
/// Nodes are identified by the `id` the graph assigns at insertion, never
/// by `value` — two distinct nodes may carry the same value without being
/// confused. The neighbor set holds IDs and is owned exclusively by the
/// node; it can only be grown through the graph's `add_neighbor`.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique identifier (assigned sequentially by the graph).
    id: u64,
    /// Caller-supplied value. Not required to be unique.
    value: i64,
    /// IDs of this node's neighbors. Membership is by node identity.
    neighbors: HashSet<u64>,
    /// Assigned color, absent until a coloring run reaches this node.
    color: Option<Color>,
}

impl Node {
    pub(crate) fn new(id: u64, value: i64) -> Self {
        Self {
            id,
            value,
            neighbors: HashSet::new(),
            color: None,
        }
    }

    /// Unique identifier of this node.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The caller-supplied value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Read-only view of the neighbor set.
    pub fn neighbors(&self) -> &HashSet<u64> {
        &self.neighbors
    }

    /// Number of neighbors.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// True iff a color has been assigned.
    pub fn has_color(&self) -> bool {
        self.color.is_some()
    }

    /// The assigned color, or None if uncolored.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }

    /// Assign a color, overwriting any prior value.
    pub(crate) fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    /// Insert `other` into the neighbor set. Re-inserting an existing
    /// neighbor has no additional effect.
    pub(crate) fn add_neighbor(&mut self, other: u64) {
        self.neighbors.insert(other);
    }
}
