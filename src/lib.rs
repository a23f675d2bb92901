//! chroma-graph — greedy first-fit coloring for in-memory graphs.
//!
//! Builds an adjacency graph (undirected by caller convention) and assigns
//! each node the first palette color not used by an already-colored
//! neighbor. One pass, no backtracking: the result is valid wherever a
//! color was assigned, but not guaranteed to use the minimum number of
//! colors, and a node whose neighbors exhaust the palette stays uncolored.

pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{color_all, color_nodes, inspect, ColoringReport};
pub use graph::{ColorGraph, GraphBuilder};
pub use types::{palette, ChromaError, ChromaResult, Color, Node};
