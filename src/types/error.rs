//! Error types for the chroma-graph library.

use thiserror::Error;

/// All errors that can occur in the chroma-graph library.
#[derive(Error, Debug)]
pub enum ChromaError {
    /// Node not found by ID.
    #[error("Node ID {0} not found")]
    NodeNotFound(u64),

    /// A node lists itself as a neighbor. Greedy coloring cannot be
    /// applied to such a graph; the run aborts on the offending node.
    #[error("Coloring is unsupported for node {id} (value {value}): node is its own neighbor")]
    SelfLoop {
        /// ID of the offending node.
        id: u64,
        /// Caller-supplied value of the offending node.
        value: i64,
    },
}

/// Convenience result type for chroma-graph operations.
pub type ChromaResult<T> = Result<T, ChromaError>;
