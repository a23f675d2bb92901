//! All data types for the chroma-graph library.

pub mod color;
pub mod error;
pub mod node;

pub use color::{palette, Color};
pub use error::{ChromaError, ChromaResult};
pub use node::Node;
