//! Shared data types for the labgraph library.

pub mod edge;
pub mod error;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};

/// Name given to graphs that the caller does not name explicitly.
pub const DEFAULT_GRAPH_NAME: &str = "graph";
