//! Error types for the labgraph library.

use thiserror::Error;

/// All errors that can occur in the labgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// `add_node` was called with a label that is already registered.
    #[error("Node {0:?} already exists")]
    DuplicateNode(String),

    /// A traversal endpoint is not a node of the graph.
    #[error("Node {0:?} not found")]
    NodeNotFound(String),

    /// The target cannot be reached from the source along directed edges.
    #[error("No route from {from:?} to {to:?}")]
    NoRoute { from: String, to: String },

    /// Two adjacent nodes ended up in the same group during scheduling.
    #[error("No valid schedule: {node:?} and its neighbor {neighbor:?} need the same group")]
    NoSchedule { node: String, neighbor: String },

    /// An edge argument was not of the form `FROM:TO`.
    #[error("Invalid edge spec {0:?}, expected FROM:TO")]
    InvalidEdgeSpec(String),

    /// Unknown graph backing name.
    #[error("Invalid backing {0:?}, expected \"matrix\" or \"list\"")]
    InvalidBacking(String),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for labgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
