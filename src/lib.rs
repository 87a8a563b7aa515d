//! labgraph: labeled graphs with BFS routing and two-group scheduling.
//!
//! A graph is a set of string-labeled nodes joined by unweighted directed
//! edges, stored either as a dense adjacency matrix or as per-node adjacency
//! lists. On top of the shared [`Graph`] trait sit route queries
//! ([`has_route`], [`get_route`]) and a scheduler that splits the nodes into
//! two groups with no edge inside a group ([`find_schedule`],
//! [`check_validity`]).

pub mod cli;
pub mod graph;
pub mod schedule;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    get_route, has_route, reachable, Backing, Graph, GraphBuilder, ListGraph, MatrixGraph,
};
pub use schedule::{check_validity, find_schedule, Group, Schedule};
pub use types::{Edge, GraphError, GraphResult, DEFAULT_GRAPH_NAME};
