//! In-memory graph representations and traversal.

pub mod backing;
pub mod builder;
pub mod contract;
pub mod list;
pub mod matrix;
pub mod traversal;

pub use backing::Backing;
pub use builder::GraphBuilder;
pub use contract::Graph;
pub use list::ListGraph;
pub use matrix::MatrixGraph;
pub use traversal::{get_route, has_route, reachable};
