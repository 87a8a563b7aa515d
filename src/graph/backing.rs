//! Runtime selection between the two graph representations.

use serde::Serialize;

use crate::types::GraphError;

use super::{Graph, ListGraph, MatrixGraph};

/// Which representation backs a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Backing {
    /// Dense adjacency matrix ([`MatrixGraph`]).
    #[default]
    Matrix,
    /// Per-node adjacency lists ([`ListGraph`]).
    List,
}

impl Backing {
    /// Both backings, for running the same check against each.
    pub const ALL: [Backing; 2] = [Backing::Matrix, Backing::List];

    /// Return a human-readable name for this backing.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::List => "list",
        }
    }

    /// Parse a backing from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "matrix" | "array" => Some(Self::Matrix),
            "list" | "nodes" => Some(Self::List),
            _ => None,
        }
    }

    /// Create an empty graph of this backing.
    pub fn create(self, name: &str) -> Box<dyn Graph> {
        match self {
            Self::Matrix => Box::new(MatrixGraph::new(name)),
            Self::List => Box::new(ListGraph::new(name)),
        }
    }
}

impl std::fmt::Display for Backing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for Backing {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| GraphError::InvalidBacking(s.to_string()))
    }
}
