//! The directed edge value used by builders and the CLI.

use serde::Serialize;

use super::error::{GraphError, GraphResult};

/// A directed relationship between two labeled nodes.
///
/// Graph backings never store this struct; it only describes an edge to be
/// inserted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    /// Label of the source node.
    pub from: String,
    /// Label of the target node.
    pub to: String,
}

impl Edge {
    /// Create a new edge description.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Parse a `FROM:TO` spec. Splits on the first `:`, so the target label
    /// may itself contain colons.
    pub fn parse(spec: &str) -> GraphResult<Self> {
        match spec.split_once(':') {
            Some((from, to)) if !from.is_empty() && !to.is_empty() => Ok(Self::new(from, to)),
            _ => Err(GraphError::InvalidEdgeSpec(spec.to_string())),
        }
    }

    /// Whether this edge points back at its own source.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// The same edge pointing the other way.
    pub fn reversed(&self) -> Self {
        Self::new(self.to.clone(), self.from.clone())
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

impl std::str::FromStr for Edge {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
