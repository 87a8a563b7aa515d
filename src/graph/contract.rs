//! The capability set shared by every graph backing.

use std::collections::HashSet;

use crate::types::GraphResult;

/// A labeled directed graph.
///
/// Nodes are identified only by their string label. Edges carry no weight and
/// are stored as presence flags, so inserting an edge twice changes nothing.
/// Traversal and scheduling are written against this trait and never see the
/// backing representation.
pub trait Graph {
    /// Create an empty graph with the given name.
    fn named(name: &str) -> Self
    where
        Self: Sized;

    /// Human-readable name given at construction.
    fn name(&self) -> &str;

    /// Register a new node.
    ///
    /// Fails with [`GraphError::DuplicateNode`](crate::types::GraphError::DuplicateNode)
    /// if the label is already present; the graph is left unchanged.
    fn add_node(&mut self, label: &str) -> GraphResult<()>;

    /// Add the edge `from -> to`, creating either endpoint if it is missing.
    fn add_directed_edge(&mut self, from: &str, to: &str);

    /// Add `a -> b` and `b -> a`. The two edges are independent afterwards.
    fn add_undirected_edge(&mut self, a: &str, b: &str) {
        self.add_directed_edge(a, b);
        self.add_directed_edge(b, a);
    }

    /// Labels that `label` has an edge to. Empty for unknown labels.
    ///
    /// The order is fixed by the backing and stable for a given instance.
    fn neighbors(&self, label: &str) -> Vec<&str>;

    /// Every registered label.
    fn all_nodes(&self) -> Vec<&str>;

    /// Whether `label` is a node of this graph.
    fn contains(&self, label: &str) -> bool;

    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Number of distinct directed edges, self-loops included.
    fn edge_count(&self) -> usize;

    /// Whether the graph has no nodes.
    fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    /// Number of nodes with an edge to themselves.
    fn count_self_loops(&self) -> usize {
        self.all_nodes()
            .into_iter()
            .filter(|&n| self.neighbors(n).contains(&n))
            .count()
    }

    /// Whether `label` has a direct edge to every other node.
    ///
    /// One hop only: this is out-degree coverage, not transitive reachability.
    /// A self-loop neither helps nor hurts. Unknown labels yield `false`.
    fn reaches_all_others(&self, label: &str) -> bool {
        if !self.contains(label) {
            return false;
        }
        let out: HashSet<&str> = self.neighbors(label).into_iter().collect();
        self.all_nodes()
            .into_iter()
            .all(|n| n == label || out.contains(n))
    }
}
