//! Node / adjacency-list backing.

use std::collections::HashMap;

use crate::types::{GraphError, GraphResult};

use super::Graph;

/// A node and the nodes it points to.
#[derive(Debug, Clone)]
struct Node {
    label: String,
    /// Outgoing targets as positions in `ListGraph::nodes`, in insertion order.
    next: Vec<usize>,
}

/// A graph where every node owns its outgoing-neighbor list.
///
/// Neighbor lookup walks that list directly. Duplicate edges are rejected by
/// an equality scan of the list rather than a secondary index.
#[derive(Debug, Clone)]
pub struct ListGraph {
    name: String,
    /// Nodes in creation order.
    nodes: Vec<Node>,
    /// Label -> position in `nodes`.
    lookup: HashMap<String, usize>,
    edge_count: usize,
}

impl ListGraph {
    /// Create a new empty graph.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        log::debug!("created list graph {:?}", name);
        Self {
            name,
            nodes: Vec::new(),
            lookup: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Out-degree of `label`, or `None` if it is not a node.
    pub fn out_degree(&self, label: &str) -> Option<usize> {
        self.lookup.get(label).map(|&pos| self.nodes[pos].next.len())
    }

    fn ensure_node(&mut self, label: &str) -> usize {
        if let Some(&pos) = self.lookup.get(label) {
            return pos;
        }
        let pos = self.nodes.len();
        self.nodes.push(Node {
            label: label.to_string(),
            next: Vec::new(),
        });
        self.lookup.insert(label.to_string(), pos);
        log::trace!("{}: node {:?} created", self.name, label);
        pos
    }
}

impl Graph for ListGraph {
    fn named(name: &str) -> Self {
        Self::new(name)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn add_node(&mut self, label: &str) -> GraphResult<()> {
        if self.lookup.contains_key(label) {
            return Err(GraphError::DuplicateNode(label.to_string()));
        }
        self.ensure_node(label);
        Ok(())
    }

    fn add_directed_edge(&mut self, from: &str, to: &str) {
        let src = self.ensure_node(from);
        let dst = self.ensure_node(to);
        let next = &mut self.nodes[src].next;
        if !next.contains(&dst) {
            next.push(dst);
            self.edge_count += 1;
        }
    }

    fn neighbors(&self, label: &str) -> Vec<&str> {
        match self.lookup.get(label) {
            Some(&pos) => self.nodes[pos]
                .next
                .iter()
                .map(|&n| self.nodes[n].label.as_str())
                .collect(),
            None => Vec::new(),
        }
    }

    fn all_nodes(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.label.as_str()).collect()
    }

    fn contains(&self, label: &str) -> bool {
        self.lookup.contains_key(label)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn count_self_loops(&self) -> usize {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(pos, node)| node.next.contains(pos))
            .count()
    }

    fn reaches_all_others(&self, label: &str) -> bool {
        let Some(&pos) = self.lookup.get(label) else {
            return false;
        };
        let next = &self.nodes[pos].next;
        (0..self.nodes.len()).all(|other| other == pos || next.contains(&other))
    }
}

impl Default for ListGraph {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_GRAPH_NAME)
    }
}
