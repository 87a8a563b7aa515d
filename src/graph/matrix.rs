//! Dense adjacency-matrix backing.

use std::collections::HashMap;

use crate::types::{GraphError, GraphResult};

use super::Graph;

/// A graph stored as a square boolean matrix.
///
/// Nodes get dense indices in creation order. `matrix[row][col]` is `true`
/// iff there is an edge from node `row` to node `col`. Each new node grows the
/// matrix by one row and one column, all set to "no edge".
#[derive(Debug, Clone)]
pub struct MatrixGraph {
    /// Graph name.
    name: String,
    /// Row-major adjacency flags, always `labels.len()` square.
    matrix: Vec<Vec<bool>>,
    /// Label -> index.
    index_of: HashMap<String, usize>,
    /// Index -> label.
    labels: Vec<String>,
    /// Number of `true` cells.
    edge_count: usize,
}

impl MatrixGraph {
    /// Create a new empty graph.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        log::debug!("created matrix graph {:?}", name);
        Self {
            name,
            matrix: Vec::new(),
            index_of: HashMap::new(),
            labels: Vec::new(),
            edge_count: 0,
        }
    }

    /// Dense index of a label, if registered.
    pub fn index(&self, label: &str) -> Option<usize> {
        self.index_of.get(label).copied()
    }

    /// Label stored at a dense index.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Whether the edge `from -> to` is present.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        match (self.index(from), self.index(to)) {
            (Some(row), Some(col)) => self.matrix[row][col],
            _ => false,
        }
    }

    /// Return the index for `label`, appending a new row and column if needed.
    fn ensure_node(&mut self, label: &str) -> usize {
        if let Some(idx) = self.index(label) {
            return idx;
        }
        let idx = self.labels.len();
        for row in &mut self.matrix {
            row.push(false);
        }
        self.matrix.push(vec![false; idx + 1]);
        self.labels.push(label.to_string());
        self.index_of.insert(label.to_string(), idx);
        log::trace!("{}: node {:?} -> index {}", self.name, label, idx);
        idx
    }
}

impl Graph for MatrixGraph {
    fn named(name: &str) -> Self {
        Self::new(name)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn add_node(&mut self, label: &str) -> GraphResult<()> {
        if self.index_of.contains_key(label) {
            return Err(GraphError::DuplicateNode(label.to_string()));
        }
        self.ensure_node(label);
        Ok(())
    }

    fn add_directed_edge(&mut self, from: &str, to: &str) {
        let row = self.ensure_node(from);
        let col = self.ensure_node(to);
        let cell = &mut self.matrix[row][col];
        if !*cell {
            *cell = true;
            self.edge_count += 1;
        }
    }

    fn neighbors(&self, label: &str) -> Vec<&str> {
        let Some(row) = self.index(label) else {
            return Vec::new();
        };
        self.matrix[row]
            .iter()
            .enumerate()
            .filter(|(_, present)| **present)
            .map(|(col, _)| self.labels[col].as_str())
            .collect()
    }

    fn all_nodes(&self) -> Vec<&str> {
        self.labels.iter().map(String::as_str).collect()
    }

    fn contains(&self, label: &str) -> bool {
        self.index_of.contains_key(label)
    }

    fn node_count(&self) -> usize {
        self.labels.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Diagonal scan.
    fn count_self_loops(&self) -> usize {
        (0..self.matrix.len()).filter(|&i| self.matrix[i][i]).count()
    }

    /// Single row scan, ignoring the diagonal cell.
    fn reaches_all_others(&self, label: &str) -> bool {
        let Some(row) = self.index(label) else {
            return false;
        };
        self.matrix[row]
            .iter()
            .enumerate()
            .all(|(col, &present)| present || col == row)
    }
}

impl Default for MatrixGraph {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_GRAPH_NAME)
    }
}
