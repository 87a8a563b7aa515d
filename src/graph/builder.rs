//! Fluent API for building graphs with either backing.

use crate::types::{Edge, GraphResult, DEFAULT_GRAPH_NAME};

use super::{Backing, Graph};

/// One recorded mutation.
#[derive(Debug, Clone)]
enum Op {
    Node(String),
    Directed(Edge),
    Undirected(Edge),
}

/// Fluent builder that records graph mutations and replays them into any
/// backing.
///
/// Because the recording is kept, one builder can produce several graphs
/// from the exact same operation sequence.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    name: String,
    ops: Vec<Op>,
}

impl GraphBuilder {
    /// Create a builder for a graph with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ops: Vec::new(),
        }
    }

    /// Explicitly add a node. Replaying a duplicate fails the build.
    pub fn node(&mut self, label: impl Into<String>) -> &mut Self {
        self.ops.push(Op::Node(label.into()));
        self
    }

    /// Add a directed edge.
    pub fn edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.ops.push(Op::Directed(Edge::new(from, to)));
        self
    }

    /// Add an undirected edge.
    pub fn undirected(&mut self, a: impl Into<String>, b: impl Into<String>) -> &mut Self {
        self.ops.push(Op::Undirected(Edge::new(a, b)));
        self
    }

    /// Add many directed edges.
    pub fn edges<I>(&mut self, edges: I) -> &mut Self
    where
        I: IntoIterator<Item = Edge>,
    {
        self.ops.extend(edges.into_iter().map(Op::Directed));
        self
    }

    /// Number of recorded operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Build the graph into a concrete backing.
    pub fn build<G: Graph>(&self) -> GraphResult<G> {
        let mut graph = G::named(&self.name);
        self.replay(&mut graph)?;
        Ok(graph)
    }

    /// Build the graph into a backing chosen at runtime.
    pub fn build_boxed(&self, backing: Backing) -> GraphResult<Box<dyn Graph>> {
        let mut graph = backing.create(&self.name);
        self.replay(graph.as_mut())?;
        Ok(graph)
    }

    /// Apply every recorded operation, in order, to an existing graph.
    pub fn replay<G: Graph + ?Sized>(&self, graph: &mut G) -> GraphResult<()> {
        for op in &self.ops {
            match op {
                Op::Node(label) => graph.add_node(label)?,
                Op::Directed(e) => graph.add_directed_edge(&e.from, &e.to),
                Op::Undirected(e) => graph.add_undirected_edge(&e.from, &e.to),
            }
        }
        Ok(())
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_NAME)
    }
}
