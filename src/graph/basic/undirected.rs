//! Undirected graph over vertices `0..n`.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::adjacency::{AdjacencyStore, Undirected};
use super::document::EdgeListDocument;
use crate::error::{check_vertex_count, GraphError, Result, VERTEX_LIMIT};
use crate::graph::AdjacencyView;

/// An undirected graph without parallel edges.
///
/// Adding `v-w` records `w` in `v`'s list and `v` in `w`'s list; a self-loop
/// `v-v` is recorded once and counts as one edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "EdgeListDocument", try_from = "EdgeListDocument")]
pub struct Graph {
    store: AdjacencyStore<Undirected>,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and zero edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            store: AdjacencyStore::new(vertex_count),
        }
    }

    /// Builds a graph from an edge sequence.
    ///
    /// # Panics
    /// Panics if any edge references an out-of-bounds vertex.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (v, w) in edges {
            graph.add_edge(v, w);
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.store.vertex_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    /// Adds the edge `v-w` if it is not already present.
    ///
    /// Returns whether the edge was new.
    ///
    /// # Panics
    /// Panics if `v` or `w` are out of bounds.
    pub fn add_edge(&mut self, v: usize, w: usize) -> bool {
        self.store.insert(v, w)
    }

    /// Adds the edge `v-w`, reporting out-of-range endpoints as an error.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `v` or `w` are out of bounds.
    pub fn try_add_edge(&mut self, v: usize, w: usize) -> Result<bool> {
        self.store.try_insert(v, w)
    }

    /// Neighbors of `v` in insertion order; empty if `v` is out of range.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.store.neighbors(v)
    }

    /// Number of entries in `v`'s neighbor list.
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    /// Checks if `v` and `w` are adjacent.
    pub fn has_edge(&self, v: usize, w: usize) -> bool {
        self.store.contains(v, w)
    }

    /// Every edge exactly once, as `(v, w)` with `v <= w`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.vertex_count()).flat_map(move |v| {
            self.neighbors(v)
                .iter()
                .filter(move |&&w| v <= w)
                .map(move |&w| (v, w))
        })
    }
}

impl AdjacencyView for Graph {
    fn vertex_count(&self) -> usize {
        self.store.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    fn neighbors(&self, vertex: usize) -> &[usize] {
        self.store.neighbors(vertex)
    }

    fn is_directed(&self) -> bool {
        false
    }
}

/// Vertex count, edge count, then one `v w` line per edge.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vertex_count())?;
        writeln!(f, "{}", self.edge_count())?;
        for (v, w) in self.edges() {
            writeln!(f, "{v} {w}")?;
        }
        Ok(())
    }
}

impl From<Graph> for EdgeListDocument {
    fn from(graph: Graph) -> Self {
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edges().map(|(v, w)| [v, w]).collect(),
        }
    }
}

impl TryFrom<EdgeListDocument> for Graph {
    type Error = GraphError;

    fn try_from(doc: EdgeListDocument) -> Result<Self> {
        check_vertex_count(doc.vertices, VERTEX_LIMIT)?;
        let mut graph = Self::new(doc.vertices);
        for [v, w] in doc.edges {
            graph.try_add_edge(v, w)?;
        }
        Ok(graph)
    }
}
