//! Directed graph over vertices `0..n`.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::adjacency::{AdjacencyStore, Directed};
use super::document::EdgeListDocument;
use crate::error::{check_vertex_count, GraphError, Result, VERTEX_LIMIT};
use crate::graph::AdjacencyView;

/// A directed graph without parallel arcs.
///
/// Adding `v -> w` records `w` in `v`'s outgoing list only. Self-loops are
/// allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "EdgeListDocument", try_from = "EdgeListDocument")]
pub struct Digraph {
    store: AdjacencyStore<Directed>,
}

impl Digraph {
    /// Creates a digraph with `vertex_count` vertices and zero edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            store: AdjacencyStore::new(vertex_count),
        }
    }

    /// Builds a digraph from an arc sequence.
    ///
    /// # Panics
    /// Panics if any arc references an out-of-bounds vertex.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut digraph = Self::new(vertex_count);
        for (v, w) in edges {
            digraph.add_edge(v, w);
        }
        digraph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.store.vertex_count()
    }

    /// Number of arcs.
    pub fn edge_count(&self) -> usize {
        self.store.edge_count()
    }

    /// Adds the arc `v -> w` if it is not already present.
    ///
    /// Returns whether the arc was new.
    ///
    /// # Panics
    /// Panics if `v` or `w` are out of bounds.
    pub fn add_edge(&mut self, v: usize, w: usize) -> bool {
        self.store.insert(v, w)
    }

    /// Adds the arc `v -> w`, reporting out-of-range endpoints as an error.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if `v` or `w` are out of bounds.
    pub fn try_add_edge(&mut self, v: usize, w: usize) -> Result<bool> {
        self.store.try_insert(v, w)
    }

    /// Out-neighbors of `v` in insertion order; empty if `v` is out of range.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.store.neighbors(v)
    }

    /// Out-degree of `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.neighbors(v).len()
    }

    /// In-degree of `v`. Scans every list.
    pub fn indegree(&self, v: usize) -> usize {
        (0..self.vertex_count())
            .filter(|&u| self.store.contains(u, v))
            .count()
    }

    /// Checks if the arc `v -> w` exists.
    pub fn has_edge(&self, v: usize, w: usize) -> bool {
        self.store.contains(v, w)
    }

    /// Every arc as `(from, to)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.vertex_count())
            .flat_map(move |v| self.neighbors(v).iter().map(move |&w| (v, w)))
    }

    /// Returns a new digraph with every arc flipped. `self` is unchanged.
    pub fn reverse(&self) -> Self {
        let mut reversed = Self::new(self.vertex_count());
        for (v, w) in self.edges() {
            reversed.store.insert(w, v);
        }
        reversed
    }
}

impl AdjacencyView for Digraph {
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
        true
    }
}

/// Vertex count, arc count, then one `v w` line per arc.
impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.vertex_count())?;
        writeln!(f, "{}", self.edge_count())?;
        for (v, w) in self.edges() {
            writeln!(f, "{v} {w}")?;
        }
        Ok(())
    }
}

impl From<Digraph> for EdgeListDocument {
    fn from(digraph: Digraph) -> Self {
        Self {
            vertices: digraph.vertex_count(),
            edges: digraph.edges().map(|(v, w)| [v, w]).collect(),
        }
    }
}

impl TryFrom<EdgeListDocument> for Digraph {
    type Error = GraphError;

    fn try_from(doc: EdgeListDocument) -> Result<Self> {
        check_vertex_count(doc.vertices, VERTEX_LIMIT)?;
        let mut digraph = Self::new(doc.vertices);
        for [v, w] in doc.edges {
            digraph.try_add_edge(v, w)?;
        }
        Ok(digraph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arcs_are_one_way() {
        let dg = Digraph::from_edges(3, [(0, 1), (0, 1), (1, 2), (2, 2)]);
        assert_eq!(dg.edge_count(), 3);
        assert_eq!(dg.neighbors(0), &[1]);
        assert!(dg.neighbors(1).contains(&2));
        assert!(!dg.has_edge(1, 0));
        assert_eq!(dg.indegree(2), 2);
        assert!(dg.is_directed());
    }

    #[test]
    fn reverse_flips_every_arc() {
        let dg = Digraph::from_edges(10, [(0, 3), (1, 5), (0, 9)]);
        let rev = dg.reverse();
        assert_eq!(rev.edge_count(), 3);
        assert_eq!(rev.neighbors(3), &[0]);
        assert_eq!(rev.neighbors(5), &[1]);
        assert_eq!(rev.neighbors(9), &[0]);
        assert!(rev.neighbors(0).is_empty());
        // original untouched
        assert_eq!(dg.neighbors(0), &[3, 9]);
    }

    #[test]
    fn display_lists_every_arc() {
        let dg = Digraph::from_edges(3, [(0, 1), (1, 0)]);
        assert_eq!(dg.to_string(), "3\n2\n0 1\n1 0\n");
    }
}
