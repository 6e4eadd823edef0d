//! Adjacency storage shared by [`Graph`](super::Graph) and [`Digraph`](super::Digraph).
//!
//! One `Vec<usize>` per vertex, kept in insertion order. Duplicate edges are
//! rejected with a linear scan of the source's list, so insertion costs
//! `O(out-degree)` and enumeration is a plain slice borrow.

use std::marker::PhantomData;

use crate::error::{GraphError, Result};

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;
}

/// Marker for directed graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directed;
/// Marker for undirected graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undirected;

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}
impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

/// Fixed-size vertex set with per-vertex neighbor lists.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n)\) | One empty list per vertex |
/// | `insert` | \(O(\text{out-degree})\) | Checks for existence first |
/// | `neighbors` | \(O(1)\) | Borrows the list |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyStore<D: EdgeType> {
    edges: usize,
    adjacency: Vec<Vec<usize>>,
    direction: PhantomData<D>,
}

impl<D: EdgeType> AdjacencyStore<D> {
    /// Creates a store with `vertex_count` vertices and zero edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: 0,
            adjacency: vec![Vec::new(); vertex_count],
            direction: PhantomData,
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct edges. A self-loop counts once.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    /// Inserts `v -> w` (and `w -> v` when undirected and `v != w`).
    ///
    /// Returns `false` and leaves the store untouched if the edge exists.
    ///
    /// # Panics
    /// Panics if `v` or `w` are out of bounds.
    pub fn insert(&mut self, v: usize, w: usize) -> bool {
        let n = self.vertex_count();
        assert!(v < n, "vertex {v} out of bounds for n={n}");
        assert!(w < n, "vertex {w} out of bounds for n={n}");
        self.insert_unchecked_bounds(v, w)
    }

    /// Fallible form of [`insert`](Self::insert).
    ///
    /// # Errors
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is out of bounds.
    pub fn try_insert(&mut self, v: usize, w: usize) -> Result<bool> {
        let n = self.vertex_count();
        for vertex in [v, w] {
            if vertex >= n {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: n,
                });
            }
        }
        Ok(self.insert_unchecked_bounds(v, w))
    }

    fn insert_unchecked_bounds(&mut self, v: usize, w: usize) -> bool {
        if self.adjacency[v].contains(&w) {
            return false;
        }
        self.adjacency[v].push(w);
        if !D::is_directed() && v != w {
            self.adjacency[w].push(v);
        }
        self.edges += 1;
        true
    }

    /// Neighbors of `v`, or an empty slice if `v` is out of range.
    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        self.adjacency.get(v).map_or(&[], Vec::as_slice)
    }

    /// Checks if `v -> w` is stored.
    pub fn contains(&self, v: usize, w: usize) -> bool {
        self.neighbors(v).contains(&w)
    }
}
