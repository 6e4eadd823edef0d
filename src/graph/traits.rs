//! The read-only graph interface every algorithm consumes.

/// Vertex-indexed adjacency, as seen by traversal algorithms.
///
/// Vertices are `0..vertex_count()`. Implementations must return the same
/// neighbor sequence for a vertex on every call while no edge is inserted,
/// since traversal order (and therefore every order-sensitive result) is
/// derived from it.
pub trait AdjacencyView {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of distinct edges.
    fn edge_count(&self) -> usize;

    /// Neighbors of `vertex` in insertion order.
    ///
    /// Returns an empty slice if `vertex` has no edges or is out of range.
    fn neighbors(&self, vertex: usize) -> &[usize];

    /// Returns true if edges are one-way.
    fn is_directed(&self) -> bool;
}

impl<G: AdjacencyView + ?Sized> AdjacencyView for &G {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn edge_count(&self) -> usize {
        (**self).edge_count()
    }

    fn neighbors(&self, vertex: usize) -> &[usize] {
        (**self).neighbors(vertex)
    }

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }
}
