//! Single- and multi-source reachability on digraphs.
//!
//! A vertex is marked iff some source reaches it along arcs in their declared
//! direction. Each marked vertex belongs to exactly one traversal tree, so its
//! path resolves against the source that actually discovered it.

use serde::Serialize;

use super::search::{Search, SearchTree};
use crate::graph::Digraph;

/// Depth-first reachability from one or more sources.
///
/// Sources are explored in the order given; a source already reached from an
/// earlier one is not restarted and its path leads back to that earlier source.
#[derive(Debug, Clone, Serialize)]
pub struct DirectedDfs {
    tree: SearchTree,
}

impl DirectedDfs {
    /// Runs the search from every vertex in `sources`.
    ///
    /// # Panics
    /// Panics if any source is out of bounds.
    pub fn new<I>(digraph: &Digraph, sources: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let tree = SearchTree::depth_first(digraph, sources.into_iter().collect());
        tracing::debug!(
            sources = tree.sources().len(),
            reached = tree.count(),
            "directed depth-first search complete"
        );
        Self { tree }
    }

    /// Runs the search from a single source.
    ///
    /// # Panics
    /// Panics if `source` is out of bounds.
    pub fn from_source(digraph: &Digraph, source: usize) -> Self {
        Self::new(digraph, [source])
    }

    /// The source set, in the order given.
    pub fn sources(&self) -> &[usize] {
        self.tree.sources()
    }
}

impl Search for DirectedDfs {
    fn marked(&self, v: usize) -> bool {
        self.tree.marked(v)
    }

    fn count(&self) -> usize {
        self.tree.count()
    }

    fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.tree.path_to(v)
    }
}

/// Breadth-first reachability from one or more sources.
///
/// All sources start at distance zero, so `path_to(v)` is a shortest path from
/// the nearest source.
#[derive(Debug, Clone, Serialize)]
pub struct DirectedBfs {
    tree: SearchTree,
}

impl DirectedBfs {
    /// Runs the search from every vertex in `sources`.
    ///
    /// # Panics
    /// Panics if any source is out of bounds.
    pub fn new<I>(digraph: &Digraph, sources: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let tree = SearchTree::breadth_first(digraph, sources.into_iter().collect());
        tracing::debug!(
            sources = tree.sources().len(),
            reached = tree.count(),
            "directed breadth-first search complete"
        );
        Self { tree }
    }

    /// Runs the search from a single source.
    ///
    /// # Panics
    /// Panics if `source` is out of bounds.
    pub fn from_source(digraph: &Digraph, source: usize) -> Self {
        Self::new(digraph, [source])
    }

    /// The source set, in the order given.
    pub fn sources(&self) -> &[usize] {
        self.tree.sources()
    }

    /// Minimum number of arcs from the nearest source to `v`, if reachable.
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.tree.dist_to(v)
    }
}

impl Search for DirectedBfs {
    fn marked(&self, v: usize) -> bool {
        self.tree.marked(v)
    }

    fn count(&self) -> usize {
        self.tree.count()
    }

    fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.tree.path_to(v)
    }
}
