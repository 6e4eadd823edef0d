//! Visited sets and parent links for graph traversals.
//!
//! This provides two internal building blocks:
//! - `Marked`: a dense per-vertex flag vector with a running count
//! - `ParentTree`: the edge-to array; roots have no parent
//!
//! Every algorithm owns its own instances, allocated at construction.

use serde::Serialize;

/// A dense visited set for fixed-size graphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Marked {
    flags: Vec<bool>,
    count: usize,
}

impl Marked {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
            count: 0,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.flags.len()
    }

    /// Number of marked vertices.
    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` iff this call observed the vertex as not-yet-visited and marks it visited.
    #[inline]
    pub(crate) fn try_visit(&mut self, vertex: usize) -> bool {
        if self.flags[vertex] {
            return false;
        }
        self.flags[vertex] = true;
        self.count += 1;
        true
    }

    /// Out-of-range vertices are reported unvisited.
    #[inline]
    pub(crate) fn is_visited(&self, vertex: usize) -> bool {
        self.flags.get(vertex).copied().unwrap_or(false)
    }
}

/// Discovery links forming a spanning forest over the visited vertices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ParentTree {
    parent: Vec<Option<usize>>,
}

impl ParentTree {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            parent: vec![None; len],
        }
    }

    #[inline]
    pub(crate) fn link(&mut self, child: usize, parent: usize) {
        self.parent[child] = Some(parent);
    }

    #[inline]
    pub(crate) fn parent(&self, vertex: usize) -> Option<usize> {
        self.parent.get(vertex).copied().flatten()
    }

    /// Root-to-`vertex` path. The caller guarantees `vertex` was visited.
    pub(crate) fn path_from_root(&self, vertex: usize) -> Vec<usize> {
        let mut path = vec![vertex];
        let mut x = vertex;
        while let Some(p) = self.parent(x) {
            path.push(p);
            x = p;
        }
        path.reverse();
        path
    }

    /// Closes a cycle found through the non-tree edge `from -> to`, where
    /// `to` is an ancestor of `from`.
    ///
    /// Produces `[from, to, ..., from]`: the closing edge first, then the
    /// tree path from `to` back down to `from`.
    pub(crate) fn close_cycle(&self, from: usize, to: usize) -> Vec<usize> {
        let mut walk = Vec::new();
        let mut x = from;
        while x != to {
            walk.push(x);
            match self.parent(x) {
                Some(p) => x = p,
                None => break,
            }
        }
        walk.push(to);
        walk.push(from);
        walk.reverse();
        walk
    }
}
