//! Two-coloring and bipartiteness.
//!
//! An undirected graph is bipartite iff every cycle has even length. The
//! traversal gives each newly discovered vertex the opposite side of its
//! parent; an edge between two vertices on the same side falsifies the
//! property. Scanning continues after the first conflict, so the coloring
//! always covers every vertex.

use std::ops::ControlFlow;

use serde::Serialize;

use super::traversal::{depth_first_forest, DfsEvent};
use crate::graph::access::visited::Marked;
use crate::graph::Graph;

/// One of the two color classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Side {
    /// Traversal roots start here.
    #[default]
    Left,
    /// Opposite of [`Side::Left`].
    Right,
}

impl Side {
    /// The other side.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Bipartiteness checker with the computed coloring.
#[derive(Debug, Clone, Serialize)]
pub struct TwoColor {
    color: Vec<Side>,
    conflicts: usize,
}

impl TwoColor {
    /// Colors every component of `graph`.
    pub fn new(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let mut marked = Marked::new(n);
        let mut color = vec![Side::Left; n];
        let mut conflicts = 0usize;

        let _ = depth_first_forest(graph, &mut marked, |event| {
            match event {
                DfsEvent::TreeEdge { from, to } => color[to] = color[from].opposite(),
                DfsEvent::NonTreeEdge { from, to, .. } if color[from] == color[to] => {
                    tracing::trace!(from, to, "same-side edge");
                    conflicts += 1;
                }
                _ => {}
            }
            ControlFlow::Continue(())
        });

        tracing::debug!(vertices = n, conflicts, "two-coloring complete");
        Self { color, conflicts }
    }

    /// Checks if no edge joins two vertices of the same side.
    pub fn is_bipartite(&self) -> bool {
        self.conflicts == 0
    }

    /// The side assigned to `v`.
    ///
    /// Only a proper bipartition when [`is_bipartite`](Self::is_bipartite) holds.
    ///
    /// # Panics
    /// Panics if `v` is out of bounds.
    pub fn color(&self, v: usize) -> Side {
        self.color[v]
    }

    /// Number of same-side edge examinations. An edge is examined from each
    /// end that sees it as a non-tree edge, so one bad edge may count twice.
    pub fn conflicts(&self) -> usize {
        self.conflicts
    }
}
