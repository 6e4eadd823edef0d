//! Cycle detection in undirected graphs.
//!
//! An edge from `v` to an already-marked vertex other than the one `v` was
//! discovered through closes a cycle. The check compares vertices, not edges:
//! a self-loop or a pair of parallel edges is reported as a cycle too.

use std::ops::ControlFlow;

use serde::Serialize;

use super::traversal::{depth_first_forest, DfsEvent};
use crate::graph::access::visited::{Marked, ParentTree};
use crate::graph::Graph;

/// Queries answered by both cycle detectors.
pub trait CycleDetector {
    /// Checks if a cycle was found.
    fn has_cycle(&self) -> bool;

    /// The witnessed cycle as a closed walk `[v, ..., v]`, if any.
    fn cycle(&self) -> Option<&[usize]>;
}

/// Undirected cycle detector.
///
/// Traverses every component and stops at the first back edge.
#[derive(Debug, Clone, Serialize)]
pub struct Cycle {
    cycle: Option<Vec<usize>>,
}

impl Cycle {
    /// Searches `graph` for a cycle.
    pub fn new(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let mut marked = Marked::new(n);
        let mut edge_to = ParentTree::new(n);
        let mut cycle = None;

        let _ = depth_first_forest(graph, &mut marked, |event| match event {
            DfsEvent::Discover {
                vertex,
                parent: Some(p),
            } => {
                edge_to.link(vertex, p);
                ControlFlow::Continue(())
            }
            DfsEvent::NonTreeEdge { from, to, parent } if parent != Some(to) => {
                cycle = Some(edge_to.close_cycle(from, to));
                ControlFlow::Break(())
            }
            _ => ControlFlow::Continue(()),
        });

        match &cycle {
            Some(c) => tracing::trace!(cycle = ?c, "undirected cycle found"),
            None => tracing::debug!(vertices = n, "graph is acyclic"),
        }
        Self { cycle }
    }
}

impl CycleDetector for Cycle {
    fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}
