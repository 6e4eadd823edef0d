//! Cycle detection in digraphs.
//!
//! Tracks which vertices are on the active DFS path. An arc into one of them
//! is a back edge and closes a directed cycle, even when it leads straight
//! back to the vertex's own parent.

use std::ops::ControlFlow;

use serde::Serialize;

use super::cycle::CycleDetector;
use super::traversal::{depth_first_forest, DfsEvent};
use crate::graph::access::visited::{Marked, ParentTree};
use crate::graph::Digraph;

/// Directed cycle detector.
///
/// The witness follows arcs in their declared direction: the closing back
/// edge first, then tree arcs back to the start.
#[derive(Debug, Clone, Serialize)]
pub struct DirectedCycle {
    cycle: Option<Vec<usize>>,
}

impl DirectedCycle {
    /// Searches `digraph` for a directed cycle.
    pub fn new(digraph: &Digraph) -> Self {
        let n = digraph.vertex_count();
        let mut marked = Marked::new(n);
        let mut edge_to = ParentTree::new(n);
        let mut on_stack = vec![false; n];
        let mut cycle = None;

        let _ = depth_first_forest(digraph, &mut marked, |event| {
            match event {
                DfsEvent::Discover { vertex, parent } => {
                    on_stack[vertex] = true;
                    if let Some(p) = parent {
                        edge_to.link(vertex, p);
                    }
                }
                DfsEvent::NonTreeEdge { from, to, .. } if on_stack[to] => {
                    cycle = Some(edge_to.close_cycle(from, to));
                    return ControlFlow::Break(());
                }
                DfsEvent::Finish { vertex } => on_stack[vertex] = false,
                _ => {}
            }
            ControlFlow::Continue(())
        });

        match &cycle {
            Some(c) => tracing::trace!(cycle = ?c, "directed cycle found"),
            None => tracing::debug!(vertices = n, "digraph is acyclic"),
        }
        Self { cycle }
    }
}

impl CycleDetector for DirectedCycle {
    fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}
