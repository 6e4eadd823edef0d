//! Topological sort of digraphs.
//!
//! The reverse postorder of a depth-first traversal puts every arc forward
//! iff the digraph has no directed cycle, so the cycle check runs first and
//! the order is only produced when it passes.

use serde::Serialize;

use super::cycle::CycleDetector;
use super::directed_cycle::DirectedCycle;
use super::order::DepthFirstOrder;
use crate::graph::Digraph;

/// Topological order, or the cycle that prevents one.
#[derive(Debug, Clone, Serialize)]
pub struct Topological {
    order: Option<Vec<usize>>,
    rank: Vec<usize>,
    cycle: Option<Vec<usize>>,
}

impl Topological {
    /// Sorts `digraph`.
    pub fn new(digraph: &Digraph) -> Self {
        let finder = DirectedCycle::new(digraph);
        if let Some(cycle) = finder.cycle() {
            tracing::debug!(cycle_len = cycle.len(), "digraph is not a DAG");
            return Self {
                order: None,
                rank: Vec::new(),
                cycle: Some(cycle.to_vec()),
            };
        }

        let order = DepthFirstOrder::new(digraph).reverse_post().to_vec();
        let mut rank = vec![0; order.len()];
        for (position, &v) in order.iter().enumerate() {
            rank[v] = position;
        }
        tracing::debug!(vertices = order.len(), "topological order computed");
        Self {
            order: Some(order),
            rank,
            cycle: None,
        }
    }

    /// Checks if the digraph is acyclic.
    pub fn is_dag(&self) -> bool {
        self.order.is_some()
    }

    /// The topological order, if the digraph is acyclic.
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Position of `v` in [`order`](Self::order).
    ///
    /// Returns `None` if the digraph has a cycle or `v` is out of range.
    pub fn rank(&self, v: usize) -> Option<usize> {
        self.rank.get(v).copied()
    }

    /// A directed cycle, if one blocked the sort.
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }
}
