//! Connected components of undirected graphs.

use std::ops::ControlFlow;

use serde::Serialize;

use super::traversal::{depth_first, DfsEvent};
use crate::graph::access::visited::Marked;
use crate::graph::Graph;

/// Component labeling.
///
/// Ids are assigned in discovery order: the component containing vertex 0 is
/// 0, the next unreached vertex by index starts component 1, and so on.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n + m)\) | One traversal per component |
/// | `id` / `connected` / `size` | \(O(1)\) | |
/// | `members` | \(O(n)\) | Scans the id array |
#[derive(Debug, Clone, Serialize)]
pub struct ConnectedComponents {
    id: Vec<usize>,
    size: Vec<usize>,
}

impl ConnectedComponents {
    /// Labels every vertex of `graph`.
    pub fn new(graph: &Graph) -> Self {
        let n = graph.vertex_count();
        let mut marked = Marked::new(n);
        let mut id = vec![0; n];
        let mut size = Vec::new();

        for root in 0..n {
            if marked.is_visited(root) {
                continue;
            }
            let label = size.len();
            let mut members = 0usize;
            let _ = depth_first(graph, root, &mut marked, |event| {
                if let DfsEvent::Discover { vertex, .. } = event {
                    id[vertex] = label;
                    members += 1;
                }
                ControlFlow::Continue(())
            });
            size.push(members);
        }

        tracing::debug!(vertices = n, components = size.len(), "components labeled");
        Self { id, size }
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.size.len()
    }

    /// Component id of `v`.
    ///
    /// # Panics
    /// Panics if `v` is out of bounds.
    pub fn id(&self, v: usize) -> usize {
        self.id[v]
    }

    /// Checks if `v` and `w` are in the same component.
    ///
    /// # Panics
    /// Panics if `v` or `w` are out of bounds.
    pub fn connected(&self, v: usize, w: usize) -> bool {
        self.id(v) == self.id(w)
    }

    /// Number of vertices in component `id`.
    ///
    /// # Panics
    /// Panics if `id >= count()`.
    pub fn size(&self, id: usize) -> usize {
        self.size[id]
    }

    /// Vertices of component `id` in index order.
    pub fn members(&self, id: usize) -> Vec<usize> {
        self.id
            .iter()
            .enumerate()
            .filter_map(|(v, &c)| (c == id).then_some(v))
            .collect()
    }
}
