//! Reachability and path queries on undirected graphs.

use std::ops::ControlFlow;

use serde::Serialize;

use super::traversal::{assert_sources, breadth_first, depth_first, DfsEvent};
use crate::graph::access::visited::{Marked, ParentTree};
use crate::graph::{AdjacencyView, Graph};

/// Queries answered by every search result.
pub trait Search {
    /// Checks if `v` is reachable from the source set.
    fn marked(&self, v: usize) -> bool;

    /// Number of reachable vertices, sources included.
    fn count(&self) -> usize;

    /// A path from a source to `v`, source first.
    ///
    /// Returns `None` if `v` was never reached.
    fn path_to(&self, v: usize) -> Option<Vec<usize>>;
}

/// Visited set plus discovery links: the state every search shares.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct SearchTree {
    sources: Vec<usize>,
    marked: Marked,
    edge_to: ParentTree,
    /// Edge count from the nearest source. Left empty by depth-first search,
    /// whose tree depths are not distances.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    dist_to: Vec<Option<usize>>,
}

impl SearchTree {
    pub(crate) fn depth_first<G: AdjacencyView + ?Sized>(graph: &G, sources: Vec<usize>) -> Self {
        assert_sources(graph, &sources);
        let n = graph.vertex_count();
        let mut marked = Marked::new(n);
        let mut edge_to = ParentTree::new(n);
        for &s in &sources {
            let _ = depth_first(graph, s, &mut marked, |event| {
                if let DfsEvent::TreeEdge { from, to } = event {
                    edge_to.link(to, from);
                }
                ControlFlow::Continue(())
            });
        }
        Self {
            sources,
            marked,
            edge_to,
            dist_to: Vec::new(),
        }
    }

    pub(crate) fn breadth_first<G: AdjacencyView + ?Sized>(graph: &G, sources: Vec<usize>) -> Self {
        assert_sources(graph, &sources);
        let n = graph.vertex_count();
        let mut marked = Marked::new(n);
        let mut edge_to = ParentTree::new(n);
        let mut dist_to = vec![None; n];
        breadth_first(graph, sources.iter().copied(), &mut marked, |vertex, parent| {
            let depth = parent.and_then(|p| dist_to[p]).map_or(0, |d| d + 1);
            dist_to[vertex] = Some(depth);
            if let Some(p) = parent {
                edge_to.link(vertex, p);
            }
        });
        Self {
            sources,
            marked,
            edge_to,
            dist_to,
        }
    }

    pub(crate) fn sources(&self) -> &[usize] {
        &self.sources
    }

    pub(crate) fn marked(&self, v: usize) -> bool {
        self.marked.is_visited(v)
    }

    pub(crate) fn count(&self) -> usize {
        self.marked.count()
    }

    pub(crate) fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.marked(v).then(|| self.edge_to.path_from_root(v))
    }

    /// Breadth-first distance to `v`. Always `None` after a depth-first search.
    pub(crate) fn dist_to(&self, v: usize) -> Option<usize> {
        self.dist_to.get(v).copied().flatten()
    }
}

/// Depth-first search from a single source in an undirected graph.
///
/// Every reachable vertex is marked and `path_to` returns *some* path; it is
/// not necessarily the shortest.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n + m)\) | One traversal |
/// | `marked` / `count` | \(O(1)\) | |
/// | `path_to` | \(O(\text{path length})\) | Walks parent links |
#[derive(Debug, Clone, Serialize)]
pub struct DepthFirstPaths {
    tree: SearchTree,
}

impl DepthFirstPaths {
    /// Runs the search.
    ///
    /// # Panics
    /// Panics if `source` is out of bounds.
    pub fn new(graph: &Graph, source: usize) -> Self {
        let tree = SearchTree::depth_first(graph, vec![source]);
        tracing::debug!(source, reached = tree.count(), "depth-first search complete");
        Self { tree }
    }

    /// The source vertex.
    pub fn source(&self) -> usize {
        self.tree.sources()[0]
    }
}

impl Search for DepthFirstPaths {
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

/// Breadth-first search from a single source in an undirected graph.
///
/// `path_to(v)` is a shortest path by edge count.
#[derive(Debug, Clone, Serialize)]
pub struct BreadthFirstPaths {
    tree: SearchTree,
}

impl BreadthFirstPaths {
    /// Runs the search.
    ///
    /// # Panics
    /// Panics if `source` is out of bounds.
    pub fn new(graph: &Graph, source: usize) -> Self {
        let tree = SearchTree::breadth_first(graph, vec![source]);
        tracing::debug!(source, reached = tree.count(), "breadth-first search complete");
        Self { tree }
    }

    /// The source vertex.
    pub fn source(&self) -> usize {
        self.tree.sources()[0]
    }

    /// Minimum number of edges from the source to `v`, if reachable.
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.tree.dist_to(v)
    }
}

impl Search for BreadthFirstPaths {
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

#[cfg(test)]
mod tests {
    use super::*;

    // 0:1 3 4 / 1:0 2 / 2:1 / 3:0 / 4:0
    fn star_with_tail() -> Graph {
        Graph::from_edges(5, [(0, 1), (0, 3), (0, 4), (1, 2)])
    }

    #[test]
    fn dfs_marks_component_only() {
        let g = Graph::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        let search = DepthFirstPaths::new(&g, 0);
        assert_eq!(search.count(), 3);
        assert!(search.marked(2));
        assert!(!search.marked(3));
        assert!(!search.marked(4));
        assert_eq!(search.path_to(4), None);
    }

    #[test]
    fn dfs_path_follows_discovery() {
        let g = Graph::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        let search = DepthFirstPaths::new(&g, 0);
        // 0 discovers 1 first, 1 discovers 2
        assert_eq!(search.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(search.path_to(0), Some(vec![0]));
    }

    #[test]
    fn bfs_path_is_shortest() {
        let g = Graph::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        let search = BreadthFirstPaths::new(&g, 0);
        assert_eq!(search.path_to(2), Some(vec![0, 2]));
        assert_eq!(search.dist_to(2), Some(1));
        assert_eq!(search.dist_to(5), None);
    }

    #[test]
    fn tree_graph_paths() {
        let g = star_with_tail();
        let dfs = DepthFirstPaths::new(&g, 0);
        let bfs = BreadthFirstPaths::new(&g, 0);
        assert_eq!(dfs.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(bfs.path_to(2), Some(vec![0, 1, 2]));
        assert_eq!(dfs.count(), 5);
        assert_eq!(bfs.source(), 0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn source_out_of_range_panics() {
        let g = Graph::new(2);
        let _ = DepthFirstPaths::new(&g, 2);
    }
}
