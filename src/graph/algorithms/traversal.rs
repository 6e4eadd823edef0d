//! Traversal engines shared by every algorithm in this module.
//!
//! `depth_first` is recursive DFS unrolled onto an explicit frame stack: each
//! frame remembers how far through its neighbor list it got, so vertices are
//! discovered, edges examined and vertices finished in exactly the order the
//! recursive formulation would produce, without consuming native stack.
//!
//! Consumers see the traversal as a stream of [`DfsEvent`]s and may stop it
//! by returning `ControlFlow::Break`.

use std::collections::VecDeque;
use std::ops::ControlFlow;

use crate::graph::access::visited::Marked;
use crate::graph::AdjacencyView;

/// A step of a depth-first traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DfsEvent {
    /// `vertex` was marked; `parent` is `None` for the traversal root.
    Discover { vertex: usize, parent: Option<usize> },
    /// `to` was unmarked and is about to be discovered from `from`.
    TreeEdge { from: usize, to: usize },
    /// `to` was already marked when examined from `from`. `parent` is the
    /// vertex `from` was discovered through.
    NonTreeEdge {
        from: usize,
        to: usize,
        parent: Option<usize>,
    },
    /// Every neighbor of `vertex` has been examined.
    Finish { vertex: usize },
}

struct Frame {
    vertex: usize,
    parent: Option<usize>,
    next: usize,
}

/// Depth-first traversal from `root`, skipping it if already marked.
pub(crate) fn depth_first<G, F>(
    graph: &G,
    root: usize,
    marked: &mut Marked,
    mut visit: F,
) -> ControlFlow<()>
where
    G: AdjacencyView + ?Sized,
    F: FnMut(DfsEvent) -> ControlFlow<()>,
{
    debug_assert_eq!(marked.len(), graph.vertex_count());
    if !marked.try_visit(root) {
        return ControlFlow::Continue(());
    }
    visit(DfsEvent::Discover {
        vertex: root,
        parent: None,
    })?;

    let mut stack = vec![Frame {
        vertex: root,
        parent: None,
        next: 0,
    }];
    while let Some(frame) = stack.last_mut() {
        let v = frame.vertex;
        let Some(&w) = graph.neighbors(v).get(frame.next) else {
            stack.pop();
            visit(DfsEvent::Finish { vertex: v })?;
            continue;
        };
        frame.next += 1;
        let parent = frame.parent;

        if marked.try_visit(w) {
            visit(DfsEvent::TreeEdge { from: v, to: w })?;
            visit(DfsEvent::Discover {
                vertex: w,
                parent: Some(v),
            })?;
            stack.push(Frame {
                vertex: w,
                parent: Some(v),
                next: 0,
            });
        } else {
            visit(DfsEvent::NonTreeEdge {
                from: v,
                to: w,
                parent,
            })?;
        }
    }
    ControlFlow::Continue(())
}

/// Depth-first traversal from every unmarked vertex in index order.
pub(crate) fn depth_first_forest<G, F>(graph: &G, marked: &mut Marked, mut visit: F) -> ControlFlow<()>
where
    G: AdjacencyView + ?Sized,
    F: FnMut(DfsEvent) -> ControlFlow<()>,
{
    for root in 0..graph.vertex_count() {
        if !marked.is_visited(root) {
            depth_first(graph, root, marked, &mut visit)?;
        }
    }
    ControlFlow::Continue(())
}

/// Breadth-first traversal seeded with every source at distance zero.
///
/// `visit(vertex, parent)` runs once per vertex at the moment it is marked;
/// sources report no parent. Duplicate sources are ignored.
pub(crate) fn breadth_first<G, I, F>(graph: &G, sources: I, marked: &mut Marked, mut visit: F)
where
    G: AdjacencyView + ?Sized,
    I: IntoIterator<Item = usize>,
    F: FnMut(usize, Option<usize>),
{
    let mut queue = VecDeque::new();
    for s in sources {
        if marked.try_visit(s) {
            visit(s, None);
            queue.push_back(s);
        }
    }
    while let Some(v) = queue.pop_front() {
        for &w in graph.neighbors(v) {
            if marked.try_visit(w) {
                visit(w, Some(v));
                queue.push_back(w);
            }
        }
    }
}

/// Panics unless every source is a vertex of `graph`.
pub(crate) fn assert_sources<G: AdjacencyView + ?Sized>(graph: &G, sources: &[usize]) {
    let n = graph.vertex_count();
    for &s in sources {
        assert!(s < n, "source vertex {s} out of bounds for n={n}");
    }
}
