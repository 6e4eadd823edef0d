//! Depth-first vertex orderings.

use std::ops::ControlFlow;

use serde::Serialize;

use super::traversal::{depth_first_forest, DfsEvent};
use crate::graph::access::visited::Marked;
use crate::graph::AdjacencyView;

/// Preorder, postorder and reverse postorder of a full depth-first traversal.
///
/// Roots are taken in index order. A vertex enters the preorder when it is
/// discovered and the postorder once all its descendants are finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
    reverse_post: Vec<usize>,
}

impl DepthFirstOrder {
    /// Orders the vertices of `graph`. Usually a [`Digraph`](crate::Digraph).
    pub fn new<G: AdjacencyView + ?Sized>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut marked = Marked::new(n);
        let mut pre = Vec::with_capacity(n);
        let mut post = Vec::with_capacity(n);

        let _ = depth_first_forest(graph, &mut marked, |event| {
            match event {
                DfsEvent::Discover { vertex, .. } => pre.push(vertex),
                DfsEvent::Finish { vertex } => post.push(vertex),
                _ => {}
            }
            ControlFlow::Continue(())
        });

        let mut reverse_post = post.clone();
        reverse_post.reverse();
        tracing::debug!(
            vertices = n,
            directed = graph.is_directed(),
            "depth-first order computed"
        );
        Self {
            pre,
            post,
            reverse_post,
        }
    }

    /// Vertices in discovery order.
    pub fn pre(&self) -> &[usize] {
        &self.pre
    }

    /// Vertices in finish order.
    pub fn post(&self) -> &[usize] {
        &self.post
    }

    /// `post()` reversed.
    pub fn reverse_post(&self) -> &[usize] {
        &self.reverse_post
    }
}
