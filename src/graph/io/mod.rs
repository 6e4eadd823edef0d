//! Building graphs from text.
//!
//! Two line-oriented formats are supported:
//! - [`edge_list`]: `v w` per line, optionally preceded by the `V` / `E`
//!   header that `Display` renders
//! - [`adjacency_list`]: `v: a b c` per line
//!
//! Both produce any [`EdgeSink`], so the same text can become a
//! [`Graph`](crate::Graph) or a [`Digraph`](crate::Digraph).

pub mod adjacency_list;
pub mod edge_list;

pub use adjacency_list::AdjacencyListReader;
pub use edge_list::{EdgeListReader, HeaderMode};

use crate::error::{GraphError, Result};
use crate::graph::{Digraph, Graph};

/// A graph that can be populated edge by edge from parsed input.
pub trait EdgeSink: Sized {
    /// Creates an empty graph with `vertex_count` vertices.
    fn with_vertices(vertex_count: usize) -> Self;

    /// Inserts an edge, rejecting out-of-range endpoints.
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] if either endpoint is out of bounds.
    fn insert_edge(&mut self, v: usize, w: usize) -> Result<bool>;

    /// Distinct edges inserted so far.
    fn edges_inserted(&self) -> usize;
}

impl EdgeSink for Graph {
    fn with_vertices(vertex_count: usize) -> Self {
        Graph::new(vertex_count)
    }

    fn insert_edge(&mut self, v: usize, w: usize) -> Result<bool> {
        self.try_add_edge(v, w)
    }

    fn edges_inserted(&self) -> usize {
        self.edge_count()
    }
}

impl EdgeSink for Digraph {
    fn with_vertices(vertex_count: usize) -> Self {
        Digraph::new(vertex_count)
    }

    fn insert_edge(&mut self, v: usize, w: usize) -> Result<bool> {
        self.try_add_edge(v, w)
    }

    fn edges_inserted(&self) -> usize {
        self.edge_count()
    }
}

/// A non-blank, non-comment line with its 1-based number.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ContentLine<'a> {
    pub(crate) number: usize,
    pub(crate) text: &'a str,
}

pub(crate) fn content_lines<'a>(
    input: &'a str,
    comment_prefix: &'a str,
) -> impl Iterator<Item = ContentLine<'a>> + 'a {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| ContentLine {
            number: i + 1,
            text: line.trim(),
        })
        .filter(move |line| {
            !line.text.is_empty()
                && (comment_prefix.is_empty() || !line.text.starts_with(comment_prefix))
        })
}

pub(crate) fn parse_vertex(token: &str, line: usize) -> Result<usize> {
    token.parse().map_err(|_| GraphError::InvalidVertex {
        line,
        token: token.to_string(),
    })
}
