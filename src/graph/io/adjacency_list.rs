//! # Adjacency list
//!
//! One vertex per line, followed by a colon and its neighbors:
//!
//! ```text
//! 0: 1 3 4
//! 1: 0 2
//! 2:
//! ```
//!
//! The vertex count is the number of content lines. In an undirected graph an
//! edge listed from both ends is inserted once.

use super::{content_lines, parse_vertex, EdgeSink};
use crate::error::{GraphError, Result};

/// Adjacency-list reader.
#[derive(Debug, Clone)]
pub struct AdjacencyListReader {
    comment_prefix: String,
}

impl Default for AdjacencyListReader {
    fn default() -> Self {
        Self {
            comment_prefix: "#".to_string(),
        }
    }
}

impl AdjacencyListReader {
    /// Creates a reader with `#` comments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment prefix. An empty prefix disables comments.
    #[must_use]
    pub fn comment_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Parses `input` into a graph.
    ///
    /// # Errors
    /// Returns a [`GraphError`] if a line lacks the colon, a token is not a
    /// vertex, or a vertex (line head or neighbor) is not below the number of
    /// lines.
    pub fn parse<G: EdgeSink>(&self, input: &str) -> Result<G> {
        let lines: Vec<_> = content_lines(input, &self.comment_prefix).collect();
        let mut graph = G::with_vertices(lines.len());

        for line in &lines {
            let Some((head, tail)) = line.text.split_once(':') else {
                return Err(GraphError::MalformedLine {
                    line: line.number,
                    content: line.text.to_string(),
                });
            };
            let v = parse_vertex(head.trim(), line.number)?;
            if v >= lines.len() {
                return Err(GraphError::VertexOutOfRange {
                    vertex: v,
                    vertex_count: lines.len(),
                });
            }
            for token in tail.split_whitespace() {
                let w = parse_vertex(token, line.number)?;
                graph.insert_edge(v, w)?;
            }
        }

        tracing::debug!(
            vertices = lines.len(),
            edges = graph.edges_inserted(),
            "adjacency list parsed"
        );
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Digraph, Graph};

    #[test]
    fn symmetric_listing_inserts_once() {
        let g: Graph = AdjacencyListReader::new()
            .parse("0:1 5\n1:0 5 3 2\n2:1 3\n3:1 2 4 5\n4:3 5\n5:0 1 3 4\n")
            .unwrap();
        assert_eq!(g.vertex_count(), 6);
        assert_eq!(g.edge_count(), 9);
        assert_eq!(g.neighbors(1), &[0, 5, 3, 2]);
    }

    #[test]
    fn directed_listing() {
        let dg: Digraph = AdjacencyListReader::new().parse("0: 1\n1: 2\n2:\n").unwrap();
        assert_eq!(dg.edge_count(), 2);
        assert!(dg.neighbors(2).is_empty());
    }

    #[test]
    fn missing_colon() {
        assert!(matches!(
            AdjacencyListReader::new().parse::<Graph>("0 1\n"),
            Err(GraphError::MalformedLine { line: 1, .. })
        ));
    }

    #[test]
    fn label_beyond_line_count() {
        assert!(matches!(
            AdjacencyListReader::new().parse::<Graph>("0: 3\n1: 0\n"),
            Err(GraphError::VertexOutOfRange { vertex: 3, .. })
        ));
    }

    #[test]
    fn head_beyond_line_count() {
        assert_eq!(
            AdjacencyListReader::new().parse::<Graph>("5:\n"),
            Err(GraphError::VertexOutOfRange {
                vertex: 5,
                vertex_count: 1
            })
        );
    }
}
