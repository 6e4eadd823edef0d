//! # Edge list
//!
//! One edge `v w` per line. Blank lines and lines starting with the comment
//! prefix are skipped. The input may open with the header `Display` writes:
//!
//! ```text
//! 5      <- vertex count
//! 4      <- edge count
//! 0 1
//! ...
//! ```
//!
//! Without a header the vertex count is one more than the largest label.
//! Either way it must not exceed the reader's limit, [`VERTEX_LIMIT`] by
//! default.

use super::{content_lines, parse_vertex, ContentLine, EdgeSink};
use crate::error::{check_vertex_count, GraphError, Result, VERTEX_LIMIT};

/// How the reader treats a leading `V` / `E` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// Single-integer leading lines are a header, anything else is an edge.
    #[default]
    Auto,
    /// The vertex count line must be present.
    Required,
    /// Every line is an edge.
    Absent,
}

/// Edge-list reader.
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    header: HeaderMode,
    comment_prefix: String,
    max_vertices: usize,
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self {
            header: HeaderMode::Auto,
            comment_prefix: "#".to_string(),
            max_vertices: VERTEX_LIMIT,
        }
    }
}

impl EdgeListReader {
    /// Creates a reader with [`HeaderMode::Auto`] and `#` comments.
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the header handling.
    #[must_use]
    pub fn header(mut self, mode: HeaderMode) -> Self {
        self.header = mode;
        self
    }

    /// Updates the comment prefix. An empty prefix disables comments.
    #[must_use]
    pub fn comment_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Updates the largest vertex count the reader will allocate.
    #[must_use]
    pub fn max_vertices(mut self, limit: usize) -> Self {
        self.max_vertices = limit;
        self
    }

    /// Parses `input` into a graph.
    ///
    /// # Errors
    /// Returns a [`GraphError`] on malformed lines, non-numeric vertices,
    /// endpoints beyond a declared vertex count, a vertex count above the
    /// limit, a missing required header, or a header edge count that
    /// disagrees with the distinct edges read.
    pub fn parse<G: EdgeSink>(&self, input: &str) -> Result<G> {
        let mut lines = content_lines(input, &self.comment_prefix).peekable();

        let mut declared_vertices = None;
        let mut declared_edges = None;
        if self.header != HeaderMode::Absent {
            if let Some(v) = lines.next_if(is_count_line) {
                declared_vertices = Some(parse_count(v)?);
                if let Some(e) = lines.next_if(is_count_line) {
                    declared_edges = Some(parse_count(e)?);
                }
            } else if self.header == HeaderMode::Required {
                return Err(GraphError::MissingHeader);
            }
        }

        let mut edges = Vec::new();
        for line in lines {
            let mut tokens = line.text.split_whitespace();
            let (Some(v), Some(w), None) = (tokens.next(), tokens.next(), tokens.next()) else {
                return Err(GraphError::MalformedLine {
                    line: line.number,
                    content: line.text.to_string(),
                });
            };
            edges.push((parse_vertex(v, line.number)?, parse_vertex(w, line.number)?));
        }

        let vertex_count = match declared_vertices {
            Some(n) => n,
            None => match edges.iter().map(|&(v, w)| v.max(w)).max() {
                Some(label) => label.checked_add(1).ok_or(GraphError::VertexCountTooLarge {
                    vertex_count: usize::MAX,
                    limit: self.max_vertices,
                })?,
                None => 0,
            },
        };
        check_vertex_count(vertex_count, self.max_vertices)?;

        let mut graph = G::with_vertices(vertex_count);
        for (v, w) in edges {
            graph.insert_edge(v, w)?;
        }

        if let Some(declared) = declared_edges {
            let actual = graph.edges_inserted();
            if declared != actual {
                return Err(GraphError::EdgeCountMismatch { declared, actual });
            }
        }

        tracing::debug!(
            vertices = vertex_count,
            edges = graph.edges_inserted(),
            "edge list parsed"
        );
        Ok(graph)
    }
}

fn is_count_line(line: &ContentLine<'_>) -> bool {
    line.text.split_whitespace().count() == 1
}

fn parse_count(line: ContentLine<'_>) -> Result<usize> {
    parse_vertex(line.text, line.number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Digraph, Graph};

    #[test]
    fn plain_edges_infer_vertex_count() {
        let g: Graph = EdgeListReader::new()
            .parse("\n0 1\n1 2\n2 0\n3 4\n4 5\n5 3\n")
            .unwrap();
        assert_eq!(g.vertex_count(), 6);
        assert_eq!(g.edge_count(), 6);
        assert_eq!(g.neighbors(0), &[1, 2]);
    }

    #[test]
    fn display_output_parses_back() {
        let original = Digraph::from_edges(10, [(0, 3), (1, 5), (0, 9)]);
        let parsed: Digraph = EdgeListReader::new().parse(&original.to_string()).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn comments_and_blank_lines_skipped() {
        let g: Graph = EdgeListReader::new()
            .parse("# triangle\n\n0 1\n  1 2  \n# done\n")
            .unwrap();
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn custom_comment_prefix() {
        let g: Graph = EdgeListReader::new()
            .comment_prefix("c")
            .parse("c pace style\n0 1\n")
            .unwrap();
        assert_eq!(g.vertex_count(), 2);
    }

    #[test]
    fn header_bounds_are_enforced() {
        let err = EdgeListReader::new().parse::<Graph>("2\n1\n0 2\n").unwrap_err();
        assert_eq!(
            err,
            GraphError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn edge_count_mismatch() {
        let err = EdgeListReader::new().parse::<Graph>("3\n2\n0 1\n1 0\n").unwrap_err();
        assert_eq!(err, GraphError::EdgeCountMismatch { declared: 2, actual: 1 });
    }

    #[test]
    fn malformed_and_invalid_lines() {
        let reader = EdgeListReader::new().header(HeaderMode::Absent);
        assert!(matches!(
            reader.parse::<Graph>("0 1\n7\n"),
            Err(GraphError::MalformedLine { line: 2, .. })
        ));
        assert!(matches!(
            reader.parse::<Graph>("0 x\n"),
            Err(GraphError::InvalidVertex { line: 1, .. })
        ));
    }

    #[test]
    fn required_header_missing() {
        let reader = EdgeListReader::new().header(HeaderMode::Required);
        assert_eq!(reader.parse::<Graph>("0 1\n"), Err(GraphError::MissingHeader));
    }

    #[test]
    fn largest_label_does_not_overflow() {
        let err = EdgeListReader::new()
            .parse::<Graph>("0 18446744073709551615\n")
            .unwrap_err();
        assert_eq!(
            err,
            GraphError::VertexCountTooLarge {
                vertex_count: usize::MAX,
                limit: VERTEX_LIMIT
            }
        );
    }

    #[test]
    fn huge_inferred_count_is_rejected() {
        assert_eq!(
            EdgeListReader::new().parse::<Digraph>("0 4000000000000\n"),
            Err(GraphError::VertexCountTooLarge {
                vertex_count: 4_000_000_000_001,
                limit: VERTEX_LIMIT
            })
        );
    }

    #[test]
    fn huge_declared_count_is_rejected() {
        assert!(matches!(
            EdgeListReader::new().parse::<Graph>("4000000000000\n0\n"),
            Err(GraphError::VertexCountTooLarge { .. })
        ));
    }

    #[test]
    fn custom_vertex_limit() {
        let reader = EdgeListReader::new().max_vertices(3);
        assert_eq!(reader.parse::<Graph>("0 2\n").unwrap().vertex_count(), 3);
        assert_eq!(
            reader.parse::<Graph>("0 3\n"),
            Err(GraphError::VertexCountTooLarge {
                vertex_count: 4,
                limit: 3
            })
        );
    }

    #[test]
    fn empty_input_is_empty_graph() {
        let g: Graph = EdgeListReader::new().parse("").unwrap();
        assert_eq!(g.vertex_count(), 0);
    }
}
