//! Recoverable errors raised while building graphs from untrusted input.
//!
//! Out-of-range vertices passed to [`add_edge`](crate::Graph::add_edge) are a
//! caller bug and panic. Text and serialized documents are input, so the same
//! condition surfaces here instead, as does a vertex count above
//! [`VERTEX_LIMIT`], which would otherwise force an unbounded allocation.

use thiserror::Error;

/// Graph construction error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint is not in `0..vertex_count`.
    #[error("vertex {vertex} out of bounds for n={vertex_count}")]
    VertexOutOfRange {
        /// The offending vertex.
        vertex: usize,
        /// Declared number of vertices.
        vertex_count: usize,
    },

    /// A token that should name a vertex is not a non-negative integer.
    #[error("line {line}: invalid vertex `{token}`")]
    InvalidVertex {
        /// 1-based line number.
        line: usize,
        /// The token as it appeared in the input.
        token: String,
    },

    /// A line does not have the shape the format requires.
    #[error("line {line}: malformed entry `{content}`")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// The trimmed line content.
        content: String,
    },

    /// A header was required but the input has none.
    #[error("missing vertex/edge count header")]
    MissingHeader,

    /// Input asks for more vertices than the reader allows, or for a count
    /// that does not fit in `usize`.
    #[error("vertex count {vertex_count} exceeds the limit of {limit}")]
    VertexCountTooLarge {
        /// Requested count, saturated at `usize::MAX`.
        vertex_count: usize,
        /// The limit in force.
        limit: usize,
    },

    /// The header's edge count disagrees with the edges actually inserted.
    #[error("header declares {declared} edges but {actual} were read")]
    EdgeCountMismatch {
        /// Edge count from the header.
        declared: usize,
        /// Distinct edges inserted.
        actual: usize,
    },
}

/// Largest vertex count accepted from text or serialized documents unless a
/// reader is configured otherwise.
pub const VERTEX_LIMIT: usize = 1 << 24;

/// Rejects `vertex_count` above `limit` before anything is allocated.
pub(crate) fn check_vertex_count(vertex_count: usize, limit: usize) -> Result<()> {
    if vertex_count > limit {
        return Err(GraphError::VertexCountTooLarge {
            vertex_count,
            limit,
        });
    }
    Ok(())
}

/// Result alias for graph construction.
pub type Result<T> = std::result::Result<T, GraphError>;
