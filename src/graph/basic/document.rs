//! Serialized form of a graph: the vertex count plus every edge once.
//!
//! Loading goes through `try_add_edge`, so a hand-edited document cannot
//! break symmetry or smuggle in out-of-range vertices.

use serde::{Deserialize, Serialize};

/// `{ "vertices": n, "edges": [[v, w], ...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeListDocument {
    /// Number of vertices.
    pub vertices: usize,
    /// Edges in enumeration order.
    pub edges: Vec<[usize; 2]>,
}
