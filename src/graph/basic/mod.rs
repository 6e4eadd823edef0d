//! Basic graph implementations.
//!
//! Both graph types wrap one [`AdjacencyStore`]; the edge-type marker decides
//! whether an insertion is mirrored.

pub mod adjacency;
pub mod directed;
pub mod document;
pub mod undirected;

pub use adjacency::{AdjacencyStore, Directed, EdgeType, Undirected};
pub use directed::Digraph;
pub use document::EdgeListDocument;
pub use undirected::Graph;
