//! # `graphwalk` - Traversal Algorithms over Adjacency Lists
//!
//! Undirected and directed graphs over integer vertices `0..n`, plus the
//! classical algorithms built on depth-first and breadth-first traversal.
//!
//! ## Key Features
//!
//! - **Deterministic traversal**: neighbor lists keep insertion order, so
//!   every path, witness cycle and ordering is reproducible
//! - **No recursion**: depth-first algorithms run on an explicit frame stack
//!   and visit vertices in exactly the order recursive DFS would
//! - **Query objects**: each algorithm computes everything in its constructor
//!   and is read-only afterwards
//!
//! ## Architecture
//!
//! 1. **Storage** ([`graph::basic`]): [`Graph`] and [`Digraph`] wrap one
//!    `AdjacencyStore` each. Duplicate edges are no-ops and self-loops are
//!    allowed. Out-of-range insertion panics.
//!
//! 2. **Algorithms** ([`graph::algorithms`]): searches with path
//!    reconstruction, undirected and directed cycle detection, two-coloring,
//!    connected components, depth-first orders and topological sort.
//!
//! 3. **Text formats** ([`graph::io`]): edge-list and adjacency-list readers
//!    returning [`GraphError`] instead of panicking.
//!
//! ### Correctness notes
//!
//! **Reverse postorder**: for an acyclic digraph, every arc `v -> w` has `v`
//! before `w` in the reverse postorder of a full DFS. [`Topological`] relies
//! on this after [`DirectedCycle`] has ruled out cycles.
//!
//! **BFS distances**: the parent of each vertex found by breadth-first search
//! lies on a shortest path from the source set.
//!
//! ## Example
//!
//! ```rust
//! use graphwalk::{ConnectedComponents, Graph};
//!
//! let g = Graph::from_edges(5, [(0, 1), (1, 2), (2, 0), (3, 4)]);
//! let cc = ConnectedComponents::new(&g);
//!
//! assert_eq!(cc.count(), 2);
//! assert!(cc.connected(0, 2));
//! assert!(!cc.connected(0, 3));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;

pub use error::{GraphError, Result, VERTEX_LIMIT};
pub use graph::algorithms::{
    BreadthFirstPaths, ConnectedComponents, Cycle, CycleDetector, DepthFirstOrder, DepthFirstPaths,
    DirectedBfs, DirectedCycle, DirectedDfs, Search, Side, Topological, TwoColor,
};
pub use graph::io::{AdjacencyListReader, EdgeListReader, EdgeSink, HeaderMode};
pub use graph::{AdjacencyView, Digraph, Graph};
