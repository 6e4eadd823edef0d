//! Traversal-based algorithms.
//!
//! Every algorithm runs to completion in its constructor and is afterwards a
//! read-only query object. None of them holds a reference to the graph.
//!
//! | Type | Graph | Answers |
//! |------|-------|---------|
//! | [`DepthFirstPaths`], [`BreadthFirstPaths`] | [`Graph`](crate::Graph) | [`Search`] |
//! | [`DirectedDfs`], [`DirectedBfs`] | [`Digraph`](crate::Digraph) | [`Search`] |
//! | [`Cycle`] | [`Graph`](crate::Graph) | [`CycleDetector`] |
//! | [`DirectedCycle`] | [`Digraph`](crate::Digraph) | [`CycleDetector`] |
//! | [`TwoColor`] | [`Graph`](crate::Graph) | bipartiteness |
//! | [`ConnectedComponents`] | [`Graph`](crate::Graph) | component ids |
//! | [`DepthFirstOrder`] | any [`AdjacencyView`](crate::AdjacencyView) | pre/post orders |
//! | [`Topological`] | [`Digraph`](crate::Digraph) | topological order |

pub mod components;
pub mod cycle;
pub mod directed_cycle;
pub mod directed_search;
pub mod order;
pub mod search;
pub mod topological;
pub(crate) mod traversal;
pub mod two_color;

pub use components::ConnectedComponents;
pub use cycle::{Cycle, CycleDetector};
pub use directed_cycle::DirectedCycle;
pub use directed_search::{DirectedBfs, DirectedDfs};
pub use order::DepthFirstOrder;
pub use search::{BreadthFirstPaths, DepthFirstPaths, Search};
pub use topological::Topological;
pub use two_color::{Side, TwoColor};
