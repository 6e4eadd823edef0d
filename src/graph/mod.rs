//! Graph representations and the algorithms that traverse them.
//!
//! Modules are organized into categories:
//! - `basic`: adjacency storage, [`Graph`] and [`Digraph`]
//! - `algorithms`: searches, cycle detection, coloring, components, orderings
//! - `io`: edge-list and adjacency-list readers

pub mod algorithms;
pub mod basic;
pub mod io;
mod traits;
pub(crate) mod access;

pub use basic::{Digraph, Graph};
pub use traits::AdjacencyView;
