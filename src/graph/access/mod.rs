//! Internal traversal bookkeeping.
//!
//! This module is intentionally `pub(crate)` so algorithms can share visited
//! sets and parent links without exposing them as part of the public API.

pub(crate) mod visited;
