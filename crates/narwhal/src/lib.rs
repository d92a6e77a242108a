//! Minimum spanning tree computation over `narwhal-graphlib` graphs.
//!
//! The container is re-exported as `narwhal::graphlib` so callers only need
//! one dependency. The engine itself is pure: it borrows the graph, keeps
//! its tentative weights in per-run arrays, and returns a [`SpanningTree`]
//! value that callers format or serialize as they see fit.

#![forbid(unsafe_code)]

pub use narwhal_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod data;
pub mod mst;

pub use mst::{SpanningTree, prim};
