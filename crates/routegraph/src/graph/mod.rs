//! Core graph types and construction.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: A named location
//! - [`Neighbor`]: A weighted adjacency entry
//! - [`Graph`]: The immutable, symmetrized graph every search reads from
//! - [`GraphBuilder`]: Validating, symmetrizing construction

mod adjacency;
mod builder;
mod types;

pub use adjacency::Graph;
pub use builder::GraphBuilder;
pub use types::{Edge, Neighbor, Node, NodeId};
