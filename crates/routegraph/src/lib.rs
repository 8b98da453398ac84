//! # routegraph
//!
//! Route search between named locations in a static, weighted, undirected graph.
//!
//! ## Core Principles
//!
//! - **Explicit Construction**: A [`Graph`] is built once by the caller and passed by reference
//! - **Immutable Graph**: Searches only read; one graph serves any number of queries
//! - **Deterministic**: Neighbor order is declaration order, ties resolve the same way every time
//! - **Fail Fast**: Unknown endpoints and invalid weights are errors, an unreachable goal is not
//!
//! ## Architecture
//!
//! ```text
//! Loader (JSON adjacency map)      Renderer (DOT, JSON)
//!     ↓                                 ↑
//! Graph (symmetrized adjacency) → Search (DFS, BFS, UCS) → PathResult
//! ```
//!
//! ## Example
//!
//! ```rust
//! use routegraph::{loader, BreadthFirstSearch, PathSearch, UniformCostSearch};
//!
//! let graph = loader::load_from_str(r#"{"A": {"B": 1, "C": 5}, "B": {"C": 2}}"#).unwrap();
//!
//! let cheapest = UniformCostSearch::new().search(&graph, "A", "C").unwrap();
//! assert_eq!(cheapest.to_string(), "A -> B -> C");
//! assert_eq!(cheapest.cost, Some(3.0));
//!
//! let fewest_hops = BreadthFirstSearch::new().search(&graph, "A", "C").unwrap();
//! assert_eq!(fewest_hops.to_string(), "A -> C");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod export;
pub mod graph;
pub mod loader;
pub mod search;

// Re-export main types
pub use config::SearchLimits;
pub use error::{GraphError, Result};
pub use graph::{Edge, Graph, GraphBuilder, Neighbor, Node, NodeId};
pub use search::{
    find_all_paths, search, BreadthFirstSearch, DepthFirstSearch, PathResult, PathSearch,
    Strategy, UniformCostSearch,
};
