//! Core graph types: node IDs, nodes and weighted adjacency entries.

use serde::{Deserialize, Serialize};

/// Dense node index, assigned in insertion order by [`GraphBuilder`](super::GraphBuilder).
pub type NodeId = usize;

/// A named location in the graph.
///
/// The label is the node's identity: no two nodes share a label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Index assigned by the graph
    pub id: NodeId,
    /// Unique label (e.g. a city name)
    pub label: String,
}

impl Node {
    /// Create a new node (ID is assigned by the builder).
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}

/// One entry in a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    /// The adjacent node
    pub node: NodeId,
    /// Edge weight (finite, non-negative)
    pub weight: f64,
}

/// An undirected edge as reported by [`Graph::edges`](super::Graph::edges).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge<'a> {
    /// ID of the endpoint that was inserted first
    pub a_id: NodeId,
    /// ID of the other endpoint
    pub b_id: NodeId,
    /// Endpoint that was inserted first
    pub a: &'a str,
    /// Other endpoint
    pub b: &'a str,
    /// Symmetric weight
    pub weight: f64,
}

/// Returns true if `weight` may be stored on an edge.
pub(crate) fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight >= 0.0
}
