//! Immutable weighted undirected graph with insertion-ordered adjacency lists.

use super::builder::GraphBuilder;
use super::types::{Edge, Neighbor, Node, NodeId};
use crate::error::{GraphError, Result};
use std::collections::HashMap;

/// A static, weighted, undirected graph of named locations.
///
/// Built once through [`GraphBuilder`] (or the [`loader`](crate::loader)) and
/// read-only afterwards, so a single instance can be shared by any number of
/// searches. Every edge is stored in both endpoints' adjacency lists with the
/// same weight.
///
/// Neighbor order is the order in which each pair was first declared. Searches
/// iterate neighbors in this order, which decides the reported path when
/// several equally good paths exist.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub(super) nodes: Vec<Node>,
    pub(super) index: HashMap<String, NodeId>,
    pub(super) adjacency: Vec<Vec<Neighbor>>,
    pub(super) edge_count: usize,
}

impl Graph {
    /// Start building a new graph.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Build a graph from adjacency lists, symmetrizing every declared edge.
    ///
    /// Nodes that only appear as neighbors are created as well.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidWeight`] for negative, NaN or infinite weights.
    pub fn from_adjacency<I, N, S>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, N)>,
        N: IntoIterator<Item = (S, f64)>,
        S: AsRef<str>,
    {
        let mut builder = GraphBuilder::new();
        for (node, neighbors) in adjacency {
            builder.add_node(node.as_ref());
            for (neighbor, weight) in neighbors {
                builder.add_edge(node.as_ref(), neighbor.as_ref(), weight)?;
            }
        }
        Ok(builder.build())
    }

    /// Check whether a node with this label exists.
    pub fn has_node(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Resolve a label to its node ID.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Resolve a label, failing with [`GraphError::NodeNotFound`] if absent.
    pub fn require_node(&self, label: &str) -> Result<NodeId> {
        self.node_id(label)
            .ok_or_else(|| GraphError::node_not_found(label))
    }

    /// Get a node by ID.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Label of a node ID, `None` if the ID does not belong to this graph.
    pub fn label(&self, id: NodeId) -> Option<&str> {
        self.nodes.get(id).map(|n| n.label.as_str())
    }

    /// Label of an ID taken from this graph's own adjacency lists.
    pub(crate) fn label_of(&self, id: NodeId) -> &str {
        &self.nodes[id].label
    }

    /// Neighbors of a labelled node as `(neighbor, weight)` pairs, in declaration order.
    ///
    /// Unknown labels yield an empty sequence.
    pub fn neighbors<'a>(&'a self, label: &str) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        let list = self
            .node_id(label)
            .map(|id| self.adjacency[id].as_slice())
            .unwrap_or(&[]);
        list.iter()
            .map(move |n| (self.nodes[n.node].label.as_str(), n.weight))
    }

    /// Adjacency list of a node ID, in declaration order.
    ///
    /// Unknown IDs yield an empty slice.
    pub fn neighbors_of(&self, id: NodeId) -> &[Neighbor] {
        self.adjacency.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Weight of the edge between two labelled nodes, if they are adjacent.
    pub fn weight(&self, a: &str, b: &str) -> Option<f64> {
        let a = self.node_id(a)?;
        let b = self.node_id(b)?;
        self.adjacency[a]
            .iter()
            .find(|n| n.node == b)
            .map(|n| n.weight)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Every undirected edge exactly once, ordered by its first endpoint.
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        self.adjacency.iter().enumerate().flat_map(move |(a, list)| {
            list.iter()
                .filter(move |n| n.node >= a)
                .map(move |n| Edge {
                    a_id: a,
                    b_id: n.node,
                    a: self.label_of(a),
                    b: self.label_of(n.node),
                    weight: n.weight,
                })
        })
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Map a sequence of node IDs to their labels.
    pub(crate) fn labels(&self, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|&id| self.label_of(id).to_string()).collect()
    }
}
