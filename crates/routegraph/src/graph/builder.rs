//! Incremental construction of a symmetrized [`Graph`].

use super::adjacency::Graph;
use super::types::{is_valid_weight, Neighbor, Node, NodeId};
use crate::error::{GraphError, Result};
use log::{trace, warn};
use std::collections::HashMap;

/// Builder that enforces the graph invariants while edges are declared.
///
/// - Every edge is inserted into both endpoints' adjacency lists.
/// - Weights must be finite and non-negative.
/// - Re-declaring an existing pair keeps its position in both lists and
///   overwrites the weight (last declaration wins).
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
    // (from, to) -> position in adjacency[from]
    positions: HashMap<(NodeId, NodeId), usize>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node, returning its ID. Existing labels return the existing ID.
    ///
    /// Labels are opaque: any string, including the empty one, is a valid label.
    pub fn add_node(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.graph.index.get(label) {
            return id;
        }

        let id = self.graph.nodes.len();
        trace!("Adding node: id={id}, label={label}");
        self.graph.nodes.push(Node::new(id, label));
        self.graph.index.insert(label.to_string(), id);
        self.graph.adjacency.push(Vec::new());
        id
    }

    /// Declare an undirected edge between `a` and `b`.
    ///
    /// Missing endpoints are created.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidWeight`] for negative, NaN or infinite weights.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: f64) -> Result<&mut Self> {
        if !is_valid_weight(weight) {
            return Err(GraphError::InvalidWeight {
                from: a.to_string(),
                to: b.to_string(),
                weight,
            });
        }

        let a_id = self.add_node(a);
        let b_id = self.add_node(b);

        match self.upsert(a_id, b_id, weight) {
            Some(previous) if previous != weight => {
                warn!("Edge {a} -- {b} redeclared: weight {previous} replaced by {weight}");
            }
            Some(_) => {}
            None => self.graph.edge_count += 1,
        }
        if a_id != b_id {
            self.upsert(b_id, a_id, weight);
        }
        Ok(self)
    }

    /// Number of nodes registered so far.
    pub fn node_count(&self) -> usize {
        self.graph.nodes.len()
    }

    /// Finish construction.
    pub fn build(self) -> Graph {
        self.graph
    }

    /// Insert or update `to` in `from`'s adjacency list, returning the previous weight.
    fn upsert(&mut self, from: NodeId, to: NodeId, weight: f64) -> Option<f64> {
        let list = &mut self.graph.adjacency[from];
        match self.positions.get(&(from, to)) {
            Some(&pos) => {
                let previous = list[pos].weight;
                list[pos].weight = weight;
                Some(previous)
            }
            None => {
                self.positions.insert((from, to), list.len());
                list.push(Neighbor { node: to, weight });
                None
            }
        }
    }
}
