//! Rendering of a graph with an optional highlighted search result.
//!
//! Supports two formats:
//! - **DOT**: Graphviz visualization
//! - **JSON**: D3.js and web-based tools
//!
//! Exporters only read the [`Graph`] and the [`PathResult`]; neither is modified.

pub mod dot;
pub mod json;

pub use dot::{export_dot, export_dot_styled, DotOptions};
pub use json::export_json;

use crate::graph::{Graph, NodeId};
use crate::search::PathResult;
use std::collections::HashSet;

/// Node and edge membership of a highlighted path.
struct PathHighlight {
    nodes: HashSet<NodeId>,
    edges: HashSet<(NodeId, NodeId)>,
    start: Option<NodeId>,
    goal: Option<NodeId>,
}

impl PathHighlight {
    fn new(graph: &Graph, path: Option<&PathResult>) -> Self {
        // Labels the graph does not know are ignored
        let ids: Vec<NodeId> = path
            .map(|p| p.nodes().iter().filter_map(|label| graph.node_id(label)).collect())
            .unwrap_or_default();

        Self {
            nodes: ids.iter().copied().collect(),
            edges: ids.windows(2).map(|w| ordered(w[0], w[1])).collect(),
            start: ids.first().copied(),
            goal: ids.last().copied(),
        }
    }

    fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.contains(&ordered(a, b))
    }

    fn is_start(&self, id: NodeId) -> bool {
        self.start == Some(id)
    }

    fn is_goal(&self, id: NodeId) -> bool {
        self.goal == Some(id)
    }
}

fn ordered(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
