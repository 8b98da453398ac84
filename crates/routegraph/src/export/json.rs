//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts. Path membership is carried as `on_path` flags and a
//! `role` of `"start"`, `"goal"` or `null` on nodes.

use super::PathHighlight;
use crate::error::GraphError;
use crate::graph::Graph;
use crate::search::PathResult;
use crate::Result;
use serde_json::json;

/// Export graph to D3.js-compatible JSON format, highlighting `path` if given
pub fn export_json(graph: &Graph, path: Option<&PathResult>) -> Result<String> {
    let highlight = PathHighlight::new(graph, path);

    let nodes: Vec<_> = graph
        .nodes()
        .map(|node| {
            let role = if highlight.is_start(node.id) {
                Some("start")
            } else if highlight.is_goal(node.id) {
                Some("goal")
            } else {
                None
            };
            json!({
                "id": node.id,
                "label": node.label,
                "on_path": highlight.contains_node(node.id),
                "role": role,
            })
        })
        .collect();

    let links: Vec<_> = graph
        .edges()
        .map(|edge| {
            json!({
                "source": edge.a_id,
                "target": edge.b_id,
                "weight": edge.weight,
                "on_path": highlight.contains_edge(edge.a_id, edge.b_id),
            })
        })
        .collect();

    let result = json!({
        "nodes": nodes,
        "links": links,
        "path": path,
    });

    serde_json::to_string_pretty(&result)
        .map_err(|e| GraphError::serialization("Failed to serialize graph JSON", Some(e)))
}
