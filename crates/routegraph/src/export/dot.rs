//! DOT format export for Graphviz visualization.
//!
//! Renders the whole graph as an undirected Graphviz `graph`, optionally with
//! one search result highlighted: path nodes and edges get their own colors,
//! and the start and goal nodes are colored distinctly.

use super::PathHighlight;
use crate::graph::Graph;
use crate::search::PathResult;
use crate::Result;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Fill color of nodes off the path
    pub node_color: String,
    /// Fill color of intermediate path nodes
    pub path_node_color: String,
    /// Fill color of the start node
    pub start_color: String,
    /// Fill color of the goal node
    pub goal_color: String,
    /// Color of edges off the path
    pub edge_color: String,
    /// Color of path edges
    pub path_edge_color: String,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Label edges with their weights
    pub show_weights: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            node_color: "#ADD8E6".to_string(),
            path_node_color: "#FF6347".to_string(),
            start_color: "#00FF00".to_string(),
            goal_color: "#9400D3".to_string(),
            edge_color: "#A0A0A0".to_string(),
            path_edge_color: "#FF4500".to_string(),
            rankdir: "LR".to_string(),
            show_weights: true,
        }
    }
}

/// Export graph to Graphviz DOT format, highlighting `path` if given
pub fn export_dot(graph: &Graph, path: Option<&PathResult>) -> Result<String> {
    export_dot_styled(graph, path, &DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled(
    graph: &Graph,
    path: Option<&PathResult>,
    options: &DotOptions,
) -> Result<String> {
    let highlight = PathHighlight::new(graph, path);
    let mut output = String::new();

    // Header
    output.push_str("graph route_graph {\n");
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [style=filled];\n\n");

    for node in graph.nodes() {
        let color = if highlight.is_start(node.id) {
            &options.start_color
        } else if highlight.is_goal(node.id) {
            &options.goal_color
        } else if highlight.contains_node(node.id) {
            &options.path_node_color
        } else {
            &options.node_color
        };

        output.push_str(&format!(
            "    n{} [label=\"{}\", fillcolor=\"{}\"];\n",
            node.id,
            escape_dot_label(&node.label),
            color
        ));
    }

    output.push('\n');

    for edge in graph.edges() {
        let (a, b) = (edge.a_id, edge.b_id);
        let mut attrs = Vec::new();
        if options.show_weights {
            attrs.push(format!("label=\"{}\"", edge.weight));
        }
        if highlight.contains_edge(a, b) {
            attrs.push(format!("color=\"{}\"", options.path_edge_color));
            attrs.push("penwidth=2.5".to_string());
        } else {
            attrs.push(format!("color=\"{}\"", options.edge_color));
        }

        output.push_str(&format!("    n{a} -- n{b} [{}];\n", attrs.join(", ")));
    }

    output.push_str("}\n");

    Ok(output)
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
