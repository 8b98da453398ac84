//! Unit tests for DOT and JSON rendering.

use routegraph::export::{export_dot, export_dot_styled, export_json, DotOptions};
use routegraph::{Graph, PathSearch, UniformCostSearch};

fn create_triangle() -> Graph {
    Graph::from_adjacency(vec![
        ("A", vec![("B", 1.0), ("C", 5.0)]),
        ("B", vec![("C", 2.0)]),
    ])
    .unwrap()
}

#[test]
fn test_dot_without_path() {
    let graph = create_triangle();
    let dot = export_dot(&graph, None).unwrap();

    assert!(dot.starts_with("graph route_graph {"));
    assert!(dot.contains("n0 [label=\"A\", fillcolor=\"#ADD8E6\"]"));
    assert!(dot.contains("n0 -- n1 [label=\"1\", color=\"#A0A0A0\"]"));
    assert!(dot.contains("n0 -- n2 [label=\"5\", color=\"#A0A0A0\"]"));
    assert!(dot.contains("n1 -- n2"));
    assert!(!dot.contains("->"));
    assert!(dot.trim_end().ends_with('}'));
}

#[test]
fn test_dot_highlights_path() {
    let graph = create_triangle();
    let result = UniformCostSearch::new().search(&graph, "A", "C").unwrap();
    let dot = export_dot(&graph, Some(&result)).unwrap();

    let options = DotOptions::default();
    assert!(dot.contains(&format!("n0 [label=\"A\", fillcolor=\"{}\"]", options.start_color)));
    assert!(dot.contains(&format!("n1 [label=\"B\", fillcolor=\"{}\"]", options.path_node_color)));
    assert!(dot.contains(&format!("n2 [label=\"C\", fillcolor=\"{}\"]", options.goal_color)));
    assert!(dot.contains(&format!(
        "n0 -- n1 [label=\"1\", color=\"{}\", penwidth=2.5]",
        options.path_edge_color
    )));
    // The direct edge is not on the cheapest path
    assert!(dot.contains(&format!("n0 -- n2 [label=\"5\", color=\"{}\"]", options.edge_color)));
}

#[test]
fn test_dot_styled_without_weights() {
    let graph = create_triangle();
    let options = DotOptions {
        show_weights: false,
        rankdir: "TB".to_string(),
        ..Default::default()
    };
    let dot = export_dot_styled(&graph, None, &options).unwrap();

    assert!(dot.contains("rankdir=TB;"));
    assert!(!dot.contains("label=\"1\""));
}

#[test]
fn test_export_does_not_alter_result() {
    let graph = create_triangle();
    let result = UniformCostSearch::new().search(&graph, "A", "C").unwrap();
    let before = result.clone();

    export_dot(&graph, Some(&result)).unwrap();
    export_json(&graph, Some(&result)).unwrap();

    assert_eq!(result, before);
}

#[test]
fn test_json_export_flags_path() {
    let graph = create_triangle();
    let result = UniformCostSearch::new().search(&graph, "A", "C").unwrap();
    let json = export_json(&graph, Some(&result)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let nodes = value["nodes"].as_array().unwrap();
    assert_eq!(nodes.len(), 3);
    assert_eq!(nodes[0]["label"], "A");
    assert_eq!(nodes[0]["role"], "start");
    assert_eq!(nodes[1]["on_path"], true);
    assert!(nodes[1]["role"].is_null());
    assert_eq!(nodes[2]["role"], "goal");

    let links = value["links"].as_array().unwrap();
    assert_eq!(links.len(), 3);
    let direct = links
        .iter()
        .find(|l| l["source"] == 0 && l["target"] == 2)
        .unwrap();
    assert_eq!(direct["on_path"], false);
    assert_eq!(direct["weight"], 5.0);

    assert_eq!(value["path"]["cost"], 3.0);
}

#[test]
fn test_json_export_without_path() {
    let graph = create_triangle();
    let json = export_json(&graph, None).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value["path"].is_null());
    assert!(value["nodes"]
        .as_array()
        .unwrap()
        .iter()
        .all(|n| n["on_path"] == false));
}

#[test]
fn test_json_export_keeps_infinite_cost() {
    let graph = Graph::from_adjacency(vec![("A", vec![("B", 1.0)]), ("C", vec![])]).unwrap();
    let result = UniformCostSearch::new().search(&graph, "A", "C").unwrap();
    let json = export_json(&graph, Some(&result)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value["path"]["path"].is_null());
    assert_eq!(value["path"]["cost"], "Infinity");

    let back: routegraph::PathResult = serde_json::from_value(value["path"].clone()).unwrap();
    assert_eq!(back, result);
}
