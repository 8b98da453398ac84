//! Exhaustive simple-path enumeration.

use super::resolve_endpoints;
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use std::collections::HashSet;

/// Find all simple paths between two nodes, up to `max_depth` edges.
///
/// Uses recursive DFS with backtracking, so the cost grows exponentially with
/// graph density. Meant for small graphs, e.g. checking that a search result
/// really is optimal.
///
/// # Parameters
/// - `graph`: The graph to search
/// - `start`: Starting node label
/// - `goal`: Target node label
/// - `max_depth`: Maximum number of edges per path (None = no limit beyond simplicity)
///
/// # Returns
/// Vec of paths, where each path is a Vec of node labels from start to goal
///
/// # Errors
///
/// Returns [`GraphError::NodeNotFound`](crate::GraphError::NodeNotFound) if either endpoint is absent.
pub fn find_all_paths(
    graph: &Graph,
    start: &str,
    goal: &str,
    max_depth: Option<usize>,
) -> Result<Vec<Vec<String>>> {
    let (start_id, goal_id) = resolve_endpoints(graph, start, goal)?;
    let max_depth = max_depth.unwrap_or(graph.node_count());

    let mut paths = Vec::new();
    let mut current_path = vec![start_id];
    let mut visited = HashSet::new();
    visited.insert(start_id);

    find_paths_recursive(
        graph,
        start_id,
        goal_id,
        &mut current_path,
        &mut visited,
        &mut paths,
        max_depth,
    );

    Ok(paths.iter().map(|p| graph.labels(p)).collect())
}

/// Recursive helper for path finding
fn find_paths_recursive(
    graph: &Graph,
    current: NodeId,
    goal: NodeId,
    current_path: &mut Vec<NodeId>,
    visited: &mut HashSet<NodeId>,
    paths: &mut Vec<Vec<NodeId>>,
    max_depth: usize,
) {
    if current == goal {
        paths.push(current_path.clone());
        return;
    }
    if current_path.len() > max_depth {
        return;
    }

    for neighbor in graph.neighbors_of(current) {
        if visited.insert(neighbor.node) {
            current_path.push(neighbor.node);
            find_paths_recursive(graph, neighbor.node, goal, current_path, visited, paths, max_depth);
            current_path.pop();
            visited.remove(&neighbor.node);
        }
    }
}
