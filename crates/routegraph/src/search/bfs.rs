//! Breadth-first search (FIFO queue of partial paths).

use super::{resolve_endpoints, ExpansionBudget, PathResult, PathSearch, Strategy};
use crate::config::SearchLimits;
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use log::{debug, trace};
use std::collections::{HashSet, VecDeque};

/// Queue-based search that returns a path with the fewest edges.
///
/// The goal is checked while scanning a node's neighbors, before anything is
/// enqueued, so the first discovery wins. Among paths of equal length the one
/// whose neighbors come first in declaration order at the first point of
/// divergence is returned. Weights are ignored and no cost is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirstSearch {
    limits: SearchLimits,
}

impl BreadthFirstSearch {
    /// Create an unlimited breadth-first searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a breadth-first searcher bounded by `limits`.
    pub fn with_limits(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl PathSearch for BreadthFirstSearch {
    fn strategy(&self) -> Strategy {
        Strategy::BreadthFirst
    }

    fn search(&self, graph: &Graph, start: &str, goal: &str) -> Result<PathResult> {
        let (start_id, goal_id) = resolve_endpoints(graph, start, goal)?;
        debug!("BFS: {start} -> {goal}");
        if start_id == goal_id {
            return Ok(PathResult::trivial(start));
        }

        let mut budget = ExpansionBudget::new(self.strategy(), &self.limits);
        let mut visited = HashSet::new();
        let mut queue: VecDeque<(NodeId, Vec<NodeId>)> = VecDeque::new();
        visited.insert(start_id);
        queue.push_back((start_id, vec![start_id]));

        while let Some((current, path)) = queue.pop_front() {
            budget.expand()?;
            trace!("BFS: expanding {} at depth {}", graph.label_of(current), path.len() - 1);

            for neighbor in graph.neighbors_of(current) {
                if neighbor.node == goal_id {
                    let mut found = path;
                    found.push(goal_id);
                    debug!("BFS: found {} hops after {} expansions", found.len() - 1, budget.expanded());
                    return Ok(PathResult::found(graph.labels(&found), None));
                }
                if visited.insert(neighbor.node) {
                    let mut next = path.clone();
                    next.push(neighbor.node);
                    queue.push_back((neighbor.node, next));
                }
            }
        }

        debug!("BFS: no path after {} expansions", budget.expanded());
        Ok(PathResult::not_found(None))
    }
}
