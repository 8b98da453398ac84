//! Depth-first search (iterative, explicit stack).

use super::{reconstruct_path, resolve_endpoints, ExpansionBudget, PathResult, PathSearch, Strategy};
use crate::config::SearchLimits;
use crate::error::Result;
use crate::graph::Graph;
use log::{debug, trace};
use std::collections::{HashMap, HashSet};

/// Stack-based search that returns the first path it reaches.
///
/// Nodes are marked visited when pushed, not when popped, so each node enters
/// the stack at most once. The path found is the one reached by always
/// extending the most recently discovered branch, with neighbors pushed in
/// declaration order. It is not necessarily shortest by edges or weight, and
/// no cost is reported.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirstSearch {
    limits: SearchLimits,
}

impl DepthFirstSearch {
    /// Create an unlimited depth-first searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a depth-first searcher bounded by `limits`.
    pub fn with_limits(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

impl PathSearch for DepthFirstSearch {
    fn strategy(&self) -> Strategy {
        Strategy::DepthFirst
    }

    fn search(&self, graph: &Graph, start: &str, goal: &str) -> Result<PathResult> {
        let (start_id, goal_id) = resolve_endpoints(graph, start, goal)?;
        debug!("DFS: {start} -> {goal}");
        if start_id == goal_id {
            return Ok(PathResult::trivial(start));
        }

        let mut budget = ExpansionBudget::new(self.strategy(), &self.limits);
        let mut visited = HashSet::new();
        let mut predecessors = HashMap::new();
        let mut stack = vec![start_id];
        visited.insert(start_id);

        while let Some(current) = stack.pop() {
            if current == goal_id {
                let path = reconstruct_path(&predecessors, start_id, goal_id);
                debug!("DFS: found {} hops after {} expansions", path.len() - 1, budget.expanded());
                return Ok(PathResult::found(graph.labels(&path), None));
            }

            budget.expand()?;
            trace!("DFS: expanding {}", graph.label_of(current));

            for neighbor in graph.neighbors_of(current) {
                if visited.insert(neighbor.node) {
                    predecessors.insert(neighbor.node, current);
                    stack.push(neighbor.node);
                }
            }
        }

        debug!("DFS: no path after {} expansions", budget.expanded());
        Ok(PathResult::not_found(None))
    }
}
