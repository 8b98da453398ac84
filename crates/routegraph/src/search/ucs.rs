//! Uniform-cost search (Dijkstra with lazy deletion).

use super::{resolve_endpoints, ExpansionBudget, PathResult, PathSearch, Strategy};
use crate::config::SearchLimits;
use crate::error::Result;
use crate::graph::{Graph, NodeId};
use log::{debug, trace};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

/// Priority-queue search that returns a path with the lowest total weight.
///
/// Entries are never updated in place. A node is finalized the first time it
/// is popped; later entries for it are stale and skipped. The first time the
/// goal is popped its cost is minimal because all weights are non-negative,
/// which [`GraphBuilder`](crate::GraphBuilder) enforces.
///
/// Entries of equal cost are popped in the order they were pushed.
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformCostSearch {
    limits: SearchLimits,
}

impl UniformCostSearch {
    /// Create an unlimited uniform-cost searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a uniform-cost searcher bounded by `limits`.
    pub fn with_limits(limits: SearchLimits) -> Self {
        Self { limits }
    }
}

/// Frontier entry, ordered so that `BinaryHeap` pops the cheapest, oldest entry first.
#[derive(Debug)]
struct FrontierEntry {
    cost: f64,
    seq: u64,
    node: NodeId,
    path: Vec<NodeId>,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PathSearch for UniformCostSearch {
    fn strategy(&self) -> Strategy {
        Strategy::UniformCost
    }

    fn search(&self, graph: &Graph, start: &str, goal: &str) -> Result<PathResult> {
        let (start_id, goal_id) = resolve_endpoints(graph, start, goal)?;
        debug!("UCS: {start} -> {goal}");

        let mut budget = ExpansionBudget::new(self.strategy(), &self.limits);
        let mut finalized = HashSet::new();
        let mut frontier = BinaryHeap::new();
        let mut seq = 0u64;
        frontier.push(FrontierEntry {
            cost: 0.0,
            seq,
            node: start_id,
            path: vec![start_id],
        });

        while let Some(FrontierEntry { cost, node, path, .. }) = frontier.pop() {
            if node == goal_id {
                debug!("UCS: found cost {cost} after {} expansions", budget.expanded());
                return Ok(PathResult::found(graph.labels(&path), Some(cost)));
            }
            if !finalized.insert(node) {
                continue;
            }

            budget.expand()?;
            trace!("UCS: finalized {} at cost {cost}", graph.label_of(node));

            for neighbor in graph.neighbors_of(node) {
                if finalized.contains(&neighbor.node) {
                    continue;
                }
                seq += 1;
                let mut next = path.clone();
                next.push(neighbor.node);
                frontier.push(FrontierEntry {
                    cost: cost + neighbor.weight,
                    seq,
                    node: neighbor.node,
                    path: next,
                });
            }
        }

        debug!("UCS: no path after {} expansions", budget.expanded());
        Ok(PathResult::not_found(Some(f64::INFINITY)))
    }
}
