//! Path search strategies.
//!
//! Three independent strategies share one input contract, `(graph, start, goal)`,
//! and one output type, [`PathResult`]:
//!
//! - [`DepthFirstSearch`]: some path, not necessarily shortest
//! - [`BreadthFirstSearch`]: a path with the fewest edges
//! - [`UniformCostSearch`]: a path with the lowest total weight
//!
//! Every entry point validates both endpoints first and fails with
//! [`GraphError::NodeNotFound`] naming the missing one. An unreachable goal
//! is not an error; it yields a [`PathResult`] without a path.

mod bfs;
mod dfs;
mod paths;
mod result;
mod ucs;

pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use paths::find_all_paths;
pub use result::PathResult;
pub use ucs::UniformCostSearch;

use crate::config::SearchLimits;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, NodeId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Which search algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Stack-based, first path found
    DepthFirst,
    /// Queue-based, fewest edges
    BreadthFirst,
    /// Priority-queue based, lowest total weight
    UniformCost,
}

impl Strategy {
    /// All strategies, in the order they are usually reported.
    pub const ALL: [Strategy; 3] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
    ];

    /// Short name used on command lines ("dfs", "bfs", "ucs").
    pub fn short_name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::UniformCost => "ucs",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::DepthFirst => write!(f, "depth-first"),
            Strategy::BreadthFirst => write!(f, "breadth-first"),
            Strategy::UniformCost => write!(f, "uniform-cost"),
        }
    }
}

impl FromStr for Strategy {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "depth_first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" | "breadth_first" => Ok(Strategy::BreadthFirst),
            "ucs" | "uniform-cost" | "uniform_cost" | "dijkstra" => Ok(Strategy::UniformCost),
            other => Err(GraphError::InvalidOperation {
                message: format!("Unknown search strategy: {other}"),
            }),
        }
    }
}

/// A path search over a [`Graph`].
///
/// Implementations never mutate the graph, so one graph can serve any number
/// of searches, including from several threads at once.
pub trait PathSearch {
    /// The strategy this searcher implements.
    fn strategy(&self) -> Strategy;

    /// Find a path from `start` to `goal`.
    ///
    /// # Errors
    ///
    /// - [`GraphError::NodeNotFound`] if either endpoint is absent
    /// - [`GraphError::SearchAborted`] if a configured limit is reached
    fn search(&self, graph: &Graph, start: &str, goal: &str) -> Result<PathResult>;
}

/// Run `strategy` from `start` to `goal` under `limits`.
///
/// # Example
///
/// ```
/// use routegraph::{search, Graph, SearchLimits, Strategy};
///
/// let graph = Graph::from_adjacency(vec![
///     ("A", vec![("B", 1.0), ("C", 5.0)]),
///     ("B", vec![("C", 2.0)]),
/// ])
/// .unwrap();
///
/// let result = search(&graph, Strategy::UniformCost, "A", "C", SearchLimits::default()).unwrap();
/// assert_eq!(result.nodes(), ["A", "B", "C"]);
/// assert_eq!(result.cost, Some(3.0));
/// ```
pub fn search(
    graph: &Graph,
    strategy: Strategy,
    start: &str,
    goal: &str,
    limits: SearchLimits,
) -> Result<PathResult> {
    match strategy {
        Strategy::DepthFirst => DepthFirstSearch::with_limits(limits).search(graph, start, goal),
        Strategy::BreadthFirst => BreadthFirstSearch::with_limits(limits).search(graph, start, goal),
        Strategy::UniformCost => UniformCostSearch::with_limits(limits).search(graph, start, goal),
    }
}

/// Resolve both endpoints, start first.
pub(crate) fn resolve_endpoints(graph: &Graph, start: &str, goal: &str) -> Result<(NodeId, NodeId)> {
    Ok((graph.require_node(start)?, graph.require_node(goal)?))
}

/// Counts node expansions against [`SearchLimits::max_expansions`].
pub(crate) struct ExpansionBudget {
    strategy: Strategy,
    limit: Option<usize>,
    expanded: usize,
}

impl ExpansionBudget {
    pub(crate) fn new(strategy: Strategy, limits: &SearchLimits) -> Self {
        Self {
            strategy,
            limit: limits.max_expansions,
            expanded: 0,
        }
    }

    /// Record one expansion, failing once the limit is exceeded.
    pub(crate) fn expand(&mut self) -> Result<()> {
        if let Some(limit) = self.limit {
            if self.expanded >= limit {
                return Err(GraphError::SearchAborted {
                    strategy: self.strategy.to_string(),
                    expanded: self.expanded,
                });
            }
        }
        self.expanded += 1;
        Ok(())
    }

    pub(crate) fn expanded(&self) -> usize {
        self.expanded
    }
}

/// Walk predecessor links back from `goal` and return the path start-first.
pub(crate) fn reconstruct_path(
    predecessors: &HashMap<NodeId, NodeId>,
    start: NodeId,
    goal: NodeId,
) -> Vec<NodeId> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        match predecessors.get(&current) {
            Some(&prev) => {
                path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}
