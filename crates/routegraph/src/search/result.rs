//! The value every search returns.

use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single search: the route found (if any) and its cost.
///
/// An exhausted frontier is a normal outcome, represented by `path == None`.
/// The caller owns the result exclusively; nothing else holds a reference to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathResult {
    /// Node labels from start to goal inclusive, `None` if no path exists
    pub path: Option<Vec<String>>,
    /// Sum of traversed edge weights.
    ///
    /// Uniform-cost search always fills this in (`f64::INFINITY` when no path
    /// exists). Depth- and breadth-first search leave it `None`, except for the
    /// trivial `start == goal` path whose cost is 0.
    ///
    /// JSON has no infinity, so an infinite cost is written as the string
    /// `"Infinity"`.
    #[serde(default, with = "cost_option")]
    pub cost: Option<f64>,
}

mod cost_option {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    const INFINITY: &str = "Infinity";

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cost {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S>(cost: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match cost {
            Some(c) if *c == f64::INFINITY => serializer.serialize_str(INFINITY),
            Some(c) => serializer.serialize_f64(*c),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Cost>::deserialize(deserializer)? {
            Some(Cost::Number(c)) => Ok(Some(c)),
            Some(Cost::Text(text)) if text == INFINITY => Ok(Some(f64::INFINITY)),
            Some(Cost::Text(text)) => Err(D::Error::custom(format!(
                "invalid cost {text:?}, expected a number or \"{INFINITY}\""
            ))),
            None => Ok(None),
        }
    }
}

impl PathResult {
    pub(crate) fn found(path: Vec<String>, cost: Option<f64>) -> Self {
        Self {
            path: Some(path),
            cost,
        }
    }

    pub(crate) fn not_found(cost: Option<f64>) -> Self {
        Self { path: None, cost }
    }

    /// The single-node path for `start == goal`.
    pub(crate) fn trivial(node: &str) -> Self {
        Self::found(vec![node.to_string()], Some(0.0))
    }

    /// Returns true if a path was found.
    pub fn found_path(&self) -> bool {
        self.path.is_some()
    }

    /// Path nodes, empty when no path exists.
    pub fn nodes(&self) -> &[String] {
        self.path.as_deref().unwrap_or(&[])
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len().saturating_sub(1))
    }

    /// Sum of edge weights along the path as stored in `graph`.
    ///
    /// Useful for pricing a depth- or breadth-first route. Returns `None` when
    /// no path exists or when two consecutive nodes are not adjacent in `graph`.
    pub fn path_cost(&self, graph: &Graph) -> Option<f64> {
        let path = self.path.as_ref()?;
        path.windows(2)
            .map(|pair| graph.weight(&pair[0], &pair[1]))
            .sum()
    }
}

impl fmt::Display for PathResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}", path.join(" -> ")),
            None => write!(f, "no path"),
        }
    }
}
