//! Search configuration.

use serde::{Deserialize, Serialize};

/// Limits applied to a single search call.
///
/// A search that reaches a limit is abandoned: its frontier and visited set
/// are dropped and the caller gets [`GraphError::SearchAborted`](crate::GraphError::SearchAborted)
/// instead of a partial path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLimits {
    /// Maximum number of nodes a search may expand (None = unlimited)
    #[serde(default)]
    pub max_expansions: Option<usize>,
}

impl SearchLimits {
    /// No limits.
    pub fn unlimited() -> Self {
        Self::default()
    }

    /// Cap the number of node expansions.
    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }
}
