//! Error types for routegraph operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.
//! An exhausted frontier is not an error: it is encoded as an absent path in
//! [`PathResult`](crate::PathResult).

use thiserror::Error;

/// Result type alias for routegraph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for graph construction, loading, search and export.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A search endpoint is not a node of the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// Label of the missing node
        node_id: String,
    },

    /// Edge weight is negative, NaN or infinite
    #[error("Invalid weight {weight} on edge {from} -- {to}: weights must be finite and non-negative")]
    InvalidWeight {
        /// One endpoint of the offending edge
        from: String,
        /// Other endpoint of the offending edge
        to: String,
        /// The rejected weight
        weight: f64,
    },

    /// Invalid operation (e.g., unknown search strategy name)
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Reading adjacency data failed
    #[error("I/O error: {message}")]
    Io {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The configured expansion limit was reached before the search finished
    #[error("{strategy} search aborted after expanding {expanded} nodes")]
    SearchAborted {
        /// Strategy that was running
        strategy: String,
        /// Number of nodes expanded when the limit was hit
        expanded: usize,
    },
}

impl GraphError {
    /// Create a node-not-found error for the given label.
    pub fn node_not_found(label: impl Into<String>) -> Self {
        Self::NodeNotFound {
            node_id: label.into(),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create an I/O error from a message and optional source.
    pub fn io<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Io {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
