//! Graph loader for JSON adjacency maps.
//!
//! The expected document is an object mapping each node label to an object of
//! `neighbor label -> weight`:
//!
//! ```json
//! {
//!     "Londrina": { "Maringá": 100.0, "Apucarana": 55.0 },
//!     "Maringá": { "Paranavaí": 75.0 }
//! }
//! ```
//!
//! Edges may be declared from one endpoint only; the loaded [`Graph`] is
//! symmetrized. Key order in the document becomes neighbor order in the graph.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphBuilder};
use log::{debug, info};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load a graph from a JSON string.
///
/// # Errors
///
/// - [`GraphError::Serialization`] if the text is not a valid adjacency map
/// - [`GraphError::InvalidWeight`] for negative or non-finite weights
pub fn load_from_str(json: &str) -> Result<Graph> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| GraphError::serialization("Failed to parse adjacency JSON", Some(e)))?;
    from_value(&value)
}

/// Load a graph from any reader producing JSON.
///
/// # Errors
///
/// Same as [`load_from_str`].
pub fn load_from_reader<R: Read>(reader: R) -> Result<Graph> {
    let value: Value = serde_json::from_reader(reader)
        .map_err(|e| GraphError::serialization("Failed to parse adjacency JSON", Some(e)))?;
    from_value(&value)
}

/// Load a graph from a JSON file.
///
/// # Errors
///
/// Returns [`GraphError::Io`] if the file cannot be opened, otherwise the
/// same errors as [`load_from_str`].
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let path = path.as_ref();
    debug!("Loading adjacency map from {}", path.display());
    let file = File::open(path).map_err(|e| {
        GraphError::io(format!("Failed to open {}", path.display()), Some(e))
    })?;
    load_from_reader(BufReader::new(file))
}

/// Build a graph from an already-parsed adjacency document.
///
/// # Errors
///
/// Same as [`load_from_str`].
pub fn from_value(value: &Value) -> Result<Graph> {
    let adjacency = as_object(value, "adjacency map")?;

    let mut builder = GraphBuilder::new();
    for (node, neighbors) in adjacency {
        builder.add_node(node);
        for (neighbor, weight) in as_object(neighbors, node)? {
            let weight = weight.as_f64().ok_or_else(|| {
                GraphError::serialization(
                    format!("Weight of edge {node} -- {neighbor} is not a number: {weight}"),
                    None::<serde_json::Error>,
                )
            })?;
            builder.add_edge(node, neighbor, weight)?;
        }
    }

    let graph = builder.build();
    info!(
        "Loaded graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn as_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        GraphError::serialization(
            format!("Expected a JSON object for {what}, found {value}"),
            None::<serde_json::Error>,
        )
    })
}
