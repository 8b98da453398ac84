//! Integration tests for loading adjacency maps from files and readers.

use routegraph::{loader, GraphError};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/parana.json")
}

#[test]
fn test_load_fixture() {
    let graph = loader::load_from_path(fixture_path()).unwrap();

    assert_eq!(graph.node_count(), 18);
    assert_eq!(graph.edge_count(), 24);
    // Only ever declared as neighbors
    assert!(graph.has_node("Curitiba"));
    assert!(graph.has_node("Foz do Iguaçu"));
    assert_eq!(graph.weight("Foz do Iguaçu", "Cascavel"), Some(140.0));
}

#[test]
fn test_fixture_neighbor_order() {
    let graph = loader::load_from_path(fixture_path()).unwrap();

    let londrina: Vec<_> = graph.neighbors("Londrina").map(|(label, _)| label).collect();
    assert_eq!(
        londrina,
        vec!["Cambé", "Ibiporã", "Maringá", "Sertanópolis", "Apucarana"]
    );

    // Declared from Guarapuava first, then from Ponta Grossa
    let curitiba: Vec<_> = graph.neighbors("Curitiba").collect();
    assert_eq!(curitiba, vec![("Guarapuava", 255.0), ("Ponta Grossa", 115.0)]);
}

#[test]
fn test_load_from_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("grafo.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(file, r#"{{"A": {{"B": 1.5}}, "C": {{}}}}"#).unwrap();
    drop(file);

    let graph = loader::load_from_path(&path).unwrap();
    assert_eq!(graph.node_count(), 3);
    assert!(graph.has_node("C"));
    assert_eq!(graph.neighbors("C").count(), 0);
    assert_eq!(graph.weight("B", "A"), Some(1.5));
}

#[test]
fn test_load_from_reader() {
    let data = br#"{"A": {"B": 2}}"#;
    let graph = loader::load_from_reader(&data[..]).unwrap();
    assert_eq!(graph.weight("A", "B"), Some(2.0));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = loader::load_from_path(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, GraphError::Io { .. }));
}

#[test]
fn test_malformed_json_is_serialization_error() {
    let err = loader::load_from_str(r#"{"A": {"B": 1"#).unwrap_err();
    assert!(matches!(err, GraphError::Serialization { .. }));

    let err = loader::load_from_str(r#"{"A": ["B"]}"#).unwrap_err();
    assert!(matches!(err, GraphError::Serialization { .. }));
}

#[test]
fn test_negative_weight_in_file_rejected() {
    let err = loader::load_from_str(r#"{"A": {"B": -3}}"#).unwrap_err();
    match err {
        GraphError::InvalidWeight { from, to, weight } => {
            assert_eq!((from.as_str(), to.as_str(), weight), ("A", "B", -3.0));
        }
        other => panic!("expected InvalidWeight, got {other:?}"),
    }
}
