//! Route search example for routegraph
//!
//! This example demonstrates:
//! - Loading an adjacency map from JSON
//! - Running every search strategy on the same graph
//! - Rendering a route as Graphviz DOT
//!
//! Usage: `cargo run --example route_cases [path/to/grafo.json]`

use routegraph::export::export_dot;
use routegraph::{loader, search, GraphError, SearchLimits, Strategy};
use std::path::PathBuf;

const CASES: [(&str, &str); 5] = [
    ("Londrina", "Maringá"),
    ("Primeiro de Maio", "Apucarana"),
    ("Londrina", "Paranavaí"),
    ("Londrina", "Foz do Iguaçu"),
    ("Primeiro de Maio", "Curitiba"),
];

fn main() -> routegraph::Result<()> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/parana.json")
        });

    let graph = loader::load_from_path(&path)?;
    println!(
        "Loaded {} ({} nodes, {} edges)",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );

    for (i, (start, goal)) in CASES.iter().enumerate() {
        println!("\nCase {}: {start} -> {goal}", i + 1);

        for strategy in Strategy::ALL {
            let result = match search(&graph, strategy, start, goal, SearchLimits::default()) {
                Ok(result) => result,
                Err(GraphError::NodeNotFound { node_id }) => {
                    println!("  {strategy}: '{node_id}' is not in the graph");
                    continue;
                }
                Err(e) => return Err(e),
            };

            if !result.found_path() {
                println!("  {strategy}: no path found");
                continue;
            }

            let cost = result.cost.or_else(|| result.path_cost(&graph)).unwrap_or(f64::NAN);
            println!(
                "  {strategy}: {result} ({} hops, cost {cost:.2})",
                result.hops().unwrap_or(0)
            );
        }
    }

    let (start, goal) = CASES[3];
    let cheapest = search(&graph, Strategy::UniformCost, start, goal, SearchLimits::default())?;
    println!("\nGraphviz rendering of the cheapest {start} -> {goal} route:\n");
    print!("{}", export_dot(&graph, Some(&cheapest))?);

    Ok(())
}
