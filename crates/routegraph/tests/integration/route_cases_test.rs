//! End-to-end route searches over the Paraná road map fixture.

use routegraph::export::export_dot;
use routegraph::{loader, search, Graph, SearchLimits, Strategy};
use std::path::PathBuf;

fn load_parana() -> Graph {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/parana.json");
    loader::load_from_path(path).unwrap()
}

fn route(graph: &Graph, strategy: Strategy, start: &str, goal: &str) -> (Vec<String>, Option<f64>) {
    let result = search(graph, strategy, start, goal, SearchLimits::default()).unwrap();
    (result.nodes().to_vec(), result.cost)
}

#[test]
fn test_londrina_to_maringa_is_direct() {
    let graph = load_parana();
    for strategy in Strategy::ALL {
        let (path, _) = route(&graph, strategy, "Londrina", "Maringá");
        assert_eq!(path, ["Londrina", "Maringá"], "{strategy}");
    }
    assert_eq!(route(&graph, Strategy::UniformCost, "Londrina", "Maringá").1, Some(100.0));
}

#[test]
fn test_primeiro_de_maio_to_apucarana() {
    let graph = load_parana();

    let (ucs, cost) = route(&graph, Strategy::UniformCost, "Primeiro de Maio", "Apucarana");
    assert_eq!(ucs, ["Primeiro de Maio", "Sertanópolis", "Londrina", "Apucarana"]);
    assert_eq!(cost, Some(129.5));

    let (bfs, _) = route(&graph, Strategy::BreadthFirst, "Primeiro de Maio", "Apucarana");
    assert_eq!(bfs, ucs);

    // With reverse edges interleaved into neighbor order, DFS goes round
    // through Ponta Grossa and Cascavel before reaching Apucarana
    let (dfs, _) = route(&graph, Strategy::DepthFirst, "Primeiro de Maio", "Apucarana");
    assert_eq!(
        dfs,
        [
            "Primeiro de Maio",
            "Sertanópolis",
            "Ibiporã",
            "Cornélio Procópio",
            "Ponta Grossa",
            "Guarapuava",
            "Cascavel",
            "Campo Mourão",
            "Maringá",
            "Apucarana",
        ]
    );
}

#[test]
fn test_londrina_to_paranavai() {
    let graph = load_parana();
    let (path, cost) = route(&graph, Strategy::UniformCost, "Londrina", "Paranavaí");
    assert_eq!(path, ["Londrina", "Maringá", "Paranavaí"]);
    assert_eq!(cost, Some(175.0));
}

#[test]
fn test_londrina_to_foz_do_iguacu() {
    let graph = load_parana();

    let (ucs, cost) = route(&graph, Strategy::UniformCost, "Londrina", "Foz do Iguaçu");
    assert_eq!(ucs, ["Londrina", "Maringá", "Campo Mourão", "Cascavel", "Foz do Iguaçu"]);
    assert_eq!(cost, Some(516.0));

    let (dfs, _) = route(&graph, Strategy::DepthFirst, "Londrina", "Foz do Iguaçu");
    assert_eq!(
        dfs,
        ["Londrina", "Apucarana", "Ivaiporã", "Guarapuava", "Cascavel", "Foz do Iguaçu"]
    );
}

#[test]
fn test_primeiro_de_maio_to_curitiba() {
    let graph = load_parana();
    let expected = [
        "Primeiro de Maio",
        "Sertanópolis",
        "Ibiporã",
        "Cornélio Procópio",
        "Ponta Grossa",
        "Curitiba",
    ];

    for strategy in Strategy::ALL {
        let (path, _) = route(&graph, strategy, "Primeiro de Maio", "Curitiba");
        assert_eq!(path, expected, "{strategy}");
    }
    assert_eq!(
        route(&graph, Strategy::UniformCost, "Primeiro de Maio", "Curitiba").1,
        Some(515.0)
    );
}

#[test]
fn test_rendered_route_highlights_endpoints() {
    let graph = load_parana();
    let result = search(
        &graph,
        Strategy::UniformCost,
        "Londrina",
        "Paranavaí",
        SearchLimits::default(),
    )
    .unwrap();

    let dot = export_dot(&graph, Some(&result)).unwrap();
    assert!(dot.contains("label=\"Paranavaí\""));
    assert_eq!(dot.matches("penwidth=2.5").count(), 2);
}
