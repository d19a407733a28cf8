mod common;

use common::{assert_close, init_logging, tiny_ewg};
use graph_algos::graph::generators::{random_connected_edge_weighted_graph, random_edge_weighted_graph};
use graph_algos::verify::check_spanning_forest;
use graph_algos::{EdgeWeightedGraph, KruskalMst, LazyPrimMst, MinimumSpanningTree, PrimMst};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn all_msts(graph: &EdgeWeightedGraph) -> Vec<Box<dyn MinimumSpanningTree<f64>>> {
    let lazy_prim: Box<dyn MinimumSpanningTree<f64>> = Box::new(LazyPrimMst::new(graph).unwrap());
    let prim: Box<dyn MinimumSpanningTree<f64>> = Box::new(PrimMst::new(graph).unwrap());
    let kruskal: Box<dyn MinimumSpanningTree<f64>> = Box::new(KruskalMst::new(graph).unwrap());
    vec![lazy_prim, prim, kruskal]
}

fn sorted_pairs(mst: &dyn MinimumSpanningTree<f64>) -> Vec<(usize, usize)> {
    let mut pairs: Vec<(usize, usize)> = mst
        .edges()
        .iter()
        .map(|e| {
            let v = e.either();
            let w = e.other(v);
            (v.min(w), v.max(w))
        })
        .collect();
    pairs.sort_unstable();
    pairs
}

#[test]
fn test_tiny_graph_weight() {
    init_logging();
    let graph = tiny_ewg();
    for mst in all_msts(&graph) {
        assert_eq!(mst.edges().len(), 7, "{}", mst.name());
        assert_close(mst.weight(), 1.81);
        check_spanning_forest(&graph, mst.edges(), mst.weight()).unwrap();
    }
}

#[test]
fn test_tiny_graph_edges() {
    init_logging();
    let graph = tiny_ewg();
    // weights are distinct, so the tree is unique
    let expected = vec![(0, 2), (0, 7), (1, 7), (2, 3), (2, 6), (4, 5), (5, 7)];
    for mst in all_msts(&graph) {
        assert_eq!(sorted_pairs(mst.as_ref()), expected, "{}", mst.name());
    }
}

#[test]
fn test_kruskal_takes_edges_in_weight_order() {
    let graph = tiny_ewg();
    let mst = KruskalMst::new(&graph).unwrap();
    let weights: Vec<f64> = mst.edges().iter().map(|e| e.weight()).collect();
    assert_eq!(weights, vec![0.16, 0.17, 0.19, 0.26, 0.28, 0.35, 0.40]);
}

#[test]
fn test_disconnected_graph_gives_forest() {
    init_logging();
    let graph = EdgeWeightedGraph::from_edges(
        6,
        [(0, 1, 0.5), (1, 2, 0.25), (0, 2, 0.75), (3, 4, 1.0), (4, 4, 0.1)],
    )
    .unwrap();
    for mst in all_msts(&graph) {
        // two trees plus the isolated vertex 5
        assert_eq!(mst.edges().len(), 3, "{}", mst.name());
        assert_close(mst.weight(), 1.75);
        check_spanning_forest(&graph, mst.edges(), mst.weight()).unwrap();
    }
}

#[test]
fn test_empty_and_single_vertex() {
    for n in [0, 1] {
        let graph: EdgeWeightedGraph = EdgeWeightedGraph::new(n);
        for mst in all_msts(&graph) {
            assert!(mst.edges().is_empty());
            assert_eq!(mst.weight(), 0.0);
        }
    }
}

#[test]
fn test_parallel_edges_keep_lightest() {
    let graph = EdgeWeightedGraph::from_edges(2, [(0, 1, 3.0), (1, 0, 1.0), (0, 1, 2.0)]).unwrap();
    for mst in all_msts(&graph) {
        assert_eq!(mst.weight(), 1.0, "{}", mst.name());
    }
}

#[test]
fn test_random_graphs_agree_on_weight() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(42);
    for round in 0..20 {
        let graph = if round % 2 == 0 {
            random_connected_edge_weighted_graph(60, 120, &mut rng)
        } else {
            random_edge_weighted_graph(60, 80, &mut rng)
        };
        let msts = all_msts(&graph);
        let reference = msts[0].weight();
        for mst in &msts {
            assert_close(mst.weight(), reference);
            check_spanning_forest(&graph, mst.edges(), mst.weight()).unwrap();
        }
        if round % 2 == 0 {
            assert!(msts.iter().all(|mst| mst.edges().len() == 59));
        }
    }
}

#[test]
fn test_verification_rejects_non_minimal_tree() {
    let graph = tiny_ewg();
    let mst = PrimMst::new(&graph).unwrap();
    let mut edges = mst.edges().to_vec();
    // swap the 6-2 edge for the heavier 6-0
    let position = edges.iter().position(|e| e.weight() == 0.40).unwrap();
    edges[position] = graph.edges().iter().copied().find(|e| e.weight() == 0.58).unwrap();
    let weight: f64 = edges.iter().map(|e| e.weight()).sum();
    assert!(check_spanning_forest(&graph, &edges, weight).is_err());
}

#[test]
fn test_infinite_bridge_is_spanned() {
    init_logging();
    let graph = EdgeWeightedGraph::from_edges(
        5,
        [(0, 1, 0.5), (1, 2, 0.25), (2, 0, 0.75), (2, 3, f64::INFINITY), (3, 4, 0.125)],
    )
    .unwrap();
    for mst in all_msts(&graph) {
        assert_eq!(mst.edges().len(), 4, "{}", mst.name());
        assert_eq!(mst.weight(), f64::INFINITY, "{}", mst.name());
        assert_eq!(sorted_pairs(mst.as_ref()), vec![(0, 1), (1, 2), (2, 3), (3, 4)], "{}", mst.name());
        check_spanning_forest(&graph, mst.edges(), mst.weight()).unwrap();
    }

    let single = EdgeWeightedGraph::from_edges(2, [(0, 1, f64::INFINITY)]).unwrap();
    let prim = PrimMst::new(&single).unwrap();
    assert_eq!(prim.edges().len(), 1);
}
