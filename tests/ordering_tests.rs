mod common;

use common::{init_logging, tiny_dg};
use graph_algos::algorithm::{Cycle, DepthFirstOrder, DirectedCycle, EdgeWeightedDirectedCycle};
use graph_algos::graph::generators::{random_dag, random_digraph, random_graph};
use graph_algos::verify::{check_directed_cycle, check_topological_order};
use graph_algos::{Digraph, EdgeWeightedDigraph, Graph, Topological, TopologicalKahn};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn tiny_dag() -> Digraph {
    Digraph::from_edges(
        13,
        [
            (2, 3),
            (0, 6),
            (0, 1),
            (2, 0),
            (11, 12),
            (9, 12),
            (9, 10),
            (9, 11),
            (3, 5),
            (8, 7),
            (5, 4),
            (0, 5),
            (6, 4),
            (6, 9),
            (7, 6),
        ],
    )
    .unwrap()
}

#[test]
fn test_two_cycle_has_no_order() {
    init_logging();
    let graph = Digraph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 2)]).unwrap();

    let finder = DirectedCycle::new(&graph);
    assert_eq!(finder.cycle(), Some(&[2, 3, 2][..]));

    let dfs = Topological::new(&graph);
    assert!(!dfs.has_order());
    assert!(dfs.order().is_none());
    assert_eq!(dfs.rank(0), None);

    let kahn = TopologicalKahn::new(&graph);
    assert!(!kahn.has_order());
    assert!(kahn.order().is_none());
}

#[test]
fn test_tiny_dag_orders_are_valid() {
    init_logging();
    let graph = tiny_dag();
    let dfs = Topological::new(&graph);
    let kahn = TopologicalKahn::new(&graph);
    check_topological_order(&graph, dfs.order().unwrap()).unwrap();
    check_topological_order(&graph, kahn.order().unwrap()).unwrap();
    assert!(dfs.rank(2).unwrap() < dfs.rank(3).unwrap());
    assert!(kahn.rank(8).unwrap() < kahn.rank(4).unwrap());
}

#[test]
fn test_depth_first_order_relations() {
    let graph = tiny_dag();
    let order = DepthFirstOrder::new(&graph);
    assert_eq!(order.preorder().len(), 13);
    assert_eq!(order.postorder().len(), 13);
    let reversed: Vec<usize> = order.postorder().iter().rev().copied().collect();
    assert_eq!(order.reverse_postorder(), reversed);
    for v in 0..13 {
        assert_eq!(order.preorder()[order.pre(v).unwrap()], v);
        assert_eq!(order.postorder()[order.post(v).unwrap()], v);
    }
}

#[test]
fn test_tiny_digraph_cycle_is_real() {
    let graph = tiny_dg();
    let finder = DirectedCycle::new(&graph);
    let cycle = finder.cycle().unwrap();
    check_directed_cycle(&graph, cycle).unwrap();
}

#[test]
fn test_weighted_cycle_matches_unweighted() {
    let graph = EdgeWeightedDigraph::from_edges(
        5,
        [(0, 1, 0.5), (1, 2, 0.25), (2, 3, 1.5), (3, 1, -0.75), (3, 4, 1.0)],
    )
    .unwrap();
    let cycle = EdgeWeightedDirectedCycle::new(&graph).into_cycle().unwrap();
    let vertices: Vec<usize> = cycle.iter().map(|e| e.from()).collect();
    assert_eq!(vertices, vec![1, 2, 3]);
    assert_eq!(cycle.last().map(|e| e.to()), Some(1));
    assert_eq!(DirectedCycle::new(&graph).cycle(), Some(&[1, 2, 3, 1][..]));
}

#[test]
fn test_random_dags_always_sort() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..25 {
        let graph = random_dag(40, 100, &mut rng);
        assert!(!DirectedCycle::new(&graph).has_cycle());
        check_topological_order(&graph, Topological::new(&graph).order().unwrap()).unwrap();
        check_topological_order(&graph, TopologicalKahn::new(&graph).order().unwrap()).unwrap();
    }
}

#[test]
fn test_random_digraphs_cycle_iff_no_order() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..40 {
        let graph = random_digraph(15, 18, &mut rng);
        let finder = DirectedCycle::new(&graph);
        let dfs = Topological::new(&graph);
        let kahn = TopologicalKahn::new(&graph);
        assert_eq!(finder.has_cycle(), !dfs.has_order());
        assert_eq!(dfs.has_order(), kahn.has_order());
        match finder.cycle() {
            Some(cycle) => check_directed_cycle(&graph, cycle).unwrap(),
            None => check_topological_order(&graph, dfs.order().unwrap()).unwrap(),
        }
    }
}

#[test]
fn test_undirected_cycles() {
    let tree = Graph::from_edges(5, [(0, 1), (0, 2), (2, 3), (2, 4)]).unwrap();
    assert!(!Cycle::new(&tree).has_cycle());

    let mut rng = StdRng::seed_from_u64(9);
    for _ in 0..20 {
        let graph = random_graph(20, 25, &mut rng);
        // more edges than a forest can hold
        assert!(Cycle::new(&graph).has_cycle());
        let cycle = Cycle::new(&graph).cycle().unwrap().to_vec();
        assert_eq!(cycle.first(), cycle.last());
        for pair in cycle.windows(2) {
            assert!(graph.adj(pair[0]).contains(&pair[1]));
        }
    }
}
