mod common;

use common::{init_logging, tiny_dg};
use graph_algos::algorithm::TransitiveClosure;
use graph_algos::graph::generators::{random_dag, random_digraph};
use graph_algos::graph::DirectedAdjacency;
use graph_algos::verify::check_strong_components;
use graph_algos::{Digraph, GabowScc, KosarajuScc, StrongComponents, TarjanScc};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn all_sccs(graph: &Digraph) -> Vec<(&'static str, Box<dyn StrongComponents>)> {
    let kosaraju: Box<dyn StrongComponents> = Box::new(KosarajuScc::new(graph).unwrap());
    let tarjan: Box<dyn StrongComponents> = Box::new(TarjanScc::new(graph).unwrap());
    let gabow: Box<dyn StrongComponents> = Box::new(GabowScc::new(graph).unwrap());
    vec![("Kosaraju", kosaraju), ("Tarjan", tarjan), ("Gabow", gabow)]
}

fn sorted_components(scc: &dyn StrongComponents) -> Vec<Vec<usize>> {
    let mut components = scc.components();
    components.sort();
    components
}

#[test]
fn test_tiny_digraph_components() {
    init_logging();
    let graph = tiny_dg();
    let expected = vec![vec![0, 2, 3, 4, 5], vec![1], vec![6, 8], vec![7], vec![9, 10, 11, 12]];
    for (name, scc) in all_sccs(&graph) {
        assert_eq!(scc.count(), 5, "{name}");
        assert_eq!(sorted_components(scc.as_ref()), expected, "{name}");
        assert!(scc.strongly_connected(0, 5));
        assert!(!scc.strongly_connected(6, 7));
        check_strong_components(&graph, scc.as_ref()).unwrap();
    }
}

#[test]
fn test_kosaraju_numbers_sinks_first() {
    // components come out in topological order of the kernel DAG, sinks first
    let graph = tiny_dg();
    let scc = KosarajuScc::new(&graph).unwrap();
    assert_eq!(scc.id(1), 0);
    assert_eq!(scc.id(7), scc.count() - 1);
}

#[test]
fn test_dag_has_singleton_components() {
    let mut rng = StdRng::seed_from_u64(21);
    let graph = random_dag(30, 60, &mut rng);
    for (name, scc) in all_sccs(&graph) {
        assert_eq!(scc.count(), 30, "{name}");
    }
}

#[test]
fn test_single_cycle_is_one_component() {
    let graph = Digraph::from_edges(6, (0..6).map(|v| (v, (v + 1) % 6))).unwrap();
    for (name, scc) in all_sccs(&graph) {
        assert_eq!(scc.count(), 1, "{name}");
    }
    let empty = Digraph::new(0);
    for (_, scc) in all_sccs(&empty) {
        assert_eq!(scc.count(), 0);
    }
}

#[test]
fn test_random_digraphs_agree_with_closure() {
    init_logging();
    let mut rng = StdRng::seed_from_u64(99);
    for round in 0..30 {
        let vertices = 10 + round;
        let graph = random_digraph(vertices, vertices + round * 2, &mut rng);
        let closure = TransitiveClosure::new(&graph);
        let sccs = all_sccs(&graph);
        for v in 0..graph.vertex_count() {
            for w in 0..graph.vertex_count() {
                let mutual = closure.reachable(v, w) && closure.reachable(w, v);
                for (name, scc) in &sccs {
                    assert_eq!(scc.strongly_connected(v, w), mutual, "{name}: {v} {w}");
                }
            }
        }
        let counts: Vec<usize> = sccs.iter().map(|(_, scc)| scc.count()).collect();
        assert!(counts.windows(2).all(|pair| pair[0] == pair[1]));
    }
}

// the closure check under `verify` is quadratic
#[cfg(not(feature = "verify"))]
#[test]
fn test_long_cycle_does_not_overflow_stack() {
    let n = 100_000;
    let mut graph = Digraph::from_edges(n, (0..n - 1).map(|v| (v, v + 1))).unwrap();
    graph.add_edge(n - 1, 0).unwrap();
    assert_eq!(TarjanScc::new(&graph).unwrap().count(), 1);
    assert_eq!(GabowScc::new(&graph).unwrap().count(), 1);
    assert_eq!(KosarajuScc::new(&graph).unwrap().count(), 1);
}
