#![allow(dead_code)]

use graph_algos::{Digraph, EdgeWeightedDigraph, EdgeWeightedGraph};

/// Routes `log` output through the test harness; `RUST_LOG=debug` shows it
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The 8-vertex, 16-edge weighted graph used throughout the textbook examples
pub const TINY_EWG: [(usize, usize, f64); 16] = [
    (4, 5, 0.35),
    (4, 7, 0.37),
    (5, 7, 0.28),
    (0, 7, 0.16),
    (0, 4, 0.38),
    (0, 2, 0.26),
    (1, 5, 0.32),
    (1, 7, 0.19),
    (2, 3, 0.17),
    (1, 2, 0.36),
    (1, 3, 0.29),
    (2, 7, 0.34),
    (6, 2, 0.40),
    (3, 6, 0.52),
    (6, 0, 0.58),
    (6, 4, 0.93),
];

pub fn tiny_ewg() -> EdgeWeightedGraph {
    EdgeWeightedGraph::from_edges(8, TINY_EWG).unwrap()
}

/// The same edges read as directed `v->w`
pub fn tiny_ewg_directed() -> EdgeWeightedDigraph {
    EdgeWeightedDigraph::from_edges(8, TINY_EWG).unwrap()
}

/// Digraph with negative edges but no negative cycle
pub fn tiny_ewd_negative() -> EdgeWeightedDigraph {
    EdgeWeightedDigraph::from_edges(
        8,
        [
            (4, 5, 0.35),
            (5, 4, 0.35),
            (4, 7, 0.37),
            (5, 7, 0.28),
            (7, 5, 0.28),
            (5, 1, 0.32),
            (0, 4, 0.38),
            (0, 2, 0.26),
            (7, 3, 0.39),
            (1, 3, 0.29),
            (2, 7, 0.34),
            (6, 2, -1.20),
            (3, 6, 0.52),
            (6, 0, -1.40),
            (6, 4, -1.25),
        ],
    )
    .unwrap()
}

/// Digraph whose 4->5->4 cycle weighs -0.31
pub fn tiny_ewd_negative_cycle() -> EdgeWeightedDigraph {
    EdgeWeightedDigraph::from_edges(
        8,
        [
            (4, 5, 0.35),
            (5, 4, -0.66),
            (4, 7, 0.37),
            (5, 7, 0.28),
            (7, 5, 0.28),
            (5, 1, 0.32),
            (0, 4, 0.38),
            (0, 2, 0.26),
            (7, 3, 0.39),
            (1, 3, 0.29),
            (2, 7, 0.34),
            (6, 2, 0.40),
            (3, 6, 0.52),
            (6, 0, 0.58),
            (6, 4, 0.93),
        ],
    )
    .unwrap()
}

pub fn tiny_ewdag() -> EdgeWeightedDigraph {
    EdgeWeightedDigraph::from_edges(
        8,
        [
            (5, 4, 0.35),
            (4, 7, 0.37),
            (5, 7, 0.28),
            (5, 1, 0.32),
            (4, 0, 0.38),
            (0, 2, 0.26),
            (3, 7, 0.39),
            (1, 3, 0.29),
            (7, 2, 0.34),
            (6, 2, 0.40),
            (3, 6, 0.52),
            (6, 0, 0.58),
            (6, 4, 0.93),
        ],
    )
    .unwrap()
}

/// 13 vertices, 22 edges, five strong components
pub fn tiny_dg() -> Digraph {
    Digraph::from_edges(
        13,
        [
            (4, 2),
            (2, 3),
            (3, 2),
            (6, 0),
            (0, 1),
            (2, 0),
            (11, 12),
            (12, 9),
            (9, 10),
            (9, 11),
            (7, 9),
            (10, 12),
            (11, 4),
            (4, 3),
            (3, 5),
            (6, 8),
            (8, 6),
            (5, 4),
            (0, 5),
            (6, 4),
            (6, 9),
            (7, 6),
        ],
    )
    .unwrap()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
