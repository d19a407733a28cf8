//! Random graph generators used by tests and benchmarks.
//!
//! Every generator draws from the caller's RNG so a seeded `StdRng` reproduces
//! the same graph.

use crate::graph::{Digraph, DirectedEdge, Edge, EdgeWeightedDigraph, EdgeWeightedGraph, Graph};
use rand::prelude::*;

fn endpoints<R: Rng>(vertices: usize, rng: &mut R) -> (usize, usize) {
    (rng.gen_range(0..vertices), rng.gen_range(0..vertices))
}

/// Weight rounded to two decimals in `[0, 1)`
fn unit_weight<R: Rng>(rng: &mut R) -> f64 {
    (rng.gen::<f64>() * 100.0).round() / 100.0
}

/// Generates an undirected graph with `edges` uniformly random edges.
/// Self-loops and parallel edges are allowed.
pub fn random_graph<R: Rng>(vertices: usize, edges: usize, rng: &mut R) -> Graph {
    assert!(vertices > 0 || edges == 0, "cannot place edges without vertices");
    let mut graph = Graph::new(vertices);
    for _ in 0..edges {
        let (v, w) = endpoints(vertices, rng);
        // endpoints are drawn in range
        let _ = graph.add_edge(v, w);
    }
    graph
}

/// Generates an edge-weighted graph with `edges` random edges and weights in `[0, 1)`
pub fn random_edge_weighted_graph<R: Rng>(
    vertices: usize,
    edges: usize,
    rng: &mut R,
) -> EdgeWeightedGraph<f64> {
    assert!(vertices > 0 || edges == 0, "cannot place edges without vertices");
    let mut graph = EdgeWeightedGraph::new(vertices);
    for _ in 0..edges {
        let (v, w) = endpoints(vertices, rng);
        let weight = unit_weight(rng);
        let _ = graph.add_edge(Edge::new(v, w, weight));
    }
    graph
}

/// Generates a connected edge-weighted graph: a random spanning tree plus
/// `extra_edges` random edges on top.
pub fn random_connected_edge_weighted_graph<R: Rng>(
    vertices: usize,
    extra_edges: usize,
    rng: &mut R,
) -> EdgeWeightedGraph<f64> {
    assert!(vertices > 0, "a connected graph needs at least one vertex");
    let mut order: Vec<usize> = (0..vertices).collect();
    order.shuffle(rng);

    let mut graph = EdgeWeightedGraph::new(vertices);
    for i in 1..vertices {
        let parent = order[rng.gen_range(0..i)];
        let weight = unit_weight(rng);
        let _ = graph.add_edge(Edge::new(parent, order[i], weight));
    }
    for _ in 0..extra_edges {
        let (v, w) = endpoints(vertices, rng);
        let weight = unit_weight(rng);
        let _ = graph.add_edge(Edge::new(v, w, weight));
    }
    graph
}

/// Generates a digraph with `edges` uniformly random edges
pub fn random_digraph<R: Rng>(vertices: usize, edges: usize, rng: &mut R) -> Digraph {
    assert!(vertices > 0 || edges == 0, "cannot place edges without vertices");
    let mut graph = Digraph::new(vertices);
    for _ in 0..edges {
        let (v, w) = endpoints(vertices, rng);
        let _ = graph.add_edge(v, w);
    }
    graph
}

/// Generates a DAG: vertices get a hidden random rank and every edge points
/// from lower to higher rank.
pub fn random_dag<R: Rng>(vertices: usize, edges: usize, rng: &mut R) -> Digraph {
    assert!(vertices > 1 || edges == 0, "a DAG with edges needs two vertices");
    let mut rank: Vec<usize> = (0..vertices).collect();
    rank.shuffle(rng);

    let mut graph = Digraph::new(vertices);
    let mut added = 0;
    while added < edges {
        let (v, w) = endpoints(vertices, rng);
        if v == w {
            continue;
        }
        let (from, to) = if v < w { (rank[v], rank[w]) } else { (rank[w], rank[v]) };
        let _ = graph.add_edge(from, to);
        added += 1;
    }
    graph
}

/// Generates an edge-weighted digraph with weights `0.01 * k` for `k` in `[0, 100)`
pub fn random_edge_weighted_digraph<R: Rng>(
    vertices: usize,
    edges: usize,
    rng: &mut R,
) -> EdgeWeightedDigraph<f64> {
    assert!(vertices > 0 || edges == 0, "cannot place edges without vertices");
    let mut graph = EdgeWeightedDigraph::new(vertices);
    for _ in 0..edges {
        let (v, w) = endpoints(vertices, rng);
        let weight = 0.01 * rng.gen_range(0..100) as f64;
        let _ = graph.add_edge(DirectedEdge::new(v, w, weight));
    }
    graph
}

/// Generates an edge-weighted DAG whose weights lie in `[low, high)`.
/// Negative bounds are allowed since DAG relaxation handles them.
pub fn random_edge_weighted_dag<R: Rng>(
    vertices: usize,
    edges: usize,
    low: f64,
    high: f64,
    rng: &mut R,
) -> EdgeWeightedDigraph<f64> {
    let shape = random_dag(vertices, edges, rng);
    let mut graph = EdgeWeightedDigraph::new(vertices);
    for v in 0..vertices {
        for &w in shape.adj(v) {
            let weight = rng.gen_range(low..high);
            let _ = graph.add_edge(DirectedEdge::new(v, w, weight));
        }
    }
    graph
}
