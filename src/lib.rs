//! Graph Algos - classical graph algorithms over vertex-indexed graphs
//!
//! The library computes minimum spanning trees (lazy Prim, eager Prim, Kruskal),
//! single-source shortest paths (Dijkstra, DAG relaxation, Bellman-Ford with
//! negative cycle detection), topological orders and cycles, and strongly
//! connected components (Kosaraju-Sharir, Tarjan, Gabow).
//!
//! Vertices are dense integers in `[0, V)`. Every algorithm is constructed from an
//! already-built graph, runs to completion in its constructor and hands back a
//! result value; nothing is shared between invocations.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod verify;

pub use algorithm::{
    bellman_ford::{BellmanFord, BellmanFordResult},
    dijkstra::Dijkstra,
    gabow::GabowScc,
    kosaraju::KosarajuScc,
    kruskal::KruskalMst,
    lazy_prim::LazyPrimMst,
    prim::PrimMst,
    tarjan::TarjanScc,
    topological::{Topological, TopologicalKahn},
    MinimumSpanningTree, ShortestPathAlgorithm, ShortestPathResult, StrongComponents,
};
/// Re-export main types for convenient use
pub use graph::{DirectedEdge, Digraph, Edge, EdgeWeightedDigraph, EdgeWeightedGraph, Graph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("vertex {vertex} is not between 0 and {}", .vertex_count.saturating_sub(1))]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("edge {edge} has negative weight {weight}")]
    NegativeWeight { edge: String, weight: f64 },

    #[error("digraph is not acyclic")]
    NotAcyclic,

    #[error("negative cost cycle of weight {weight} reachable from source")]
    NegativeCycle { weight: f64 },

    #[error("verification failed: {0}")]
    Verification(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
