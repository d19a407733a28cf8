use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::data_structures::IndexMinPQ;
use crate::graph::edge::as_f64;
use crate::graph::{validate_vertex, Edge, EdgeWeightedGraph, UndirectedAdjacency};
use crate::{verify, Error, Result};

/// Dijkstra's algorithm on an edge-weighted undirected graph.
///
/// Every edge is usable in both directions. Weights must be nonnegative.
#[derive(Debug, Clone)]
pub struct DijkstraUndirected<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    source: usize,
    dist_to: Vec<W>,
    edge_to: Vec<Option<Edge<W>>>,
}

impl<W> DijkstraUndirected<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Computes a shortest-path tree rooted at `source`
    pub fn new(graph: &EdgeWeightedGraph<W>, source: usize) -> Result<Self> {
        let n = graph.vertex_count();
        validate_vertex(source, n)?;
        if let Some(e) = graph.negative_weight_edge() {
            return Err(Error::NegativeWeight {
                edge: e.to_string(),
                weight: as_f64(e.weight()),
            });
        }

        let mut dist_to = vec![W::infinity(); n];
        let mut edge_to: Vec<Option<Edge<W>>> = vec![None; n];
        dist_to[source] = W::zero();

        let mut pq = IndexMinPQ::new(n);
        pq.insert(source, W::zero());
        while let Some(v) = pq.del_min() {
            for e in graph.adj(v) {
                let w = e.other(v);
                let candidate = dist_to[v] + e.weight();
                if candidate < dist_to[w] {
                    dist_to[w] = candidate;
                    edge_to[w] = Some(*e);
                    if pq.contains(w) {
                        pq.decrease_priority(w, candidate);
                    } else {
                        pq.insert(w, candidate);
                    }
                }
            }
        }
        log::debug!(
            "undirected dijkstra from {}: reached {} of {} vertices",
            source,
            dist_to.iter().filter(|d| d.is_finite()).count(),
            n
        );

        let sp = DijkstraUndirected { source, dist_to, edge_to };
        if verify::ENABLED {
            verify::check_undirected_shortest_paths(graph, &sp)?;
        }
        Ok(sp)
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the length of a shortest path to `v`; infinite if there is none
    pub fn dist_to(&self, v: usize) -> W {
        self.dist_to[v]
    }

    /// Returns the edge through which `v` joined the tree
    pub fn edge_to(&self, v: usize) -> Option<&Edge<W>> {
        self.edge_to[v].as_ref()
    }

    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to[v].is_finite()
    }

    /// Returns the edges of a shortest path from the source to `v`, in order
    pub fn path_to(&self, v: usize) -> Option<Vec<Edge<W>>> {
        if !self.has_path_to(v) {
            return None;
        }
        let mut path = Vec::new();
        let mut x = v;
        while let Some(e) = self.edge_to[x] {
            path.push(e);
            x = e.other(x);
            if path.len() > self.edge_to.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// Returns the vertices of a shortest path from the source to `v`
    pub fn vertex_path_to(&self, v: usize) -> Option<Vec<usize>> {
        let edges = self.path_to(v)?;
        let mut vertices = vec![self.source];
        for e in &edges {
            let last = vertices[vertices.len() - 1];
            vertices.push(e.other(last));
        }
        Some(vertices)
    }
}
