use std::fmt::Debug;
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use crate::algorithm::traits::MinimumSpanningTree;
use crate::data_structures::UnionFind;
use crate::graph::{Edge, EdgeWeightedGraph, UndirectedAdjacency};
use crate::{verify, Result};

/// Kruskal's algorithm.
///
/// Takes edges in ascending weight (ties in insertion order) and keeps each one
/// whose endpoints are still in different union-find components, stopping at
/// `V - 1` edges. Runs in `O(E log E)` time, dominated by the sort.
#[derive(Debug, Clone)]
pub struct KruskalMst<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    mst: Vec<Edge<W>>,
    weight: W,
}

impl<W> KruskalMst<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Computes a minimum spanning forest of `graph`
    pub fn new(graph: &EdgeWeightedGraph<W>) -> Result<Self> {
        let n = graph.vertex_count();
        let mut edges: Vec<Edge<W>> = graph.edges().to_vec();
        edges.sort_by_key(|e| OrderedFloat(e.weight()));

        let mut uf = UnionFind::new(n);
        let mut mst = Vec::with_capacity(n.saturating_sub(1));
        let mut weight = W::zero();
        for e in edges {
            if mst.len() + 1 >= n.max(1) {
                break;
            }
            let v = e.either();
            let w = e.other(v);
            if uf.union(v, w) {
                mst.push(e);
                weight = weight + e.weight();
            }
        }
        log::debug!(
            "kruskal: {} tree edges, {} components, weight {:?}",
            mst.len(),
            uf.count(),
            weight
        );

        if verify::ENABLED {
            verify::check_spanning_forest(graph, &mst, weight)?;
        }
        Ok(KruskalMst { mst, weight })
    }
}

impl<W> MinimumSpanningTree<W> for KruskalMst<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn edges(&self) -> &[Edge<W>] {
        &self.mst
    }

    fn weight(&self) -> W {
        self.weight
    }

    fn name(&self) -> &'static str {
        "Kruskal"
    }
}
