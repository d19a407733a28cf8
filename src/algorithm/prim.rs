use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::traits::{total_weight, MinimumSpanningTree};
use crate::data_structures::IndexMinPQ;
use crate::graph::{Edge, EdgeWeightedGraph, UndirectedAdjacency};
use crate::{verify, Result};

/// Eager version of Prim's algorithm.
///
/// Keeps only the lightest known edge from the tree to each non-tree vertex,
/// in an indexed priority queue keyed by vertex. Runs in `O(E log V)` time and
/// `O(V)` extra space.
#[derive(Debug, Clone)]
pub struct PrimMst<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    mst: Vec<Edge<W>>,
    weight: W,
}

impl<W> PrimMst<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Computes a minimum spanning forest of `graph`
    pub fn new(graph: &EdgeWeightedGraph<W>) -> Result<Self> {
        let n = graph.vertex_count();
        // dist_to[w] = weight of the lightest edge linking w to the tree
        let mut dist_to = vec![W::infinity(); n];
        let mut edge_to: Vec<Option<usize>> = vec![None; n];
        let mut marked = vec![false; n];
        let mut pq = IndexMinPQ::new(n);

        for s in 0..n {
            if marked[s] {
                continue;
            }
            dist_to[s] = W::zero();
            pq.insert(s, dist_to[s]);
            while let Some(v) = pq.del_min() {
                marked[v] = true;
                for &id in graph.edge_ids(v) {
                    let e = graph.edge(id);
                    let w = e.other(v);
                    // an unlinked vertex takes any edge, infinite weights included
                    if marked[w] || (edge_to[w].is_some() && e.weight() >= dist_to[w]) {
                        continue;
                    }
                    dist_to[w] = e.weight();
                    edge_to[w] = Some(id);
                    if pq.contains(w) {
                        pq.decrease_priority(w, dist_to[w]);
                    } else {
                        pq.insert(w, dist_to[w]);
                    }
                }
            }
        }

        let mst: Vec<Edge<W>> = edge_to.iter().flatten().map(|&id| *graph.edge(id)).collect();
        let weight = total_weight(mst.iter().map(|e| e.weight()));
        log::debug!("prim: {} tree edges, weight {:?}", mst.len(), weight);

        if verify::ENABLED {
            verify::check_spanning_forest(graph, &mst, weight)?;
        }
        Ok(PrimMst { mst, weight })
    }
}

impl<W> MinimumSpanningTree<W> for PrimMst<W>
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
        "Prim"
    }
}
