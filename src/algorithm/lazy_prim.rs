use std::fmt::Debug;
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use crate::algorithm::traits::{total_weight, MinimumSpanningTree};
use crate::data_structures::MinHeap;
use crate::graph::{Edge, EdgeWeightedGraph, UndirectedAdjacency};
use crate::{verify, Result};

/// Lazy version of Prim's algorithm.
///
/// Keeps every crossing edge seen so far on a heap, including ones that became
/// obsolete when both endpoints joined the tree; those are skipped when popped.
/// Runs in `O(E log E)` time and `O(E)` extra space. Restarts from every
/// unmarked vertex, so a disconnected graph yields a spanning forest.
#[derive(Debug, Clone)]
pub struct LazyPrimMst<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    mst: Vec<Edge<W>>,
    weight: W,
}

struct LazyPrimState<'g, W>
where
    W: Float + Zero + Debug + Copy,
{
    graph: &'g EdgeWeightedGraph<W>,
    marked: Vec<bool>,
    heap: MinHeap<usize, OrderedFloat<W>>,
    mst: Vec<Edge<W>>,
}

impl<W> LazyPrimState<'_, W>
where
    W: Float + Zero + Debug + Copy,
{
    fn prim(&mut self, s: usize) {
        self.scan(s);
        while let Some((id, _)) = self.heap.pop() {
            let e = *self.graph.edge(id);
            let v = e.either();
            let w = e.other(v);
            if self.marked[v] && self.marked[w] {
                continue;
            }
            self.mst.push(e);
            if !self.marked[v] {
                self.scan(v);
            }
            if !self.marked[w] {
                self.scan(w);
            }
        }
    }

    /// Marks `v` and queues every edge from `v` to an unmarked vertex
    fn scan(&mut self, v: usize) {
        self.marked[v] = true;
        for &id in self.graph.edge_ids(v) {
            let e = self.graph.edge(id);
            if !self.marked[e.other(v)] {
                self.heap.push(id, OrderedFloat(e.weight()));
            }
        }
    }
}

impl<W> LazyPrimMst<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Computes a minimum spanning forest of `graph`
    pub fn new(graph: &EdgeWeightedGraph<W>) -> Result<Self> {
        let n = graph.vertex_count();
        let mut state = LazyPrimState {
            graph,
            marked: vec![false; n],
            heap: MinHeap::new(),
            mst: Vec::with_capacity(n.saturating_sub(1)),
        };
        for v in 0..n {
            if !state.marked[v] {
                state.prim(v);
            }
        }

        let mst = state.mst;
        let weight = total_weight(mst.iter().map(|e| e.weight()));
        log::debug!("lazy prim: {} tree edges, weight {:?}", mst.len(), weight);

        if verify::ENABLED {
            verify::check_spanning_forest(graph, &mst, weight)?;
        }
        Ok(LazyPrimMst { mst, weight })
    }
}

impl<W> MinimumSpanningTree<W> for LazyPrimMst<W>
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
        "Lazy Prim"
    }
}
