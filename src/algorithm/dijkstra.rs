use std::fmt::Debug;
use num_traits::{Float, Zero};
use ordered_float::OrderedFloat;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{IndexMinPQ, MinHeap};
use crate::graph::edge::as_f64;
use crate::graph::{validate_vertex, DirectedAdjacency, DirectedEdge, EdgeWeightedDigraph};
use crate::{verify, Error, Result};

/// Rejects digraphs with a negative edge weight
pub(crate) fn check_nonnegative<W>(graph: &EdgeWeightedDigraph<W>) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
{
    match graph.negative_weight_edge() {
        Some(e) => Err(Error::NegativeWeight {
            edge: e.to_string(),
            weight: as_f64(e.weight()),
        }),
        None => Ok(()),
    }
}

/// Classic Dijkstra's algorithm on an indexed priority queue.
///
/// Keeps at most one queue entry per vertex and lowers its key when a shorter
/// path shows up, for `O(E log V)` time. Requires nonnegative weights.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W> ShortestPathAlgorithm<W> for Dijkstra
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &EdgeWeightedDigraph<W>, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        validate_vertex(source, n)?;
        check_nonnegative(graph)?;

        let mut dist_to = vec![W::infinity(); n];
        let mut edge_to: Vec<Option<DirectedEdge<W>>> = vec![None; n];
        dist_to[source] = W::zero();

        let mut pq = IndexMinPQ::new(n);
        pq.insert(source, W::zero());
        let mut settled = 0usize;
        while let Some(v) = pq.del_min() {
            settled += 1;
            for e in graph.adj(v) {
                let w = e.to();
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
        log::debug!("dijkstra from {}: settled {} of {} vertices", source, settled, n);

        let result = ShortestPathResult::new(source, dist_to, edge_to);
        if verify::ENABLED {
            verify::check_shortest_paths(graph, &result)?;
        }
        Ok(result)
    }
}

/// Lazy variant of Dijkstra's algorithm.
///
/// Pushes every edge leaving a newly settled vertex onto a plain binary heap,
/// keyed by the length of the path it completes, and discards edges into
/// vertices that were settled in the meantime. `O(E log E)` time, `O(E)` space.
#[derive(Debug, Default, Clone, Copy)]
pub struct LazyDijkstra;

impl LazyDijkstra {
    pub fn new() -> Self {
        LazyDijkstra
    }
}

impl<W> ShortestPathAlgorithm<W> for LazyDijkstra
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Lazy Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &EdgeWeightedDigraph<W>, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        validate_vertex(source, n)?;
        check_nonnegative(graph)?;

        let mut dist_to = vec![W::infinity(); n];
        let mut edge_to: Vec<Option<DirectedEdge<W>>> = vec![None; n];
        let mut marked = vec![false; n];
        // entries are (tail, slot) of an edge, keyed by dist_to[tail] + weight
        let mut heap: MinHeap<(usize, usize), OrderedFloat<W>> = MinHeap::new();

        dist_to[source] = W::zero();
        marked[source] = true;
        push_edges(graph, source, &dist_to, &marked, &mut heap);

        while let Some(((v, slot), OrderedFloat(length))) = heap.pop() {
            let e = graph.adj(v)[slot];
            let w = e.to();
            if marked[w] {
                continue;
            }
            marked[w] = true;
            dist_to[w] = length;
            edge_to[w] = Some(e);
            push_edges(graph, w, &dist_to, &marked, &mut heap);
        }
        log::debug!(
            "lazy dijkstra from {}: reached {} of {} vertices",
            source,
            marked.iter().filter(|&&m| m).count(),
            n
        );

        let result = ShortestPathResult::new(source, dist_to, edge_to);
        if verify::ENABLED {
            verify::check_shortest_paths(graph, &result)?;
        }
        Ok(result)
    }
}

fn push_edges<W>(
    graph: &EdgeWeightedDigraph<W>,
    v: usize,
    dist_to: &[W],
    marked: &[bool],
    heap: &mut MinHeap<(usize, usize), OrderedFloat<W>>,
) where
    W: Float + Zero + Debug + Copy,
{
    for (slot, e) in graph.adj(v).iter().enumerate() {
        if !marked[e.to()] {
            heap.push((v, slot), OrderedFloat(dist_to[v] + e.weight()));
        }
    }
}

/// Shortest paths between every pair of vertices, one Dijkstra run per source.
#[derive(Debug, Clone)]
pub struct DijkstraAllPairs<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    all: Vec<ShortestPathResult<W>>,
}

impl<W> DijkstraAllPairs<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new(graph: &EdgeWeightedDigraph<W>) -> Result<Self> {
        let dijkstra = Dijkstra::new();
        let all = (0..graph.vertex_count())
            .map(|s| dijkstra.compute_shortest_paths(graph, s))
            .collect::<Result<Vec<_>>>()?;
        Ok(DijkstraAllPairs { all })
    }

    /// Returns the single-source result rooted at `s`
    pub fn from_source(&self, s: usize) -> &ShortestPathResult<W> {
        &self.all[s]
    }

    /// Returns the length of a shortest path from `s` to `t`; infinite if none
    pub fn dist(&self, s: usize, t: usize) -> W {
        self.all[s].dist_to(t)
    }

    pub fn has_path(&self, s: usize, t: usize) -> bool {
        self.all[s].has_path_to(t)
    }

    /// Returns a shortest path from `s` to `t`, or `None` if `t` is unreachable
    pub fn path(&self, s: usize, t: usize) -> Option<Vec<DirectedEdge<W>>> {
        self.all[s].path_to(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EdgeWeightedDigraph {
        EdgeWeightedDigraph::from_edges(
            5,
            [(0, 1, 4.0), (0, 2, 1.0), (2, 1, 2.0), (1, 3, 1.0), (2, 3, 5.0)],
        )
        .unwrap()
    }

    #[test]
    fn eager_and_lazy_agree() {
        let g = sample();
        let eager = Dijkstra::new().compute_shortest_paths(&g, 0).unwrap();
        let lazy = LazyDijkstra::new().compute_shortest_paths(&g, 0).unwrap();
        assert_eq!(eager.distances(), lazy.distances());
        assert_eq!(eager.dist_to(3), 4.0);
        assert_eq!(eager.vertex_path_to(3), Some(vec![0, 2, 1, 3]));
        assert!(!eager.has_path_to(4));
        assert!(eager.path_to(4).is_none());
    }

    #[test]
    fn rejects_negative_weight() {
        let g = EdgeWeightedDigraph::from_edges(2, [(0, 1, -1.0)]).unwrap();
        let err = Dijkstra::new().compute_shortest_paths(&g, 0).unwrap_err();
        assert!(matches!(err, Error::NegativeWeight { weight, .. } if weight == -1.0));
    }

    #[test]
    fn rejects_bad_source() {
        let g = sample();
        let err = LazyDijkstra::new().compute_shortest_paths(&g, 9).unwrap_err();
        assert_eq!(err, Error::InvalidVertex { vertex: 9, vertex_count: 5 });
    }

    #[test]
    fn all_pairs_queries() {
        let g = sample();
        let all = DijkstraAllPairs::new(&g).unwrap();
        assert_eq!(all.dist(2, 3), 3.0);
        assert!(!all.has_path(3, 0));
        assert_eq!(all.path(0, 1).map(|p| p.len()), Some(2));
        assert_eq!(all.from_source(4).dist_to(4), 0.0);
    }
}
