//! Certificate checks for algorithm results.
//!
//! Each check recomputes an optimality or consistency condition from scratch
//! and reports the first violation as [`Error::Verification`]. They are meant
//! for tests and debugging: the `verify` feature makes every MST, shortest
//! path and strong component constructor run its check before returning.

use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::dijkstra_undirected::DijkstraUndirected;
use crate::algorithm::reachability::TransitiveClosure;
use crate::algorithm::{ShortestPathResult, StrongComponents};
use crate::data_structures::UnionFind;
use crate::graph::{DirectedAdjacency, DirectedEdge, Edge, EdgeWeightedDigraph, EdgeWeightedGraph, UndirectedAdjacency};
use crate::{Error, Result};

/// True when constructors should verify their results
pub(crate) const ENABLED: bool = cfg!(feature = "verify");

fn fail<T>(message: String) -> Result<T> {
    log::debug!("verification failed: {}", message);
    Err(Error::Verification(message))
}

fn tolerance<W: Float>(a: W, b: W) -> W {
    let scale = W::one().max(a.abs()).max(b.abs());
    W::from(1e-10).unwrap_or_else(W::epsilon) * scale
}

/// Returns true if `a` and `b` agree up to rounding; infinities must match exactly
pub fn approx_eq<W: Float>(a: W, b: W) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return a == b;
    }
    (a - b).abs() <= tolerance(a, b)
}

/// Returns true if `a <= b` up to rounding
fn approx_le<W: Float>(a: W, b: W) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return a <= b;
    }
    a <= b + tolerance(a, b)
}

/// Checks that `mst` is a minimum spanning forest of `graph` with total `weight`:
/// the weights add up, the edges form a forest, the forest spans every
/// component, and no edge crossing the cut left by removing a forest edge is
/// lighter than that edge.
pub fn check_spanning_forest<W>(graph: &EdgeWeightedGraph<W>, mst: &[Edge<W>], weight: W) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
{
    let n = graph.vertex_count();
    let total = mst.iter().fold(W::zero(), |acc, e| acc + e.weight());
    if !approx_eq(total, weight) {
        return fail(format!("weight of edges {:?} does not equal reported {:?}", total, weight));
    }

    let mut uf = UnionFind::new(n);
    for e in mst {
        let v = e.either();
        if !uf.union(v, e.other(v)) {
            return fail(format!("edge {} closes a cycle", e));
        }
    }
    for e in graph.edges() {
        let v = e.either();
        if !uf.connected(v, e.other(v)) {
            return fail(format!("edge {} joins two trees of the forest", e));
        }
    }

    for (i, e) in mst.iter().enumerate() {
        let mut cut = UnionFind::new(n);
        for (j, f) in mst.iter().enumerate() {
            if i != j {
                let x = f.either();
                cut.union(x, f.other(x));
            }
        }
        for f in graph.edges() {
            let x = f.either();
            if !cut.connected(x, f.other(x)) && f.weight() < e.weight() && !approx_eq(f.weight(), e.weight()) {
                return fail(format!("edge {} violates the cut optimality of {}", f, e));
            }
        }
    }
    Ok(())
}

fn check_path_tree<W>(
    graph: &EdgeWeightedDigraph<W>,
    result: &ShortestPathResult<W>,
    longest: bool,
) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
{
    let n = graph.vertex_count();
    let s = result.source();
    if result.vertex_count() != n {
        return fail(format!("result covers {} vertices, graph has {}", result.vertex_count(), n));
    }
    if result.dist_to(s) != W::zero() || result.edge_to(s).is_some() {
        return fail(format!("source {} does not start the tree at distance zero", s));
    }

    for v in 0..n {
        if v != s && result.has_path_to(v) != result.edge_to(v).is_some() {
            return fail(format!("distance and tree edge of vertex {} disagree", v));
        }
    }

    // no edge can still improve a distance
    for e in graph.edges() {
        let (v, w) = (e.from(), e.to());
        if !result.has_path_to(v) {
            continue;
        }
        let through = result.dist_to(v) + e.weight();
        let eligible = if longest {
            !approx_le(through, result.dist_to(w))
        } else {
            !approx_le(result.dist_to(w), through)
        };
        if eligible {
            return fail(format!("edge {} is eligible", e));
        }
    }

    // tree edges are tight
    for w in 0..n {
        let Some(e) = result.edge_to(w) else { continue };
        if e.to() != w {
            return fail(format!("tree edge {} does not end at {}", e, w));
        }
        if !approx_eq(result.dist_to(e.from()) + e.weight(), result.dist_to(w)) {
            return fail(format!("tree edge {} is not tight", e));
        }
    }
    Ok(())
}

/// Checks the shortest-path optimality conditions: `dist[w] <= dist[v] + weight`
/// for every edge `v->w`, with equality on tree edges.
pub fn check_shortest_paths<W>(graph: &EdgeWeightedDigraph<W>, result: &ShortestPathResult<W>) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
{
    check_path_tree(graph, result, false)
}

/// Checks the longest-path conditions: `dist[w] >= dist[v] + weight` for
/// every edge `v->w` leaving a reached vertex, with equality on tree edges.
pub fn check_longest_paths<W>(graph: &EdgeWeightedDigraph<W>, result: &ShortestPathResult<W>) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
{
    check_path_tree(graph, result, true)
}

/// Checks shortest-path optimality on an undirected graph, each edge counted
/// in both directions
pub fn check_undirected_shortest_paths<W>(graph: &EdgeWeightedGraph<W>, sp: &DijkstraUndirected<W>) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
{
    let s = sp.source();
    if sp.dist_to(s) != W::zero() || sp.edge_to(s).is_some() {
        return fail(format!("source {} does not start the tree at distance zero", s));
    }
    for e in graph.edges() {
        let v = e.either();
        let w = e.other(v);
        for (a, b) in [(v, w), (w, v)] {
            if sp.has_path_to(a) && !approx_le(sp.dist_to(b), sp.dist_to(a) + e.weight()) {
                return fail(format!("edge {} is eligible", e));
            }
        }
    }
    for w in 0..graph.vertex_count() {
        let Some(e) = sp.edge_to(w) else { continue };
        let v = e.other(w);
        if !approx_eq(sp.dist_to(v) + e.weight(), sp.dist_to(w)) {
            return fail(format!("tree edge {} is not tight", e));
        }
    }
    Ok(())
}

/// Checks that `cycle` is a closed walk of strictly negative total weight
pub fn check_negative_cycle<W>(cycle: &[DirectedEdge<W>]) -> Result<()>
where
    W: Float + Zero + Debug + Copy,
{
    let (Some(first), Some(last)) = (cycle.first(), cycle.last()) else {
        return fail("negative cycle is empty".to_string());
    };
    if last.to() != first.from() {
        return fail(format!("cycle ends at {} but starts at {}", last.to(), first.from()));
    }
    for pair in cycle.windows(2) {
        if pair[0].to() != pair[1].from() {
            return fail(format!("edges {} and {} are not consecutive", pair[0], pair[1]));
        }
    }
    let weight = cycle.iter().fold(W::zero(), |acc, e| acc + e.weight());
    if weight >= W::zero() {
        return fail(format!("cycle weight {:?} is not negative", weight));
    }
    Ok(())
}

/// Checks that `order` is a permutation of the vertices with every edge pointing forward
pub fn check_topological_order<G: DirectedAdjacency + ?Sized>(graph: &G, order: &[usize]) -> Result<()> {
    let n = graph.vertex_count();
    if order.len() != n {
        return fail(format!("order has {} vertices, digraph has {}", order.len(), n));
    }
    let mut rank = vec![usize::MAX; n];
    for (i, &v) in order.iter().enumerate() {
        if v >= n || rank[v] != usize::MAX {
            return fail(format!("vertex {} is out of range or repeated", v));
        }
        rank[v] = i;
    }
    for v in 0..n {
        for w in graph.successors(v) {
            if rank[v] >= rank[w] {
                return fail(format!("edge {}->{} points backwards", v, w));
            }
        }
    }
    Ok(())
}

/// Checks that `cycle` is a closed walk `[w, .., w]` along edges of `graph`
pub fn check_directed_cycle<G: DirectedAdjacency + ?Sized>(graph: &G, cycle: &[usize]) -> Result<()> {
    if cycle.len() < 2 || cycle.first() != cycle.last() {
        return fail(format!("{:?} is not a closed walk", cycle));
    }
    for pair in cycle.windows(2) {
        if !graph.successors(pair[0]).any(|w| w == pair[1]) {
            return fail(format!("{}->{} is not an edge", pair[0], pair[1]));
        }
    }
    Ok(())
}

/// Checks a strong component partition against a brute-force transitive closure.
/// `O(V (V + E))`.
pub fn check_strong_components<G, S>(graph: &G, scc: &S) -> Result<()>
where
    G: DirectedAdjacency + ?Sized,
    S: StrongComponents + ?Sized,
{
    let n = graph.vertex_count();
    if scc.vertex_count() != n {
        return fail(format!("partition covers {} vertices, digraph has {}", scc.vertex_count(), n));
    }
    if let Some(v) = (0..n).find(|&v| scc.id(v) >= scc.count()) {
        return fail(format!("component id {} of vertex {} is out of range", scc.id(v), v));
    }

    let closure = TransitiveClosure::new(graph);
    for v in 0..n {
        for w in 0..n {
            let mutual = closure.reachable(v, w) && closure.reachable(w, v);
            if scc.strongly_connected(v, w) != mutual {
                return fail(format!("vertices {} and {} are misclassified", v, w));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Digraph;

    #[test]
    fn tolerance_is_relative() {
        assert!(approx_eq(0.1 + 0.2, 0.3));
        assert!(approx_eq(1e12 + 1e-3, 1e12));
        assert!(!approx_eq(1.0, 1.001));
        assert!(approx_eq(f64::INFINITY, f64::INFINITY));
        assert!(!approx_eq(f64::INFINITY, 1e300));
    }

    #[test]
    fn rejects_a_heavier_tree() {
        let g = EdgeWeightedGraph::from_edges(3, [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)]).unwrap();
        let good = [Edge::new(0, 1, 1.0), Edge::new(1, 2, 2.0)];
        assert!(check_spanning_forest(&g, &good, 3.0).is_ok());

        let heavy = [Edge::new(0, 1, 1.0), Edge::new(0, 2, 3.0)];
        assert!(matches!(check_spanning_forest(&g, &heavy, 4.0), Err(Error::Verification(_))));
        assert!(check_spanning_forest(&g, &good[..1], 1.0).is_err());
        assert!(check_spanning_forest(&g, &good, 2.5).is_err());
    }

    #[test]
    fn rejects_backward_order_and_open_walk() {
        let g = Digraph::from_edges(3, [(0, 1), (1, 2)]).unwrap();
        assert!(check_topological_order(&g, &[0, 1, 2]).is_ok());
        assert!(check_topological_order(&g, &[1, 0, 2]).is_err());
        assert!(check_topological_order(&g, &[0, 0, 2]).is_err());
        assert!(check_directed_cycle(&g, &[0, 1, 2]).is_err());
    }

    #[test]
    fn negative_cycle_must_close_and_be_negative() {
        let cycle = [DirectedEdge::new(0, 1, 1.0), DirectedEdge::new(1, 0, -2.0)];
        assert!(check_negative_cycle(&cycle).is_ok());
        let positive = [DirectedEdge::new(0, 1, 1.0), DirectedEdge::new(1, 0, 2.0)];
        assert!(check_negative_cycle(&positive).is_err());
        let open = [DirectedEdge::new(0, 1, -1.0), DirectedEdge::new(2, 0, -2.0)];
        assert!(check_negative_cycle(&open).is_err());
        assert!(check_negative_cycle::<f64>(&[]).is_err());
    }
}
