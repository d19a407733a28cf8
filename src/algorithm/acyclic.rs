//! Shortest and longest paths in edge-weighted DAGs.
//!
//! Relaxing the vertices in topological order settles each one before any of
//! its out-edges is used, so every edge is relaxed exactly once and arbitrary
//! weights are fine. `O(V + E)`.

use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::topological::Topological;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{validate_vertex, DirectedAdjacency, DirectedEdge, EdgeWeightedDigraph};
use crate::{verify, Error, Result};

/// Which extreme the relaxation seeks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Objective {
    Shortest,
    Longest,
}

impl Objective {
    fn unreached<W: Float>(self) -> W {
        match self {
            Objective::Shortest => W::infinity(),
            Objective::Longest => W::neg_infinity(),
        }
    }

    fn improves<W: Float>(self, candidate: W, current: W) -> bool {
        match self {
            Objective::Shortest => candidate < current,
            Objective::Longest => candidate > current,
        }
    }
}

fn relax_in_order<W>(
    graph: &EdgeWeightedDigraph<W>,
    source: usize,
    objective: Objective,
) -> Result<ShortestPathResult<W>>
where
    W: Float + Zero + Debug + Copy,
{
    let n = graph.vertex_count();
    validate_vertex(source, n)?;
    let topological = Topological::new(graph);
    let order = topological.order().ok_or(Error::NotAcyclic)?;

    let mut dist_to = vec![objective.unreached::<W>(); n];
    let mut edge_to: Vec<Option<DirectedEdge<W>>> = vec![None; n];
    dist_to[source] = W::zero();

    let mut relaxed = 0usize;
    for &v in order {
        if !dist_to[v].is_finite() {
            continue;
        }
        for e in graph.adj(v) {
            relaxed += 1;
            let w = e.to();
            let candidate = dist_to[v] + e.weight();
            if objective.improves(candidate, dist_to[w]) {
                dist_to[w] = candidate;
                edge_to[w] = Some(*e);
            }
        }
    }
    log::debug!("acyclic {:?} paths from {}: relaxed {} edges", objective, source, relaxed);
    Ok(ShortestPathResult::new(source, dist_to, edge_to))
}

/// Shortest paths in a DAG by relaxation in topological order
#[derive(Debug, Default, Clone, Copy)]
pub struct AcyclicShortestPaths;

impl AcyclicShortestPaths {
    pub fn new() -> Self {
        AcyclicShortestPaths
    }
}

impl<W> ShortestPathAlgorithm<W> for AcyclicShortestPaths
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Acyclic SP"
    }

    fn compute_shortest_paths(&self, graph: &EdgeWeightedDigraph<W>, source: usize) -> Result<ShortestPathResult<W>> {
        let result = relax_in_order(graph, source, Objective::Shortest)?;
        if verify::ENABLED {
            verify::check_shortest_paths(graph, &result)?;
        }
        Ok(result)
    }
}

/// Longest paths in a DAG.
///
/// Same relaxation with the comparison flipped; unreachable vertices sit at
/// negative infinity.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcyclicLongestPaths;

impl AcyclicLongestPaths {
    pub fn new() -> Self {
        AcyclicLongestPaths
    }
}

impl<W> ShortestPathAlgorithm<W> for AcyclicLongestPaths
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Acyclic LP"
    }

    fn compute_shortest_paths(&self, graph: &EdgeWeightedDigraph<W>, source: usize) -> Result<ShortestPathResult<W>> {
        let result = relax_in_order(graph, source, Objective::Longest)?;
        if verify::ENABLED {
            verify::check_longest_paths(graph, &result)?;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> EdgeWeightedDigraph {
        EdgeWeightedDigraph::from_edges(
            5,
            [(0, 1, 1.0), (0, 2, 3.0), (1, 3, 4.0), (2, 3, -1.0), (3, 4, 2.0)],
        )
        .unwrap()
    }

    #[test]
    fn shortest_handles_negative_weights() {
        let sp = AcyclicShortestPaths::new().compute_shortest_paths(&diamond(), 0).unwrap();
        assert_eq!(sp.dist_to(3), 2.0);
        assert_eq!(sp.vertex_path_to(4), Some(vec![0, 2, 3, 4]));
    }

    #[test]
    fn longest_flips_the_comparison() {
        let lp = AcyclicLongestPaths::new().compute_shortest_paths(&diamond(), 0).unwrap();
        assert_eq!(lp.dist_to(3), 5.0);
        assert_eq!(lp.dist_to(4), 7.0);
        assert_eq!(lp.vertex_path_to(4), Some(vec![0, 1, 3, 4]));

        let from_two = AcyclicLongestPaths::new().compute_shortest_paths(&diamond(), 2).unwrap();
        assert_eq!(from_two.dist_to(0), f64::NEG_INFINITY);
        assert!(!from_two.has_path_to(1));
    }

    #[test]
    fn cyclic_input_is_rejected() {
        let g = EdgeWeightedDigraph::from_edges(3, [(0, 1, 1.0), (1, 2, 1.0), (2, 1, 1.0)]).unwrap();
        let err = AcyclicShortestPaths::new().compute_shortest_paths(&g, 0).unwrap_err();
        assert_eq!(err, Error::NotAcyclic);
    }
}
