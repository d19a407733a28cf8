use std::collections::VecDeque;
use std::fmt::Debug;
use num_traits::{Float, Zero};

use crate::algorithm::cycle::EdgeWeightedDirectedCycle;
use crate::algorithm::traits::total_weight;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::edge::as_f64;
use crate::graph::{validate_vertex, DirectedAdjacency, DirectedEdge, EdgeWeightedDigraph};
use crate::{verify, Error, Result};

/// Slack added to each relaxation test so rounding noise cannot requeue a vertex forever
pub const DEFAULT_EPSILON: f64 = 1e-14;

/// Queue-based Bellman-Ford algorithm.
///
/// Only vertices whose distance changed in the previous pass are queued for
/// relaxation. Every `k` edge relaxations (`k` defaults to `V`) the current
/// predecessor edges are scanned for a directed cycle; any cycle found there is
/// a negative cycle reachable from the source and stops the search.
/// `O(EV)` time in the worst case, `O(V)` extra space.
#[derive(Debug, Clone, Copy)]
pub struct BellmanFord {
    epsilon: f64,
    cycle_check_interval: Option<usize>,
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self::new()
    }
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance with default configuration
    pub fn new() -> Self {
        BellmanFord {
            epsilon: DEFAULT_EPSILON,
            cycle_check_interval: None,
        }
    }

    /// Sets the relaxation slack
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon.abs();
        self
    }

    /// Checks for a negative cycle after every `interval` edge relaxations
    /// instead of every `V`
    pub fn with_cycle_check_interval(mut self, interval: usize) -> Self {
        self.cycle_check_interval = Some(interval.max(1));
        self
    }

    /// Runs the search from `source`. A negative cycle is part of the result,
    /// not an error.
    pub fn run<W>(&self, graph: &EdgeWeightedDigraph<W>, source: usize) -> Result<BellmanFordResult<W>>
    where
        W: Float + Zero + Debug + Copy,
    {
        let n = graph.vertex_count();
        validate_vertex(source, n)?;

        let mut search = Search {
            graph,
            epsilon: W::from(self.epsilon).unwrap_or_else(W::zero),
            interval: self.cycle_check_interval.unwrap_or(n).max(1),
            dist_to: vec![W::infinity(); n],
            edge_to: vec![None; n],
            on_queue: vec![false; n],
            queue: VecDeque::new(),
            cost: 0,
            cycle: None,
        };
        search.dist_to[source] = W::zero();
        search.queue.push_back(source);
        search.on_queue[source] = true;

        while search.cycle.is_none() {
            let Some(v) = search.queue.pop_front() else { break };
            search.on_queue[v] = false;
            search.relax(v);
        }

        log::debug!(
            "bellman-ford from {}: {} relaxations, negative cycle = {}",
            source,
            search.cost,
            search.cycle.is_some()
        );

        let result = BellmanFordResult {
            source,
            dist_to: search.dist_to,
            edge_to: search.edge_to,
            cycle: search.cycle,
        };
        if verify::ENABLED {
            match result.negative_cycle() {
                Some(cycle) => verify::check_negative_cycle(cycle)?,
                None => verify::check_shortest_paths(graph, &result.tree())?,
            }
        }
        Ok(result)
    }
}

struct Search<'g, W>
where
    W: Float + Zero + Debug + Copy,
{
    graph: &'g EdgeWeightedDigraph<W>,
    epsilon: W,
    interval: usize,
    dist_to: Vec<W>,
    edge_to: Vec<Option<DirectedEdge<W>>>,
    on_queue: Vec<bool>,
    queue: VecDeque<usize>,
    /// number of edge relaxations so far
    cost: usize,
    cycle: Option<Vec<DirectedEdge<W>>>,
}

impl<W> Search<'_, W>
where
    W: Float + Zero + Debug + Copy,
{
    fn relax(&mut self, v: usize) {
        let graph = self.graph;
        for e in graph.adj(v) {
            let w = e.to();
            let candidate = self.dist_to[v] + e.weight();
            if candidate + self.epsilon < self.dist_to[w] {
                self.dist_to[w] = candidate;
                self.edge_to[w] = Some(*e);
                if !self.on_queue[w] {
                    self.queue.push_back(w);
                    self.on_queue[w] = true;
                }
            }

            self.cost += 1;
            if self.cost % self.interval == 0 {
                self.find_negative_cycle();
                if self.cycle.is_some() {
                    return;
                }
            }
        }
    }

    /// Looks for a cycle among the current predecessor edges
    fn find_negative_cycle(&mut self) {
        let mut spt = EdgeWeightedDigraph::new(self.edge_to.len());
        for e in self.edge_to.iter().flatten() {
            // endpoints come from the graph itself
            let _ = spt.add_edge(*e);
        }
        self.cycle = EdgeWeightedDirectedCycle::new(&spt).into_cycle();
        log::trace!(
            "cycle check after {} relaxations: found = {}",
            self.cost,
            self.cycle.is_some()
        );
    }
}

/// Outcome of a Bellman-Ford search: a shortest-path tree, or a negative cycle
/// reachable from the source
#[derive(Debug, Clone)]
pub struct BellmanFordResult<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    source: usize,
    dist_to: Vec<W>,
    edge_to: Vec<Option<DirectedEdge<W>>>,
    cycle: Option<Vec<DirectedEdge<W>>>,
}

impl<W> BellmanFordResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns true if a negative cycle is reachable from the source
    pub fn has_negative_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the edges of a negative cycle in walk order, if there is one
    pub fn negative_cycle(&self) -> Option<&[DirectedEdge<W>]> {
        self.cycle.as_deref()
    }

    fn negative_cycle_error(&self) -> Option<Error> {
        self.cycle.as_ref().map(|cycle| Error::NegativeCycle {
            weight: as_f64(total_weight(cycle.iter().map(|e| e.weight()))),
        })
    }

    /// Returns the length of a shortest path to `v`; infinite if there is none.
    ///
    /// # Errors
    /// [`Error::NegativeCycle`] if a negative cycle makes distances undefined
    pub fn dist_to(&self, v: usize) -> Result<W> {
        match self.negative_cycle_error() {
            Some(err) => Err(err),
            None => Ok(self.dist_to[v]),
        }
    }

    /// Returns true if there is a path from the source to `v`
    pub fn has_path_to(&self, v: usize) -> Result<bool> {
        Ok(self.dist_to(v)?.is_finite())
    }

    /// Returns the edges of a shortest path from the source to `v`
    pub fn path_to(&self, v: usize) -> Result<Option<Vec<DirectedEdge<W>>>> {
        match self.negative_cycle_error() {
            Some(err) => Err(err),
            None => Ok(self.tree().path_to(v)),
        }
    }

    /// Returns the current shortest-path tree, ignoring any negative cycle
    pub fn tree(&self) -> ShortestPathResult<W> {
        ShortestPathResult::new(self.source, self.dist_to.clone(), self.edge_to.clone())
    }

    /// Converts into a shortest-path tree, failing on a negative cycle
    pub fn into_shortest_paths(self) -> Result<ShortestPathResult<W>> {
        if let Some(err) = self.negative_cycle_error() {
            return Err(err);
        }
        Ok(ShortestPathResult::new(self.source, self.dist_to, self.edge_to))
    }
}

impl<W> ShortestPathAlgorithm<W> for BellmanFord
where
    W: Float + Zero + Debug + Copy,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &EdgeWeightedDigraph<W>, source: usize) -> Result<ShortestPathResult<W>> {
        self.run(graph, source)?.into_shortest_paths()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_edges_without_cycle() {
        let g = EdgeWeightedDigraph::from_edges(
            4,
            [(0, 1, 2.0), (0, 2, 5.0), (2, 1, -4.0), (1, 3, 1.0)],
        )
        .unwrap();
        let result = BellmanFord::new().run(&g, 0).unwrap();
        assert!(!result.has_negative_cycle());
        assert_eq!(result.dist_to(1), Ok(1.0));
        assert_eq!(result.dist_to(3), Ok(2.0));
        let path: Vec<usize> = result.path_to(3).unwrap().unwrap().iter().map(|e| e.to()).collect();
        assert_eq!(path, vec![2, 1, 3]);
    }

    #[test]
    fn reports_reachable_negative_cycle() {
        let g = EdgeWeightedDigraph::from_edges(
            4,
            [(0, 1, 1.0), (1, 2, 1.0), (2, 3, -3.0), (3, 1, 1.0)],
        )
        .unwrap();
        let result = BellmanFord::new().run(&g, 0).unwrap();
        let cycle = result.negative_cycle().unwrap();
        let weight: f64 = cycle.iter().map(|e| e.weight()).sum();
        assert!(weight < 0.0);
        assert!(matches!(result.dist_to(2), Err(Error::NegativeCycle { weight }) if weight == -1.0));
        assert!(BellmanFord::new().compute_shortest_paths(&g, 0).is_err());
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let g = EdgeWeightedDigraph::from_edges(4, [(0, 1, 1.0), (2, 3, -1.0), (3, 2, -1.0)]).unwrap();
        let result = BellmanFord::new().with_cycle_check_interval(1).run(&g, 0).unwrap();
        assert!(!result.has_negative_cycle());
        assert_eq!(result.has_path_to(2), Ok(false));
    }
}
