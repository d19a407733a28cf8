//! Cycle detection for undirected graphs, digraphs and edge-weighted digraphs.
//!
//! Cycles are reported as closed vertex walks `[w, .., v, w]` that start and
//! end at the same vertex.

use crate::algorithm::dfs::{DepthFirstWalk, DfsEvent, Incident, Outgoing};
use crate::graph::{DirectedAdjacency, DirectedEdge, EdgeWeightedDigraph, UndirectedAdjacency};
use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::ops::ControlFlow;

/// Walks `edge_to` links from `v` up to `w` and returns `[w, .., v]`
fn tree_path(edge_to: &[Option<usize>], w: usize, v: usize) -> Vec<usize> {
    let mut path = Vec::new();
    let mut x = v;
    while x != w {
        path.push(x);
        match edge_to[x] {
            Some(parent) => x = parent,
            None => break,
        }
    }
    path.push(w);
    path.reverse();
    path
}

/// Finds a cycle in an undirected graph.
///
/// Self-loops and parallel edges are cycles the back-edge test cannot see,
/// because it ignores the edge leading back to the parent, so both are
/// checked first.
#[derive(Debug, Clone)]
pub struct Cycle {
    cycle: Option<Vec<usize>>,
}

impl Cycle {
    pub fn new<G: UndirectedAdjacency + ?Sized>(graph: &G) -> Self {
        let cycle = Self::find_self_loop(graph)
            .or_else(|| Self::find_parallel_edges(graph))
            .or_else(|| Self::find_back_edge(graph));
        log::debug!("undirected cycle search: found = {}", cycle.is_some());
        Cycle { cycle }
    }

    /// Returns true if the graph has a cycle
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns a cycle as a closed vertex walk, if one exists
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }

    fn find_self_loop<G: UndirectedAdjacency + ?Sized>(graph: &G) -> Option<Vec<usize>> {
        (0..graph.vertex_count())
            .find(|&v| graph.neighbors(v).any(|w| w == v))
            .map(|v| vec![v, v])
    }

    fn find_parallel_edges<G: UndirectedAdjacency + ?Sized>(graph: &G) -> Option<Vec<usize>> {
        let mut marked = vec![false; graph.vertex_count()];
        for v in 0..graph.vertex_count() {
            for w in graph.neighbors(v) {
                if marked[w] {
                    return Some(vec![v, w, v]);
                }
                marked[w] = true;
            }
            for w in graph.neighbors(v) {
                marked[w] = false;
            }
        }
        None
    }

    fn find_back_edge<G: UndirectedAdjacency + ?Sized>(graph: &G) -> Option<Vec<usize>> {
        let n = graph.vertex_count();
        let mut edge_to: Vec<Option<usize>> = vec![None; n];
        let mut found = None;
        let mut walk = DepthFirstWalk::new(n);

        for s in 0..n {
            let flow = walk.walk(&Incident(graph), s, |event| match event {
                DfsEvent::Discover { vertex, tree_edge } => {
                    edge_to[vertex] = tree_edge.map(|(parent, _)| parent);
                    ControlFlow::Continue(())
                }
                DfsEvent::Revisit { from, to, .. } if edge_to[from] != Some(to) => {
                    let mut cycle = tree_path(&edge_to, to, from);
                    cycle.push(to);
                    found = Some(cycle);
                    ControlFlow::Break(())
                }
                _ => ControlFlow::Continue(()),
            });
            if flow.is_break() {
                break;
            }
        }
        found
    }
}

/// Finds a directed cycle with a three-colour depth-first search.
///
/// A vertex is unvisited, on the stack while its subtree is being explored,
/// or done. An edge into an on-stack vertex closes a cycle.
#[derive(Debug, Clone)]
pub struct DirectedCycle {
    cycle: Option<Vec<usize>>,
    /// `(tail, slot)` of each edge on the cycle, in walk order
    slots: Vec<(usize, usize)>,
}

impl DirectedCycle {
    pub fn new<G: DirectedAdjacency + ?Sized>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut edge_to: Vec<Option<(usize, usize)>> = vec![None; n];
        let mut on_stack = vec![false; n];
        let mut result = DirectedCycle {
            cycle: None,
            slots: Vec::new(),
        };
        let mut walk = DepthFirstWalk::new(n);

        for s in 0..n {
            let flow = walk.walk(&Outgoing(graph), s, |event| match event {
                DfsEvent::Discover { vertex, tree_edge } => {
                    edge_to[vertex] = tree_edge;
                    on_stack[vertex] = true;
                    ControlFlow::Continue(())
                }
                DfsEvent::Finish { vertex, .. } => {
                    on_stack[vertex] = false;
                    ControlFlow::Continue(())
                }
                DfsEvent::Revisit { from, slot, to } if on_stack[to] => {
                    result.trace_back(&edge_to, from, slot, to);
                    ControlFlow::Break(())
                }
                DfsEvent::Revisit { .. } => ControlFlow::Continue(()),
            });
            if flow.is_break() {
                break;
            }
        }

        log::debug!(
            "directed cycle search over {} vertices: found = {}",
            n,
            result.cycle.is_some()
        );
        result
    }

    /// Records the cycle `to -> .. -> from -> to` closed by edge `from --slot--> to`
    fn trace_back(&mut self, edge_to: &[Option<(usize, usize)>], from: usize, slot: usize, to: usize) {
        let mut slots = vec![(from, slot)];
        let mut x = from;
        while x != to {
            match edge_to[x] {
                Some((parent, parent_slot)) => {
                    slots.push((parent, parent_slot));
                    x = parent;
                }
                None => break,
            }
        }
        slots.reverse();

        let mut cycle: Vec<usize> = slots.iter().map(|&(tail, _)| tail).collect();
        cycle.push(to);
        self.cycle = Some(cycle);
        self.slots = slots;
    }

    /// Returns true if the digraph has a directed cycle
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns a directed cycle as a closed vertex walk, if one exists
    pub fn cycle(&self) -> Option<&[usize]> {
        self.cycle.as_deref()
    }

    pub(crate) fn slots(&self) -> &[(usize, usize)] {
        &self.slots
    }
}

/// Finds a directed cycle in an edge-weighted digraph and reports its edges
#[derive(Debug, Clone)]
pub struct EdgeWeightedDirectedCycle<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    cycle: Option<Vec<DirectedEdge<W>>>,
}

impl<W> EdgeWeightedDirectedCycle<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub fn new(graph: &EdgeWeightedDigraph<W>) -> Self {
        let finder = DirectedCycle::new(graph);
        let cycle = finder.has_cycle().then(|| {
            finder
                .slots()
                .iter()
                .map(|&(tail, slot)| graph.adj(tail)[slot])
                .collect()
        });
        EdgeWeightedDirectedCycle { cycle }
    }

    /// Returns true if the digraph has a directed cycle
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Returns the edges of a directed cycle in walk order, if one exists
    pub fn cycle(&self) -> Option<&[DirectedEdge<W>]> {
        self.cycle.as_deref()
    }

    /// Returns the cycle, consuming the finder
    pub fn into_cycle(self) -> Option<Vec<DirectedEdge<W>>> {
        self.cycle
    }
}
