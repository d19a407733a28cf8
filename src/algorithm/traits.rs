use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::{DirectedEdge, Edge, EdgeWeightedDigraph};
use crate::Result;

/// Result of a single-source path algorithm: the tree of best paths from the source
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShortestPathResult<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    /// Source vertex ID
    source: usize,

    /// Distance from the source to each vertex; infinite if unreachable
    dist_to: Vec<W>,

    /// Last edge on the best path to each vertex
    edge_to: Vec<Option<DirectedEdge<W>>>,
}

impl<W> ShortestPathResult<W>
where
    W: Float + Zero + Debug + Copy,
{
    pub(crate) fn new(source: usize, dist_to: Vec<W>, edge_to: Vec<Option<DirectedEdge<W>>>) -> Self {
        ShortestPathResult { source, dist_to, edge_to }
    }

    /// Returns the source vertex
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the number of vertices covered by the result
    pub fn vertex_count(&self) -> usize {
        self.dist_to.len()
    }

    /// Returns the length of the best path to `v`; infinite if there is none
    pub fn dist_to(&self, v: usize) -> W {
        self.dist_to[v]
    }

    /// Returns every distance, indexed by vertex
    pub fn distances(&self) -> &[W] {
        &self.dist_to
    }

    /// Returns the last edge on the best path to `v`
    pub fn edge_to(&self, v: usize) -> Option<&DirectedEdge<W>> {
        self.edge_to[v].as_ref()
    }

    /// Returns true if there is a path from the source to `v`
    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to[v].is_finite()
    }

    /// Returns the edges of the best path from the source to `v`, in order,
    /// or `None` if `v` is unreachable
    pub fn path_to(&self, v: usize) -> Option<Vec<DirectedEdge<W>>> {
        if !self.has_path_to(v) {
            return None;
        }
        let mut path = Vec::new();
        let mut current = self.edge_to[v];
        while let Some(e) = current {
            path.push(e);
            // a predecessor cycle would loop forever
            if path.len() > self.edge_to.len() {
                return None;
            }
            current = self.edge_to[e.from()];
        }
        path.reverse();
        Some(path)
    }

    /// Returns the vertices of the best path from the source to `v`
    pub fn vertex_path_to(&self, v: usize) -> Option<Vec<usize>> {
        let edges = self.path_to(v)?;
        let mut vertices = Vec::with_capacity(edges.len() + 1);
        vertices.push(self.source);
        vertices.extend(edges.iter().map(|e| e.to()));
        Some(vertices)
    }
}

/// Trait for single-source path algorithms on edge-weighted digraphs
pub trait ShortestPathAlgorithm<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Compute best paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &EdgeWeightedDigraph<W>, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// A minimum spanning forest of an edge-weighted undirected graph
pub trait MinimumSpanningTree<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the edges of the forest
    fn edges(&self) -> &[Edge<W>];

    /// Returns the sum of the edge weights
    fn weight(&self) -> W;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// A partition of a digraph's vertices into strong components
pub trait StrongComponents {
    /// Returns the number of strong components
    fn count(&self) -> usize;

    /// Returns the component id of `v`, in `[0, count)`
    fn id(&self, v: usize) -> usize;

    /// Returns the number of vertices covered
    fn vertex_count(&self) -> usize;

    /// Returns true if `v` and `w` are mutually reachable
    fn strongly_connected(&self, v: usize, w: usize) -> bool {
        self.id(v) == self.id(w)
    }

    /// Returns the members of each component, indexed by component id
    fn components(&self) -> Vec<Vec<usize>> {
        let mut components = vec![Vec::new(); self.count()];
        for v in 0..self.vertex_count() {
            components[self.id(v)].push(v);
        }
        components
    }
}

/// Sums edge weights in order
pub(crate) fn total_weight<W, I>(weights: I) -> W
where
    W: Float + Zero + Debug + Copy,
    I: IntoIterator<Item = W>,
{
    weights.into_iter().fold(W::zero(), |acc, w| acc + w)
}
