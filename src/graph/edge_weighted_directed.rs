use crate::graph::edge::DirectedEdge;
use crate::graph::traits::DirectedAdjacency;
use crate::graph::validate_vertex;
use crate::Result;
use num_traits::{Float, Zero};
use std::fmt::{self, Debug};

/// An edge-weighted digraph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct EdgeWeightedDigraph<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of edges in the graph
    edge_count: usize,

    /// Outgoing edges for each vertex: vertex_id -> [edge]
    adj: Vec<Vec<DirectedEdge<W>>>,

    /// Number of edges entering each vertex
    in_degree: Vec<usize>,
}

impl<W> EdgeWeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a digraph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        EdgeWeightedDigraph {
            edge_count: 0,
            adj: vec![Vec::new(); vertices],
            in_degree: vec![0; vertices],
        }
    }

    /// Creates a digraph from `(from, to, weight)` triples
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = EdgeWeightedDigraph::new(vertices);
        for (v, w, weight) in edges {
            graph.add_edge(DirectedEdge::new(v, w, weight))?;
        }
        Ok(graph)
    }

    /// Adds a directed edge
    pub fn add_edge(&mut self, edge: DirectedEdge<W>) -> Result<()> {
        validate_vertex(edge.from(), self.adj.len())?;
        validate_vertex(edge.to(), self.adj.len())?;
        self.adj[edge.from()].push(edge);
        self.in_degree[edge.to()] += 1;
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the edges leaving `v` in insertion order
    pub fn adj(&self, v: usize) -> &[DirectedEdge<W>] {
        &self.adj[v]
    }

    /// Returns an iterator over every edge, grouped by tail vertex
    pub fn edges(&self) -> impl Iterator<Item = &DirectedEdge<W>> + '_ {
        self.adj.iter().flatten()
    }

    /// Returns the digraph with every edge reversed
    pub fn reverse(&self) -> EdgeWeightedDigraph<W> {
        let mut reverse = EdgeWeightedDigraph::new(self.adj.len());
        for e in self.edges() {
            let r = e.reversed();
            reverse.adj[r.from()].push(r);
            reverse.in_degree[r.to()] += 1;
            reverse.edge_count += 1;
        }
        reverse
    }

    /// Returns the first edge with a negative weight, if any
    pub fn negative_weight_edge(&self) -> Option<&DirectedEdge<W>> {
        self.edges().find(|e| e.weight() < W::zero())
    }
}

impl<W> DirectedAdjacency for EdgeWeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn out_degree(&self, vertex: usize) -> usize {
        self.adj[vertex].len()
    }

    fn in_degree(&self, vertex: usize) -> usize {
        self.in_degree[vertex]
    }

    fn successor(&self, vertex: usize, slot: usize) -> usize {
        self.adj[vertex][slot].to()
    }
}

impl<W> fmt::Display for EdgeWeightedDigraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.adj.len(), self.edge_count)?;
        for (v, edges) in self.adj.iter().enumerate() {
            write!(f, "{}:", v)?;
            for e in edges {
                write!(f, "  {}", e)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
