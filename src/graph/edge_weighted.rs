use crate::graph::edge::Edge;
use crate::graph::traits::UndirectedAdjacency;
use crate::graph::validate_vertex;
use crate::Result;
use num_traits::{Float, Zero};
use std::fmt::{self, Debug};

/// An edge-weighted undirected graph.
///
/// Edges live once in an arena; the adjacency list of each endpoint holds the
/// edge's index, so parallel edges stay distinguishable by weight.
#[derive(Debug, Clone)]
pub struct EdgeWeightedGraph<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    /// All edges in insertion order
    edges: Vec<Edge<W>>,

    /// Incident edges for each vertex: vertex_id -> [edge index]
    adj: Vec<Vec<usize>>,
}

impl<W> EdgeWeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a graph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        EdgeWeightedGraph {
            edges: Vec::new(),
            adj: vec![Vec::new(); vertices],
        }
    }

    /// Creates a graph from `(v, w, weight)` triples
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let mut graph = EdgeWeightedGraph::new(vertices);
        for (v, w, weight) in edges {
            graph.add_edge(Edge::new(v, w, weight))?;
        }
        Ok(graph)
    }

    /// Adds an undirected edge; a self-loop is listed twice at its vertex
    pub fn add_edge(&mut self, edge: Edge<W>) -> Result<()> {
        let v = edge.either();
        let w = edge.other(v);
        validate_vertex(v, self.adj.len())?;
        validate_vertex(w, self.adj.len())?;

        let id = self.edges.len();
        self.edges.push(edge);
        self.adj[v].push(id);
        self.adj[w].push(id);
        Ok(())
    }

    /// Returns the edges incident to `v`
    pub fn adj(&self, v: usize) -> impl Iterator<Item = &Edge<W>> + '_ {
        self.adj[v].iter().map(move |&id| &self.edges[id])
    }

    /// Returns the indices of the edges incident to `v`
    pub fn edge_ids(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Returns the edge with the given index
    pub fn edge(&self, id: usize) -> &Edge<W> {
        &self.edges[id]
    }

    /// Returns every edge exactly once, in insertion order
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Returns the first edge with a negative weight, if any
    pub fn negative_weight_edge(&self) -> Option<&Edge<W>> {
        self.edges.iter().find(|e| e.weight() < W::zero())
    }
}

impl<W> UndirectedAdjacency for EdgeWeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn degree(&self, vertex: usize) -> usize {
        self.adj[vertex].len()
    }

    fn neighbor(&self, vertex: usize, slot: usize) -> usize {
        self.edges[self.adj[vertex][slot]].other(vertex)
    }
}

impl<W> fmt::Display for EdgeWeightedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.adj.len(), self.edges.len())?;
        for v in 0..self.adj.len() {
            write!(f, "{}:", v)?;
            for e in self.adj(v) {
                write!(f, "  {}", e)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
