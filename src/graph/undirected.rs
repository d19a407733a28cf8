use crate::graph::traits::UndirectedAdjacency;
use crate::graph::validate_vertex;
use crate::Result;
use std::fmt;

/// An undirected graph implementation using adjacency lists
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Number of edges in the graph
    edge_count: usize,

    /// Neighbours of each vertex: vertex_id -> [adjacent vertex]
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates a graph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        Graph {
            edge_count: 0,
            adj: vec![Vec::new(); vertices],
        }
    }

    /// Creates a graph from an edge list
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Graph::new(vertices);
        for (v, w) in edges {
            graph.add_edge(v, w)?;
        }
        Ok(graph)
    }

    /// Adds the undirected edge `v-w`.
    ///
    /// The edge is recorded in the lists of both endpoints, so a self-loop
    /// shows up twice in the list of its vertex and counts two toward its degree.
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        validate_vertex(v, self.adj.len())?;
        validate_vertex(w, self.adj.len())?;
        self.edge_count += 1;
        self.adj[v].push(w);
        self.adj[w].push(v);
        Ok(())
    }

    /// Returns the neighbours of `v` in insertion order
    pub fn adj(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Returns the number of self-loops
    pub fn self_loops(&self) -> usize {
        let entries: usize = self
            .adj
            .iter()
            .enumerate()
            .map(|(v, neighbours)| neighbours.iter().filter(|&&w| w == v).count())
            .sum();
        entries / 2
    }

    /// Returns the largest vertex degree, zero for an empty graph
    pub fn max_degree(&self) -> usize {
        self.adj.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Returns the average vertex degree
    pub fn average_degree(&self) -> f64 {
        if self.adj.is_empty() {
            return 0.0;
        }
        2.0 * self.edge_count as f64 / self.adj.len() as f64
    }
}

impl UndirectedAdjacency for Graph {
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn degree(&self, vertex: usize) -> usize {
        self.adj[vertex].len()
    }

    fn neighbor(&self, vertex: usize, slot: usize) -> usize {
        self.adj[vertex][slot]
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.adj.len(), self.edge_count)?;
        for (v, neighbours) in self.adj.iter().enumerate() {
            write!(f, "{}:", v)?;
            for w in neighbours {
                write!(f, " {}", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
