use crate::graph::traits::DirectedAdjacency;
use crate::graph::validate_vertex;
use crate::Result;
use std::fmt;

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone, Default)]
pub struct Digraph {
    /// Number of edges in the graph
    edge_count: usize,

    /// Outgoing edges for each vertex: vertex_id -> [target_vertex]
    adj: Vec<Vec<usize>>,

    /// Number of edges entering each vertex
    in_degree: Vec<usize>,
}

impl Digraph {
    /// Creates a digraph with `vertices` vertices and no edges
    pub fn new(vertices: usize) -> Self {
        Digraph {
            edge_count: 0,
            adj: vec![Vec::new(); vertices],
            in_degree: vec![0; vertices],
        }
    }

    /// Creates a digraph from an edge list
    pub fn from_edges<I>(vertices: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Digraph::new(vertices);
        for (v, w) in edges {
            graph.add_edge(v, w)?;
        }
        Ok(graph)
    }

    /// Adds the directed edge `v->w`
    pub fn add_edge(&mut self, v: usize, w: usize) -> Result<()> {
        validate_vertex(v, self.adj.len())?;
        validate_vertex(w, self.adj.len())?;
        self.adj[v].push(w);
        self.in_degree[w] += 1;
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the heads of the edges leaving `v` in insertion order
    pub fn adj(&self, v: usize) -> &[usize] {
        &self.adj[v]
    }

    /// Returns the digraph with every edge reversed
    pub fn reverse(&self) -> Digraph {
        let mut reverse = Digraph::new(self.adj.len());
        for (v, targets) in self.adj.iter().enumerate() {
            for &w in targets {
                reverse.adj[w].push(v);
                reverse.in_degree[v] += 1;
                reverse.edge_count += 1;
            }
        }
        reverse
    }
}

impl DirectedAdjacency for Digraph {
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
        self.adj[vertex][slot]
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.adj.len(), self.edge_count)?;
        for (v, targets) in self.adj.iter().enumerate() {
            write!(f, "{}:", v)?;
            for w in targets {
                write!(f, " {}", w)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverse_swaps_degrees() {
        let g = Digraph::from_edges(3, [(0, 1), (0, 2), (1, 2)]).unwrap();
        assert_eq!(g.out_degree(0), 2);
        assert_eq!(g.in_degree(2), 2);

        let r = g.reverse();
        assert_eq!(r.edge_count(), 3);
        assert_eq!(r.out_degree(2), 2);
        assert_eq!(r.in_degree(0), 2);
        assert_eq!(r.adj(2), &[0, 1]);
    }
}
