use std::fmt::Debug;

/// Trait representing a directed graph whose outgoing edges are addressed by slot.
///
/// Slot `i` of vertex `v` is the `i`-th entry of `v`'s adjacency list. The
/// explicit-stack depth-first searches keep `(vertex, next slot)` frames, so
/// they only need this positional view and run unchanged on weighted and
/// unweighted digraphs.
pub trait DirectedAdjacency: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the number of edges leaving a vertex
    fn out_degree(&self, vertex: usize) -> usize;

    /// Returns the number of edges entering a vertex
    fn in_degree(&self, vertex: usize) -> usize;

    /// Returns the head of the `slot`-th edge leaving `vertex`
    fn successor(&self, vertex: usize, slot: usize) -> usize;

    /// Returns an iterator over the heads of the edges leaving a vertex
    fn successors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new((0..self.out_degree(vertex)).map(move |slot| self.successor(vertex, slot)))
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}

/// Trait representing an undirected graph whose incident edges are addressed by slot.
///
/// A self-loop occupies two slots of its vertex, one per endpoint.
pub trait UndirectedAdjacency: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the number of adjacency entries of a vertex
    fn degree(&self, vertex: usize) -> usize;

    /// Returns the endpoint opposite `vertex` on its `slot`-th incident edge
    fn neighbor(&self, vertex: usize, slot: usize) -> usize;

    /// Returns an iterator over the neighbours of a vertex, with multiplicity
    fn neighbors(&self, vertex: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new((0..self.degree(vertex)).map(move |slot| self.neighbor(vertex, slot)))
    }

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }
}
