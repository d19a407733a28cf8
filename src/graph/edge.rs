use num_traits::{Float, Zero};
use std::fmt::{self, Debug, Display};

/// Converts a generic weight to `f64` for reporting
pub(crate) fn as_f64<W: Float>(weight: W) -> f64 {
    weight.to_f64().unwrap_or(f64::NAN)
}

/// A weighted undirected edge `v-w`.
///
/// Edges are immutable values; a graph stores each one once and refers to it
/// from the adjacency lists of both endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    v: usize,
    w: usize,
    weight: W,
}

impl<W> Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates an edge between `v` and `w` with the given weight
    pub fn new(v: usize, w: usize, weight: W) -> Self {
        Edge { v, w, weight }
    }

    /// Returns the weight of this edge
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Returns either endpoint of this edge
    pub fn either(&self) -> usize {
        self.v
    }

    /// Returns the endpoint of this edge that is different from `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not an endpoint of this edge.
    pub fn other(&self, vertex: usize) -> usize {
        if vertex == self.v {
            self.w
        } else if vertex == self.w {
            self.v
        } else {
            panic!("vertex {} is not an endpoint of edge {}", vertex, self)
        }
    }

    /// Returns true if both endpoints coincide
    pub fn is_self_loop(&self) -> bool {
        self.v == self.w
    }
}

impl<W> Display for Edge<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} {:.5}", self.v, self.w, as_f64(self.weight))
    }
}

/// A weighted directed edge `from->to`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectedEdge<W = f64>
where
    W: Float + Zero + Debug + Copy,
{
    from: usize,
    to: usize,
    weight: W,
}

impl<W> DirectedEdge<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a directed edge from `from` to `to` with the given weight
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        DirectedEdge { from, to, weight }
    }

    /// Returns the tail vertex of this edge
    pub fn from(&self) -> usize {
        self.from
    }

    /// Returns the head vertex of this edge
    pub fn to(&self) -> usize {
        self.to
    }

    /// Returns the weight of this edge
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Returns the same edge pointing the other way
    pub fn reversed(&self) -> Self {
        DirectedEdge {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }
}

impl<W> Display for DirectedEdge<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{} {:5.2}", self.from, self.to, as_f64(self.weight))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_returns_opposite_endpoint() {
        let e = Edge::new(4, 7, 0.37);
        assert_eq!(e.either(), 4);
        assert_eq!(e.other(4), 7);
        assert_eq!(e.other(7), 4);
        assert!(!e.is_self_loop());
        assert_eq!(e.to_string(), "4-7 0.37000");
    }

    #[test]
    #[should_panic(expected = "not an endpoint")]
    fn other_rejects_foreign_vertex() {
        Edge::new(1, 2, 0.5).other(3);
    }

    #[test]
    fn directed_edge_accessors() {
        let e = DirectedEdge::new(6, 2, 0.40);
        assert_eq!((e.from(), e.to()), (6, 2));
        assert_eq!(e.reversed().from(), 2);
        assert_eq!(e.to_string(), "6->2  0.40");
    }
}
