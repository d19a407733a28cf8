pub mod traits;
pub mod edge;
pub mod undirected;
pub mod directed;
pub mod edge_weighted;
pub mod edge_weighted_directed;
pub mod generators;

pub use traits::{DirectedAdjacency, UndirectedAdjacency};
pub use edge::{DirectedEdge, Edge};
pub use undirected::Graph;
pub use directed::Digraph;
pub use edge_weighted::EdgeWeightedGraph;
pub use edge_weighted_directed::EdgeWeightedDigraph;

use crate::{Error, Result};

/// Checks that `vertex` lies in `[0, vertex_count)`.
pub(crate) fn validate_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(Error::InvalidVertex { vertex, vertex_count })
    }
}
