use crate::algorithm::dfs::{DepthFirstWalk, DfsEvent, Outgoing};
use crate::graph::{validate_vertex, DirectedAdjacency};
use crate::Result;
use std::ops::ControlFlow;

/// Vertices reachable from a set of sources
#[derive(Debug, Clone)]
pub struct DirectedDfs {
    marked: Vec<bool>,
    count: usize,
}

impl DirectedDfs {
    /// Marks every vertex reachable from `source`
    pub fn new<G: DirectedAdjacency + ?Sized>(graph: &G, source: usize) -> Result<Self> {
        Self::from_sources(graph, [source])
    }

    /// Marks every vertex reachable from any of `sources`
    pub fn from_sources<G, I>(graph: &G, sources: I) -> Result<Self>
    where
        G: DirectedAdjacency + ?Sized,
        I: IntoIterator<Item = usize>,
    {
        let n = graph.vertex_count();
        let sources: Vec<usize> = sources.into_iter().collect();
        for &s in &sources {
            validate_vertex(s, n)?;
        }
        Ok(Self::walk_from(graph, sources))
    }

    /// Sources must already be valid vertices of `graph`
    fn walk_from<G, I>(graph: &G, sources: I) -> Self
    where
        G: DirectedAdjacency + ?Sized,
        I: IntoIterator<Item = usize>,
    {
        let mut walk = DepthFirstWalk::new(graph.vertex_count());
        let mut count = 0;
        for s in sources {
            let _ = walk.walk(&Outgoing(graph), s, |event| {
                if let DfsEvent::Discover { .. } = event {
                    count += 1;
                }
                ControlFlow::Continue(())
            });
        }
        DirectedDfs {
            marked: walk.into_marked(),
            count,
        }
    }

    /// Returns true if `v` is reachable from a source
    pub fn marked(&self, v: usize) -> bool {
        self.marked[v]
    }

    /// Returns the number of reachable vertices, sources included
    pub fn count(&self) -> usize {
        self.count
    }
}

/// All-pairs reachability by one depth-first search per vertex.
///
/// Costs `O(V (V + E))` time and `O(V^2)` space; used as the brute-force
/// oracle when checking strong components.
#[derive(Debug, Clone)]
pub struct TransitiveClosure {
    reachable: Vec<DirectedDfs>,
}

impl TransitiveClosure {
    pub fn new<G: DirectedAdjacency + ?Sized>(graph: &G) -> Self {
        let reachable = (0..graph.vertex_count())
            .map(|v| DirectedDfs::walk_from(graph, [v]))
            .collect();
        TransitiveClosure { reachable }
    }

    /// Returns true if there is a directed path from `v` to `w`
    pub fn reachable(&self, v: usize, w: usize) -> bool {
        self.reachable[v].marked(w)
    }
}
