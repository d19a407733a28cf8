use std::collections::VecDeque;
use std::ops::ControlFlow;

use crate::algorithm::dfs::{DepthFirstWalk, DfsEvent, Incident, Outgoing, SlotAdjacency};
use crate::graph::{validate_vertex, DirectedAdjacency, UndirectedAdjacency};
use crate::Result;

/// Follows parent links from `v` back to a root and returns the root-first walk
fn trace_back(edge_to: &[Option<usize>], v: usize) -> Vec<usize> {
    let mut path = vec![v];
    let mut x = v;
    while let Some(parent) = edge_to[x] {
        path.push(parent);
        x = parent;
    }
    path.reverse();
    path
}

/// Paths from a single source found by depth-first search.
///
/// The tree is the one a recursive search visiting neighbours in adjacency
/// order would build. Paths are not shortest in general.
#[derive(Debug, Clone)]
pub struct DepthFirstPaths {
    source: usize,
    marked: Vec<bool>,
    edge_to: Vec<Option<usize>>,
}

impl DepthFirstPaths {
    /// Searches an undirected graph from `source`
    pub fn new<G: UndirectedAdjacency + ?Sized>(graph: &G, source: usize) -> Result<Self> {
        validate_vertex(source, graph.vertex_count())?;
        Ok(Self::search(&Incident(graph), source))
    }

    /// Searches a digraph from `source` along edge directions
    pub fn directed<G: DirectedAdjacency + ?Sized>(graph: &G, source: usize) -> Result<Self> {
        validate_vertex(source, graph.vertex_count())?;
        Ok(Self::search(&Outgoing(graph), source))
    }

    fn search<A: SlotAdjacency>(graph: &A, source: usize) -> Self {
        let n = graph.vertex_count();
        let mut edge_to = vec![None; n];
        let mut walk = DepthFirstWalk::new(n);
        let _ = walk.walk(graph, source, |event| {
            if let DfsEvent::Discover { vertex, tree_edge: Some((parent, _)) } = event {
                edge_to[vertex] = Some(parent);
            }
            ControlFlow::Continue(())
        });
        DepthFirstPaths {
            source,
            marked: walk.into_marked(),
            edge_to,
        }
    }

    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns true if `v` is reachable from the source
    pub fn has_path_to(&self, v: usize) -> bool {
        self.marked[v]
    }

    /// Returns the vertices of the tree path from the source to `v`, both included
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.has_path_to(v).then(|| trace_back(&self.edge_to, v))
    }
}

/// Fewest-edge paths from one or more sources, by breadth-first search.
///
/// With several sources every vertex is reached from its nearest one, and
/// `dist_to` counts edges on that path. `O(V + E)`.
#[derive(Debug, Clone)]
pub struct BreadthFirstPaths {
    dist_to: Vec<Option<usize>>,
    edge_to: Vec<Option<usize>>,
}

impl BreadthFirstPaths {
    /// Searches an undirected graph from `source`
    pub fn new<G: UndirectedAdjacency + ?Sized>(graph: &G, source: usize) -> Result<Self> {
        Self::from_sources(graph, [source])
    }

    /// Searches an undirected graph from every vertex of `sources` at once
    pub fn from_sources<G, I>(graph: &G, sources: I) -> Result<Self>
    where
        G: UndirectedAdjacency + ?Sized,
        I: IntoIterator<Item = usize>,
    {
        let sources = collect_sources(graph.vertex_count(), sources)?;
        Ok(Self::search(&Incident(graph), &sources))
    }

    /// Searches a digraph from `source` along edge directions
    pub fn directed<G: DirectedAdjacency + ?Sized>(graph: &G, source: usize) -> Result<Self> {
        Self::directed_from_sources(graph, [source])
    }

    /// Searches a digraph from every vertex of `sources` at once
    pub fn directed_from_sources<G, I>(graph: &G, sources: I) -> Result<Self>
    where
        G: DirectedAdjacency + ?Sized,
        I: IntoIterator<Item = usize>,
    {
        let sources = collect_sources(graph.vertex_count(), sources)?;
        Ok(Self::search(&Outgoing(graph), &sources))
    }

    fn search<A: SlotAdjacency>(graph: &A, sources: &[usize]) -> Self {
        let n = graph.vertex_count();
        let mut dist_to: Vec<Option<usize>> = vec![None; n];
        let mut edge_to = vec![None; n];
        let mut queue = VecDeque::new();

        for &s in sources {
            if dist_to[s].is_none() {
                dist_to[s] = Some(0);
                queue.push_back(s);
            }
        }
        while let Some(v) = queue.pop_front() {
            let next = dist_to[v].map_or(0, |d| d + 1);
            for slot in 0..graph.fanout(v) {
                let w = graph.target(v, slot);
                if dist_to[w].is_none() {
                    dist_to[w] = Some(next);
                    edge_to[w] = Some(v);
                    queue.push_back(w);
                }
            }
        }
        log::trace!(
            "bfs from {:?}: reached {} of {} vertices",
            sources,
            dist_to.iter().flatten().count(),
            n
        );
        BreadthFirstPaths { dist_to, edge_to }
    }

    /// Returns true if `v` is reachable from some source
    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to[v].is_some()
    }

    /// Returns the number of edges on a fewest-edge path to `v`
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.dist_to[v]
    }

    /// Returns the vertices of a fewest-edge path to `v`, starting at its source
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        self.has_path_to(v).then(|| trace_back(&self.edge_to, v))
    }
}

fn collect_sources<I: IntoIterator<Item = usize>>(n: usize, sources: I) -> Result<Vec<usize>> {
    let sources: Vec<usize> = sources.into_iter().collect();
    for &s in &sources {
        validate_vertex(s, n)?;
    }
    Ok(sources)
}
