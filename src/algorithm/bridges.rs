use std::ops::ControlFlow;

use crate::algorithm::dfs::{DepthFirstWalk, DfsEvent, Incident};
use crate::graph::UndirectedAdjacency;

/// Bridges of an undirected graph, the edges whose removal disconnects their
/// endpoints.
///
/// Tree edge `p-v` of a depth-first forest is a bridge exactly when no back
/// edge from the subtree of `v` reaches `p` or above, that is when
/// `low[v] == pre[v]`. Only one copy of the edge back to the parent is
/// treated as the tree edge, so parallel edges are never bridges. `O(V + E)`.
#[derive(Debug, Clone)]
pub struct Bridges {
    bridges: Vec<(usize, usize)>,
    trees: usize,
}

impl Bridges {
    pub fn new<G: UndirectedAdjacency + ?Sized>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut pre = vec![0; n];
        let mut low = vec![0; n];
        let mut parent: Vec<Option<usize>> = vec![None; n];
        // whether the copy of the tree edge in v's own list has been passed
        let mut skipped_tree_edge = vec![false; n];
        let mut counter = 0;
        let mut bridges = Vec::new();
        let mut trees = 0;
        let mut walk = DepthFirstWalk::new(n);

        for s in 0..n {
            if walk.is_marked(s) {
                continue;
            }
            trees += 1;
            let _ = walk.walk(&Incident(graph), s, |event| {
                match event {
                    DfsEvent::Discover { vertex, tree_edge } => {
                        pre[vertex] = counter;
                        low[vertex] = counter;
                        counter += 1;
                        parent[vertex] = tree_edge.map(|(p, _)| p);
                    }
                    DfsEvent::Revisit { from, to, .. } => {
                        if parent[from] == Some(to) && !skipped_tree_edge[from] {
                            skipped_tree_edge[from] = true;
                        } else {
                            low[from] = low[from].min(pre[to]);
                        }
                    }
                    DfsEvent::Finish { vertex, parent: Some(p) } => {
                        low[p] = low[p].min(low[vertex]);
                        if low[vertex] == pre[vertex] {
                            bridges.push((p, vertex));
                        }
                    }
                    DfsEvent::Finish { parent: None, .. } => {}
                }
                ControlFlow::Continue(())
            });
        }
        log::debug!("bridges: {} over {} vertices", bridges.len(), n);
        Bridges { bridges, trees }
    }

    /// Returns the bridges as `(parent, child)` pairs of the search forest, in
    /// the order their subtrees finished
    pub fn bridges(&self) -> &[(usize, usize)] {
        &self.bridges
    }

    /// Returns the number of bridges
    pub fn count(&self) -> usize {
        self.bridges.len()
    }

    /// Returns true if `v-w` is a bridge, in either orientation
    pub fn is_bridge(&self, v: usize, w: usize) -> bool {
        self.bridges.iter().any(|&(a, b)| (a, b) == (v, w) || (a, b) == (w, v))
    }

    /// Returns the number of 2-edge-connected components.
    ///
    /// Removing every bridge splits each connected component once per bridge.
    pub fn edge_connected_components(&self) -> usize {
        self.trees + self.bridges.len()
    }
}
