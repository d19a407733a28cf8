use crate::algorithm::dfs::{DepthFirstWalk, DfsEvent, Incident};
use crate::graph::UndirectedAdjacency;
use std::ops::ControlFlow;

/// Connected components of an undirected graph
#[derive(Debug, Clone)]
pub struct ConnectedComponents {
    id: Vec<usize>,
    size: Vec<usize>,
}

impl ConnectedComponents {
    pub fn new<G: UndirectedAdjacency + ?Sized>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut id = vec![0; n];
        let mut size = Vec::new();
        let mut walk = DepthFirstWalk::new(n);

        for s in 0..n {
            if walk.is_marked(s) {
                continue;
            }
            let component = size.len();
            size.push(0);
            let _ = walk.walk(&Incident(graph), s, |event| {
                if let DfsEvent::Discover { vertex, .. } = event {
                    id[vertex] = component;
                    size[component] += 1;
                }
                ControlFlow::Continue(())
            });
        }
        log::debug!("connected components: {} over {} vertices", size.len(), n);
        ConnectedComponents { id, size }
    }

    /// Returns the number of components
    pub fn count(&self) -> usize {
        self.size.len()
    }

    /// Returns the component id of `v`, in `[0, count)`
    pub fn id(&self, v: usize) -> usize {
        self.id[v]
    }

    /// Returns the number of vertices in the component of `v`
    pub fn size(&self, v: usize) -> usize {
        self.size[self.id[v]]
    }

    /// Returns true if `v` and `w` are in the same component
    pub fn connected(&self, v: usize, w: usize) -> bool {
        self.id[v] == self.id[w]
    }
}

/// Two-colouring of an undirected graph, or an odd cycle proving there is none
#[derive(Debug, Clone)]
pub struct Bipartite {
    color: Vec<bool>,
    odd_cycle: Option<Vec<usize>>,
}

impl Bipartite {
    pub fn new<G: UndirectedAdjacency + ?Sized>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut color = vec![false; n];
        let mut edge_to: Vec<Option<usize>> = vec![None; n];
        let mut odd_cycle = None;
        let mut walk = DepthFirstWalk::new(n);

        for s in 0..n {
            let flow = walk.walk(&Incident(graph), s, |event| match event {
                DfsEvent::Discover { vertex, tree_edge } => {
                    if let Some((parent, _)) = tree_edge {
                        edge_to[vertex] = Some(parent);
                        color[vertex] = !color[parent];
                    }
                    ControlFlow::Continue(())
                }
                DfsEvent::Revisit { from, to, .. } if color[from] == color[to] => {
                    // the tree path from `to` down to `from` plus the edge back
                    let mut cycle = vec![to];
                    let mut x = from;
                    let mut down = Vec::new();
                    while x != to {
                        down.push(x);
                        match edge_to[x] {
                            Some(parent) => x = parent,
                            None => break,
                        }
                    }
                    cycle.extend(down.into_iter().rev());
                    cycle.push(to);
                    odd_cycle = Some(cycle);
                    ControlFlow::Break(())
                }
                _ => ControlFlow::Continue(()),
            });
            if flow.is_break() {
                break;
            }
        }
        Bipartite { color, odd_cycle }
    }

    /// Returns true if the graph is bipartite
    pub fn is_bipartite(&self) -> bool {
        self.odd_cycle.is_none()
    }

    /// Returns the side of `v`, or `None` if the graph is not bipartite
    pub fn color(&self, v: usize) -> Option<bool> {
        self.is_bipartite().then(|| self.color[v])
    }

    /// Returns an odd-length cycle as a closed vertex walk, if the graph is not bipartite
    pub fn odd_cycle(&self) -> Option<&[usize]> {
        self.odd_cycle.as_deref()
    }
}
