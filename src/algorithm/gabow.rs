use std::ops::ControlFlow;

use crate::algorithm::dfs::{DepthFirstWalk, DfsEvent, Outgoing};
use crate::algorithm::traits::StrongComponents;
use crate::graph::DirectedAdjacency;
use crate::{verify, Result};

/// Gabow's path-based strong components.
///
/// `unassigned` holds discovered vertices not yet placed in a component, in
/// preorder. `roots` holds the candidate component roots on the current path;
/// an edge into an unassigned vertex `w` pops every candidate discovered after
/// `w`, since they now share a cycle with it. A finished vertex still on top of
/// `roots` closes its component. `O(V + E)`.
#[derive(Debug, Clone)]
pub struct GabowScc {
    id: Vec<usize>,
    count: usize,
}

impl GabowScc {
    pub fn new<G: DirectedAdjacency + ?Sized>(graph: &G) -> Result<Self> {
        let n = graph.vertex_count();
        let mut id: Vec<Option<usize>> = vec![None; n];
        let mut pre = vec![0; n];
        let mut unassigned: Vec<usize> = Vec::new();
        let mut roots: Vec<usize> = Vec::new();
        let mut counter = 0;
        let mut count = 0;
        let mut walk = DepthFirstWalk::new(n);

        for s in 0..n {
            let _ = walk.walk(&Outgoing(graph), s, |event| {
                match event {
                    DfsEvent::Discover { vertex, .. } => {
                        pre[vertex] = counter;
                        counter += 1;
                        unassigned.push(vertex);
                        roots.push(vertex);
                    }
                    DfsEvent::Revisit { to, .. } if id[to].is_none() => {
                        while roots.last().is_some_and(|&top| pre[top] > pre[to]) {
                            roots.pop();
                        }
                    }
                    DfsEvent::Revisit { .. } => {}
                    DfsEvent::Finish { vertex, .. } => {
                        if roots.last() == Some(&vertex) {
                            roots.pop();
                            while let Some(w) = unassigned.pop() {
                                id[w] = Some(count);
                                if w == vertex {
                                    break;
                                }
                            }
                            count += 1;
                        }
                    }
                }
                ControlFlow::Continue(())
            });
        }
        log::debug!("gabow: {} strong components over {} vertices", count, n);

        let scc = GabowScc {
            id: id.into_iter().map(|c| c.unwrap_or(count)).collect(),
            count,
        };
        if verify::ENABLED {
            verify::check_strong_components(graph, &scc)?;
        }
        Ok(scc)
    }
}

impl StrongComponents for GabowScc {
    fn count(&self) -> usize {
        self.count
    }

    fn id(&self, v: usize) -> usize {
        self.id[v]
    }

    fn vertex_count(&self) -> usize {
        self.id.len()
    }
}
