use std::ops::ControlFlow;

use crate::algorithm::dfs::{DepthFirstWalk, DfsEvent, Outgoing};
use crate::algorithm::traits::StrongComponents;
use crate::graph::DirectedAdjacency;
use crate::{verify, Result};

/// Tarjan's strong components.
///
/// One depth-first search numbers vertices in preorder and tracks `low[v]`, the
/// smallest preorder number reachable from the subtree of `v` through at most
/// one back edge. A finished vertex with `low[v] == pre[v]` roots a component,
/// which is everything above it on the vertex stack. `O(V + E)`.
#[derive(Debug, Clone)]
pub struct TarjanScc {
    id: Vec<usize>,
    count: usize,
}

impl TarjanScc {
    pub fn new<G: DirectedAdjacency + ?Sized>(graph: &G) -> Result<Self> {
        let n = graph.vertex_count();
        let mut id = vec![0; n];
        let mut pre = vec![0; n];
        let mut low = vec![0; n];
        let mut stack: Vec<usize> = Vec::new();
        let mut counter = 0;
        let mut count = 0;
        let mut walk = DepthFirstWalk::new(n);

        for s in 0..n {
            let _ = walk.walk(&Outgoing(graph), s, |event| {
                match event {
                    DfsEvent::Discover { vertex, .. } => {
                        pre[vertex] = counter;
                        low[vertex] = counter;
                        counter += 1;
                        stack.push(vertex);
                    }
                    DfsEvent::Revisit { from, to, .. } => {
                        // vertices already in a component carry low = n
                        low[from] = low[from].min(low[to]);
                    }
                    DfsEvent::Finish { vertex, parent } => {
                        if low[vertex] == pre[vertex] {
                            while let Some(w) = stack.pop() {
                                id[w] = count;
                                low[w] = n;
                                if w == vertex {
                                    break;
                                }
                            }
                            count += 1;
                        }
                        if let Some(p) = parent {
                            low[p] = low[p].min(low[vertex]);
                        }
                    }
                }
                ControlFlow::Continue(())
            });
        }
        log::debug!("tarjan: {} strong components over {} vertices", count, n);

        let scc = TarjanScc { id, count };
        if verify::ENABLED {
            verify::check_strong_components(graph, &scc)?;
        }
        Ok(scc)
    }
}

impl StrongComponents for TarjanScc {
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
