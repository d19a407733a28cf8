use std::ops::ControlFlow;

use crate::algorithm::depth_first_order::DepthFirstOrder;
use crate::algorithm::dfs::{DepthFirstWalk, DfsEvent, Outgoing};
use crate::algorithm::traits::StrongComponents;
use crate::graph::{Digraph, DirectedAdjacency};
use crate::{verify, Result};

/// Kosaraju-Sharir strong components.
///
/// Computes the reverse postorder of the reversed digraph, then runs plain
/// depth-first searches on the digraph taking roots in that order. Each search
/// tree is exactly one strong component. `O(V + E)`.
#[derive(Debug, Clone)]
pub struct KosarajuScc {
    id: Vec<usize>,
    count: usize,
}

impl KosarajuScc {
    pub fn new<G: DirectedAdjacency + ?Sized>(graph: &G) -> Result<Self> {
        let n = graph.vertex_count();
        let mut reverse = Digraph::new(n);
        for v in 0..n {
            for w in graph.successors(v) {
                reverse.add_edge(w, v)?;
            }
        }
        let order = DepthFirstOrder::new(&reverse).reverse_postorder();

        let mut id = vec![0; n];
        let mut count = 0;
        let mut walk = DepthFirstWalk::new(n);
        for s in order {
            if walk.is_marked(s) {
                continue;
            }
            let _ = walk.walk(&Outgoing(graph), s, |event| {
                if let DfsEvent::Discover { vertex, .. } = event {
                    id[vertex] = count;
                }
                ControlFlow::Continue(())
            });
            count += 1;
        }
        log::debug!("kosaraju: {} strong components over {} vertices", count, n);

        let scc = KosarajuScc { id, count };
        if verify::ENABLED {
            verify::check_strong_components(graph, &scc)?;
        }
        Ok(scc)
    }
}

impl StrongComponents for KosarajuScc {
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
