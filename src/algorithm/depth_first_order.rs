use crate::algorithm::dfs::{DepthFirstWalk, DfsEvent, Outgoing};
use crate::graph::DirectedAdjacency;
use std::ops::ControlFlow;

/// Preorder, postorder and reverse postorder of a depth-first search that
/// visits roots in increasing vertex order.
#[derive(Debug, Clone)]
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
    preorder: Vec<usize>,
    postorder: Vec<usize>,
}

impl DepthFirstOrder {
    /// Runs the search over every vertex of `graph`
    pub fn new<G: DirectedAdjacency + ?Sized>(graph: &G) -> Self {
        let roots: Vec<usize> = (0..graph.vertex_count()).collect();
        Self::with_roots(graph, roots)
    }

    /// Runs the search starting from the given roots in order; vertices not
    /// reachable from them are left out of the orders.
    pub fn with_roots<G, I>(graph: &G, roots: I) -> Self
    where
        G: DirectedAdjacency + ?Sized,
        I: IntoIterator<Item = usize>,
    {
        let n = graph.vertex_count();
        let mut order = DepthFirstOrder {
            pre: vec![usize::MAX; n],
            post: vec![usize::MAX; n],
            preorder: Vec::with_capacity(n),
            postorder: Vec::with_capacity(n),
        };

        let mut walk = DepthFirstWalk::new(n);
        for root in roots {
            let _ = walk.walk(&Outgoing(graph), root, |event| {
                match event {
                    DfsEvent::Discover { vertex, .. } => {
                        order.pre[vertex] = order.preorder.len();
                        order.preorder.push(vertex);
                    }
                    DfsEvent::Finish { vertex, .. } => {
                        order.post[vertex] = order.postorder.len();
                        order.postorder.push(vertex);
                    }
                    DfsEvent::Revisit { .. } => {}
                }
                ControlFlow::Continue(())
            });
        }
        order
    }

    /// Returns the preorder number of `v`, if it was visited
    pub fn pre(&self, v: usize) -> Option<usize> {
        Some(self.pre[v]).filter(|&p| p != usize::MAX)
    }

    /// Returns the postorder number of `v`, if it was visited
    pub fn post(&self, v: usize) -> Option<usize> {
        Some(self.post[v]).filter(|&p| p != usize::MAX)
    }

    /// Returns the vertices in preorder
    pub fn preorder(&self) -> &[usize] {
        &self.preorder
    }

    /// Returns the vertices in postorder
    pub fn postorder(&self) -> &[usize] {
        &self.postorder
    }

    /// Returns the vertices in reverse postorder
    pub fn reverse_postorder(&self) -> Vec<usize> {
        self.postorder.iter().rev().copied().collect()
    }
}
