//! Explicit-stack depth-first search shared by the ordering, cycle and
//! strong-component algorithms.
//!
//! The walk keeps one `(vertex, next slot)` frame per open vertex instead of a
//! call-stack frame, so depth is bounded by heap memory rather than thread
//! stack size. Events are reported in exactly the order a recursive DFS would
//! produce them.

use crate::graph::{DirectedAdjacency, UndirectedAdjacency};
use std::ops::ControlFlow;

/// Positional adjacency view the walker runs on
pub(crate) trait SlotAdjacency {
    fn vertex_count(&self) -> usize;
    fn fanout(&self, vertex: usize) -> usize;
    fn target(&self, vertex: usize, slot: usize) -> usize;
}

/// Walks the outgoing edges of a digraph
pub(crate) struct Outgoing<'g, G: ?Sized>(pub &'g G);

/// Walks the incident edges of an undirected graph
pub(crate) struct Incident<'g, G: ?Sized>(pub &'g G);

impl<G: DirectedAdjacency + ?Sized> SlotAdjacency for Outgoing<'_, G> {
    fn vertex_count(&self) -> usize {
        self.0.vertex_count()
    }

    fn fanout(&self, vertex: usize) -> usize {
        self.0.out_degree(vertex)
    }

    fn target(&self, vertex: usize, slot: usize) -> usize {
        self.0.successor(vertex, slot)
    }
}

impl<G: UndirectedAdjacency + ?Sized> SlotAdjacency for Incident<'_, G> {
    fn vertex_count(&self) -> usize {
        self.0.vertex_count()
    }

    fn fanout(&self, vertex: usize) -> usize {
        self.0.degree(vertex)
    }

    fn target(&self, vertex: usize, slot: usize) -> usize {
        self.0.neighbor(vertex, slot)
    }
}

/// A step of the depth-first walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DfsEvent {
    /// `vertex` is marked for the first time, reached through `tree_edge`
    /// `(parent, slot)` unless it is the root of the walk
    Discover {
        vertex: usize,
        tree_edge: Option<(usize, usize)>,
    },
    /// Edge `from --slot--> to` leads to an already marked vertex
    Revisit { from: usize, slot: usize, to: usize },
    /// Every edge of `vertex` has been scanned
    Finish { vertex: usize, parent: Option<usize> },
}

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: usize,
    next_slot: usize,
    parent: Option<usize>,
}

/// Marked set plus frame stack, reusable across several roots
#[derive(Debug, Clone)]
pub(crate) struct DepthFirstWalk {
    marked: Vec<bool>,
    stack: Vec<Frame>,
}

impl DepthFirstWalk {
    pub(crate) fn new(vertices: usize) -> Self {
        DepthFirstWalk {
            marked: vec![false; vertices],
            stack: Vec::new(),
        }
    }

    pub(crate) fn is_marked(&self, vertex: usize) -> bool {
        self.marked[vertex]
    }

    pub(crate) fn into_marked(self) -> Vec<bool> {
        self.marked
    }

    /// Runs a depth-first search from `source` unless it is already marked.
    /// The visitor can stop the walk by returning `Break`.
    pub(crate) fn walk<A, F>(&mut self, graph: &A, source: usize, mut visit: F) -> ControlFlow<()>
    where
        A: SlotAdjacency,
        F: FnMut(DfsEvent) -> ControlFlow<()>,
    {
        if self.marked[source] {
            return ControlFlow::Continue(());
        }
        self.marked[source] = true;
        self.stack.clear();
        visit(DfsEvent::Discover { vertex: source, tree_edge: None })?;
        self.stack.push(Frame { vertex: source, next_slot: 0, parent: None });

        while let Some(frame) = self.stack.last_mut() {
            let v = frame.vertex;
            if frame.next_slot < graph.fanout(v) {
                let slot = frame.next_slot;
                frame.next_slot += 1;
                let w = graph.target(v, slot);
                if self.marked[w] {
                    visit(DfsEvent::Revisit { from: v, slot, to: w })?;
                } else {
                    self.marked[w] = true;
                    visit(DfsEvent::Discover { vertex: w, tree_edge: Some((v, slot)) })?;
                    self.stack.push(Frame { vertex: w, next_slot: 0, parent: Some(v) });
                }
            } else {
                let parent = frame.parent;
                self.stack.pop();
                visit(DfsEvent::Finish { vertex: v, parent })?;
            }
        }
        ControlFlow::Continue(())
    }
}
