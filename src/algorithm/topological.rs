use crate::algorithm::cycle::DirectedCycle;
use crate::algorithm::depth_first_order::DepthFirstOrder;
use crate::graph::DirectedAdjacency;
use std::collections::VecDeque;

fn ranks_of(order: &[usize], vertices: usize) -> Vec<usize> {
    let mut rank = vec![0; vertices];
    for (i, &v) in order.iter().enumerate() {
        rank[v] = i;
    }
    rank
}

/// Topological order as the reverse postorder of a depth-first search.
///
/// In a DAG, for every edge `v->w` the search finishes `w` before `v`, so
/// reversing the postorder puts `v` ahead of `w`. A digraph with a directed
/// cycle has no order.
#[derive(Debug, Clone)]
pub struct Topological {
    order: Option<Vec<usize>>,
    rank: Vec<usize>,
}

impl Topological {
    pub fn new<G: DirectedAdjacency + ?Sized>(graph: &G) -> Self {
        let finder = DirectedCycle::new(graph);
        let order = (!finder.has_cycle()).then(|| DepthFirstOrder::new(graph).reverse_postorder());
        let rank = order
            .as_deref()
            .map(|order| ranks_of(order, graph.vertex_count()))
            .unwrap_or_default();
        Topological { order, rank }
    }

    /// Returns true if the digraph is a DAG
    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    /// Alias of [`has_order`](Self::has_order)
    pub fn is_dag(&self) -> bool {
        self.has_order()
    }

    /// Returns a topological order, or `None` if the digraph is not a DAG
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Returns the position of `v` in the order, or `None` if there is no order
    pub fn rank(&self, v: usize) -> Option<usize> {
        self.order.as_ref().map(|_| self.rank[v])
    }
}

/// Topological order by repeatedly removing vertices of in-degree zero
/// (Kahn's algorithm).
///
/// Needs no recursion and detects a cycle as a shortfall: when fewer than `V`
/// vertices leave the queue, the rest sit on or behind a cycle.
#[derive(Debug, Clone)]
pub struct TopologicalKahn {
    order: Option<Vec<usize>>,
    rank: Vec<usize>,
}

impl TopologicalKahn {
    pub fn new<G: DirectedAdjacency + ?Sized>(graph: &G) -> Self {
        let n = graph.vertex_count();
        let mut in_degree: Vec<usize> = (0..n).map(|v| graph.in_degree(v)).collect();
        let mut queue: VecDeque<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
        let mut order = Vec::with_capacity(n);

        while let Some(v) = queue.pop_front() {
            order.push(v);
            for w in graph.successors(v) {
                in_degree[w] -= 1;
                if in_degree[w] == 0 {
                    queue.push_back(w);
                }
            }
        }

        if order.len() != n {
            log::debug!("kahn: only {} of {} vertices peeled, digraph has a cycle", order.len(), n);
            return TopologicalKahn { order: None, rank: Vec::new() };
        }
        let rank = ranks_of(&order, n);
        TopologicalKahn { order: Some(order), rank }
    }

    /// Returns true if the digraph is a DAG
    pub fn has_order(&self) -> bool {
        self.order.is_some()
    }

    /// Returns a topological order, or `None` if the digraph is not a DAG
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Returns the position of `v` in the order, or `None` if there is no order
    pub fn rank(&self, v: usize) -> Option<usize> {
        self.order.as_ref().map(|_| self.rank[v])
    }
}
