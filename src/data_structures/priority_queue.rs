use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-heap of items keyed by priority, with ties served in insertion order.
///
/// Backs the lazy algorithms (lazy Prim, lazy Dijkstra) that keep every
/// candidate edge and discard obsolete ones when they surface.
#[derive(Debug)]
pub struct MinHeap<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// The underlying binary heap of (priority, insertion sequence, item)
    heap: BinaryHeap<Reverse<(P, u64, V)>>,

    /// Sequence number handed to the next pushed item
    next_seq: u64,
}

impl<V, P> MinHeap<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    /// Creates a new empty heap
    pub fn new() -> Self {
        MinHeap {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of items in the heap
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes an item with the given priority
    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, self.next_seq, item)));
        self.next_seq += 1;
    }

    /// Removes the item with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, _, item))| (item, priority))
    }

    /// Returns the item with the smallest priority without removing it
    pub fn peek(&self) -> Option<(V, P)> {
        self.heap.peek().map(|Reverse((priority, _, item))| (*item, *priority))
    }
}

impl<V, P> Default for MinHeap<V, P>
where
    V: Copy + Eq + Debug + Ord,
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn equal_priorities_pop_in_insertion_order() {
        let mut heap = MinHeap::new();
        heap.push(9usize, OrderedFloat(0.5));
        heap.push(3, OrderedFloat(0.25));
        heap.push(1, OrderedFloat(0.5));
        heap.push(7, OrderedFloat(0.5));

        assert_eq!(heap.len(), 4);
        assert_eq!(heap.peek(), Some((3, OrderedFloat(0.25))));
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|(v, _)| v)).collect();
        assert_eq!(order, vec![3, 9, 1, 7]);
        assert!(heap.is_empty());
    }
}
