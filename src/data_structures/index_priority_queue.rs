use std::fmt::Debug;
use std::marker::PhantomData;

/// Selects which of two priorities sits closer to the top of the heap
pub trait HeapOrder: Debug {
    /// Returns true if `a` must be extracted before `b`
    fn precedes<P: PartialOrd>(a: &P, b: &P) -> bool;
}

/// Smallest priority first
#[derive(Debug, Clone, Copy, Default)]
pub struct MinOrder;

/// Largest priority first
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxOrder;

impl HeapOrder for MinOrder {
    fn precedes<P: PartialOrd>(a: &P, b: &P) -> bool {
        a < b
    }
}

impl HeapOrder for MaxOrder {
    fn precedes<P: PartialOrd>(a: &P, b: &P) -> bool {
        a > b
    }
}

/// A binary heap over client indices in `[0, capacity)`, each carrying a priority.
///
/// `indices` is the heap (heap position -> client index) and `positions` its
/// inverse (client index -> heap position), so any queued index can be located
/// in O(1) and re-prioritised or removed in O(log n). Invariant:
/// `positions[indices[k]] == Some(k)` for every heap position `k`.
#[derive(Debug, Clone)]
pub struct IndexPriorityQueue<P, O = MinOrder>
where
    P: PartialOrd + Copy + Debug,
    O: HeapOrder,
{
    indices: Vec<usize>,
    positions: Vec<Option<usize>>,
    priorities: Vec<Option<P>>,
    order: PhantomData<O>,
}

/// Min-oriented indexed priority queue, as used by eager Prim and Dijkstra
pub type IndexMinPQ<P> = IndexPriorityQueue<P, MinOrder>;

/// Max-oriented indexed priority queue
pub type IndexMaxPQ<P> = IndexPriorityQueue<P, MaxOrder>;

impl<P, O> IndexPriorityQueue<P, O>
where
    P: PartialOrd + Copy + Debug,
    O: HeapOrder,
{
    /// Creates an empty queue accepting indices in `[0, capacity)`
    pub fn new(capacity: usize) -> Self {
        IndexPriorityQueue {
            indices: Vec::with_capacity(capacity),
            positions: vec![None; capacity],
            priorities: vec![None; capacity],
            order: PhantomData,
        }
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the number of queued indices
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if `i` is currently queued
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below the capacity.
    pub fn contains(&self, i: usize) -> bool {
        self.validate_index(i);
        self.positions[i].is_some()
    }

    /// Returns the priority of `i`, if queued
    pub fn priority(&self, i: usize) -> Option<P> {
        self.validate_index(i);
        self.priorities[i]
    }

    /// Returns the index at the top of the heap together with its priority
    pub fn peek(&self) -> Option<(usize, P)> {
        let &top = self.indices.first()?;
        self.priorities[top].map(|p| (top, p))
    }

    /// Associates priority `priority` with index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range or already queued.
    pub fn insert(&mut self, i: usize, priority: P) {
        assert!(!self.contains(i), "index {} is already in the priority queue", i);
        let pos = self.indices.len();
        self.indices.push(i);
        self.positions[i] = Some(pos);
        self.priorities[i] = Some(priority);
        self.swim(pos);
    }

    /// Removes the index at the top of the heap and returns it with its priority
    pub fn pop(&mut self) -> Option<(usize, P)> {
        let top = *self.indices.first()?;
        let priority = self.remove_at(0);
        Some((top, priority))
    }

    /// Sets the priority of a queued index, moving it either way.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not queued.
    pub fn change_priority(&mut self, i: usize, priority: P) {
        let pos = self.position_of(i);
        self.priorities[i] = Some(priority);
        self.swim(pos);
        let pos = self.position_of(i);
        self.sink(pos);
    }

    /// Lowers the priority of a queued index.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not queued or `priority` is not strictly lower than the
    /// current one.
    pub fn decrease_priority(&mut self, i: usize, priority: P) {
        let pos = self.position_of(i);
        let current = self.current_priority(i);
        assert!(
            priority < current,
            "decrease_priority({}) with {:?} not strictly below current {:?}",
            i,
            priority,
            current
        );
        self.reposition(i, pos, priority, current);
    }

    /// Raises the priority of a queued index.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not queued or `priority` is not strictly higher than the
    /// current one.
    pub fn increase_priority(&mut self, i: usize, priority: P) {
        let pos = self.position_of(i);
        let current = self.current_priority(i);
        assert!(
            priority > current,
            "increase_priority({}) with {:?} not strictly above current {:?}",
            i,
            priority,
            current
        );
        self.reposition(i, pos, priority, current);
    }

    /// Removes a queued index and returns its priority.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not queued.
    pub fn delete(&mut self, i: usize) -> P {
        let pos = self.position_of(i);
        self.remove_at(pos)
    }

    fn reposition(&mut self, i: usize, pos: usize, priority: P, current: P) {
        self.priorities[i] = Some(priority);
        if O::precedes(&priority, &current) {
            self.swim(pos);
        } else {
            self.sink(pos);
        }
    }

    fn remove_at(&mut self, pos: usize) -> P {
        let last = self.indices.len() - 1;
        self.exchange(pos, last);
        let removed = self.indices[last];
        self.indices.truncate(last);
        self.positions[removed] = None;
        let priority = self.current_priority(removed);
        self.priorities[removed] = None;

        if pos < self.indices.len() {
            let moved = self.indices[pos];
            self.swim(pos);
            let moved_pos = self.position_of(moved);
            self.sink(moved_pos);
        }
        priority
    }

    fn position_of(&self, i: usize) -> usize {
        self.validate_index(i);
        match self.positions[i] {
            Some(pos) => pos,
            None => panic!("index {} is not in the priority queue", i),
        }
    }

    fn current_priority(&self, i: usize) -> P {
        match self.priorities[i] {
            Some(priority) => priority,
            None => panic!("index {} has no priority", i),
        }
    }

    fn validate_index(&self, i: usize) {
        assert!(
            i < self.positions.len(),
            "index {} is not below capacity {}",
            i,
            self.positions.len()
        );
    }

    /// Returns true if the heap entry at `a` must come before the one at `b`
    fn ahead(&self, a: usize, b: usize) -> bool {
        O::precedes(&self.key(a), &self.key(b))
    }

    fn key(&self, k: usize) -> P {
        self.current_priority(self.indices[k])
    }

    fn exchange(&mut self, a: usize, b: usize) {
        self.indices.swap(a, b);
        self.positions[self.indices[a]] = Some(a);
        self.positions[self.indices[b]] = Some(b);
    }

    fn swim(&mut self, mut k: usize) {
        while k > 0 {
            let parent = (k - 1) / 2;
            if !self.ahead(k, parent) {
                break;
            }
            self.exchange(k, parent);
            k = parent;
        }
    }

    fn sink(&mut self, mut k: usize) {
        let n = self.indices.len();
        loop {
            let mut child = 2 * k + 1;
            if child >= n {
                break;
            }
            if child + 1 < n && self.ahead(child + 1, child) {
                child += 1;
            }
            if !self.ahead(child, k) {
                break;
            }
            self.exchange(k, child);
            k = child;
        }
    }

    #[cfg(test)]
    fn is_consistent(&self) -> bool {
        let positions_ok = self
            .indices
            .iter()
            .enumerate()
            .all(|(k, &i)| self.positions[i] == Some(k));
        let heap_ok = (1..self.indices.len()).all(|k| !self.ahead(k, (k - 1) / 2));
        positions_ok && heap_ok
    }
}

impl<P> IndexPriorityQueue<P, MinOrder>
where
    P: PartialOrd + Copy + Debug,
{
    /// Removes and returns the index with the smallest priority
    pub fn del_min(&mut self) -> Option<usize> {
        self.pop().map(|(i, _)| i)
    }
}

impl<P> IndexPriorityQueue<P, MaxOrder>
where
    P: PartialOrd + Copy + Debug,
{
    /// Removes and returns the index with the largest priority
    pub fn del_max(&mut self) -> Option<usize> {
        self.pop().map(|(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRINGS: [&str; 10] = ["it", "was", "the", "best", "of", "times", "it", "was", "the", "worst"];

    #[test]
    fn del_min_yields_sorted_order() {
        let mut pq = IndexMinPQ::new(STRINGS.len());
        for (i, s) in STRINGS.iter().enumerate() {
            pq.insert(i, *s);
        }
        assert!(pq.is_consistent());

        let mut drained = Vec::new();
        while let Some(i) = pq.del_min() {
            drained.push(STRINGS[i]);
            assert!(pq.is_consistent());
        }
        let mut sorted = STRINGS.to_vec();
        sorted.sort();
        assert_eq!(drained, sorted);
    }

    #[test]
    fn max_order_yields_reverse_order() {
        let mut pq = IndexMaxPQ::new(5);
        for (i, p) in [3.0, 1.0, 4.0, 1.5, 9.0].iter().enumerate() {
            pq.insert(i, *p);
        }
        assert_eq!(pq.del_max(), Some(4));
        pq.decrease_priority(2, 0.5);
        assert!(pq.is_consistent());
        assert_eq!(pq.del_max(), Some(0));
        assert_eq!(pq.del_max(), Some(3));
    }

    #[test]
    fn decrease_and_increase_reorder() {
        let mut pq = IndexMinPQ::new(4);
        pq.insert(0, 5.0);
        pq.insert(1, 3.0);
        pq.insert(2, 8.0);
        pq.insert(3, 4.0);

        pq.decrease_priority(2, 1.0);
        assert_eq!(pq.peek(), Some((2, 1.0)));
        pq.increase_priority(2, 10.0);
        assert_eq!(pq.peek(), Some((1, 3.0)));
        pq.change_priority(0, 2.0);
        assert!(pq.is_consistent());
        assert_eq!(pq.del_min(), Some(0));
    }

    #[test]
    fn delete_arbitrary_index() {
        let mut pq = IndexMinPQ::new(8);
        for (i, p) in [7.0, 2.0, 9.0, 4.0, 1.0, 6.0, 3.0, 8.0].iter().enumerate() {
            pq.insert(i, *p);
        }
        assert_eq!(pq.delete(3), 4.0);
        assert_eq!(pq.delete(4), 1.0);
        assert!(!pq.contains(4));
        assert!(pq.is_consistent());

        let mut order = Vec::new();
        while let Some(i) = pq.del_min() {
            order.push(i);
        }
        assert_eq!(order, vec![1, 6, 5, 0, 7, 2]);
    }

    #[test]
    #[should_panic(expected = "not strictly below")]
    fn decrease_requires_lower_priority() {
        let mut pq = IndexMinPQ::new(2);
        pq.insert(0, 1.0);
        pq.decrease_priority(0, 1.0);
    }

    #[test]
    #[should_panic(expected = "not strictly above")]
    fn increase_requires_higher_priority() {
        let mut pq = IndexMinPQ::new(2);
        pq.insert(0, 1.0);
        pq.increase_priority(0, 0.5);
    }

    #[test]
    #[should_panic(expected = "is not in the priority queue")]
    fn delete_of_unqueued_index_is_fatal() {
        let mut pq = IndexMinPQ::new(3);
        pq.insert(0, 1.0);
        pq.delete(2);
    }

    #[test]
    #[should_panic(expected = "is not in the priority queue")]
    fn decrease_of_removed_index_is_fatal() {
        let mut pq: IndexMinPQ<f64> = IndexMinPQ::new(3);
        pq.insert(1, 4.0);
        assert_eq!(pq.del_min(), Some(1));
        pq.decrease_priority(1, 2.0);
    }

    #[test]
    #[should_panic(expected = "already in the priority queue")]
    fn insert_twice_is_fatal() {
        let mut pq = IndexMinPQ::new(2);
        pq.insert(1, 1.0);
        pq.insert(1, 2.0);
    }
}
