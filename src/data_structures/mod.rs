pub mod index_priority_queue;
pub mod priority_queue;
pub mod union_find;

pub use index_priority_queue::{HeapOrder, IndexMaxPQ, IndexMinPQ, IndexPriorityQueue, MaxOrder, MinOrder};
pub use priority_queue::MinHeap;
pub use union_find::UnionFind;
