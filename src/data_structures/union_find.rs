use std::cmp::Ordering;

/// A union-find (disjoint set) structure with union by rank and path
/// compression by halving.
///
/// Elements are dense indices in `[0, n)`. Kruskal's algorithm uses it to reject
/// edges that would close a cycle, and the spanning forest checks use a fresh
/// instance to confirm acyclicity and spanning.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
    count: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            rank: vec![0; n],
            count: n,
        }
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if the structure holds no elements
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the root of the set containing `p`.
    ///
    /// Each visited element is re-pointed at its grandparent on the way up.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of range.
    pub fn find(&mut self, mut p: usize) -> usize {
        self.validate(p);
        while p != self.parent[p] {
            self.parent[p] = self.parent[self.parent[p]];
            p = self.parent[p];
        }
        p
    }

    /// Returns true if `p` and `q` are in the same set
    pub fn connected(&mut self, p: usize, q: usize) -> bool {
        self.find(p) == self.find(q)
    }

    /// Merges the sets containing `p` and `q`.
    ///
    /// The lower-rank root goes under the higher-rank one; rank only grows on a
    /// tie. Returns false if they were already in the same set.
    pub fn union(&mut self, p: usize, q: usize) -> bool {
        let root_p = self.find(p);
        let root_q = self.find(q);
        if root_p == root_q {
            return false;
        }

        match self.rank[root_p].cmp(&self.rank[root_q]) {
            Ordering::Less => self.parent[root_p] = root_q,
            Ordering::Greater => self.parent[root_q] = root_p,
            Ordering::Equal => {
                self.parent[root_q] = root_p;
                self.rank[root_p] += 1;
            }
        }
        self.count -= 1;
        true
    }

    fn validate(&self, p: usize) {
        assert!(
            p < self.parent.len(),
            "index {} is not between 0 and {}",
            p,
            self.parent.len().saturating_sub(1)
        );
    }
}
