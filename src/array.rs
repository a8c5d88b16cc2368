use std::cell::Cell;
use std::fmt;

/// Vector-based union-find over the dense indices `0 .. len`.
///
/// The universe is closed: every index exists from construction on, each
/// starting in its own singleton set. `find` compresses paths through
/// interior mutability, so queries need only `&self`.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnionFind {
    parents: Vec<Cell<usize>>,
    ranks: Vec<u8>,
}
// Invariant: self.parents.len() == self.ranks.len()

impl fmt::Debug for UnionFind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "UnionFind({:?})", self.parents)
    }
}

impl UnionFind {
    /// Creates `size` singleton sets, `0 .. size`.
    pub fn new(size: usize) -> Self {
        UnionFind {
            parents: (0 .. size).map(Cell::new).collect(),
            ranks: vec![0; size],
        }
    }

    /// The number of indices in all the sets.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// Is the union-find devoid of indices?
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Joins the sets containing `a` and `b`.
    ///
    /// Returns `true` if they were different sets. If they were already
    /// the same set, returns `false` and modifies nothing.
    ///
    /// # Panics
    ///
    /// If `a` or `b` is not below `len()`.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut root = self.find(a);
        let mut child = self.find(b);

        if root == child { return false; }

        if self.ranks[root] < self.ranks[child] {
            ::std::mem::swap(&mut root, &mut child);
        }

        self.parents[child].set(root);
        if self.ranks[root] == self.ranks[child] {
            self.ranks[root] = self.ranks[root].saturating_add(1);
        }

        true
    }

    /// Finds the representative of the set containing `index`.
    ///
    /// Every index visited on the way up is repointed directly at the
    /// root.
    pub fn find(&self, index: usize) -> usize {
        let mut root = index;
        while self.parent(root) != root {
            root = self.parent(root);
        }

        let mut current = index;
        while current != root {
            let next = self.parent(current);
            self.parents[current].set(root);
            current = next;
        }

        root
    }

    /// Are `a` and `b` in the same set?
    pub fn equiv(&self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// The number of disjoint sets.
    pub fn count_sets(&self) -> usize {
        self.parents.iter().enumerate()
            .filter(|&(i, parent)| parent.get() == i)
            .count()
    }

    fn parent(&self, index: usize) -> usize {
        self.parents[index].get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len() {
        assert_eq!(5, UnionFind::new(5).len());
        assert!(UnionFind::default().is_empty());
    }

    #[test]
    fn union() {
        let mut uf = UnionFind::new(8);
        assert!(!uf.equiv(0, 1));
        uf.union(0, 1);
        assert!(uf.equiv(0, 1));
    }

    #[test]
    fn unions() {
        let mut uf = UnionFind::new(8);
        assert!(uf.union(0, 1));
        assert!(uf.union(1, 2));
        assert!(uf.union(4, 3));
        assert!(uf.union(3, 2));
        assert!(! uf.union(0, 3));

        assert!(uf.equiv(0, 1));
        assert!(uf.equiv(0, 2));
        assert!(uf.equiv(0, 3));
        assert!(uf.equiv(0, 4));
        assert!(!uf.equiv(0, 5));

        uf.union(5, 3);
        assert!(uf.equiv(0, 5));

        uf.union(6, 7);
        assert!(uf.equiv(6, 7));
        assert!(!uf.equiv(5, 7));

        uf.union(0, 7);
        assert!(uf.equiv(5, 7));
    }

    #[test]
    fn count_sets() {
        let mut uf = UnionFind::new(6);
        assert_eq!(6, uf.count_sets());
        uf.union(0, 1);
        uf.union(2, 3);
        assert_eq!(4, uf.count_sets());
        assert!(!uf.union(1, 0));
        assert_eq!(4, uf.count_sets());
        uf.union(1, 3);
        assert_eq!(3, uf.count_sets());
    }

    #[test]
    fn find_compresses_long_chain() {
        let mut uf = UnionFind::new(1000);
        for i in 1 .. 1000 {
            uf.union(i - 1, i);
        }

        let root = uf.find(0);
        assert_eq!(root, uf.parent(0));
        for i in 0 .. 1000 {
            assert_eq!(root, uf.find(i));
            assert_eq!(root, uf.parent(i));
        }
        assert_eq!(1, uf.count_sets());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let mut uf0 = UnionFind::new(8);
        uf0.union(0, 1);
        uf0.union(2, 3);
        assert!( uf0.equiv(0, 1));
        assert!(!uf0.equiv(1, 2));
        assert!( uf0.equiv(2, 3));

        let json = serde_json::to_string(&uf0).unwrap();
        let uf1: UnionFind = serde_json::from_str(&json).unwrap();
        assert!( uf1.equiv(0, 1));
        assert!(!uf1.equiv(1, 2));
        assert!( uf1.equiv(2, 3));
    }
}
