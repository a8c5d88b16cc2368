//! Union-find keyed by arbitrary vertex labels.

use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::Hash;

use super::{Error, Result, UnionFind};

/// Disjoint sets over a fixed universe of labelled vertices.
///
/// All vertices are registered at construction, each in its own singleton
/// set; none can be added later. Queries about a vertex outside that
/// universe fail with [`Error::UnknownVertex`](enum.Error.html).
///
/// # Examples
///
/// ```
/// use spanning_forest::DisjointSet;
///
/// let mut sets = DisjointSet::new(vec!["A", "B", "C"]);
///
/// assert_eq!(Ok(true), sets.union(&"A", &"B"));
/// assert_eq!(Ok(true), sets.union(&"B", &"C"));
/// // A and C are already connected, so this edge would close a cycle.
/// assert_eq!(Ok(false), sets.union(&"A", &"C"));
///
/// assert!(sets.find(&"D").is_err());
/// ```
#[derive(Clone)]
pub struct DisjointSet<V> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    sets: UnionFind,
}

impl<V: Debug> Debug for DisjointSet<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let roots = (0 .. self.vertices.len())
            .map(|i| &self.vertices[self.sets.find(i)]);
        formatter.debug_map()
            .entries(self.vertices.iter().zip(roots))
            .finish()
    }
}

impl<V: Clone + Eq + Hash + Debug> DisjointSet<V> {
    /// Creates singleton sets for the given vertices.
    ///
    /// A vertex listed more than once is registered once.
    pub fn new<I>(vertices: I) -> Self
            where I: IntoIterator<Item = V> {

        let mut index = HashMap::new();
        let mut unique = Vec::new();

        for vertex in vertices {
            if !index.contains_key(&vertex) {
                index.insert(vertex.clone(), unique.len());
                unique.push(vertex);
            }
        }

        DisjointSet {
            sets: UnionFind::new(unique.len()),
            vertices: unique,
            index: index,
        }
    }

    /// The number of registered vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Is the universe empty?
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Is `vertex` part of the universe?
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// Finds the representative vertex of the set containing `vertex`.
    pub fn find(&self, vertex: &V) -> Result<&V> {
        let i = self.position(vertex)?;
        Ok(&self.vertices[self.sets.find(i)])
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `true` if they were in different sets. Returns `false`, and
    /// changes nothing, if they were already connected: an edge between
    /// them would close a cycle.
    pub fn union(&mut self, a: &V, b: &V) -> Result<bool> {
        let a = self.position(a)?;
        let b = self.position(b)?;
        Ok(self.sets.union(a, b))
    }

    /// Are `a` and `b` in the same set?
    pub fn equiv(&self, a: &V, b: &V) -> Result<bool> {
        let a = self.position(a)?;
        let b = self.position(b)?;
        Ok(self.sets.equiv(a, b))
    }

    /// The number of disjoint sets.
    pub fn count_sets(&self) -> usize {
        self.sets.count_sets()
    }

    fn position(&self, vertex: &V) -> Result<usize> {
        self.index.get(vertex)
            .cloned()
            .ok_or_else(|| Error::unknown_vertex(vertex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons() {
        let sets = DisjointSet::new(vec!["A", "B", "C"]);
        assert_eq!(3, sets.len());
        assert_eq!(3, sets.count_sets());
        assert_eq!(Ok(&"B"), sets.find(&"B"));
        assert_eq!(Ok(false), sets.equiv(&"A", &"B"));
    }

    #[test]
    fn duplicates_collapse() {
        let sets = DisjointSet::new(vec![1, 2, 1, 3, 2]);
        assert_eq!(3, sets.len());
        assert!(sets.contains(&3));
        assert!(!sets.contains(&4));
    }

    #[test]
    fn union_detects_cycle() {
        let mut sets = DisjointSet::new(vec!["A", "B", "C", "D"]);
        assert_eq!(Ok(true), sets.union(&"A", &"B"));
        assert_eq!(Ok(true), sets.union(&"C", &"D"));
        assert_eq!(2, sets.count_sets());

        let before = format!("{:?}", sets);
        assert_eq!(Ok(false), sets.union(&"B", &"A"));
        assert_eq!(before, format!("{:?}", sets));

        assert_eq!(Ok(true), sets.union(&"B", &"C"));
        assert_eq!(Ok(false), sets.union(&"A", &"D"));
        assert_eq!(1, sets.count_sets());
        assert_eq!(sets.find(&"A"), sets.find(&"D"));
    }

    #[test]
    fn unknown_vertex() {
        let mut sets = DisjointSet::new(vec!["A", "B"]);
        assert_eq!(Err(Error::UnknownVertex("\"Z\"".to_owned())),
                   sets.find(&"Z"));
        assert!(sets.union(&"A", &"Z").is_err());
        assert!(sets.equiv(&"Z", &"A").is_err());
        assert_eq!(2, sets.count_sets());
    }

    #[test]
    fn empty() {
        let sets = DisjointSet::<u32>::new(vec![]);
        assert!(sets.is_empty());
        assert_eq!(0, sets.count_sets());
        assert!(sets.find(&0).is_err());
    }
}
