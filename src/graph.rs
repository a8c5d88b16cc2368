//! Weighted undirected graphs given as adjacency lists.

use std::cmp::Ordering;
use std::collections::hash_map::{Entry, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use tracing::warn;

use super::{Error, GraphError, Result, UnionFind, Weight};

/// An undirected weighted edge `{a, b}`.
///
/// Edges produced by this crate are canonical: `a` is the endpoint that
/// was added to the graph first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge<V, W> {
    /// The endpoint added to the graph first.
    pub a: V,
    /// The other endpoint.
    pub b: V,
    /// The weight of the edge.
    pub weight: W,
}

impl<V, W> Edge<V, W> {
    /// The endpoints as a pair.
    pub fn pair(&self) -> (&V, &V) {
        (&self.a, &self.b)
    }
}

/// What to do when the same undirected edge is reported twice with
/// different weights, e.g. `A -> B: 3` and `B -> A: 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WeightConflict {
    /// Fail with `GraphError::ConflictingWeight`.
    Reject,
    /// Keep the weight reported first and log a warning.
    FirstSeen,
}

impl Default for WeightConflict {
    fn default() -> Self {
        WeightConflict::Reject
    }
}

/// A weighted undirected graph.
///
/// The vertex set is declared up front or grown with
/// [`add_vertex`](#method.add_vertex); edges may only join declared
/// vertices. Adjacency may be given symmetrically (each edge reported from
/// both ends, as an adjacency map usually is) or once per edge; either way
/// [`edges`](#method.edges) yields every undirected edge exactly once.
///
/// Vertices and adjacency entries keep their insertion order, which fixes
/// the order of the edge list and hence how weight ties are broken.
///
/// # Examples
///
/// ```
/// use spanning_forest::{Graph, WeightConflict};
///
/// let graph = Graph::from_adjacency(vec![
///     ("A", vec![("B", 10), ("C", 1)]),
///     ("B", vec![("A", 10), ("C", 5)]),
///     ("C", vec![("A", 1), ("B", 5)]),
/// ]).unwrap();
///
/// assert_eq!(3, graph.vertex_count());
/// assert_eq!(3, graph.edges(WeightConflict::Reject).unwrap().len());
/// ```
#[derive(Clone, Debug)]
pub struct Graph<V, W> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    arcs: Vec<Vec<(usize, W)>>,
}

impl<V, W> Default for Graph<V, W> {
    fn default() -> Self {
        Graph {
            vertices: Vec::new(),
            index: HashMap::new(),
            arcs: Vec::new(),
        }
    }
}

impl<V: Clone + Eq + Hash + Debug, W: Weight> Graph<V, W> {
    /// Creates a graph with no vertices.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an edgeless graph on the given vertices.
    pub fn with_vertices<I>(vertices: I) -> Self
            where I: IntoIterator<Item = V> {
        let mut graph = Self::new();
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        graph
    }

    /// Builds a graph from adjacency rows `vertex -> [(neighbor, weight)]`.
    ///
    /// The row keys make up the vertex set; a neighbor without a row of
    /// its own is an unknown vertex. Feed rows in a deterministic order
    /// (a `Vec` or `BTreeMap`, not a `HashMap`) for reproducible results.
    pub fn from_adjacency<I, N>(rows: I) -> Result<Self>
            where I: IntoIterator<Item = (V, N)>,
                  N: IntoIterator<Item = (V, W)> {

        let rows: Vec<(V, N)> = rows.into_iter().collect();
        let mut graph = Self::with_vertices(rows.iter().map(|row| row.0.clone()));

        for (vertex, neighbors) in rows {
            for (neighbor, weight) in neighbors {
                graph.add_arc(vertex.clone(), neighbor, weight)?;
            }
        }

        Ok(graph)
    }

    /// Adds a vertex, returning whether it was new.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }

        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.arcs.push(Vec::new());
        true
    }

    /// Adds the undirected edge `{a, b}`.
    pub fn add_edge(&mut self, a: V, b: V, weight: W) -> Result<()> {
        let (i, j) = self.endpoints(&a, &b)?;
        self.arcs[i].push((j, weight));
        self.arcs[j].push((i, weight));
        Ok(())
    }

    /// Adds the adjacency entry `a -> b`.
    ///
    /// This alone describes the undirected edge `{a, b}`; a matching
    /// entry `b -> a` may be added too.
    pub fn add_arc(&mut self, a: V, b: V, weight: W) -> Result<()> {
        let (i, j) = self.endpoints(&a, &b)?;
        self.arcs[i].push((j, weight));
        Ok(())
    }

    /// The number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The vertices in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Is `vertex` in the graph?
    pub fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    /// The deduplicated list of undirected edges.
    ///
    /// Edges appear in the order they were first reported, walking the
    /// vertices and then each vertex’s adjacency entries in insertion
    /// order.
    pub fn edges(&self, conflicts: WeightConflict) -> Result<Vec<Edge<V, W>>> {
        Ok(self.index_edges(conflicts)?
            .into_iter()
            .map(|(a, b, weight)| Edge {
                a: self.vertices[a].clone(),
                b: self.vertices[b].clone(),
                weight: weight,
            })
            .collect())
    }

    /// The number of connected components.
    pub fn component_count(&self) -> usize {
        let mut components = UnionFind::new(self.vertices.len());
        for (i, arcs) in self.arcs.iter().enumerate() {
            for &(j, _) in arcs {
                components.union(i, j);
            }
        }
        components.count_sets()
    }

    pub(crate) fn index_edges(&self, conflicts: WeightConflict)
            -> Result<Vec<(usize, usize, W)>> {

        let mut positions = HashMap::new();
        let mut edges: Vec<(usize, usize, W)> = Vec::new();

        for (i, arcs) in self.arcs.iter().enumerate() {
            for &(j, weight) in arcs {
                let (a, b) = if i < j { (i, j) } else { (j, i) };

                if weight.partial_cmp(&weight).is_none() {
                    return Err(GraphError::IncomparableWeight {
                        a: self.label(a),
                        b: self.label(b),
                        weight: format!("{:?}", weight),
                    }.into());
                }

                match positions.entry((a, b)) {
                    Entry::Vacant(entry) => {
                        entry.insert(edges.len());
                        edges.push((a, b, weight));
                    }
                    Entry::Occupied(entry) => {
                        let first = edges[*entry.get()].2;
                        if first.partial_cmp(&weight) == Some(Ordering::Equal) {
                            continue;
                        }

                        match conflicts {
                            WeightConflict::Reject =>
                                return Err(GraphError::ConflictingWeight {
                                    a: self.label(a),
                                    b: self.label(b),
                                    first: format!("{:?}", first),
                                    second: format!("{:?}", weight),
                                }.into()),
                            WeightConflict::FirstSeen => {
                                let (u, v) = (&self.vertices[a], &self.vertices[b]);
                                warn!(a = ?u, b = ?v, kept = ?first, dropped = ?weight,
                                      "conflicting edge weight");
                            }
                        }
                    }
                }
            }
        }

        Ok(edges)
    }

    // HELPERS

    fn endpoints(&self, a: &V, b: &V) -> Result<(usize, usize)> {
        let i = self.position(a)?;
        let j = self.position(b)?;

        if i == j {
            return Err(GraphError::SelfLoop { vertex: self.label(i) }.into());
        }

        Ok((i, j))
    }

    fn position(&self, vertex: &V) -> Result<usize> {
        self.index.get(vertex)
            .cloned()
            .ok_or_else(|| Error::unknown_vertex(vertex))
    }

    fn label(&self, i: usize) -> String {
        format!("{:?}", self.vertices[i])
    }
}
