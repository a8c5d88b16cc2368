//! Kruskal’s algorithm for minimum and maximum spanning forests.

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use tracing::{debug, trace};

use super::{DisjointSet, Edge, Error, Graph, Result, Weight, WeightConflict};

/// Which extreme spanning forest to build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    /// Consider edges lightest first.
    Minimum,
    /// Consider edges heaviest first.
    Maximum,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Minimum
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Mode::Minimum => f.write_str("minimum"),
            Mode::Maximum => f.write_str("maximum"),
        }
    }
}

/// The error returned when parsing a [`Mode`](enum.Mode.html) fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseModeError(String);

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown mode {:?}: expected min or max", self.0)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "minimum" => Ok(Mode::Minimum),
            "max" | "maximum" => Ok(Mode::Maximum),
            _ => Err(ParseModeError(s.to_owned())),
        }
    }
}

/// Settings for a spanning-forest build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Options {
    /// Minimum or maximum forest.
    pub mode: Mode,
    /// How to treat an edge reported with two different weights.
    pub conflicts: WeightConflict,
}

impl Options {
    /// Options for `mode`, rejecting conflicting edge weights.
    pub fn new(mode: Mode) -> Self {
        Options {
            mode: mode,
            conflicts: WeightConflict::default(),
        }
    }

    /// Sets the weight-conflict policy.
    pub fn conflicts(mut self, conflicts: WeightConflict) -> Self {
        self.conflicts = conflicts;
        self
    }
}

/// What happened to an edge when Kruskal’s algorithm considered it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    /// The edge joined two components and is part of the forest.
    Accepted,
    /// Both endpoints were already connected; the edge would close a cycle.
    Rejected,
}

/// One considered edge and its outcome.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step<V, W> {
    /// The edge considered.
    pub edge: Edge<V, W>,
    /// Whether it was kept.
    pub outcome: Outcome,
}

/// A minimum or maximum spanning forest.
///
/// Edges are kept in the order they were selected.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpanningForest<V, W> {
    mode: Mode,
    edges: Vec<Edge<V, W>>,
    total_weight: W,
    steps: Vec<Step<V, W>>,
}

impl<V, W: Weight> SpanningForest<V, W> {
    /// The mode the forest was built in.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The selected edges, in selection order.
    pub fn edges(&self) -> &[Edge<V, W>] {
        &self.edges
    }

    /// The selected `(vertex, vertex)` pairs, in selection order.
    pub fn pairs(&self) -> impl Iterator<Item = (&V, &V)> {
        self.edges.iter().map(Edge::pair)
    }

    /// The sum of the selected edges’ weights.
    pub fn total_weight(&self) -> W {
        self.total_weight
    }

    /// Every edge considered, in processing order, with its outcome.
    pub fn steps(&self) -> &[Step<V, W>] {
        &self.steps
    }

    /// The number of selected edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Were no edges selected?
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Builds the minimum or maximum spanning forest of `graph`.
///
/// Conflicting edge weights are rejected; use
/// [`build_with`](fn.build_with.html) to choose otherwise.
///
/// # Examples
///
/// ```
/// use spanning_forest::{build, Graph, Mode};
///
/// let mut graph = Graph::with_vertices(vec!["A", "B", "C"]);
/// graph.add_edge("A", "B", 10).unwrap();
/// graph.add_edge("B", "C", 5).unwrap();
/// graph.add_edge("A", "C", 1).unwrap();
///
/// let min = build(&graph, Mode::Minimum).unwrap();
/// assert_eq!(vec![(&"A", &"C"), (&"B", &"C")], min.pairs().collect::<Vec<_>>());
/// assert_eq!(6, min.total_weight());
///
/// let max = build(&graph, Mode::Maximum).unwrap();
/// assert_eq!(vec![(&"A", &"B"), (&"B", &"C")], max.pairs().collect::<Vec<_>>());
/// assert_eq!(15, max.total_weight());
/// ```
pub fn build<V, W>(graph: &Graph<V, W>, mode: Mode) -> Result<SpanningForest<V, W>>
        where V: Clone + Eq + Hash + fmt::Debug,
              W: Weight {
    build_with(graph, &Options::new(mode))
}

/// Builds a spanning forest of `graph` as configured by `options`.
///
/// Edges are sorted by weight, ascending for `Mode::Minimum` and
/// descending for `Mode::Maximum`. Equal weights keep their order in
/// [`Graph::edges`](struct.Graph.html#method.edges). Every edge is then
/// offered to a disjoint-set of the graph’s vertices and kept if it joins
/// two components. A disconnected graph yields one tree per component.
pub fn build_with<V, W>(graph: &Graph<V, W>, options: &Options)
        -> Result<SpanningForest<V, W>>
        where V: Clone + Eq + Hash + fmt::Debug,
              W: Weight {

    let mode = options.mode;
    let mut edges = graph.index_edges(options.conflicts)?;

    debug!(%mode, vertices = graph.vertex_count(), edges = edges.len(),
           "building spanning forest");

    // Weights are known to be self-comparable, so the fallback is never hit.
    edges.sort_by(|x, y| {
        let ord = x.2.partial_cmp(&y.2).unwrap_or(Ordering::Equal);
        match mode {
            Mode::Minimum => ord,
            Mode::Maximum => ord.reverse(),
        }
    });

    let vertices = graph.vertices();
    let mut sets = DisjointSet::new(vertices.iter().cloned());
    let mut selected = Vec::new();
    let mut steps = Vec::with_capacity(edges.len());
    let mut total_weight = W::zero();

    for (a, b, weight) in edges {
        let edge = Edge {
            a: vertices[a].clone(),
            b: vertices[b].clone(),
            weight: weight,
        };

        let outcome = if sets.union(&edge.a, &edge.b)? {
            total_weight = total_weight.checked_add(weight)
                .ok_or_else(|| Error::WeightOverflow {
                    total: format!("{:?}", total_weight),
                    weight: format!("{:?}", weight),
                })?;
            selected.push(edge.clone());
            Outcome::Accepted
        } else {
            Outcome::Rejected
        };

        trace!(a = ?edge.a, b = ?edge.b, weight = ?weight, ?outcome, "edge considered");
        steps.push(Step { edge: edge, outcome: outcome });
    }

    debug!(%mode, selected = selected.len(), total_weight = ?total_weight,
           components = sets.count_sets(), "spanning forest built");

    Ok(SpanningForest {
        mode: mode,
        edges: selected,
        total_weight: total_weight,
        steps: steps,
    })
}
