#![doc(html_root_url = "https://docs.rs/spanning-forest/0.1.0")]
//! Minimum and maximum spanning forests by Kruskal’s algorithm.
//!
//! The pieces are:
//!
//! |           | role |
//! | :-------- | :--- |
//! | [`UnionFind`](struct.UnionFind.html) | union-find over dense indices |
//! | [`DisjointSet`](struct.DisjointSet.html) | union-find over vertex labels |
//! | [`Graph`](struct.Graph.html) | weighted undirected adjacency lists |
//! | [`build`](fn.build.html) | Kruskal’s algorithm, minimum or maximum |
//!
//! The union-finds perform union by rank with full path compression,
//! using interior mutability so that `find` takes `&self`.
//!
//! Builds log through [`tracing`](https://docs.rs/tracing): one `debug`
//! event at the start and end of each build and a `trace` event per
//! considered edge. With Cargo feature `"serde"`, the result types
//! implement `Serialize` and `Deserialize`.
//!
//! # Examples
//!
//! A pipe network where weights are either the cost of laying a pipe
//! (build the cheapest network reaching every node) or its capacity
//! (keep the highest-capacity pipes):
//!
//! ```
//! use spanning_forest::{build, Graph, Mode};
//!
//! let network = Graph::from_adjacency(vec![
//!     ("Plant", vec![("A", 10), ("B", 6), ("C", 5)]),
//!     ("A",     vec![("Plant", 10), ("D", 15), ("B", 4)]),
//!     ("B",     vec![("Plant", 6), ("A", 4), ("D", 12), ("E", 8), ("C", 7)]),
//!     ("C",     vec![("Plant", 5), ("B", 7), ("E", 20)]),
//!     ("D",     vec![("A", 15), ("B", 12), ("F", 9)]),
//!     ("E",     vec![("B", 8), ("C", 20), ("F", 3)]),
//!     ("F",     vec![("D", 9), ("E", 3)]),
//! ]).unwrap();
//!
//! let cheapest = build(&network, Mode::Minimum).unwrap();
//! assert_eq!(6, cheapest.len());
//! assert_eq!(35, cheapest.total_weight());
//!
//! let widest = build(&network, Mode::Maximum).unwrap();
//! assert_eq!(6, widest.len());
//! assert_eq!(74, widest.total_weight());
//! ```

#![warn(missing_docs)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;

mod traits;
mod error;
mod array;
mod disjoint_set;
mod graph;
mod kruskal;

pub use traits::*;
pub use error::*;
pub use array::*;
pub use disjoint_set::*;
pub use graph::*;
pub use kruskal::*;
