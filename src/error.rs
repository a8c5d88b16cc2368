//! Error types for graph construction and spanning-forest builds.

use std::error;
use std::fmt;

/// Result type for this crate’s fallible operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort building a graph or a spanning forest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A vertex was used that is not part of the registered vertex set.
    ///
    /// Holds the `Debug` rendering of the offending vertex.
    UnknownVertex(String),

    /// The graph description is malformed.
    InvalidGraph(GraphError),

    /// The total weight of the selected edges does not fit the weight type.
    WeightOverflow {
        /// The running total before the failing addition.
        total: String,
        /// The weight of the edge that could not be added.
        weight: String,
    },
}

/// Ways in which a graph description can be malformed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// An edge connects a vertex to itself.
    SelfLoop {
        /// The looping vertex.
        vertex: String,
    },

    /// The same undirected edge was reported twice with different weights.
    ConflictingWeight {
        /// One endpoint.
        a: String,
        /// The other endpoint.
        b: String,
        /// The weight reported first.
        first: String,
        /// The differing weight reported later.
        second: String,
    },

    /// An edge weight does not compare with itself, e.g. a NaN.
    IncomparableWeight {
        /// One endpoint.
        a: String,
        /// The other endpoint.
        b: String,
        /// The offending weight.
        weight: String,
    },
}

impl Error {
    pub(crate) fn unknown_vertex<V: fmt::Debug>(vertex: &V) -> Self {
        Error::UnknownVertex(format!("{:?}", vertex))
    }
}

impl From<GraphError> for Error {
    fn from(err: GraphError) -> Self {
        Error::InvalidGraph(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::UnknownVertex(ref vertex) =>
                write!(f, "unknown vertex: {}", vertex),
            Error::InvalidGraph(ref err) =>
                write!(f, "invalid graph: {}", err),
            Error::WeightOverflow { ref total, ref weight } =>
                write!(f, "total weight overflows adding {} to {}", weight, total),
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            GraphError::SelfLoop { ref vertex } =>
                write!(f, "self-loop on {}", vertex),
            GraphError::ConflictingWeight { ref a, ref b, ref first, ref second } =>
                write!(f, "edge {}-{} reported with weights {} and {}",
                       a, b, first, second),
            GraphError::IncomparableWeight { ref a, ref b, ref weight } =>
                write!(f, "edge {}-{} has incomparable weight {}", a, b, weight),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::InvalidGraph(ref err) => Some(err),
            Error::UnknownVertex(_) | Error::WeightOverflow { .. } => None,
        }
    }
}

impl error::Error for GraphError {}
