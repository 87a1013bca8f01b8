//! Error types for the bilberry core library.
//!
//! The solver itself never fails on a well-formed graph; errors arise only
//! at the boundaries, when an edge list is validated into an
//! [`crate::EdgeListGraph`] or when a builder configuration is rejected.

use thiserror::Error;

/// Errors reported while validating an edge list into a graph.
///
/// `Display` and `Error` are implemented by hand because the
/// `NonFiniteWeight::source` field name would otherwise be picked up by
/// `thiserror`'s source-field inference, which requires the field to
/// implement `Error`.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// An edge referenced a vertex id that is not present in the graph.
    InvalidVertexId {
        /// The invalid vertex id referenced by an edge.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge carried a non-finite weight.
    NonFiniteWeight {
        /// The source endpoint id (as provided).
        source: usize,
        /// The target endpoint id (as provided).
        target: usize,
    },
}

impl std::fmt::Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidVertexId {
                vertex,
                vertex_count,
            } => write!(
                f,
                "edge references vertex {vertex}, but vertex_count is {vertex_count}"
            ),
            Self::NonFiniteWeight { source, target } => {
                write!(f, "edge ({source}, {target}) has non-finite weight")
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::InvalidVertexId { .. } => GraphErrorCode::InvalidVertexId,
            Self::NonFiniteWeight { .. } => GraphErrorCode::NonFiniteWeight,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GraphErrorCode {
    /// An edge referenced a vertex id that is not present in the graph.
    InvalidVertexId,
    /// An edge carried a non-finite weight.
    NonFiniteWeight,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidVertexId => "INVALID_VERTEX_ID",
            Self::NonFiniteWeight => "NON_FINITE_WEIGHT",
        }
    }
}

/// Errors reported while validating a [`crate::BoruvkaBuilder`].
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The iteration cap must be at least one round.
    #[error("max_iterations must be at least 1 (got {got})")]
    ZeroMaxIterations {
        /// The invalid iteration cap supplied by the caller.
        got: usize,
    },
}

impl ConfigError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> ConfigErrorCode {
        match self {
            Self::ZeroMaxIterations { .. } => ConfigErrorCode::ZeroMaxIterations,
        }
    }
}

/// Machine-readable error codes for [`ConfigError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConfigErrorCode {
    /// The iteration cap must be at least one round.
    ZeroMaxIterations,
}

impl ConfigErrorCode {
    /// Returns the symbolic identifier for logging and metrics surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ZeroMaxIterations => "ZERO_MAX_ITERATIONS",
        }
    }
}
