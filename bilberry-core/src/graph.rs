//! Graph abstractions for the bilberry solver.
//!
//! The solver treats the graph as an external collaborator: an immutable,
//! edge-indexed view it can fan out over from many threads at once. The
//! [`Graph`] trait is that boundary; [`EdgeListGraph`] is the bundled
//! implementation for callers holding a plain edge list.

use crate::error::GraphError;

/// Immutable edge-indexed view of a weighted undirected graph.
///
/// Implementations must uphold the solver's input contract: every endpoint
/// returned by [`Graph::source`] and [`Graph::target`] lies in
/// `[0, vertex_count)` and every weight is finite. [`EdgeListGraph`]
/// enforces this at construction; bespoke implementations are responsible
/// for their own validation. Self-loops and parallel edges are permitted.
///
/// # Examples
/// ```
/// use bilberry_core::{EdgeListGraph, Graph};
///
/// let graph = EdgeListGraph::new(3, &[(0, 1, 1.0), (2, 1, 2.0)])?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// // Edges are canonicalised so source <= target.
/// assert_eq!((graph.source(1), graph.target(1)), (1, 2));
/// # Ok::<(), bilberry_core::GraphError>(())
/// ```
pub trait Graph: Sync {
    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the number of stored edges.
    fn edge_count(&self) -> usize;

    /// Returns the source endpoint of `edge`.
    fn source(&self, edge: usize) -> usize;

    /// Returns the target endpoint of `edge`.
    fn target(&self, edge: usize) -> usize;

    /// Returns the weight of `edge`.
    fn weight(&self, edge: usize) -> f32;

    /// Returns a human-readable name for telemetry.
    fn name(&self) -> &str;
}

/// A validated, canonicalised edge list implementing [`Graph`].
///
/// Construction checks endpoint bounds and weight finiteness and orients
/// each edge so `source <= target`. Self-loops and parallel edges are kept:
/// the solver skips the former and tie-breaks the latter deterministically.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeListGraph {
    vertex_count: usize,
    sources: Vec<usize>,
    targets: Vec<usize>,
    weights: Vec<f32>,
}

impl EdgeListGraph {
    /// Builds a graph from `(source, target, weight)` triples.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidVertexId`] when an endpoint is
    /// `>= vertex_count` and [`GraphError::NonFiniteWeight`] when a weight
    /// is NaN or infinite.
    ///
    /// # Examples
    /// ```
    /// use bilberry_core::{EdgeListGraph, Graph, GraphError};
    ///
    /// let graph = EdgeListGraph::new(2, &[(0, 1, 0.5)])?;
    /// assert_eq!(graph.vertex_count(), 2);
    ///
    /// let result = EdgeListGraph::new(2, &[(0, 7, 0.5)]);
    /// assert!(matches!(result, Err(GraphError::InvalidVertexId { .. })));
    /// # Ok::<(), GraphError>(())
    /// ```
    pub fn new(vertex_count: usize, edges: &[(usize, usize, f32)]) -> Result<Self, GraphError> {
        let mut sources = Vec::with_capacity(edges.len());
        let mut targets = Vec::with_capacity(edges.len());
        let mut weights = Vec::with_capacity(edges.len());

        for &(source, target, weight) in edges {
            if source >= vertex_count {
                return Err(GraphError::InvalidVertexId {
                    vertex: source,
                    vertex_count,
                });
            }
            if target >= vertex_count {
                return Err(GraphError::InvalidVertexId {
                    vertex: target,
                    vertex_count,
                });
            }
            if !weight.is_finite() {
                return Err(GraphError::NonFiniteWeight { source, target });
            }

            let (lo, hi) = if source <= target {
                (source, target)
            } else {
                (target, source)
            };
            sources.push(lo);
            targets.push(hi);
            weights.push(weight);
        }

        Ok(Self {
            vertex_count,
            sources,
            targets,
            weights,
        })
    }
}

impl Graph for EdgeListGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.sources.len()
    }

    fn source(&self, edge: usize) -> usize {
        self.sources[edge]
    }

    fn target(&self, edge: usize) -> usize {
        self.targets[edge]
    }

    fn weight(&self, edge: usize) -> f32 {
        self.weights[edge]
    }

    fn name(&self) -> &str {
        "edge-list"
    }
}
