//! Runtime entry point for the bilberry solver.

use std::num::NonZeroUsize;

use tracing::{instrument, warn};

use crate::{graph::Graph, msf, result::MsfResult};

/// Entry point for computing minimum spanning forests.
///
/// Built through [`crate::BoruvkaBuilder`]; a single instance can run any
/// number of graphs.
///
/// # Examples
/// ```
/// use bilberry_core::{BoruvkaBuilder, EdgeListGraph};
///
/// let graph = EdgeListGraph::new(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0)])?;
/// let solver = BoruvkaBuilder::new().build()?;
/// let result = solver.run(&graph);
///
/// assert!(result.is_tree());
/// assert_eq!(result.total_weight(), 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Boruvka {
    max_iterations: NonZeroUsize,
}

impl Boruvka {
    pub(crate) fn new(max_iterations: NonZeroUsize) -> Self {
        Self { max_iterations }
    }

    /// Returns the iteration cap configured for this instance.
    #[must_use]
    pub fn max_iterations(&self) -> NonZeroUsize {
        self.max_iterations
    }

    /// Computes the minimum spanning forest of `graph`.
    ///
    /// Never fails for a graph honouring the [`Graph`] contract: an empty
    /// graph yields the zero result, a disconnected graph yields its
    /// forest, and hitting the iteration cap is reported through
    /// [`crate::Termination::IterationCap`] on the result.
    pub fn run<G: Graph>(&self, graph: &G) -> MsfResult {
        self.run_with_counts(graph, graph.vertex_count(), graph.edge_count())
    }

    #[instrument(
        name = "msf.run",
        skip(self, graph),
        fields(
            graph = %graph.name(),
            vertices = vertices,
            edges = edges,
            max_iterations = %self.max_iterations,
        ),
    )]
    fn run_with_counts<G: Graph>(&self, graph: &G, vertices: usize, edges: usize) -> MsfResult {
        if vertices == 0 {
            warn!(graph = graph.name(), "graph has no vertices, skipping rounds");
        }
        msf::compute(graph, self.max_iterations.get())
    }
}
