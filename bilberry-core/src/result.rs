//! Result types for minimum spanning forest computations.

use std::cmp::Ordering;
use std::time::Duration;

/// A single forest edge in canonical undirected form (`source <= target`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MsfEdge {
    source: usize,
    target: usize,
    weight: f32,
    id: usize,
}

impl MsfEdge {
    pub(crate) fn new(source: usize, target: usize, weight: f32, id: usize) -> Self {
        Self {
            source,
            target,
            weight,
            id,
        }
    }

    /// Returns the smaller endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the larger endpoint id.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> f32 { self.weight }

    /// Returns the edge's id in the input graph's edge list, which doubles
    /// as the deterministic tie-break among equal-weight edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn id(&self) -> usize { self.id }
}

impl Eq for MsfEdge {}

impl Ord for MsfEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for MsfEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// How a [`crate::Boruvka`] run came to an end.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Termination {
    /// A single component remained: the forest is a spanning tree.
    SpanningTree,
    /// A round completed without any merge: the input is disconnected and
    /// the accumulated forest is its minimum spanning forest.
    Forest,
    /// The iteration cap was reached before either condition; the result
    /// carries the weight accumulated so far.
    IterationCap,
}

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MsfResult {
    total_weight: f64,
    edges: Vec<MsfEdge>,
    component_count: usize,
    iterations: usize,
    termination: Termination,
    compute_time: Duration,
    wall_time: Duration,
}

impl MsfResult {
    pub(crate) fn new(
        total_weight: f64,
        edges: Vec<MsfEdge>,
        component_count: usize,
        iterations: usize,
        termination: Termination,
        compute_time: Duration,
        wall_time: Duration,
    ) -> Self {
        Self {
            total_weight,
            edges,
            component_count,
            iterations,
            termination,
            compute_time,
            wall_time,
        }
    }

    /// Result for a graph with no vertices: a trivially complete, empty
    /// forest with no rounds run.
    pub(crate) fn empty(wall_time: Duration) -> Self {
        Self::new(
            0.0,
            Vec::new(),
            0,
            0,
            Termination::Forest,
            Duration::ZERO,
            wall_time,
        )
    }

    /// Returns the total weight of the forest, accumulated as `f64`.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the forest edges, sorted by `(weight, source, target, id)`.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[MsfEdge] { &self.edges }

    /// Returns the number of connected components in the resulting forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of contraction rounds actually performed.
    #[must_use]
    #[rustfmt::skip]
    pub fn iterations(&self) -> usize { self.iterations }

    /// Returns how the run terminated.
    #[must_use]
    #[rustfmt::skip]
    pub fn termination(&self) -> Termination { self.termination }

    /// Returns the time spent in the contraction round loop.
    #[must_use]
    #[rustfmt::skip]
    pub fn compute_time(&self) -> Duration { self.compute_time }

    /// Returns the wall-clock time of the whole run, including state
    /// allocation.
    #[must_use]
    #[rustfmt::skip]
    pub fn wall_time(&self) -> Duration { self.wall_time }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns `false` when the run stopped at the iteration cap instead of
    /// reaching a termination condition.
    #[must_use]
    pub fn converged(&self) -> bool {
        self.termination != Termination::IterationCap
    }
}
