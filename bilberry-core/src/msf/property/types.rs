//! Type definitions for the solver property-based tests.

/// Weight distribution strategy for generated graphs.
///
/// Controls how edge weights are assigned during graph generation,
/// producing inputs that stress different aspects of the parallel solver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a unique weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights, stressing the
    /// lowest-edge-id tie-break.
    ManyIdentical,
    /// Sparse connected graph with a sprinkling of self-loops and
    /// parallel edges.
    Sparse,
    /// Dense graph approaching a complete graph.
    Dense,
    /// Multiple disconnected components with no cross-component edges.
    Disconnected,
}

/// Fixture for solver property tests.
///
/// Captures the vertex count, generated edge triples, and the weight
/// distribution used during generation, providing full context for
/// failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct MsfFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated `(source, target, weight)` triples; the index in this
    /// list is the edge id.
    pub edges: Vec<(usize, usize, f32)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

/// Configuration for the determinism property.
///
/// Controls how many times the solver is re-executed on the same input to
/// detect race-induced non-determinism.
pub(super) struct DeterminismConfig {
    /// Number of times to repeat the computation per input.
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Loads the configuration from the environment, falling back to a
    /// sensible default.
    ///
    /// `BILBERRY_MSF_PBT_REPS` controls the repetition count (default: 5).
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("BILBERRY_MSF_PBT_REPS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);
        Self { repetitions }
    }
}
