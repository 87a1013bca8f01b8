//! Synthetic benchmark graphs.
//!
//! Provides a seeded random graph generator so that benchmark runs are
//! reproducible across machines and invocations. Generated graphs are
//! connected (a random spanning tree underlies every instance) with extra
//! edges added up to the requested average degree.

use bilberry_core::EdgeListGraph;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::BenchSetupError;

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Target average degree. Values below 2 still yield the spanning
    /// tree, which has average degree just under 2.
    pub average_degree: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected random graph from the given configuration.
///
/// The graph is built as a random spanning tree over a shuffled vertex
/// permutation, topped up with uniformly random extra edges until the
/// edge count reaches `vertex_count * average_degree / 2`. Weights are
/// uniform in `[0.1, 100.0)`.
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<EdgeListGraph, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges = Vec::new();

    let mut perm: Vec<usize> = (0..config.vertex_count).collect();
    for i in (1..perm.len()).rev() {
        let j = rng.gen_range(0..=i);
        perm.swap(i, j);
    }
    for window in perm.windows(2) {
        edges.push((window[0], window[1], rng.gen_range(0.1_f32..100.0)));
    }

    let target_edges = config
        .vertex_count
        .saturating_mul(config.average_degree)
        .div_euclid(2);
    while edges.len() < target_edges {
        let source = rng.gen_range(0..config.vertex_count);
        let target = rng.gen_range(0..config.vertex_count);
        if source != target {
            edges.push((source, target, rng.gen_range(0.1_f32..100.0)));
        }
    }

    Ok(EdgeListGraph::new(config.vertex_count, &edges)?)
}
