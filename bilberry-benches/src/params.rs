//! Benchmark parameter types.
//!
//! Groups related benchmark parameters into structs so that Criterion
//! benchmark ids stay readable and helper functions stay under the Clippy
//! `too-many-arguments` threshold.

use std::fmt;

/// Parameters for a minimum spanning forest benchmark run.
#[derive(Clone, Debug)]
pub struct MsfBenchParams {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Target average degree of the generated graph.
    pub average_degree: usize,
}

impl fmt::Display for MsfBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.average_degree)
    }
}
