//! Benchmark setup error type.
//!
//! Aggregates the error types that may arise during benchmark data
//! preparation so that setup functions can propagate failures with `?`
//! instead of using `.expect()`.

use bilberry_core::{ConfigError, GraphError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph construction produced an invalid edge list.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// Solver configuration was rejected.
    #[error("solver configuration failed: {0}")]
    Config(#[from] ConfigError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
