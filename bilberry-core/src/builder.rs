//! Builder utilities for configuring the bilberry solver.

use std::num::NonZeroUsize;

use crate::{boruvka::Boruvka, error::ConfigError};

/// Default iteration cap; generous, since rounds roughly halve the
/// component count and real graphs converge in tens of rounds.
const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Configures and constructs [`Boruvka`] instances.
///
/// # Examples
/// ```
/// use bilberry_core::BoruvkaBuilder;
///
/// let solver = BoruvkaBuilder::new()
///     .with_max_iterations(64)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(solver.max_iterations().get(), 64);
///
/// assert!(BoruvkaBuilder::new().with_max_iterations(0).build().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct BoruvkaBuilder {
    max_iterations: usize,
}

impl Default for BoruvkaBuilder {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl BoruvkaBuilder {
    /// Creates a builder populated with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the iteration cap checked at each round boundary.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Returns the currently configured iteration cap.
    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Validates the configuration and constructs a [`Boruvka`] instance.
    ///
    /// # Errors
    /// Returns [`ConfigError::ZeroMaxIterations`] when the cap is zero.
    pub fn build(self) -> Result<Boruvka, ConfigError> {
        let max_iterations =
            NonZeroUsize::new(self.max_iterations).ok_or(ConfigError::ZeroMaxIterations {
                got: self.max_iterations,
            })?;

        Ok(Boruvka::new(max_iterations))
    }
}
