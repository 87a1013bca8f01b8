//! Benchmark support crate for bilberry.
//!
//! Provides seeded synthetic graph generators and parameter types used by
//! the Criterion benchmarks for the parallel minimum spanning forest
//! solver.

pub mod error;
pub mod params;
pub mod source;
