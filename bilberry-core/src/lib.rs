//! Bilberry core library.
//!
//! Computes the minimum spanning forest of a weighted undirected graph
//! with a data-parallel Borůvka contraction loop over shared atomic
//! arrays. See [`BoruvkaBuilder`] for configuration and [`Boruvka::run`]
//! for the entry point.

mod boruvka;
mod builder;
mod error;
mod graph;
mod msf;
mod result;
#[cfg(test)]
mod test_utils;

pub use crate::{
    boruvka::Boruvka,
    builder::BoruvkaBuilder,
    error::{ConfigError, ConfigErrorCode, GraphError, GraphErrorCode},
    graph::{EdgeListGraph, Graph},
    result::{MsfEdge, MsfResult, Termination},
};
