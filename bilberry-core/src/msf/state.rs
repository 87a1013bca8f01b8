//! Shared round state for the data-parallel Borůvka solver.
//!
//! All mutable state lives in fixed-size atomic arrays indexed by vertex id,
//! allocated once before the round loop and reset in place each round. The
//! union-find forest is index-based: component identity is just a vertex id
//! and every mutation is an atomic array write, never pointer rewiring.

use std::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize, Ordering};

/// Weight-key sentinel standing in for +infinity; greater than the key of
/// every finite `f32`.
pub(super) const WEIGHT_NONE: u32 = u32::MAX;

/// Edge-id sentinel meaning "no edge".
pub(super) const EDGE_NONE: usize = usize::MAX;

/// Maps a finite `f32` weight to a `u32` key whose unsigned order matches
/// `f32::total_cmp`, so `AtomicU32::fetch_min` acts as an atomic float
/// minimum. Positive values get the sign bit set; negative values are
/// bit-inverted.
pub(super) fn weight_key(weight: f32) -> u32 {
    let bits = weight.to_bits();
    if bits & 0x8000_0000 == 0 {
        bits | 0x8000_0000
    } else {
        !bits
    }
}

/// Per-run solver state shared across all lanes of every phase.
pub(super) struct RoundState {
    /// Union-find representative for each vertex; stable within a round.
    pub(super) roots: Vec<AtomicUsize>,
    /// Staging area for merges decided this round; copied into `roots` at
    /// the round boundary.
    pub(super) new_roots: Vec<AtomicUsize>,
    /// Per-component minimum weight key, indexed by root id.
    pub(super) min_weight: Vec<AtomicU32>,
    /// Per-component minimum edge id, indexed by root id.
    pub(super) min_edge: Vec<AtomicUsize>,
    /// Edge grafted by each root this round, or [`EDGE_NONE`].
    pub(super) chosen: Vec<AtomicUsize>,
    /// Remaining component count; 1 means a full spanning tree.
    pub(super) components: AtomicUsize,
    /// Set when any merge occurs in the current round.
    pub(super) merged: AtomicBool,
}

impl RoundState {
    /// Allocates all arrays sized to `vertex_count`, with `roots` and
    /// `new_roots` as the identity mapping.
    pub(super) fn new(vertex_count: usize) -> Self {
        let identity = || (0..vertex_count).map(AtomicUsize::new).collect();
        Self {
            roots: identity(),
            new_roots: identity(),
            min_weight: (0..vertex_count).map(|_| AtomicU32::new(WEIGHT_NONE)).collect(),
            min_edge: (0..vertex_count).map(|_| AtomicUsize::new(EDGE_NONE)).collect(),
            chosen: (0..vertex_count).map(|_| AtomicUsize::new(EDGE_NONE)).collect(),
            components: AtomicUsize::new(vertex_count),
            merged: AtomicBool::new(false),
        }
    }

    /// Resets the per-round arrays and the progress flag. `roots`,
    /// `new_roots`, and the component counter persist across rounds.
    pub(super) fn reset_round(&self) {
        for slot in &self.min_weight {
            slot.store(WEIGHT_NONE, Ordering::Relaxed);
        }
        for slot in &self.min_edge {
            slot.store(EDGE_NONE, Ordering::Relaxed);
        }
        for slot in &self.chosen {
            slot.store(EDGE_NONE, Ordering::Relaxed);
        }
        self.merged.store(false, Ordering::Relaxed);
    }

    /// Returns the remaining component count.
    pub(super) fn components(&self) -> usize {
        self.components.load(Ordering::Acquire)
    }
}
