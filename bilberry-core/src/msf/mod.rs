//! Data-parallel Borůvka minimum spanning forest construction.
//!
//! Each round narrows the surviving edge set to candidates that could be a
//! component's cheapest outgoing edge, lets every component settle that
//! edge through atomic minimum races, grafts winning component pairs
//! together exactly once, and flattens the union-find forest by pointer
//! jumping. Rounds repeat until one component remains, a round passes with
//! no merge (disconnected input), or the iteration cap is hit.
//!
//! Inside a round each phase fans out over all edges or all vertices with
//! Rayon; the pool's fork-join completion is the barrier between phases.
//! Lanes never rely on read-after-write within a phase except where the
//! algorithm tolerates staleness, so relaxed atomics suffice for the
//! in-phase races.

mod state;

use std::sync::atomic::Ordering;
use std::time::Instant;

use rayon::prelude::*;
use tracing::debug;

use crate::{
    graph::Graph,
    result::{MsfEdge, MsfResult, Termination},
};

use self::state::{EDGE_NONE, RoundState, WEIGHT_NONE, weight_key};

/// Classification of an active edge by the filter phase.
enum EdgeFate {
    /// Self-loop or intra-component edge; never considered again.
    Discard,
    /// Still crosses components but provably not a round minimum.
    Keep,
    /// Crosses components and may be a component's round minimum.
    Candidate,
}

/// Runs the contraction loop to completion and assembles the result.
pub(crate) fn compute<G: Graph>(graph: &G, max_iterations: usize) -> MsfResult {
    let wall_start = Instant::now();

    let vertices = graph.vertex_count();
    if vertices == 0 {
        return MsfResult::empty(wall_start.elapsed());
    }

    let state = RoundState::new(vertices);
    let mut active: Vec<usize> = (0..graph.edge_count()).collect();
    let mut forest: Vec<MsfEdge> = Vec::with_capacity(vertices.saturating_sub(1));
    let mut total_weight = 0.0_f64;

    let compute_start = Instant::now();
    let mut iterations = 0;
    let termination = loop {
        if iterations == max_iterations {
            break Termination::IterationCap;
        }
        iterations += 1;

        state.reset_round();

        let candidates = filter_candidates(graph, &state, &mut active);
        select_minimum_edges(graph, &state, &candidates);
        merge_components(graph, &state);
        harvest_round(graph, &state, &mut forest, &mut total_weight);
        compress_paths(&state);
        commit_roots(&state);

        let components = state.components();
        debug!(round = iterations, components, total_weight, "round complete");

        if components == 1 {
            break Termination::SpanningTree;
        }
        if !state.merged.load(Ordering::Relaxed) {
            break Termination::Forest;
        }
    };
    let compute_time = compute_start.elapsed();

    forest.sort_unstable();
    MsfResult::new(
        total_weight,
        forest,
        state.components(),
        iterations,
        termination,
        compute_time,
        wall_start.elapsed(),
    )
}

/// Returns the canonical `(lo, hi)` endpoints of `edge`.
fn endpoints<G: Graph>(graph: &G, edge: usize) -> (usize, usize) {
    let source = graph.source(edge);
    let target = graph.target(edge);
    if source <= target {
        (source, target)
    } else {
        (target, source)
    }
}

/// FILTER: races every active edge's weight into both endpoint components'
/// minimum slots, compacts the active list in place (self-loops and
/// intra-component edges leave it permanently), and returns this round's
/// candidate subset.
///
/// An edge is a candidate when its weight key was at or below at least one
/// of the two prior values its own atomic updates observed. Every edge that
/// ends up equal to a component's settled minimum always qualifies, so the
/// pruning is a pure reduction of select-phase traffic.
fn filter_candidates<G: Graph>(
    graph: &G,
    state: &RoundState,
    active: &mut Vec<usize>,
) -> Vec<usize> {
    let fates: Vec<EdgeFate> = active
        .par_iter()
        .map(|&edge| classify_edge(graph, state, edge))
        .collect();

    let mut candidates = Vec::new();
    let mut kept = 0;
    for (index, fate) in fates.iter().enumerate() {
        let edge = active[index];
        match fate {
            EdgeFate::Discard => {}
            EdgeFate::Keep => {
                active[kept] = edge;
                kept += 1;
            }
            EdgeFate::Candidate => {
                active[kept] = edge;
                kept += 1;
                candidates.push(edge);
            }
        }
    }
    active.truncate(kept);
    candidates
}

fn classify_edge<G: Graph>(graph: &G, state: &RoundState, edge: usize) -> EdgeFate {
    let (lo, hi) = endpoints(graph, edge);
    if lo == hi {
        return EdgeFate::Discard;
    }

    let root_lo = state.roots[lo].load(Ordering::Relaxed);
    let root_hi = state.roots[hi].load(Ordering::Relaxed);
    if root_lo == root_hi {
        return EdgeFate::Discard;
    }

    let key = weight_key(graph.weight(edge));
    let seen_lo = state.min_weight[root_lo].fetch_min(key, Ordering::Relaxed);
    let seen_hi = state.min_weight[root_hi].fetch_min(key, Ordering::Relaxed);
    if key <= seen_lo || key <= seen_hi {
        EdgeFate::Candidate
    } else {
        EdgeFate::Keep
    }
}

/// SELECT: every candidate whose weight equals a root's settled minimum
/// races its edge id into that root's `min_edge` slot. All contenders for a
/// slot carry the same weight, so the `fetch_min` leaves the lowest edge id
/// regardless of lane order.
fn select_minimum_edges<G: Graph>(graph: &G, state: &RoundState, candidates: &[usize]) {
    candidates.par_iter().for_each(|&edge| {
        let (lo, hi) = endpoints(graph, edge);
        let root_lo = state.roots[lo].load(Ordering::Relaxed);
        let root_hi = state.roots[hi].load(Ordering::Relaxed);
        if root_lo == root_hi {
            return;
        }

        let key = weight_key(graph.weight(edge));
        if key == state.min_weight[root_lo].load(Ordering::Relaxed) {
            state.min_edge[root_lo].fetch_min(edge, Ordering::Relaxed);
        }
        if key == state.min_weight[root_hi].load(Ordering::Relaxed) {
            state.min_edge[root_hi].fetch_min(edge, Ordering::Relaxed);
        }
    });
}

/// MERGE: one task per root vertex. A root with a chosen edge grafts onto
/// the component across that edge, unless both components picked the same
/// edge and this root owns the higher endpoint — the rule that stops a
/// mutual pair from merging twice and double-counting the weight.
fn merge_components<G: Graph>(graph: &G, state: &RoundState) {
    let vertices = graph.vertex_count();
    (0..vertices).into_par_iter().for_each(|vertex| {
        if state.roots[vertex].load(Ordering::Relaxed) != vertex {
            return;
        }
        if state.min_weight[vertex].load(Ordering::Relaxed) == WEIGHT_NONE {
            return;
        }
        let edge = state.min_edge[vertex].load(Ordering::Relaxed);
        if edge == EDGE_NONE {
            return;
        }

        let (mut near, mut far) = endpoints(graph, edge);
        if state.roots[near].load(Ordering::Relaxed) != vertex {
            std::mem::swap(&mut near, &mut far);
        }
        let other = state.roots[far].load(Ordering::Relaxed);

        if near < far || state.min_edge[other].load(Ordering::Relaxed) != edge {
            state.chosen[vertex].store(edge, Ordering::Relaxed);
            state.components.fetch_sub(1, Ordering::AcqRel);
            state.merged.store(true, Ordering::Relaxed);
            // Read new_roots, not roots: `other` may itself be grafting
            // this round. A stale read leaves a chain that the compression
            // phase flattens.
            let adopted = state.new_roots[other].load(Ordering::Relaxed);
            state.new_roots[vertex].store(adopted, Ordering::Relaxed);
        }
    });
}

/// Collects the edges grafted this round, in root-vertex order, into the
/// forest and the running `f64` total. Runs after the merge barrier so the
/// float accumulation order is fixed and the result is reproducible between
/// runs, which racing in-phase float adds would not be.
fn harvest_round<G: Graph>(
    graph: &G,
    state: &RoundState,
    forest: &mut Vec<MsfEdge>,
    total_weight: &mut f64,
) {
    for slot in &state.chosen {
        let edge = slot.load(Ordering::Relaxed);
        if edge == EDGE_NONE {
            continue;
        }
        let (lo, hi) = endpoints(graph, edge);
        let weight = graph.weight(edge);
        forest.push(MsfEdge::new(lo, hi, weight, edge));
        *total_weight += f64::from(weight);
    }
}

/// COMPRESS: pointer-jumps every vertex's staged root to its fixed point so
/// the next round's lookups are O(1). The walk is bounded by the vertex
/// count as a safety cap against malformed chains.
fn compress_paths(state: &RoundState) {
    let vertices = state.new_roots.len();
    (0..vertices).into_par_iter().for_each(|vertex| {
        let mut current = state.new_roots[vertex].load(Ordering::Relaxed);
        for _ in 0..vertices {
            let parent = state.new_roots[current].load(Ordering::Relaxed);
            if parent == current {
                break;
            }
            current = parent;
        }
        state.new_roots[vertex].store(current, Ordering::Relaxed);
    });
}

/// CHECK: publishes the compressed staging array as the next round's roots.
fn commit_roots(state: &RoundState) {
    state
        .roots
        .par_iter()
        .zip(state.new_roots.par_iter())
        .for_each(|(root, staged)| {
            root.store(staged.load(Ordering::Relaxed), Ordering::Relaxed);
        });
}
