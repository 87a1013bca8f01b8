//! Property 2: Structural invariant verification.
//!
//! For any forest produced by the parallel solver, verifies:
//!
//! - **Canonical form** — `source < target` for all edges.
//! - **No self-loops** — `source != target` for all edges.
//! - **Faithful edges** — each edge id refers back to an input edge with
//!   the same endpoints and weight.
//! - **Acyclicity** — no cycles (union-find based detection).
//! - **Edge count** — `V - C` edges for `C` connected components.
//! - **Component count** — matches the input graph's component count.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{BoruvkaBuilder, EdgeListGraph, MsfEdge};

use super::helpers::find_root;
use super::types::MsfFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MsfFixture) -> TestCaseResult {
    let graph = EdgeListGraph::new(fixture.vertex_count, &fixture.edges)
        .map_err(|e| TestCaseError::fail(format!("fixture graph must be valid: {e}")))?;
    let solver = BoruvkaBuilder::new()
        .build()
        .map_err(|e| TestCaseError::fail(format!("default builder must succeed: {e}")))?;

    let result = solver.run(&graph);
    let forest = result.edges();

    validate_canonical_form(forest)?;
    validate_faithful_edges(forest, &fixture.edges)?;
    validate_acyclicity(fixture.vertex_count, forest)?;
    validate_edge_count(fixture.vertex_count, forest.len(), result.component_count())?;
    validate_component_count(fixture, result.component_count())?;

    Ok(())
}

// ── Validation helpers ──────────────────────────────────────────────────

/// Verifies that every forest edge is canonical and not a self-loop.
fn validate_canonical_form(edges: &[MsfEdge]) -> TestCaseResult {
    for (i, edge) in edges.iter().enumerate() {
        if edge.source() >= edge.target() {
            return Err(TestCaseError::fail(format!(
                "edge {i}: not canonical ({} >= {})",
                edge.source(),
                edge.target(),
            )));
        }
    }
    Ok(())
}

/// Verifies that each forest edge refers back to a real input edge.
fn validate_faithful_edges(
    edges: &[MsfEdge],
    input: &[(usize, usize, f32)],
) -> TestCaseResult {
    for (i, edge) in edges.iter().enumerate() {
        let Some(&(source, target, weight)) = input.get(edge.id()) else {
            return Err(TestCaseError::fail(format!(
                "edge {i}: id {} out of range",
                edge.id(),
            )));
        };
        let (lo, hi) = if source <= target {
            (source, target)
        } else {
            (target, source)
        };
        if (edge.source(), edge.target()) != (lo, hi) || edge.weight() != weight {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}, {}) does not match input edge {}",
                edge.source(),
                edge.target(),
                edge.weight(),
                edge.id(),
            )));
        }
    }
    Ok(())
}

/// Detects cycles in the forest using union-find.
fn validate_acyclicity(vertex_count: usize, edges: &[MsfEdge]) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (i, edge) in edges.iter().enumerate() {
        let root_s = find_root(&mut parent, edge.source());
        let root_t = find_root(&mut parent, edge.target());
        if root_s == root_t {
            return Err(TestCaseError::fail(format!(
                "edge {i}: ({}, {}) creates a cycle",
                edge.source(),
                edge.target(),
            )));
        }
        parent[root_t] = root_s;
    }
    Ok(())
}

/// Verifies that the forest has exactly `V - C` edges for `C` components.
fn validate_edge_count(
    vertex_count: usize,
    actual: usize,
    component_count: usize,
) -> TestCaseResult {
    let expected = vertex_count.saturating_sub(component_count);
    if actual != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {actual}, expected V - C = {expected} \
             (V={vertex_count}, C={component_count})",
        )));
    }
    Ok(())
}

/// Verifies that the reported component count equals the input graph's.
fn validate_component_count(fixture: &MsfFixture, reported: usize) -> TestCaseResult {
    let expected = count_input_components(fixture);
    if reported != expected {
        return Err(TestCaseError::fail(format!(
            "component count {reported}, input graph has {expected} \
             (distribution={:?})",
            fixture.distribution,
        )));
    }
    Ok(())
}

/// Counts connected components of the input graph by union-find over its
/// raw edges, ignoring self-loops.
fn count_input_components(fixture: &MsfFixture) -> usize {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    let mut components = fixture.vertex_count;

    for &(source, target, _) in &fixture.edges {
        if source == target {
            continue;
        }
        let root_s = find_root(&mut parent, source);
        let root_t = find_root(&mut parent, target);
        if root_s != root_t {
            parent[root_t] = root_s;
            components -= 1;
        }
    }

    components
}
