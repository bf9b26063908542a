//! Determinism and run isolation.
//!
//! The constructions keep no state between calls, so repeating a run (even
//! after an unrelated run in between) must return an identical result.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Edge, SpanningTree, kruskal_constrained, prim_constrained};

use super::helpers::tree_signature;
use super::types::MstFixture;

type Constructor = fn(usize, &[Edge], usize) -> crate::Result<SpanningTree>;

/// Runs the determinism property for both constructions.
pub(super) fn run_determinism_property(fixture: &MstFixture, max_degree: usize) -> TestCaseResult {
    let reversed: Vec<Edge> = fixture.edges.iter().rev().copied().collect();
    for (name, construct) in [
        ("prim", prim_constrained as Constructor),
        ("kruskal", kruskal_constrained as Constructor),
    ] {
        let first = construct(fixture.vertex_count, &fixture.edges, max_degree);
        let _ = construct(fixture.vertex_count, &reversed, max_degree.saturating_add(1));
        let second = construct(fixture.vertex_count, &fixture.edges, max_degree);

        let same = match (&first, &second) {
            (Ok(a), Ok(b)) => tree_signature(a) == tree_signature(b),
            (Err(a), Err(b)) => a == b,
            _ => false,
        };
        if !same {
            return Err(TestCaseError::fail(format!(
                "{name} diverged between runs: {first:?} vs {second:?} ({})",
                fixture.describe(),
            )));
        }
    }
    Ok(())
}
