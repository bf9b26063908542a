//! Structural invariants under an arbitrary degree cap.
//!
//! Whatever the cap, a successful construction must return a spanning tree
//! drawn from the input that respects the cap and costs no less than the
//! unconstrained minimum. A failure must be an infeasibility report that
//! matches the run.

use std::collections::HashMap;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Algorithm, MstError, SpanningTree, kruskal_constrained, prim_constrained};

use super::helpers::{count_components, find_root};
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

/// Runs the structural invariants property for both constructions.
pub(super) fn run_structural_invariants_property(
    fixture: &MstFixture,
    max_degree: usize,
) -> TestCaseResult {
    let prim = prim_constrained(fixture.vertex_count, &fixture.edges, max_degree);
    check_outcome(fixture, Algorithm::Prim, max_degree, &prim)?;
    let kruskal = kruskal_constrained(fixture.vertex_count, &fixture.edges, max_degree);
    check_outcome(fixture, Algorithm::Kruskal, max_degree, &kruskal)
}

fn check_outcome(
    fixture: &MstFixture,
    algorithm: Algorithm,
    max_degree: usize,
    outcome: &crate::Result<SpanningTree>,
) -> TestCaseResult {
    let required = fixture.vertex_count - 1;
    match outcome {
        Ok(tree) => verify_tree(fixture, algorithm, max_degree, tree),
        Err(MstError::InfeasibleConstraint {
            algorithm: reported,
            max_degree: reported_cap,
            accepted,
            required: reported_required,
        }) => {
            if *reported != algorithm
                || *reported_cap != max_degree
                || *reported_required != required
                || accepted >= reported_required
            {
                return Err(TestCaseError::fail(format!(
                    "{algorithm} reported an inconsistent failure {outcome:?} ({})",
                    fixture.describe(),
                )));
            }
            Ok(())
        }
        Err(err) => Err(TestCaseError::fail(format!(
            "{algorithm} rejected a valid graph: {err} ({})",
            fixture.describe(),
        ))),
    }
}

fn verify_tree(
    fixture: &MstFixture,
    algorithm: Algorithm,
    max_degree: usize,
    tree: &SpanningTree,
) -> TestCaseResult {
    let fail = |reason: String| {
        Err(TestCaseError::fail(format!(
            "{algorithm} with cap {max_degree}: {reason} ({})",
            fixture.describe(),
        )))
    };

    if count_components(fixture.vertex_count, &fixture.edges) != 1 {
        return fail("returned a tree for a disconnected graph".into());
    }
    if tree.algorithm() != algorithm || tree.max_degree() != max_degree {
        return fail(format!(
            "tree metadata is {} / {}",
            tree.algorithm(),
            tree.max_degree()
        ));
    }
    if tree.edges().len() != fixture.vertex_count - 1 {
        return fail(format!("tree has {} edges", tree.edges().len()));
    }
    if let Some(vertex) = tree
        .degrees()
        .iter()
        .position(|&degree| degree > max_degree)
    {
        return fail(format!("vertex {vertex} exceeds the cap"));
    }

    let input: HashMap<(usize, usize), f64> = fixture
        .edges
        .iter()
        .map(|edge| {
            let (left, right) = edge.endpoints();
            ((left.min(right), left.max(right)), edge.weight())
        })
        .collect();
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    for edge in tree.edges() {
        let key = (
            edge.source().min(edge.target()),
            edge.target().max(edge.source()),
        );
        if input.get(&key) != Some(&edge.weight()) {
            return fail(format!("edge {edge:?} is not in the input"));
        }
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return fail(format!("edge {edge:?} closes a cycle"));
        }
        parent[right] = left;
    }

    let weights = tree.weights();
    if weights.windows(2).any(|pair| pair[0] > pair[1]) {
        return fail(format!("weights {weights:?} are not ascending"));
    }
    let minimum = sequential_kruskal(fixture.vertex_count, &fixture.edges).total_weight;
    if tree.total_weight() < minimum {
        return fail(format!(
            "total {} undercuts the unconstrained minimum {minimum}",
            tree.total_weight()
        ));
    }
    Ok(())
}
