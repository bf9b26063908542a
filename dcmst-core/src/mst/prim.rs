//! Degree-constrained Prim construction.
//!
//! The tree grows from vertex 0. After each acceptance the frontier gains
//! every adjacency-matrix edge of the newly reached vertex, in ascending
//! neighbour order. Selection is a two-phase scan: find the cheapest
//! eligible candidate, then remove exactly that entry. Stale candidates
//! (targets already in the tree) stay in the frontier and are skipped.

use tracing::{debug, instrument};

use crate::{
    error::Result,
    graph::{AdjacencyMatrix, Edge, build_adjacency},
};

use super::{Algorithm, SpanningTree, TreeEdge, degree::DegreeCounter, infeasible, telemetry};

const START_VERTEX: usize = 0;

/// Builds a spanning tree with Prim's algorithm under a degree cap.
///
/// At each step the cheapest frontier edge whose target is outside the tree
/// and whose endpoints both have degree below `max_degree` is accepted. Ties
/// go to the candidate that entered the frontier first.
///
/// The adjacency matrix holds one weight per vertex pair, so when `edges`
/// repeats a pair only the later copy is visible here.
/// [`crate::kruskal_constrained`] sees every copy and may pick a cheaper one.
///
/// # Errors
/// Returns an input error (see [`crate::Graph::new`]) for malformed graphs and
/// [`crate::MstError::InfeasibleConstraint`] when no candidate is eligible
/// before every vertex is reached, which includes disconnected graphs.
///
/// # Examples
/// ```
/// use dcmst_core::{Edge, MstError, prim_constrained};
///
/// let edges = [
///     Edge::new(0, 1, 1.0),
///     Edge::new(1, 2, 2.0),
///     Edge::new(2, 3, 3.0),
///     Edge::new(0, 3, 10.0),
///     Edge::new(1, 3, 5.0),
/// ];
/// let tree = prim_constrained(4, &edges, 2)?;
/// assert_eq!(tree.weights(), vec![1.0, 2.0, 3.0]);
/// assert_eq!(tree.total_weight(), 6.0);
///
/// let err = prim_constrained(4, &edges, 1).expect_err("a path needs degree 2");
/// assert!(err.is_infeasible());
/// # Ok::<(), MstError>(())
/// ```
#[instrument(
    name = "mst.prim",
    err,
    skip(edges),
    fields(edge_count = edges.len()),
)]
pub fn prim_constrained(
    vertex_count: usize,
    edges: &[Edge],
    max_degree: usize,
) -> Result<SpanningTree> {
    let adjacency = build_adjacency(vertex_count, edges)?;
    grow(&adjacency, max_degree)
}

fn grow(adjacency: &AdjacencyMatrix, max_degree: usize) -> Result<SpanningTree> {
    let vertex_count = adjacency.vertex_count();
    let required = vertex_count.saturating_sub(1);

    let mut visited = vec![false; vertex_count];
    let mut degrees = DegreeCounter::new(vertex_count, max_degree);
    let mut frontier: Vec<TreeEdge> = Vec::new();
    let mut tree = Vec::with_capacity(required);
    let mut vertex = START_VERTEX;

    while tree.len() < required {
        visited[vertex] = true;
        frontier.extend(
            adjacency
                .neighbours(vertex)
                .map(|(target, weight)| TreeEdge {
                    source: vertex,
                    target,
                    weight,
                }),
        );

        let Some(index) = select_candidate(&frontier, &visited, &degrees) else {
            return Err(infeasible(Algorithm::Prim, max_degree, tree.len(), required));
        };

        let edge = frontier.remove(index);
        degrees.attach(edge.source, edge.target);
        telemetry::record_accepted(Algorithm::Prim);
        debug!(
            source = edge.source,
            target = edge.target,
            weight = edge.weight,
            "accepted edge"
        );
        tree.push(edge);
        vertex = edge.target;
    }

    Ok(SpanningTree {
        algorithm: Algorithm::Prim,
        vertex_count,
        max_degree,
        edges: tree,
    })
}

/// Returns the frontier index of the cheapest eligible candidate.
fn select_candidate(
    frontier: &[TreeEdge],
    visited: &[bool],
    degrees: &DegreeCounter,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, edge) in frontier.iter().enumerate() {
        if visited[edge.target] || !degrees.has_room(edge.source, edge.target) {
            continue;
        }
        // Strict comparison keeps the earliest of equal-weight candidates.
        if best.is_none_or(|(_, weight)| edge.weight < weight) {
            best = Some((index, edge.weight));
        }
    }
    best.map(|(index, _)| index)
}
