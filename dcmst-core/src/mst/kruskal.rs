//! Degree-constrained Kruskal construction.

use tracing::{debug, instrument};

use crate::{
    error::Result,
    graph::{Edge, validate_edges},
};

use super::{
    Algorithm, SpanningTree, TreeEdge, degree::DegreeCounter, infeasible, telemetry,
    union_find::DisjointSet,
};

/// Builds a spanning tree with Kruskal's algorithm under a degree cap.
///
/// Edges are stably sorted by ascending weight, so equal weights keep their
/// input order. Each edge is skipped when either endpoint is already at
/// `max_degree`, otherwise accepted when it joins two components. The
/// disjoint-set forest lives only for this call.
///
/// # Errors
/// Returns an input error (see [`crate::Graph::new`]) for malformed graphs and
/// [`crate::MstError::InfeasibleConstraint`] when fewer than
/// `vertex_count - 1` edges were accepted, which includes disconnected
/// graphs.
///
/// # Examples
/// ```
/// use dcmst_core::{Edge, kruskal_constrained};
///
/// let star = [Edge::new(0, 1, 1.0), Edge::new(0, 2, 1.0), Edge::new(1, 2, 5.0)];
/// let err = kruskal_constrained(3, &star, 1).expect_err("cap 1 cannot span 3 vertices");
/// assert!(err.is_infeasible());
///
/// let tree = kruskal_constrained(3, &star, 2)?;
/// assert_eq!(tree.weights(), vec![1.0, 1.0]);
/// # Ok::<(), dcmst_core::MstError>(())
/// ```
#[instrument(name = "mst.kruskal", err, skip(edges), fields(edge_count = edges.len()))]
pub fn kruskal_constrained(
    vertex_count: usize,
    edges: &[Edge],
    max_degree: usize,
) -> Result<SpanningTree> {
    validate_edges(vertex_count, edges)?;
    let required = vertex_count.saturating_sub(1);

    let mut sorted: Vec<&Edge> = edges.iter().collect();
    sorted.sort_by(|left, right| left.weight().total_cmp(&right.weight()));

    let mut sets = DisjointSet::new(vertex_count);
    let mut degrees = DegreeCounter::new(vertex_count, max_degree);
    let mut tree: Vec<TreeEdge> = Vec::with_capacity(required);

    for edge in sorted {
        // A full tree joins every vertex, so nothing later could be accepted.
        if tree.len() == required {
            break;
        }

        let (source, target) = edge.endpoints();
        if !degrees.has_room(source, target) {
            telemetry::record_degree_rejection(Algorithm::Kruskal);
            continue;
        }
        if sets.union(source, target) {
            degrees.attach(source, target);
            telemetry::record_accepted(Algorithm::Kruskal);
            debug!(source, target, weight = edge.weight(), "accepted edge");
            tree.push(TreeEdge::from(*edge));
        }
    }

    if tree.len() < required {
        return Err(infeasible(Algorithm::Kruskal, max_degree, tree.len(), required));
    }

    Ok(SpanningTree {
        algorithm: Algorithm::Kruskal,
        vertex_count,
        max_degree,
        edges: tree,
    })
}
