//! Unconstrained Borůvka construction.
//!
//! Every round picks the cheapest edge leaving each component and merges
//! along all of them. Equal weights resolve to the lower input index, which
//! makes the choice a strict total order so a round can never close a cycle.

use tracing::{debug, instrument};

use crate::{
    error::Result,
    graph::{Edge, validate_edges},
};

use super::{SpanningForest, TreeEdge, union_find::DisjointSet};

/// Computes a minimum spanning forest with Borůvka's algorithm.
///
/// No degree cap applies. On a disconnected graph the result spans each
/// component separately and [`SpanningForest::is_tree`] is `false`.
///
/// # Errors
/// Returns an input error (see [`crate::Graph::new`]) for malformed graphs.
///
/// # Examples
/// ```
/// use dcmst_core::{Edge, boruvka};
///
/// let edges = [
///     Edge::new(0, 1, 2.0),
///     Edge::new(0, 2, 19.0),
///     Edge::new(1, 2, 8.0),
/// ];
/// let forest = boruvka(3, &edges)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 10.0);
/// # Ok::<(), dcmst_core::MstError>(())
/// ```
#[instrument(name = "mst.boruvka", err, skip(edges), fields(edge_count = edges.len()))]
pub fn boruvka(vertex_count: usize, edges: &[Edge]) -> Result<SpanningForest> {
    validate_edges(vertex_count, edges)?;

    let mut sets = DisjointSet::new(vertex_count);
    let mut forest: Vec<TreeEdge> = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut round = 0_usize;

    while sets.components() > 1 {
        let cheapest = cheapest_outgoing(&mut sets, edges);
        let before = forest.len();
        for index in cheapest.into_iter().flatten() {
            let edge = edges[index];
            if sets.union(edge.source(), edge.target()) {
                forest.push(TreeEdge::from(edge));
            }
        }

        round += 1;
        debug!(
            round,
            merged = forest.len() - before,
            components = sets.components(),
            "completed round"
        );
        if forest.len() == before {
            break;
        }
    }

    Ok(SpanningForest {
        edges: forest,
        component_count: sets.components(),
    })
}

/// Returns, per component root, the index of its cheapest outgoing edge.
fn cheapest_outgoing(sets: &mut DisjointSet, edges: &[Edge]) -> Vec<Option<usize>> {
    let mut cheapest: Vec<Option<usize>> = vec![None; sets.len()];
    for (index, edge) in edges.iter().enumerate() {
        let source_root = sets.find(edge.source());
        let target_root = sets.find(edge.target());
        if source_root == target_root {
            continue;
        }
        for root in [source_root, target_root] {
            // Indices arrive ascending, so strict `<` keeps the lower index.
            if cheapest[root].is_none_or(|current| edge.weight() < edges[current].weight()) {
                cheapest[root] = Some(index);
            }
        }
    }
    cheapest
}
