//! Seeded synthetic graphs for benchmarks.
//!
//! Each graph is a random recursive tree (vertex `v` attaches to a uniformly
//! chosen earlier vertex) plus random extra edges, so every graph is connected
//! and the unconstrained MST is well defined.

use dcmst_core::{Edge, Graph};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// Configuration for synthetic graph generation.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Extra random edges added per vertex on top of the spanning tree.
    pub extra_edges_per_vertex: usize,
    /// Seed for the random number generator.
    pub seed: u64,
}

/// Errors raised while generating a synthetic graph.
#[derive(Debug, Error, PartialEq)]
pub enum SyntheticError {
    /// The requested graph has no vertices.
    #[error("vertex_count must be greater than zero")]
    ZeroVertices,
    /// The requested edge count overflows `usize`.
    #[error("edge count overflows for {vertex_count} vertices")]
    EdgeCountOverflow {
        /// Requested vertex count.
        vertex_count: usize,
    },
    /// The generated edges failed graph validation.
    #[error("generated graph is invalid: {0}")]
    Invalid(#[from] dcmst_core::MstError),
}

/// Generates a connected graph from `config`.
///
/// # Errors
/// Returns [`SyntheticError::ZeroVertices`] for an empty request and
/// [`SyntheticError::EdgeCountOverflow`] when the edge budget overflows.
///
/// # Examples
/// ```
/// use dcmst_benches::graph::{SyntheticGraphConfig, generate};
///
/// let graph = generate(&SyntheticGraphConfig {
///     vertex_count: 50,
///     extra_edges_per_vertex: 2,
///     seed: 7,
/// })?;
/// assert_eq!(graph.vertex_count(), 50);
/// assert!(graph.edges().len() >= 49);
/// # Ok::<(), dcmst_benches::graph::SyntheticError>(())
/// ```
pub fn generate(config: &SyntheticGraphConfig) -> Result<Graph, SyntheticError> {
    let vertex_count = config.vertex_count;
    if vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    let extra = vertex_count
        .checked_mul(config.extra_edges_per_vertex)
        .ok_or(SyntheticError::EdgeCountOverflow { vertex_count })?;

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1).saturating_add(extra));
    for vertex in 1..vertex_count {
        let parent = rng.gen_range(0..vertex);
        edges.push(Edge::new(parent, vertex, rng.gen_range(1.0..1_000.0)));
    }
    for _ in 0..extra {
        let left = rng.gen_range(0..vertex_count);
        let right = rng.gen_range(0..vertex_count);
        if left != right {
            edges.push(Edge::new(left, right, rng.gen_range(1.0..1_000.0)));
        }
    }

    Ok(Graph::new(vertex_count, edges)?)
}
