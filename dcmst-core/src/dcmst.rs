//! Runtime entry point for degree-constrained MST runs.

use std::num::NonZeroUsize;

use tracing::{info, instrument};

use crate::{
    Result,
    graph::{Edge, Graph},
    mst::{Algorithm, SpanningTree, kruskal_constrained, prim_constrained},
};

/// A validated configuration ready to run against graphs.
///
/// # Examples
/// ```
/// use dcmst_core::{DcmstBuilder, Graph};
///
/// let graph = Graph::from_triples(4, &[
///     (0, 1, 1.0),
///     (0, 2, 1.0),
///     (0, 3, 1.0),
///     (1, 2, 4.0),
///     (2, 3, 5.0),
/// ])?;
/// let dcmst = DcmstBuilder::new().with_max_degree(2).build()?;
/// let tree = dcmst.run(&graph)?;
/// assert_eq!(tree.weights(), vec![1.0, 1.0, 5.0]);
/// assert!(tree.degrees().iter().all(|&degree| degree <= 2));
/// # Ok::<(), dcmst_core::MstError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Dcmst {
    max_degree: NonZeroUsize,
    algorithm: Algorithm,
}

impl Dcmst {
    pub(crate) fn new(max_degree: NonZeroUsize, algorithm: Algorithm) -> Self {
        Self {
            max_degree,
            algorithm,
        }
    }

    /// Returns the degree cap applied to every vertex.
    #[must_use]
    pub fn max_degree(&self) -> NonZeroUsize {
        self.max_degree
    }

    /// Returns the construction used by [`Dcmst::run`].
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Builds a spanning tree of `graph` in which no vertex exceeds the cap.
    ///
    /// # Errors
    /// Returns [`crate::MstError::InfeasibleConstraint`] when the greedy
    /// construction cannot connect every vertex under the cap, including
    /// when the graph is disconnected.
    #[instrument(
        name = "core.run",
        err,
        skip(self, graph),
        fields(
            vertex_count = graph.vertex_count(),
            edge_count = graph.edges().len(),
            max_degree = self.max_degree.get(),
            algorithm = %self.algorithm,
        ),
    )]
    pub fn run(&self, graph: &Graph) -> Result<SpanningTree> {
        let construct: fn(usize, &[Edge], usize) -> Result<SpanningTree> = match self.algorithm {
            Algorithm::Prim => prim_constrained,
            Algorithm::Kruskal => kruskal_constrained,
        };
        let tree = construct(graph.vertex_count(), graph.edges(), self.max_degree.get())?;
        info!(
            edges = tree.edges().len(),
            total_weight = tree.total_weight(),
            "spanning tree built"
        );
        Ok(tree)
    }
}
