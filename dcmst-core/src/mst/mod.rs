//! Degree-constrained minimum spanning tree (MST) construction.
//!
//! Two greedy constructions are provided, each honouring a per-vertex degree
//! cap: Prim's algorithm grown from vertex 0 over a dense adjacency matrix,
//! and Kruskal's algorithm over a stably sorted edge list backed by a
//! disjoint-set forest. Both report [`MstError::InfeasibleConstraint`] instead
//! of a partial tree when the cap (or a disconnected input) stops them short
//! of `vertex_count - 1` edges. An unconstrained Borůvka construction is
//! included as a reference.

mod boruvka;
mod degree;
mod kruskal;
mod prim;
mod telemetry;
mod union_find;

use std::fmt;

use tracing::warn;

use crate::{error::MstError, graph::Edge, graph::Weight};

pub use self::{
    boruvka::boruvka, kruskal::kruskal_constrained, prim::prim_constrained,
    union_find::DisjointSet,
};

/// Degree-constrained construction strategies.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Grow a single tree outwards from vertex 0.
    Prim,
    /// Merge components along edges in ascending weight order.
    Kruskal,
}

impl Algorithm {
    /// Returns the lowercase name used in logs and CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edge accepted into a spanning tree or forest.
///
/// Prim orients the edge from the vertex already in the tree (`source`) to
/// the vertex it pulled in (`target`); the other constructions keep the
/// input orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeEdge {
    source: usize,
    target: usize,
    weight: Weight,
}

impl TreeEdge {
    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn source(&self) -> usize { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }
}

impl From<Edge> for TreeEdge {
    fn from(edge: Edge) -> Self {
        Self {
            source: edge.source(),
            target: edge.target(),
            weight: edge.weight(),
        }
    }
}

/// A spanning tree built under a degree cap.
///
/// # Examples
/// ```
/// use dcmst_core::{Algorithm, Edge, kruskal_constrained};
///
/// let edges = [Edge::new(0, 1, 2.0), Edge::new(1, 2, 1.0), Edge::new(0, 2, 5.0)];
/// let tree = kruskal_constrained(3, &edges, 2)?;
/// assert_eq!(tree.algorithm(), Algorithm::Kruskal);
/// assert_eq!(tree.weights(), vec![1.0, 2.0]);
/// assert_eq!(tree.total_weight(), 3.0);
/// assert_eq!(tree.degrees(), vec![1, 2, 1]);
/// # Ok::<(), dcmst_core::MstError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree {
    algorithm: Algorithm,
    vertex_count: usize,
    max_degree: usize,
    edges: Vec<TreeEdge>,
}

impl SpanningTree {
    /// Returns the algorithm that built the tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the number of vertices spanned.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the degree cap the tree was built under.
    #[must_use]
    #[rustfmt::skip]
    pub fn max_degree(&self) -> usize { self.max_degree }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[TreeEdge] { &self.edges }

    /// Returns the accepted edge weights sorted ascending.
    #[must_use]
    pub fn weights(&self) -> Vec<Weight> {
        sorted_weights(&self.edges)
    }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.weights().iter().sum()
    }

    /// Returns the degree of every vertex within the tree.
    #[must_use]
    pub fn degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.vertex_count];
        for edge in &self.edges {
            degrees[edge.source] += 1;
            degrees[edge.target] += 1;
        }
        degrees
    }
}

/// An unconstrained minimum spanning forest.
///
/// When the input graph is connected the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningForest {
    edges: Vec<TreeEdge>,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the forest edges in the order they were merged.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[TreeEdge] { &self.edges }

    /// Returns the number of connected components in the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the forest edge weights sorted ascending.
    #[must_use]
    pub fn weights(&self) -> Vec<Weight> {
        sorted_weights(&self.edges)
    }

    /// Returns the sum of the forest edge weights.
    #[must_use]
    pub fn total_weight(&self) -> Weight {
        self.weights().iter().sum()
    }
}

fn sorted_weights(edges: &[TreeEdge]) -> Vec<Weight> {
    let mut weights: Vec<Weight> = edges.iter().map(TreeEdge::weight).collect();
    weights.sort_by(Weight::total_cmp);
    weights
}

fn infeasible(algorithm: Algorithm, max_degree: usize, accepted: usize, required: usize) -> MstError {
    warn!(
        algorithm = %algorithm,
        max_degree,
        accepted,
        required,
        "no eligible edge left under the degree cap"
    );
    telemetry::record_infeasible(algorithm);
    MstError::InfeasibleConstraint {
        algorithm,
        max_degree,
        accepted,
        required,
    }
}

#[cfg(test)]
mod property;
