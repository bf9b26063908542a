//! Type definitions for MST property-based tests.

use crate::Edge;

/// Topology and weight distribution for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge has a distinct integral weight.
    Unique,
    /// Edges draw from a pool of one to three weights, stressing tie-breaks.
    ManyIdentical,
    /// A random spanning path plus a handful of extra edges.
    Sparse,
    /// Edge probability between 0.7 and 0.95.
    Dense,
    /// A few hubs with cheap spokes and expensive rim edges, so low caps bind.
    HubHeavy,
    /// Two to four components with no cross-component edges.
    Disconnected,
}

/// Fixture for MST property tests.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated edges in input order.
    pub edges: Vec<Edge>,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Formats the context attached to every property failure.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len()
        )
    }
}
