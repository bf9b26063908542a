//! Benchmark parameter types.

use std::fmt;

/// Parameters for a degree-constrained MST benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the synthetic graph.
    pub vertex_count: usize,
    /// Degree cap passed to the construction.
    pub max_degree: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},cap={}", self.vertex_count, self.max_degree)
    }
}
