//! Benchmark support crate for dcmst.
//!
//! Provides seeded synthetic graphs and parameter types used by the Criterion
//! benchmarks that compare the degree-constrained Prim and Kruskal
//! constructions.

pub mod error;
pub mod graph;
pub mod params;
