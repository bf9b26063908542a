//! Property-based tests for the degree-constrained constructions.
//!
//! Checks both constructions against a sequential unconstrained Kruskal
//! oracle when the degree cap cannot bind, validates the structural
//! invariants of every tree produced under a binding cap, and confirms that
//! repeated and interleaved runs return identical trees.

mod determinism;
mod strategies;
mod structural;
mod types;
