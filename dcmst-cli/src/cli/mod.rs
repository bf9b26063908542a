//! Command-line interface for the degree-constrained MST library.
//!
//! `run` loads a CSV edge list and `sample` uses a built-in ten-vertex graph;
//! both build a tree with the chosen construction and degree cap.

mod commands;

pub use commands::{
    AlgorithmArg, Cli, CliError, Command, ExecutionSummary, RunCommand, SAMPLE_VERTEX_COUNT,
    SampleCommand, SolverArgs, render_summary, run_cli, sample_graph,
};
