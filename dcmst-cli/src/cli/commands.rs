//! Command implementations and argument parsing for the dcmst CLI.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use dcmst_core::{Algorithm, DcmstBuilder, Edge, Graph, MstError, MstErrorCode, SpanningTree};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_MAX_DEGREE: usize = 3;

/// Vertex count of the built-in sample graph.
pub const SAMPLE_VERTEX_COUNT: usize = 10;

const SAMPLE_EDGES: [(usize, usize, f64); 17] = [
    (0, 1, 3.0),
    (0, 5, 2.0),
    (1, 2, 17.0),
    (1, 3, 16.0),
    (2, 3, 8.0),
    (2, 8, 18.0),
    (3, 8, 11.0),
    (3, 4, 4.0),
    (4, 5, 1.0),
    (4, 6, 6.0),
    (4, 7, 5.0),
    (4, 8, 10.0),
    (5, 6, 7.0),
    (6, 7, 15.0),
    (7, 8, 12.0),
    (7, 9, 13.0),
    (8, 9, 9.0),
];

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "dcmst", about = "Build degree-constrained minimum spanning trees.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Build a tree from a CSV edge list.
    Run(RunCommand),
    /// Build a tree for the built-in ten-vertex sample graph.
    Sample(SampleCommand),
}

/// Solver options shared by every command.
#[derive(Debug, Args, Clone, Copy)]
pub struct SolverArgs {
    /// Maximum number of tree edges incident to any vertex.
    #[arg(
        long = "max-degree",
        default_value_t = DEFAULT_MAX_DEGREE,
        value_parser = clap::value_parser!(usize),
    )]
    pub max_degree: usize,

    /// Greedy construction to run.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Prim)]
    pub algorithm: AlgorithmArg,
}

impl Default for SolverArgs {
    fn default() -> Self {
        Self {
            max_degree: DEFAULT_MAX_DEGREE,
            algorithm: AlgorithmArg::Prim,
        }
    }
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// CSV file with one `source,target,weight` edge per line.
    pub path: PathBuf,

    /// Number of vertices (defaults to the largest endpoint plus one).
    #[arg(long)]
    pub vertices: Option<usize>,

    /// Solver configuration.
    #[command(flatten)]
    pub solver: SolverArgs,
}

/// Options accepted by the `sample` command.
#[derive(Debug, Args, Clone, Copy, Default)]
pub struct SampleCommand {
    /// Solver configuration.
    #[command(flatten)]
    pub solver: SolverArgs,
}

/// Greedy constructions selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Grow the tree from vertex 0.
    Prim,
    /// Merge components in ascending weight order.
    Kruskal,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::Prim => Self::Prim,
            AlgorithmArg::Kruskal => Self::Kruskal,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// File I/O failed while loading an edge list.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// A line of the edge list could not be parsed.
    #[error("{path}:{line}: {reason}")]
    Parse {
        /// Path of the edge list.
        path: PathBuf,
        /// One-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },
    /// The edge list held no edges and no vertex count was given.
    #[error("`{path}` contains no edges; pass --vertices to run on isolated vertices")]
    EmptyInput {
        /// Path of the edge list.
        path: PathBuf,
    },
    /// An endpoint is too large to infer a vertex count from.
    #[error("`{path}` names vertex {vertex}, which leaves no room for a vertex count")]
    VertexCountOverflow {
        /// Path of the edge list.
        path: PathBuf,
        /// The offending endpoint.
        vertex: usize,
    },
    /// Graph validation or tree construction failed.
    #[error(transparent)]
    Core(#[from] MstError),
}

impl CliError {
    /// Returns the stable core error code, if the failure came from the core.
    #[must_use]
    pub fn code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Core(error) => Some(error.code()),
            Self::Io { .. }
            | Self::Parse { .. }
            | Self::EmptyInput { .. }
            | Self::VertexCountOverflow { .. } => None,
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Where the graph came from.
    pub source: String,
    /// The spanning tree that was built.
    pub tree: SpanningTree,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the graph or building the tree fails.
///
/// # Examples
/// ```
/// use dcmst_cli::cli::{Cli, Command, SampleCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Sample(SampleCommand::default()),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.tree.total_weight(), 50.0);
/// # Ok::<(), dcmst_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Run(run) => {
            span.record("command", field::display("run"));
            run_command(run)
        }
        Command::Sample(sample) => {
            span.record("command", field::display("sample"));
            run_sample(sample)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(path = %command.path.display(), vertices = field::Empty),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let edges = load_edge_list(&command.path)?;
    let vertex_count = match command.vertices {
        Some(count) => count,
        None => inferred_vertex_count(&command.path, &edges)?,
    };
    Span::current().record("vertices", vertex_count);

    let graph = Graph::new(vertex_count, edges)?;
    let tree = solve(command.solver, &graph)?;
    Ok(ExecutionSummary {
        source: command.path.display().to_string(),
        tree,
    })
}

#[instrument(name = "cli.sample", err, skip(command))]
pub(super) fn run_sample(command: SampleCommand) -> Result<ExecutionSummary, CliError> {
    let graph = sample_graph()?;
    let tree = solve(command.solver, &graph)?;
    Ok(ExecutionSummary {
        source: "sample".to_owned(),
        tree,
    })
}

fn solve(solver: SolverArgs, graph: &Graph) -> Result<SpanningTree, CliError> {
    let dcmst = DcmstBuilder::new()
        .with_max_degree(solver.max_degree)
        .with_algorithm(solver.algorithm.into())
        .build()?;
    let tree = dcmst.run(graph)?;
    info!(
        algorithm = %tree.algorithm(),
        edges = tree.edges().len(),
        total_weight = tree.total_weight(),
        "command completed"
    );
    Ok(tree)
}

/// Returns the built-in ten-vertex, seventeen-edge sample graph.
///
/// # Errors
/// Returns the graph validation error; the fixed sample edges pass it.
pub fn sample_graph() -> Result<Graph, MstError> {
    Graph::from_triples(SAMPLE_VERTEX_COUNT, &SAMPLE_EDGES)
}

#[instrument(name = "cli.load_edge_list", err)]
pub(super) fn load_edge_list(path: &Path) -> Result<Vec<Edge>, CliError> {
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_edge_list(path, BufReader::new(file))
}

/// Parses `source,target,weight` lines, skipping blanks and `#` comments.
pub(super) fn parse_edge_list(path: &Path, reader: impl BufRead) -> Result<Vec<Edge>, CliError> {
    let mut edges = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let edge = parse_edge(trimmed).map_err(|reason| CliError::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            reason,
        })?;
        edges.push(edge);
    }
    Ok(edges)
}

fn parse_edge(line: &str) -> Result<Edge, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [source, target, weight] = fields.as_slice() else {
        return Err(format!(
            "expected `source,target,weight`, found {} field(s)",
            fields.len()
        ));
    };
    let vertex = |raw: &str| {
        raw.parse::<usize>()
            .map_err(|error| format!("invalid vertex `{raw}`: {error}"))
    };
    let weight = weight
        .parse::<f64>()
        .map_err(|error| format!("invalid weight `{weight}`: {error}"))?;
    Ok(Edge::new(vertex(*source)?, vertex(*target)?, weight))
}

pub(super) fn inferred_vertex_count(path: &Path, edges: &[Edge]) -> Result<usize, CliError> {
    let largest = edges
        .iter()
        .map(|edge| edge.source().max(edge.target()))
        .max()
        .ok_or_else(|| CliError::EmptyInput {
            path: path.to_path_buf(),
        })?;
    largest
        .checked_add(1)
        .ok_or_else(|| CliError::VertexCountOverflow {
            path: path.to_path_buf(),
            vertex: largest,
        })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use dcmst_cli::cli::{ExecutionSummary, render_summary};
/// # use dcmst_core::{Edge, prim_constrained};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let tree = prim_constrained(3, &[Edge::new(0, 1, 2.0), Edge::new(1, 2, 1.5)], 2)?;
/// let summary = ExecutionSummary { source: "demo".into(), tree };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert!(String::from_utf8(buffer)?.ends_with("spanning tree: [1.5, 2]\ntotal cost: 3.5\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let tree = &summary.tree;
    let weights: Vec<String> = tree.weights().iter().map(ToString::to_string).collect();
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "algorithm: {}", tree.algorithm())?;
    writeln!(writer, "max degree: {}", tree.max_degree())?;
    writeln!(writer, "spanning tree: [{}]", weights.join(", "))?;
    writeln!(writer, "total cost: {}", tree.total_weight())?;
    Ok(())
}
