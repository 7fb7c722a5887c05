//! Implementation of `disjoint mst <file>`.
//!
//! Computes a minimum spanning forest of a weighted edge list with Kruskal's
//! algorithm. Human mode prints one `from -- to (weight)` line per selected
//! edge in ascending weight order, then the total weight and the number of
//! trees.
//!
//! Exit codes: 0 = success, 2 = unreadable, malformed or unweighted input,
//! or a total weight beyond `i64`.
use disjoint_core::{CompressionKind, SpanningForest, minimum_spanning_forest};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cmd::{stdout_error, write_json};
use crate::edges;
use crate::error::CliError;

/// A selected edge, as reported.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ForestEdge {
    /// First endpoint.
    pub from: String,
    /// Second endpoint.
    pub to: String,
    /// Edge weight.
    pub weight: i64,
}

/// Everything `mst` reports.
#[derive(Debug, Serialize)]
pub struct ForestReport {
    /// Number of distinct elements.
    pub node_count: usize,
    /// Selected edges in ascending weight order.
    pub edges: Vec<ForestEdge>,
    /// Sum of the selected weights.
    pub total_weight: i64,
    /// Number of trees in the forest.
    pub components: usize,
}

impl ForestReport {
    fn new(node_count: usize, forest: SpanningForest<String, i64>) -> Self {
        Self {
            node_count,
            edges: forest
                .edges
                .into_iter()
                .map(|e| ForestEdge {
                    from: e.from,
                    to: e.to,
                    weight: e.weight,
                })
                .collect(),
            total_weight: forest.total_weight,
            components: forest.components,
        }
    }
}

/// Builds the spanning forest of the edge list in `content`.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if a record is malformed, has an
/// empty element, lacks a weight, or the selected weights overflow `i64`.
pub fn spanning_forest(content: &str, strategy: CompressionKind) -> Result<ForestReport, CliError> {
    let records = edges::parse(content)?;
    let network = edges::network(&records)?;
    let node_count = network.nodes.len();
    let forest = minimum_spanning_forest(network.nodes, network.edges, strategy)?;
    Ok(ForestReport::new(node_count, forest))
}

/// Runs the `mst` command.
///
/// # Errors
///
/// See [`spanning_forest`]; also fails with exit code 2 if writing to stdout
/// fails.
pub fn run(content: &str, strategy: CompressionKind, format: OutputFormat) -> Result<(), CliError> {
    let report = spanning_forest(content, strategy)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &report),
        OutputFormat::Json => write_json(&mut out, &report),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, report: &ForestReport) -> std::io::Result<()> {
    for edge in &report.edges {
        writeln!(w, "{} -- {} ({})", edge.from, edge.to, edge.weight)?;
    }
    writeln!(w, "total weight: {}", report.total_weight)?;
    writeln!(w, "components:   {}", report.components)
}
