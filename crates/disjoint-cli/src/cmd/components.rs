//! Implementation of `disjoint components <file>`.
//!
//! Loads an edge list and prints every equivalence class. In human mode each
//! class is one line, `representative: member, member, ...`, with members
//! sorted and classes ordered by their smallest member. In `--format json`
//! mode a single object is emitted.
//!
//! Exit codes: 0 = success, 2 = unreadable or malformed input.
use disjoint_core::{CompressionKind, DisjointSet};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cmd::{stdout_error, write_json};
use crate::edges;
use crate::error::CliError;

/// One equivalence class.
#[derive(Debug, Serialize)]
pub struct Component {
    /// The root every member resolves to.
    pub representative: String,
    /// Sorted members, including the representative.
    pub members: Vec<String>,
}

/// Everything `components` reports.
#[derive(Debug, Serialize)]
pub struct ComponentReport {
    /// Compression strategy used while loading.
    pub strategy: &'static str,
    /// Number of registered elements.
    pub element_count: usize,
    /// Number of disjoint sets.
    pub set_count: usize,
    /// The classes, ordered by smallest member.
    pub components: Vec<Component>,
}

impl ComponentReport {
    /// Groups the elements of `set` under their representatives.
    ///
    /// # Errors
    ///
    /// Propagates a core error if the forest cannot be resolved.
    pub fn from_set(set: &mut DisjointSet<String, CompressionKind>) -> Result<Self, CliError> {
        let mut components: Vec<Component> = set
            .groups()?
            .into_iter()
            .map(|(representative, mut members)| {
                members.sort();
                Component {
                    representative,
                    members,
                }
            })
            .collect();
        components.sort_by(|a, b| a.members.cmp(&b.members));

        Ok(Self {
            strategy: set.strategy().name(),
            element_count: set.len(),
            set_count: set.set_count(),
            components,
        })
    }
}

/// Runs the `components` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 if `content` is not a valid edge
/// list, or if writing to stdout fails.
pub fn run(content: &str, strategy: CompressionKind, format: OutputFormat) -> Result<(), CliError> {
    let records = edges::parse(content)?;
    let mut set = edges::load(&records, strategy)?;
    let report = ComponentReport::from_set(&mut set)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &report),
        OutputFormat::Json => write_json(&mut out, &report),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, report: &ComponentReport) -> std::io::Result<()> {
    for component in &report.components {
        writeln!(
            w,
            "{}: {}",
            component.representative,
            component.members.join(", ")
        )?;
    }
    Ok(())
}
