//! Implementation of `disjoint find <file> <element>...`.
//!
//! Loads an edge list and prints the representative of each requested
//! element, one `element: representative` line per argument (or a JSON
//! array of objects). Every argument is checked before anything is printed.
//!
//! Exit codes: 0 = success, 1 = an element is not in the input,
//! 2 = unreadable or malformed input.
use disjoint_core::CompressionKind;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cmd::{stdout_error, write_json};
use crate::edges;
use crate::error::CliError;

/// The resolution of one queried element.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The element as given.
    pub element: String,
    /// Its representative.
    pub representative: String,
}

/// Resolves each of `elements` against the loaded edge list.
///
/// # Errors
///
/// Returns [`CliError::UnknownElement`] for the first element that does not
/// appear in the input.
pub fn resolve_all(
    content: &str,
    strategy: CompressionKind,
    elements: &[String],
) -> Result<Vec<Resolution>, CliError> {
    let records = edges::parse(content)?;
    let mut set = edges::load(&records, strategy)?;

    if let Some(unknown) = elements.iter().find(|e| !set.contains(e)) {
        return Err(CliError::UnknownElement {
            element: unknown.clone(),
        });
    }

    elements
        .iter()
        .map(|element| -> Result<Resolution, CliError> {
            let representative = set.find(element)?;
            Ok(Resolution {
                element: element.clone(),
                representative,
            })
        })
        .collect()
}

/// Runs the `find` command.
///
/// # Errors
///
/// See [`resolve_all`]; also fails with exit code 2 if writing to stdout
/// fails.
pub fn run(
    content: &str,
    strategy: CompressionKind,
    format: OutputFormat,
    elements: &[String],
) -> Result<(), CliError> {
    let resolutions = resolve_all(content, strategy, elements)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &resolutions),
        OutputFormat::Json => write_json(&mut out, &resolutions),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, resolutions: &[Resolution]) -> std::io::Result<()> {
    for r in resolutions {
        writeln!(w, "{}: {}", r.element, r.representative)?;
    }
    Ok(())
}
