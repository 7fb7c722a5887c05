/// Command modules for the `disjoint` CLI.
///
/// Each submodule implements one subcommand. Its `run` function takes the
/// already-read input plus the global options and returns `Ok(())` on
/// success or a [`crate::error::CliError`] on failure.
pub mod components;
pub mod find;
pub mod mst;

use crate::error::CliError;

/// Wraps a failed write to stdout.
pub(crate) fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        input: "stdout".to_owned(),
        detail: e.to_string(),
    }
}

/// Serializes `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<W, T>(w: &mut W, value: &T) -> std::io::Result<()>
where
    W: std::io::Write,
    T: serde::Serialize,
{
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
