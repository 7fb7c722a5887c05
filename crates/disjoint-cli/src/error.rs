//! CLI error types with associated exit codes.
//!
//! - Exit code **2**: the input could not be read or parsed (I/O, size limit,
//!   UTF-8, malformed or incomplete records).
//! - Exit code **1**: the input was fine but the request cannot be answered
//!   (an element that was never registered).
use std::path::PathBuf;

use disjoint_core::DisjointSetError;

/// All error conditions that the `disjoint` CLI can produce.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    #[error("file not found: {}", .path.display())]
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    #[error("permission denied: {}", .path.display())]
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds `--max-file-size`.
    #[error("input too large: {input} exceeds the limit of {limit} bytes{}", actual_suffix(.actual))]
    FileTooLarge {
        /// `"-"` for stdin, otherwise the filesystem path.
        input: String,
        /// The configured limit in bytes.
        limit: u64,
        /// The actual size, when known (disk files only).
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    #[error("invalid UTF-8 in {input}: first invalid byte at offset {byte_offset}")]
    InvalidUtf8 {
        /// `"-"` for stdin, otherwise the filesystem path.
        input: String,
        /// Offset of the first invalid byte.
        byte_offset: usize,
    },

    /// Reading stdin failed.
    #[error("failed to read stdin: {detail}")]
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Any other I/O failure.
    #[error("I/O error on {input}: {detail}")]
    IoError {
        /// What was being read or written.
        input: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// A record does not have the shape `a`, `a,b` or `a,b,w`.
    #[error("line {line}: {detail}")]
    MalformedRecord {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the record.
        detail: String,
    },

    /// A record has an empty element field.
    #[error("line {line}: element field is empty")]
    MissingElement {
        /// 1-based line number.
        line: usize,
    },

    /// `mst` was given an edge without a weight.
    #[error("line {line}: edge has no weight; mst needs `from,to,weight` records")]
    MissingWeight {
        /// 1-based line number.
        line: usize,
    },

    /// The disjoint set rejected the input for another reason.
    #[error("disjoint set error: {0}")]
    DisjointSet(#[from] DisjointSetError),

    // --- Exit code 1: logical failures ---
    /// A queried element does not appear in the input.
    #[error("element not found: {element:?}")]
    UnknownElement {
        /// The element as given on the command line.
        element: String,
    },
}

fn actual_suffix(actual: &Option<u64>) -> String {
    actual.map_or_else(String::new, |n| format!(" (actual size {n} bytes)"))
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::MalformedRecord { .. }
            | Self::MissingElement { .. }
            | Self::MissingWeight { .. }
            | Self::DisjointSet(_) => 2,

            Self::UnknownElement { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        format!("error: {self}")
    }

    /// Attaches a line number to a core error raised while loading a record.
    pub fn at_line(line: usize, error: DisjointSetError) -> Self {
        match error {
            DisjointSetError::NullElement { .. } => Self::MissingElement { line },
            DisjointSetError::ElementNotFound
            | DisjointSetError::WeightOverflow
            | DisjointSetError::InvalidConfiguration { .. } => Self::DisjointSet(error),
        }
    }
}
