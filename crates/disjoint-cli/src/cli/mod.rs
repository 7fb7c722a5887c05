//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use disjoint_core::CompressionKind;

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one item per line (default).
    Human,
    /// A single pretty-printed JSON object.
    Json,
}

/// Path compression strategy used while resolving representatives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CompressionArg {
    /// Point every node on a find path directly at the root (default).
    Full,
    /// Point every other node on a find path at its grandparent.
    Halving,
}

impl From<CompressionArg> for CompressionKind {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::Full => CompressionKind::Full,
            CompressionArg::Halving => CompressionKind::Halving,
        }
    }
}

/// All top-level subcommands exposed by the `disjoint` binary.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the equivalence classes formed by an edge list.
    Components {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Compute a minimum spanning forest of a weighted edge list.
    Mst {
        /// Path to a weighted edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Print the representative of each element after all unions.
    Find {
        /// Path to an edge-list file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// One or more elements to resolve.
        #[arg(value_name = "ELEMENT", num_args = 1.., required = true)]
        elements: Vec<String>,
    },

    /// Print the disjoint-core library version.
    Version,
}

/// Root CLI struct for the `disjoint` binary.
///
/// Edge lists hold one record per line with comma-separated fields:
/// `a` registers an element, `a,b` unions two elements and `a,b,w` adds a
/// weighted edge. Blank lines and lines starting with `#` are ignored.
#[derive(Parser, Debug)]
#[command(
    name = "disjoint",
    version,
    about = "Union-find over edge lists",
    long_about = "Builds disjoint sets from comma-separated edge lists and reports\n\
                  connected components, representatives, and minimum spanning forests."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Path compression strategy: full (default) or halving.
    #[arg(long, short = 's', default_value = "full", global = true)]
    pub strategy: CompressionArg,

    /// Log progress to stderr (`DISJOINT_LOG` overrides the filter).
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Maximum input size in bytes.
    ///
    /// Can also be set via the `DISJOINT_MAX_FILE_SIZE` environment variable.
    /// Default: 67108864 (64 MB).
    #[arg(
        long,
        global = true,
        env = "DISJOINT_MAX_FILE_SIZE",
        default_value = "67108864"
    )]
    pub max_file_size: u64,
}
