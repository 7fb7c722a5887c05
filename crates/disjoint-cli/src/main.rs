use clap::Parser;

mod cli;
mod cmd;
mod edges;
mod error;
mod io;

use disjoint_core::CompressionKind;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Installs the stderr logger.
///
/// `DISJOINT_LOG` takes an `env_logger` filter and wins over `--verbose`;
/// `DISJOINT_LOG_STYLE` controls colour.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::new()
        .filter_or("DISJOINT_LOG", default_filter)
        .write_style("DISJOINT_LOG_STYLE");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let strategy: CompressionKind = cli.strategy.into();
    log::debug!("using {strategy} compression");

    match &cli.command {
        Command::Components { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::components::run(&content, strategy, cli.format)
        }
        Command::Mst { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::mst::run(&content, strategy, cli.format)
        }
        Command::Find { file, elements } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::find::run(&content, strategy, cli.format, elements)
        }
        Command::Version => {
            println!("{}", disjoint_core::version());
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}
