//! Command implementations for the Columbus CSV importer CLI
//!
//! This module contains the command execution logic, summary reporting and
//! logging setup for the CLI interface. Each command is implemented in its
//! own module.

pub mod convert;
pub mod probe;
pub mod shared;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the importer
///
/// Dispatches to the appropriate subcommand handler based on CLI args:
/// - `convert`: track file conversion with summary/model output
/// - `probe`: format sniffing without conversion
pub fn run(args: Args) -> Result<RunStats> {
    match args.get_command() {
        Commands::Convert(convert_args) => convert::run_convert(convert_args),
        Commands::Probe(probe_args) => probe::run_probe(probe_args),
    }
}
