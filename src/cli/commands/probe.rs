//! Probe command implementation
//!
//! Runs the format detector over each file without converting anything.
//! Useful as a pre-import check for file pickers and batch scripts.

use super::shared::{RunStats, setup_logging};
use crate::app::services::v900_parser::is_columbus_file;
use crate::cli::args::ProbeArgs;
use crate::{Error, Result};
use colored::Colorize;
use tracing::debug;

/// Probe command runner. Exits non-zero when any file is not recognized.
pub fn run_probe(args: ProbeArgs) -> Result<RunStats> {
    setup_logging(args.get_log_level())?;
    args.validate()?;

    let mut stats = RunStats::default();

    for file in &args.files {
        let recognized = is_columbus_file(file)?;
        debug!("Probed {}: {}", file.display(), recognized);

        if recognized {
            println!("{} {}", "recognized    ".green(), file.display());
            stats.files_processed += 1;
        } else {
            println!("{} {}", "not recognized".red(), file.display());
            stats.files_failed += 1;
        }
    }

    if stats.files_failed > 0 {
        return Err(Error::configuration(format!(
            "{} of {} files not recognized as Columbus track logs",
            stats.files_failed,
            args.files.len()
        )));
    }

    Ok(stats)
}
