//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! the CLI command implementations.

use crate::cli::args::ConvertArgs;
use crate::config::ImportOptions;
use crate::{Result, app::services::v900_parser::ConversionSummary};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

/// Run statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    /// Number of files processed
    pub files_processed: usize,
    /// Number of files that failed or were not recognized
    pub files_failed: usize,
    /// Accumulated import counters over all converted files
    pub totals: ConversionSummary,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl RunStats {
    /// Fold one file's summary into the run totals
    pub fn accumulate(&mut self, summary: &ConversionSummary) {
        self.files_processed += 1;
        self.totals.track_points += summary.track_points;
        self.totals.waypoints += summary.waypoints;
        self.totals.audio_waypoints += summary.audio_waypoints;
        self.totals.missing_audio += summary.missing_audio;
        self.totals.rescued_audio += summary.rescued_audio;
        self.totals.date_conversion_errors += summary.date_conversion_errors;
        self.totals.dop_conversion_errors += summary.dop_conversion_errors;
    }
}

/// Set up structured logging on stderr
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("columbus_csv={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load import options and apply CLI argument overrides
pub fn load_options(args: &ConvertArgs) -> Result<ImportOptions> {
    let mut options = ImportOptions::load(args.config_file.as_deref())?;

    // CLI flags override the config file
    if args.ignore_dop {
        options.ignore_dop = true;
    }
    if args.no_summary || args.quiet {
        options.show_summary = false;
    }
    if args.no_warn_missing_audio {
        options.warn_on_missing_audio = false;
    }
    if args.no_warn_conversion_errors {
        options.warn_on_conversion_errors = false;
    }

    debug!("Effective options: {:?}", options);
    Ok(options)
}

/// Create a styled progress bar for multi-file runs
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::OutputFormat;

    fn args() -> ConvertArgs {
        ConvertArgs {
            files: vec![],
            output_dir: None,
            ignore_dop: false,
            no_summary: false,
            no_warn_missing_audio: false,
            no_warn_conversion_errors: false,
            config_file: None,
            output_format: OutputFormat::Human,
            verbose: 0,
            quiet: false,
        }
    }

    #[test]
    fn test_cli_overrides() {
        let mut cli = args();
        cli.ignore_dop = true;
        cli.no_warn_missing_audio = true;

        let options = load_options(&cli).unwrap();
        assert!(options.ignore_dop);
        assert!(!options.warn_on_missing_audio);
        assert!(options.show_summary);
    }

    #[test]
    fn test_quiet_suppresses_summary() {
        let mut cli = args();
        cli.quiet = true;

        let options = load_options(&cli).unwrap();
        assert!(!options.show_summary);
    }

    #[test]
    fn test_stats_accumulation() {
        let mut stats = RunStats::default();
        let mut summary = ConversionSummary::new();
        summary.track_points = 10;
        summary.waypoints = 2;
        summary.rescued_audio = 1;

        stats.accumulate(&summary);
        stats.accumulate(&summary);

        assert_eq!(stats.files_processed, 2);
        assert_eq!(stats.totals.track_points, 20);
        assert_eq!(stats.totals.waypoints, 4);
        assert_eq!(stats.totals.rescued_audio, 2);
    }
}
