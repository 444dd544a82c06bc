//! Command-line argument definitions for the Columbus CSV importer
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Columbus CSV importer
///
/// Converts native Columbus V-900 GPS logger track files into a normalized
/// track/waypoint model with linked audio recordings.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "columbus-csv",
    version,
    about = "Convert Columbus V-900 GPS logger CSV track files",
    long_about = "Converts the native CSV track logs of the Columbus V-900 GPS/audio data \
                  logger into a normalized track and waypoint model. Handles both the simple \
                  and extended (DOP) record layouts, resolves voice recordings stored next to \
                  the track file, and rescues recordings the logger captured without writing \
                  a CSV reference."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the importer
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Convert track files into the normalized model (main command)
    Convert(ConvertArgs),
    /// Check whether files are recognized as V-900 track logs
    Probe(ProbeArgs),
}

/// Arguments for the convert command
#[derive(Debug, Clone, Parser)]
pub struct ConvertArgs {
    /// Track files to convert
    ///
    /// Audio recordings referenced by a track file are expected in the same
    /// directory as that file.
    #[arg(value_name = "FILES", required = true, help = "V-900 CSV track files")]
    pub files: Vec<PathBuf>,

    /// Directory for converted output
    ///
    /// When given, the normalized model of each input file is written as
    /// `<basename>.json` into this directory. Without it only the summary is
    /// reported.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Directory for the converted JSON model files"
    )]
    pub output_dir: Option<PathBuf>,

    /// Skip fix mode and DOP fields of extended records
    #[arg(long = "ignore-dop", help = "Skip GPS quality (DOP) fields")]
    pub ignore_dop: bool,

    /// Do not print the per-file import summary
    #[arg(long = "no-summary", help = "Suppress the import summary")]
    pub no_summary: bool,

    /// Do not warn about referenced audio files missing on disk
    #[arg(
        long = "no-warn-missing-audio",
        help = "Suppress missing audio warnings"
    )]
    pub no_warn_missing_audio: bool,

    /// Do not warn about tolerated date/DOP conversion errors
    #[arg(
        long = "no-warn-conversion-errors",
        help = "Suppress conversion error warnings"
    )]
    pub no_warn_conversion_errors: bool,

    /// Path to configuration file
    ///
    /// JSON options file. If not specified, looks for
    /// ~/.config/columbus-csv/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Output format for results
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the probe command
#[derive(Debug, Clone, Parser)]
pub struct ProbeArgs {
    /// Files to check
    #[arg(value_name = "FILES", required = true, help = "Files to check")]
    pub files: Vec<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl ConvertArgs {
    /// Validate the convert command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        for file in &self.files {
            if !file.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    file.display()
                )));
            }
            if !file.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    file.display()
                )));
            }
        }

        if let Some(output_dir) = &self.output_dir {
            if output_dir.exists() && !output_dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Output path is not a directory: {}",
                    output_dir.display()
                )));
            }
        }

        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.files.len() > 1
    }
}

impl ProbeArgs {
    /// Validate the probe command arguments
    pub fn validate(&self) -> Result<()> {
        for file in &self.files {
            if !file.exists() {
                return Err(Error::configuration(format!(
                    "File does not exist: {}",
                    file.display()
                )));
            }
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn convert_args(files: Vec<PathBuf>) -> ConvertArgs {
        ConvertArgs {
            files,
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
    fn test_convert_args_validation() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("trip.csv");
        std::fs::write(&file, "header\n").unwrap();

        let args = convert_args(vec![file.clone()]);
        assert!(args.validate().is_ok());

        // Nonexistent input file
        let args = convert_args(vec![PathBuf::from("/nonexistent/trip.csv")]);
        assert!(args.validate().is_err());

        // Output path that is a file, not a directory
        let mut args = convert_args(vec![file.clone()]);
        args.output_dir = Some(file.clone());
        assert!(args.validate().is_err());

        // Nonexistent config file
        let mut args = convert_args(vec![file]);
        args.config_file = Some(PathBuf::from("/nonexistent/config.json"));
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_log_level() {
        let mut args = convert_args(vec![]);

        assert_eq!(args.get_log_level(), "warn");

        args.verbose = 1;
        assert_eq!(args.get_log_level(), "info");

        args.verbose = 2;
        assert_eq!(args.get_log_level(), "debug");

        args.verbose = 3;
        assert_eq!(args.get_log_level(), "trace");

        args.verbose = 0;
        args.quiet = true;
        assert_eq!(args.get_log_level(), "error");
    }

    #[test]
    fn test_show_progress_requires_multiple_files() {
        let mut args = convert_args(vec![PathBuf::from("a.csv")]);
        assert!(!args.show_progress());

        args.files.push(PathBuf::from("b.csv"));
        assert!(args.show_progress());

        args.quiet = true;
        assert!(!args.show_progress());
    }
}
