//! Convert command implementation
//!
//! Runs the conversion engine over every input file, reports per-file
//! summaries (human-readable or JSON) and optionally writes the normalized
//! model of each file as JSON.

use super::shared::{RunStats, create_progress_bar, load_options, setup_logging};
use crate::app::services::v900_parser::{ColumbusReader, ConversionResult};
use crate::cli::args::{ConvertArgs, OutputFormat};
use crate::{Error, Result};
use colored::Colorize;
use indicatif::HumanDuration;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info};

/// Convert command runner
///
/// Workflow:
/// 1. Set up logging and load options (config file + CLI overrides)
/// 2. Convert each input file sequentially
/// 3. Report per-file summaries and the run totals
pub fn run_convert(args: ConvertArgs) -> Result<RunStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level())?;

    info!("Starting Columbus CSV import");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let options = load_options(&args)?;

    if let Some(output_dir) = &args.output_dir {
        std::fs::create_dir_all(output_dir).map_err(|e| {
            Error::io(
                format!("Failed to create output directory {}", output_dir.display()),
                e,
            )
        })?;
    }

    let reader = ColumbusReader::new(options.clone());
    let mut stats = RunStats::default();
    let mut reports = Vec::new();

    let progress = args
        .show_progress()
        .then(|| create_progress_bar(args.files.len() as u64, "converting"));

    for file in &args.files {
        if let Some(pb) = &progress {
            pb.set_message(file.display().to_string());
        }

        match reader.convert_file(file) {
            Ok(result) => {
                if let Some(output_dir) = &args.output_dir {
                    write_model(output_dir, file, &result)?;
                }

                match args.output_format {
                    OutputFormat::Human => {
                        if options.show_summary {
                            if let Some(pb) = &progress {
                                pb.suspend(|| print_summary(file, &result));
                            } else {
                                print_summary(file, &result);
                            }
                        }
                    }
                    OutputFormat::Json => {
                        reports.push(serde_json::json!({
                            "file": file.display().to_string(),
                            "description": result.description,
                            "summary": result.summary,
                        }));
                    }
                }

                stats.accumulate(&result.summary);
            }
            Err(e) => {
                error!("Failed to convert {}: {}", file.display(), e);
                stats.files_failed += 1;
            }
        }

        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    stats.processing_time = start_time.elapsed();

    match args.output_format {
        OutputFormat::Human => {
            if options.show_summary && args.files.len() > 1 {
                print_totals(&stats);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::to_string_pretty(&reports)
                .map_err(|e| Error::configuration(format!("Failed to render JSON report: {}", e)))?;
            println!("{}", output);
        }
    }

    if stats.files_failed > 0 {
        return Err(Error::configuration(format!(
            "{} of {} files failed to convert",
            stats.files_failed,
            args.files.len()
        )));
    }

    Ok(stats)
}

/// Write the normalized model of one conversion as pretty-printed JSON
fn write_model(output_dir: &Path, source: &Path, result: &ConversionResult) -> Result<()> {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "track".to_string());
    let target = output_dir.join(format!("{}.json", stem));

    let json = serde_json::to_string_pretty(result)
        .map_err(|e| Error::configuration(format!("Failed to serialize model: {}", e)))?;
    std::fs::write(&target, json)
        .map_err(|e| Error::io(format!("Failed to write {}", target.display()), e))?;

    info!("Wrote {}", target.display());
    Ok(())
}

/// Print the colored per-file summary
fn print_summary(file: &Path, result: &ConversionResult) {
    println!(
        "{} {}",
        "Converted".green().bold(),
        file.display().to_string().bold()
    );
    println!("  {}", result.summary.report().replace('\n', "\n  "));

    if result.summary.has_conversion_errors() {
        println!(
            "  {} {} date and {} DOP conversion errors",
            "warning:".yellow(),
            result.summary.date_conversion_errors,
            result.summary.dop_conversion_errors
        );
    }
}

/// Print the run totals over all converted files
fn print_totals(stats: &RunStats) {
    println!("\n{}", "Import totals".bold());
    println!("  Files:        {}", stats.files_processed);
    println!("  Track points: {}", stats.totals.track_points);
    println!("  Waypoints:    {}", stats.totals.waypoints);
    println!("  With audio:   {}", stats.totals.audio_waypoints);
    println!("  Rescued:      {}", stats.totals.rescued_audio);
    if stats.totals.missing_audio > 0 {
        println!(
            "  {}      {}",
            "Missing:".yellow(),
            stats.totals.missing_audio
        );
    }
    println!("  Elapsed:      {}", HumanDuration(stats.processing_time));
}
