//! Conversion driver for V-900 track files
//!
//! One strictly sequential pass over the file: tokenize, convert and
//! classify each record, resolve audio references, then run the lost-audio
//! rescue pass once and assemble the result. All state lives for the
//! duration of a single call; conversions of different files are independent.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::audio::{AudioIndex, LinkOutcome, link_audio};
use super::record::{Marker, parse_record};
use super::rescue::rescue_lost_audio;
use super::stats::{ConversionResult, ConversionSummary};
use super::tokenizer::tokenize;
use crate::app::models::{Track, WayPoint};
use crate::config::ImportOptions;
use crate::{Error, Result};

/// Reader for native Columbus V-900 CSV track logs.
///
/// Supports both the simple and the extended record layout. Audio recordings
/// are expected in the same directory as the CSV file.
#[derive(Debug, Clone, Default)]
pub struct ColumbusReader {
    options: ImportOptions,
}

impl ColumbusReader {
    /// Create a reader with the given import options
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Convert a track file into the normalized track/waypoint model.
    ///
    /// Field-level conversion failures (date/time, DOP) are tolerated and
    /// tallied; structural violations (wrong field count, unparseable
    /// coordinates) abort the run with the offending 1-based line number and
    /// discard all partial results.
    pub fn convert_file(&self, path: &Path) -> Result<ConversionResult> {
        info!("Converting track file: {}", path.display());

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
        let reader = BufReader::new(file);

        let mut summary = ConversionSummary::new();
        let mut all: Vec<WayPoint> = Vec::new();
        let mut track_positions: Vec<usize> = Vec::new();
        let mut waypoint_positions: Vec<usize> = Vec::new();
        let mut index = AudioIndex::new();

        let mut line_number = 0usize;
        for line in reader.lines() {
            line_number += 1;
            let line = line.map_err(|e| {
                Error::io(format!("Read failed in {}", path.display()), e)
            })?;

            let record = tokenize(&line);
            // Skip the header line and lines without data
            if record.is_empty() || line_number <= 1 {
                continue;
            }

            let parsed = parse_record(&record, self.options.ignore_dop).map_err(|e| {
                Error::format(path.display().to_string(), line_number, e.to_string())
            })?;

            summary.date_conversion_errors += parsed.date_error as usize;
            summary.dop_conversion_errors += parsed.dop_errors;

            let mut waypoint = parsed.waypoint;
            let outcome = parsed.audio_ref.as_deref().map(|base| {
                link_audio(
                    &mut waypoint,
                    base,
                    &dir,
                    &mut index,
                    all.len(),
                    self.options.warn_on_missing_audio,
                )
            });

            // A marker -> classification transition is what the counters
            // track: a voice record keeping its recording counts as audio,
            // a plain record gaining one was rescued at parse time, a voice
            // record losing its recording is a miss.
            match (&outcome, parsed.marker) {
                (Some(LinkOutcome::Linked { .. }), Marker::Voice) => summary.audio_waypoints += 1,
                (Some(LinkOutcome::Linked { .. }), Marker::Plain) => {
                    info!("Rescued unlinked audio file at line {}", line_number);
                    summary.rescued_audio += 1;
                }
                (Some(LinkOutcome::Missing { .. }), Marker::Voice) => summary.missing_audio += 1,
                _ => {}
            }

            if waypoint.is_track_point() {
                track_positions.push(all.len());
                summary.track_points += 1;
            } else {
                waypoint_positions.push(all.len());
                summary.waypoints += 1;
            }
            all.push(waypoint);
        }

        summary.rescued_audio += rescue_lost_audio(&dir, &mut all, &mut waypoint_positions, &index);

        if self.options.warn_on_conversion_errors && summary.has_conversion_errors() {
            warn!(
                "{} date conversion faults and {} DOP conversion errors",
                summary.date_conversion_errors, summary.dop_conversion_errors
            );
        }

        let track = Track {
            points: track_positions.iter().map(|&i| all[i].clone()).collect(),
        };
        let waypoints: Vec<WayPoint> =
            waypoint_positions.iter().map(|&i| all[i].clone()).collect();

        debug!(
            "Conversion finished: {} track points, {} waypoints, {} audio files indexed",
            track.len(),
            waypoints.len(),
            index.len()
        );

        let base_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(ConversionResult {
            track,
            waypoints,
            summary,
            description: format!("Converted from Columbus track file '{}'", base_name),
        })
    }
}
