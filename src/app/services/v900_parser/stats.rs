//! Import counters and result structures
//!
//! This module provides the summary counters accumulated during a conversion
//! and the result type handed to the caller once a run completes.

use crate::app::models::{Track, WayPoint};

/// Everything produced by one conversion run: the single track, the waypoint
/// collection in file order and the summary counters. Ownership transfers to
/// the caller as a whole; the engine keeps nothing across calls.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConversionResult {
    /// The continuous track
    pub track: Track,

    /// Plain and audio waypoints, order-preserving
    pub waypoints: Vec<WayPoint>,

    /// Summary counters of the run
    pub summary: ConversionSummary,

    /// Human-readable description embedding the source file's base name
    pub description: String,
}

/// Summary counters of one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ConversionSummary {
    /// Imported track points
    pub track_points: usize,

    /// Imported waypoints (plain and audio, main pass only)
    pub waypoints: usize,

    /// Waypoints whose voice reference resolved to a recording
    pub audio_waypoints: usize,

    /// Referenced recordings not found on disk
    pub missing_audio: usize,

    /// Recordings re-attached without a usable reference, at parse time or
    /// by the rescue pass
    pub rescued_audio: usize,

    /// Date/time fields that failed to convert
    pub date_conversion_errors: usize,

    /// DOP fields that failed to convert
    pub dop_conversion_errors: usize,
}

impl ConversionSummary {
    /// Create new empty counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any tolerated field conversion failed during the run
    pub fn has_conversion_errors(&self) -> bool {
        self.date_conversion_errors > 0 || self.dop_conversion_errors > 0
    }

    /// One-line import report
    pub fn report(&self) -> String {
        let mut message = format!(
            "Imported {} track points and {} way points ({} with audio, {} rescued).",
            self.track_points, self.waypoints, self.audio_waypoints, self.rescued_audio
        );
        if self.missing_audio > 0 {
            message.push_str(&format!(
                "\nNote: {} audio files could not be found, please check waypoint comments!",
                self.missing_audio
            ));
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_summary() {
        let summary = ConversionSummary::new();
        assert_eq!(summary.track_points, 0);
        assert!(!summary.has_conversion_errors());
    }

    #[test]
    fn test_conversion_error_detection() {
        let mut summary = ConversionSummary::new();
        summary.date_conversion_errors = 1;
        assert!(summary.has_conversion_errors());

        let mut summary = ConversionSummary::new();
        summary.dop_conversion_errors = 3;
        assert!(summary.has_conversion_errors());
    }

    #[test]
    fn test_report_mentions_missing_audio_only_when_present() {
        let mut summary = ConversionSummary::new();
        summary.track_points = 5;
        summary.waypoints = 2;
        assert!(!summary.report().contains("could not be found"));

        summary.missing_audio = 1;
        assert!(summary.report().contains("1 audio files could not be found"));
    }
}
