//! Test utilities for V-900 parser testing
//!
//! Provides record builders and temp-directory fixtures shared across the
//! test modules. Audio fixtures are real (tiny) files so that existence
//! probes behave like they do against a memory card.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app::models::{Classification, Position, WayPoint};

mod record_tests;
mod tokenizer_tests;

/// Column header written by the logger as line 1
pub const HEADER_LINE: &str = "INDEX,TAG,DATE,TIME,LATITUDE N/S,LONGITUDE E/W,HEIGHT,SPEED,HEADING,VOX";

/// Simple-mode track record. The unused audio column is space padded, as on
/// the device.
pub fn track_line(index: usize) -> String {
    format!(
        "{},T,090430,19{:02}{:02},48.856330N,009.089779E,318,20,0,          ",
        index,
        41 + index / 60 % 19,
        index % 60
    )
}

/// Simple-mode voice waypoint record referencing the recording `vox_base`
pub fn voice_line(index: usize, vox_base: &str) -> String {
    format!(
        "{},V,090430,194134,48.856330N,009.089779E,318,20,0,{}",
        index, vox_base
    )
}

/// Simple-mode plain waypoint record with a space padded audio column
pub fn plain_line(index: usize) -> String {
    format!(
        "{},C,090430,194134,48.856330N,009.089779E,318,20,0,          ",
        index
    )
}

/// Write a track file with a header line plus the given records
pub fn write_track_file(dir: &Path, name: &str, records: &[String]) -> PathBuf {
    let path = dir.join(name);
    let mut file = File::create(&path).unwrap();
    writeln!(file, "{}", HEADER_LINE).unwrap();
    for record in records {
        writeln!(file, "{}", record).unwrap();
    }
    path
}

/// Materialize a (fake) recording next to the track file
pub fn write_vox_file(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"RIFF").unwrap();
    path
}

/// Waypoint at an identifiable latitude for rescue target assertions
pub fn waypoint_at(lat: f64, classification: Classification) -> WayPoint {
    WayPoint::new(Position::new(lat, 9.0), classification)
}
