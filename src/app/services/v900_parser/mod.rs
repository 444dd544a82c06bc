//! Parser for native Columbus V-900 track logs
//!
//! The V-900 writes one CSV record per position fix. By default the device
//! runs in simple mode (10 fields: position, date/time, speed, heading and an
//! optional audio reference); with a `config.txt` on the microSD card it
//! switches to extended mode (15 fields, adding fix mode and the DOP quality
//! values). Voice recordings are `.wav` files stored next to the CSV file and
//! referenced by base name from the record that was written when recording
//! started.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Conversion orchestration and file handling
//! - [`detector`] - Bounded-window sniff deciding V-900 format yes/no
//! - [`tokenizer`] - Record splitting with the logger's delimiter semantics
//! - [`record`] - Per-record classification and field conversion
//! - [`audio`] - Audio reference resolution and the vox file index
//! - [`rescue`] - Post-pass re-attaching recordings without a CSV reference
//! - [`stats`] - Import counters and result structures
//!
//! ## Usage
//!
//! ```no_run
//! use columbus_csv::{ColumbusReader, ImportOptions};
//!
//! # fn example() -> columbus_csv::Result<()> {
//! let reader = ColumbusReader::new(ImportOptions::default());
//! let result = reader.convert_file(std::path::Path::new("trip.csv"))?;
//!
//! println!(
//!     "Imported {} track points and {} way points",
//!     result.summary.track_points, result.summary.waypoints
//! );
//! # Ok(())
//! # }
//! ```

pub mod audio;
pub mod detector;
pub mod parser;
pub mod record;
pub mod rescue;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use audio::AudioIndex;
pub use detector::is_columbus_file;
pub use parser::ColumbusReader;
pub use stats::{ConversionResult, ConversionSummary};
