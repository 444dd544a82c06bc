//! Format detection for V-900 track logs
//!
//! A bounded sample of records is checked for the three known record markers.
//! This is a cheap heuristic for file-picker style pre-import sniffing, not a
//! validator; adversarial input can fool it in both directions.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use super::tokenizer::tokenize;
use crate::Result;
use crate::constants::{MAX_SCAN_RECORDS, MIN_MATCHING_RECORDS, fields, is_known_marker};

/// Check whether a file looks like a Columbus V-900 track log.
///
/// Reads records until the scan window (20) is exhausted, unless more than
/// the confidence threshold (10) of records already matched, in which case
/// scanning continues to the end of the sample. The first line is always
/// skipped as the column header. Returns true iff strictly more than the
/// threshold of sampled records carry a known record marker in their second
/// field.
pub fn is_columbus_file(path: &Path) -> Result<bool> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut lines_read = 0usize;
    let mut matching = 0usize;

    for line in reader.lines() {
        if !(lines_read < MAX_SCAN_RECORDS || matching > MIN_MATCHING_RECORDS) {
            break;
        }

        let line = line?;
        let record = tokenize(&line);
        lines_read += 1;

        // Skip the header line and lines without data
        if record.is_empty() || lines_read <= 1 {
            continue;
        }

        if record
            .get(fields::MARKER)
            .is_some_and(|marker| is_known_marker(marker))
        {
            matching += 1;
        }
    }

    debug!(
        "Format scan of {}: {} of {} records matched",
        path.display(),
        matching,
        lines_read
    );

    Ok(matching > MIN_MATCHING_RECORDS)
}
