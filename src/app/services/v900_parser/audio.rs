//! Audio reference resolution and the vox file index
//!
//! Recordings live next to the CSV file. The card's FAT16 file names are
//! reported differently by case-sensitive filesystems, so resolution probes
//! the name as given plus the all-lowercase and all-uppercase variants. Every
//! resolved recording is registered in an [`AudioIndex`] keyed by the
//! case-normalized file name, which the rescue pass later reads to find
//! orphaned recordings inside the observed sequence number range.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::app::models::{AudioLink, Classification, WayPoint};
use crate::constants::{AUDIO_FILE_EXTENSION, INVALID_VOX_NUMBER, VOX_FILE_PREFIX};

/// Index of all resolved audio recordings of one import.
///
/// Maps the case-normalized file name to the sequence position of the owning
/// waypoint and tracks the minimum/maximum vox number observed across the
/// whole file. Built incrementally during the main pass; read-only during
/// rescue. Every key corresponds to a waypoint already present in the
/// imported sequence.
#[derive(Debug, Default)]
pub struct AudioIndex {
    by_name: HashMap<String, usize>,
    first: Option<i32>,
    last: Option<i32>,
}

impl AudioIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolved recording owned by the waypoint at
    /// `sequence_position` in the imported sequence.
    pub fn register(&mut self, file_name: &str, sequence_position: usize, number: i32) {
        self.by_name
            .insert(file_name.to_lowercase(), sequence_position);
        self.first = Some(self.first.map_or(number, |f| f.min(number)));
        self.last = Some(self.last.map_or(number, |l| l.max(number)));
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.by_name.contains_key(&file_name.to_lowercase())
    }

    /// Sequence position of the waypoint owning `file_name`
    pub fn position_of(&self, file_name: &str) -> Option<usize> {
        self.by_name.get(&file_name.to_lowercase()).copied()
    }

    /// The `(first, last)` vox numbers observed, if any recording resolved
    pub fn observed_range(&self) -> Option<(i32, i32)> {
        match (self.first, self.last) {
            (Some(first), Some(last)) => Some((first, last)),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Outcome of resolving one audio reference
#[derive(Debug, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Recording found and linked; classification revised to audio waypoint
    Linked { sequence: i32 },
    /// Recording not found; classification demoted to plain waypoint
    Missing { file_name: String },
}

/// Locate an audio file in `dir`, tolerating FAT16 case mangling by probing
/// the name as given, all-lowercase and all-uppercase.
pub fn resolve_audio_path(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let variants = [
        file_name.to_string(),
        file_name.to_lowercase(),
        file_name.to_uppercase(),
    ];

    variants.iter().map(|name| dir.join(name)).find(|p| p.exists())
}

/// Extract the vox sequence number embedded in a file name, e.g. 1524 for
/// `VOX01524.wav`. Returns -1 for names without a parseable number.
pub fn audio_sequence_number(file_name: &str) -> i32 {
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem);

    stem.get(VOX_FILE_PREFIX.len()..)
        .and_then(|digits| digits.parse::<i32>().ok())
        .unwrap_or(INVALID_VOX_NUMBER)
}

/// Build a `file://` URI for a resolved recording
pub fn file_uri(path: &Path) -> String {
    let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", absolute.display())
}

/// Attach the link artifact of a resolved recording to a waypoint, revising
/// its classification to audio waypoint.
pub fn attach_link(waypoint: &mut WayPoint, path: &Path, display_text: &str, sequence: i32) {
    waypoint.classification = Classification::Audio {
        link: AudioLink::new(file_uri(path), display_text),
        sequence,
    };
    waypoint.comment = Some("Audio recording".to_string());
    waypoint.description = Some(display_text.to_string());
}

/// Resolve the audio reference of a record against the track directory and
/// link or demote the waypoint accordingly.
///
/// `sequence_position` is the position the waypoint will occupy in the
/// imported sequence; it is recorded in the index for the rescue pass. Side
/// effects are confined to the waypoint and the index; the only I/O is the
/// existence probe.
pub fn link_audio(
    waypoint: &mut WayPoint,
    base_name: &str,
    dir: &Path,
    index: &mut AudioIndex,
    sequence_position: usize,
    warn_on_missing: bool,
) -> LinkOutcome {
    let file_name = format!("{}{}", base_name, AUDIO_FILE_EXTENSION);

    match resolve_audio_path(dir, &file_name) {
        Some(path) => {
            let sequence = audio_sequence_number(&file_name);
            attach_link(waypoint, &path, &file_name, sequence);
            index.register(&file_name, sequence_position, sequence);
            debug!("Linked audio file {}", file_name);
            LinkOutcome::Linked { sequence }
        }
        None => {
            let message = format!("Missing audio file: {}", file_name);
            if warn_on_missing {
                warn!("{}", message);
            } else {
                debug!("{}", message);
            }
            waypoint.comment = Some(message);
            waypoint.classification = Classification::Plain;
            LinkOutcome::Missing { file_name }
        }
    }
}
