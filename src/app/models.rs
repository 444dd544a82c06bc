//! Data models for V-900 track import
//!
//! This module contains the core data structures representing imported track
//! points and waypoints, GPS quality metrics and linked audio recordings.

use crate::constants::AUDIO_LINK_TYPE;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Position
// =============================================================================

/// A geographic position in signed decimal degrees (WGS84).
///
/// Physical plausibility of the coordinates is not validated; the logger is
/// trusted and out-of-range values are carried through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Latitude; negative values are the southern hemisphere
    pub lat: f64,
    /// Longitude; negative values are the western hemisphere
    pub lon: f64,
}

impl Position {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

// =============================================================================
// GPS Quality Block
// =============================================================================

/// GPS quality data carried only by extended mode records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpsFix {
    /// Fix mode reported by the receiver ("2d", "3d", ...), case-folded
    pub mode: String,

    /// Position dilution of precision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdop: Option<f32>,

    /// Horizontal dilution of precision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hdop: Option<f32>,

    /// Vertical dilution of precision
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vdop: Option<f32>,
}

// =============================================================================
// Audio Link Artifact
// =============================================================================

/// Link to an audio recording attached to a waypoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioLink {
    /// File URI of the recording
    pub uri: String,
    /// Display text, normally the bare file name
    pub text: String,
    /// Link content type
    pub link_type: String,
}

impl AudioLink {
    pub fn new(uri: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            text: text.into(),
            link_type: AUDIO_LINK_TYPE.to_string(),
        }
    }
}

// =============================================================================
// Waypoint Classification
// =============================================================================

/// Effective classification of an imported point.
///
/// Exactly three cases; each carries only the data relevant to it. The
/// classification starts out from the record marker and may be revised during
/// audio resolution (a voice waypoint whose recording is missing demotes to
/// `Plain`, a waypoint with a resolved recording becomes `Audio`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classification {
    /// Point of the continuous track
    Track,
    /// Standalone waypoint without audio
    Plain,
    /// Waypoint with a resolved audio recording
    Audio {
        link: AudioLink,
        /// Vox sequence number embedded in the file name, -1 if unparseable
        sequence: i32,
    },
}

// =============================================================================
// Waypoint
// =============================================================================

/// A single imported point: position, timestamp, classification and the
/// optional quality / audio / comment attributes.
///
/// Waypoints are mutable while the conversion pass constructs them and
/// immutable once the result is handed to the caller. Identity is the
/// position in the imported sequence; there is no persistent key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WayPoint {
    pub position: Position,

    /// Absent when the record's date/time fields failed to convert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,

    /// Elevation field carried verbatim (no numeric validation)
    pub elevation: String,

    pub classification: Classification,

    /// Quality block of extended mode records
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<GpsFix>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl WayPoint {
    /// Create a waypoint at a position with no attributes set
    pub fn new(position: Position, classification: Classification) -> Self {
        Self {
            position,
            timestamp: None,
            elevation: String::new(),
            classification,
            fix: None,
            comment: None,
            description: None,
        }
    }

    /// Whether this point belongs to the continuous track
    pub fn is_track_point(&self) -> bool {
        matches!(self.classification, Classification::Track)
    }

    /// Whether an audio recording is attached
    pub fn has_audio(&self) -> bool {
        matches!(self.classification, Classification::Audio { .. })
    }

    /// The attached audio link, if any
    pub fn audio_link(&self) -> Option<&AudioLink> {
        match &self.classification {
            Classification::Audio { link, .. } => Some(link),
            _ => None,
        }
    }
}

// =============================================================================
// Track
// =============================================================================

/// The continuous track of an import: every track point in file order.
/// Exactly one track is produced per conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub points: Vec<WayPoint>,
}

impl Track {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
