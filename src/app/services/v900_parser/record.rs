//! Per-record classification and field conversion
//!
//! Turns a tokenized record into a waypoint candidate. Coordinate conversion
//! and the record shape are strict (a failure aborts the whole import);
//! date/time and DOP conversion are tolerant and only tallied.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::app::models::{Classification, GpsFix, Position, WayPoint};
use crate::constants::{
    DATETIME_FORMAT, EXTENDED_FIELD_COUNT, SIMPLE_FIELD_COUNT, fields, markers,
};

/// Fatal conversion failures of a single record. The driver wraps these with
/// the file name and 1-based line number.
#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    #[error("invalid number of fields: {0}")]
    FieldCount(usize),

    #[error("unparseable {field} value '{value}'")]
    Coordinate { field: &'static str, value: String },
}

/// Provisional record classification taken from the raw marker field before
/// audio resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Track,
    Voice,
    Plain,
}

impl Marker {
    /// Classify a raw marker field. Unknown markers are tolerated and route
    /// as plain waypoints.
    pub fn from_field(value: &str) -> Self {
        match value {
            markers::TRACK => Marker::Track,
            markers::VOICE => Marker::Voice,
            markers::PLAIN => Marker::Plain,
            other => {
                debug!("Unknown record marker '{}', treating as plain waypoint", other);
                Marker::Plain
            }
        }
    }
}

/// A converted record before audio resolution
#[derive(Debug)]
pub struct ParsedRecord {
    pub waypoint: WayPoint,
    pub marker: Marker,
    /// Audio reference base name (without extension), when present
    pub audio_ref: Option<String>,
    /// Date/time fields failed to convert
    pub date_error: bool,
    /// Number of DOP fields that failed to convert
    pub dop_errors: usize,
}

/// Convert one tokenized, non-header record into a waypoint candidate.
///
/// The record must have exactly 10 (simple mode) or 15 (extended mode)
/// fields; anything else fails, as does unparseable coordinate text.
pub fn parse_record(record: &[String], ignore_dop: bool) -> Result<ParsedRecord, RecordError> {
    // Sample record in simple mode:
    // 1,T,090430,194134,48.856330N,009.089779E,318,20,0,
    //
    // Sample record in extended mode:
    // 1,T,090508,191448,48.856928N,009.091153E,330,3,0,3D,SPS ,1.4,1.2,0.8,
    if record.len() != SIMPLE_FIELD_COUNT && record.len() != EXTENDED_FIELD_COUNT {
        return Err(RecordError::FieldCount(record.len()));
    }
    let extended = record.len() > SIMPLE_FIELD_COUNT;

    let lat = parse_coordinate(&record[fields::LATITUDE], 'S', "latitude")?;
    let lon = parse_coordinate(&record[fields::LONGITUDE], 'W', "longitude")?;

    let marker = Marker::from_field(&record[fields::MARKER]);
    let classification = match marker {
        Marker::Track => Classification::Track,
        Marker::Voice | Marker::Plain => Classification::Plain,
    };

    let mut waypoint = WayPoint::new(Position::new(lat, lon), classification);

    // Date and time arrive as separate yyMMdd / HHmmss fields
    let mut date_error = false;
    let raw_datetime = format!("{}/{}", record[fields::DATE], record[fields::TIME]);
    match NaiveDateTime::parse_from_str(&raw_datetime, DATETIME_FORMAT) {
        Ok(naive) => waypoint.timestamp = Some(naive.and_utc()),
        Err(e) => {
            debug!("Failed to convert date/time '{}': {}", raw_datetime, e);
            date_error = true;
        }
    }

    // Elevation is carried verbatim
    waypoint.elevation = record[fields::ELEVATION].clone();

    let mut dop_errors = 0;
    if extended && !ignore_dop {
        waypoint.fix = Some(parse_gps_quality(record, &mut dop_errors));
    }

    let audio_index = if extended {
        fields::AUDIO_EXTENDED
    } else {
        fields::AUDIO_SIMPLE
    };
    let audio_ref = Some(record[audio_index].clone()).filter(|s| !s.is_empty());

    Ok(ParsedRecord {
        waypoint,
        marker,
        audio_ref,
        date_error,
        dop_errors,
    })
}

/// Parse a `<decimal><hemisphere-letter>` coordinate field. The trailing
/// letter is stripped unconditionally and the value negated for the southern
/// or western hemisphere.
fn parse_coordinate(
    value: &str,
    negative_hemisphere: char,
    field: &'static str,
) -> Result<f64, RecordError> {
    let mut chars = value.chars();
    let hemisphere = chars.next_back().ok_or_else(|| RecordError::Coordinate {
        field,
        value: value.to_string(),
    })?;

    let magnitude: f64 = chars.as_str().parse().map_err(|_| RecordError::Coordinate {
        field,
        value: value.to_string(),
    })?;

    if hemisphere == negative_hemisphere {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

/// Extract the quality block of an extended record. Each DOP value converts
/// independently; a failure tallies one conversion error and omits the value.
fn parse_gps_quality(record: &[String], dop_errors: &mut usize) -> GpsFix {
    GpsFix {
        mode: record[fields::FIX_MODE].to_lowercase(),
        pdop: parse_dop(&record[fields::PDOP], "pdop", dop_errors),
        hdop: parse_dop(&record[fields::HDOP], "hdop", dop_errors),
        vdop: parse_dop(&record[fields::VDOP], "vdop", dop_errors),
    }
}

fn parse_dop(value: &str, name: &str, dop_errors: &mut usize) -> Option<f32> {
    match value.parse::<f32>() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!("Failed to convert {} value '{}'", name, value);
            *dop_errors += 1;
            None
        }
    }
}
