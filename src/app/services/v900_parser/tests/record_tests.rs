//! Tests for record classification and field conversion

use chrono::{TimeZone, Utc};

use crate::app::models::Classification;
use crate::app::services::v900_parser::record::{Marker, RecordError, parse_record};
use crate::app::services::v900_parser::tokenizer::tokenize;

fn fields(line: &str) -> Vec<String> {
    tokenize(line)
}

#[test]
fn test_simple_track_record() {
    let record = fields("1,T,090430,194134,48.856330N,009.089779E,318,20,0,   ");
    let parsed = parse_record(&record, false).unwrap();

    assert_eq!(parsed.marker, Marker::Track);
    assert_eq!(parsed.waypoint.classification, Classification::Track);
    assert_eq!(parsed.waypoint.position.lat, 48.856330);
    assert_eq!(parsed.waypoint.position.lon, 9.089779);
    assert_eq!(
        parsed.waypoint.timestamp,
        Some(Utc.with_ymd_and_hms(2009, 4, 30, 19, 41, 34).unwrap())
    );
    assert_eq!(parsed.waypoint.elevation, "318");
    assert!(parsed.waypoint.fix.is_none());
    assert!(parsed.audio_ref.is_none());
    assert!(!parsed.date_error);
    assert_eq!(parsed.dop_errors, 0);
}

#[test]
fn test_hemisphere_signs() {
    let south_west = fields("1,T,090430,194134,48.856330S,009.089779W,318,20,0,   ");
    let parsed = parse_record(&south_west, false).unwrap();
    assert_eq!(parsed.waypoint.position.lat, -48.856330);
    assert_eq!(parsed.waypoint.position.lon, -9.089779);

    let north_east = fields("1,T,090430,194134,48.856330N,009.089779E,318,20,0,   ");
    let parsed = parse_record(&north_east, false).unwrap();
    assert_eq!(parsed.waypoint.position.lat, 48.856330);
    assert_eq!(parsed.waypoint.position.lon, 9.089779);
}

#[test]
fn test_wrong_field_count_is_fatal() {
    let record = fields("1,T,090430,194134,48.856330N,009.089779E,318,20,0,x,y");
    assert_eq!(record.len(), 11);

    match parse_record(&record, false) {
        Err(RecordError::FieldCount(11)) => {}
        other => panic!("expected field count error, got {:?}", other),
    }
}

#[test]
fn test_unparseable_coordinate_is_fatal() {
    let record = fields("1,T,090430,194134,garbageN,009.089779E,318,20,0,   ");
    assert!(matches!(
        parse_record(&record, false),
        Err(RecordError::Coordinate { field: "latitude", .. })
    ));

    let record = fields("1,T,090430,194134,48.856330N,gibberishE,318,20,0,   ");
    assert!(matches!(
        parse_record(&record, false),
        Err(RecordError::Coordinate { field: "longitude", .. })
    ));
}

#[test]
fn test_bad_date_is_tolerated() {
    let record = fields("1,T,xxyyzz,194134,48.856330N,009.089779E,318,20,0,   ");
    let parsed = parse_record(&record, false).unwrap();

    assert!(parsed.date_error);
    assert!(parsed.waypoint.timestamp.is_none());
    // The rest of the record converted normally
    assert_eq!(parsed.waypoint.position.lat, 48.856330);
}

#[test]
fn test_voice_record_surfaces_audio_reference() {
    let record = fields("7,V,090430,194134,48.856330N,009.089779E,318,20,0,VOX00100");
    let parsed = parse_record(&record, false).unwrap();

    assert_eq!(parsed.marker, Marker::Voice);
    assert_eq!(parsed.audio_ref.as_deref(), Some("VOX00100"));
    // Classification stays plain until audio resolution revises it
    assert_eq!(parsed.waypoint.classification, Classification::Plain);
}

#[test]
fn test_extended_record_quality_block() {
    let record =
        fields("1,T,090508,191448,48.856928N,009.091153E,330,3,0,3D,SPS ,1.4,1.2,0.8,   ");
    assert_eq!(record.len(), 15);

    let parsed = parse_record(&record, false).unwrap();
    let fix = parsed.waypoint.fix.expect("extended record carries a fix");
    assert_eq!(fix.mode, "3d");
    assert_eq!(fix.pdop, Some(1.4));
    assert_eq!(fix.hdop, Some(1.2));
    assert_eq!(fix.vdop, Some(0.8));
    assert_eq!(parsed.dop_errors, 0);
}

#[test]
fn test_unparseable_dop_values_are_counted_and_omitted() {
    let record =
        fields("1,T,090508,191448,48.856928N,009.091153E,330,3,0,3D,SPS , ,1.2,bad,   ");
    let parsed = parse_record(&record, false).unwrap();

    let fix = parsed.waypoint.fix.unwrap();
    assert_eq!(fix.pdop, None);
    assert_eq!(fix.hdop, Some(1.2));
    assert_eq!(fix.vdop, None);
    assert_eq!(parsed.dop_errors, 2);
}

#[test]
fn test_ignore_dop_skips_quality_block() {
    let record =
        fields("1,T,090508,191448,48.856928N,009.091153E,330,3,0,3D,SPS ,1.4,1.2,0.8,   ");
    let parsed = parse_record(&record, true).unwrap();

    assert!(parsed.waypoint.fix.is_none());
    assert_eq!(parsed.dop_errors, 0);
}

#[test]
fn test_extended_record_audio_reference_position() {
    let record =
        fields("9,V,090508,191448,48.856928N,009.091153E,330,3,0,3D,SPS ,1.4,1.2,0.8,VOX00042");
    let parsed = parse_record(&record, false).unwrap();

    assert_eq!(parsed.audio_ref.as_deref(), Some("VOX00042"));
}

#[test]
fn test_unknown_marker_routes_as_plain_waypoint() {
    let record = fields("1,X,090430,194134,48.856330N,009.089779E,318,20,0,   ");
    let parsed = parse_record(&record, false).unwrap();

    assert_eq!(parsed.marker, Marker::Plain);
    assert_eq!(parsed.waypoint.classification, Classification::Plain);
}
