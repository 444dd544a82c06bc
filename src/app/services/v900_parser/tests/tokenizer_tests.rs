//! Tests for record tokenization

use crate::app::services::v900_parser::tokenizer::tokenize;

#[test]
fn test_empty_line_yields_no_fields() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_sample_record_drops_trailing_empty_field() {
    // The trailing delimiter produces a zero-length token, which is dropped;
    // the record therefore has 9 fields, not 10.
    let fields = tokenize("1,T,090430,194134,48.856330N,009.089779E,318,20,0,");
    assert_eq!(fields.len(), 9);
    assert_eq!(fields[0], "1");
    assert_eq!(fields[1], "T");
    assert_eq!(fields[8], "0");
}

#[test]
fn test_consecutive_delimiters_drop_fields() {
    assert_eq!(tokenize("a,,b"), vec!["a", "b"]);
    assert_eq!(tokenize(",,,"), Vec::<String>::new());
}

#[test]
fn test_whitespace_only_field_survives_as_empty() {
    // A space padded column is a real token and trims to an empty string
    assert_eq!(tokenize("a, ,b"), vec!["a", "", "b"]);
    assert_eq!(
        tokenize("1,T,090430,194134,48.856330N,009.089779E,318,20,0,   ").len(),
        10
    );
}

#[test]
fn test_fields_are_trimmed() {
    assert_eq!(tokenize("  1 , T ,SPS  "), vec!["1", "T", "SPS"]);
}
