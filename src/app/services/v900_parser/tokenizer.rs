//! Record tokenization with the logger's delimiter semantics
//!
//! The V-900 pads unused columns with spaces, so a present-but-empty field
//! arrives as a whitespace-only token and survives as an empty string after
//! trimming. Zero-length tokens between consecutive delimiters, on the other
//! hand, are dropped entirely and never count towards the record shape.

use crate::constants::FIELD_DELIMITER;

/// Split one line of a track file into its trimmed fields.
///
/// Pure function; an empty line yields an empty field list.
pub fn tokenize(line: &str) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }

    line.split(FIELD_DELIMITER)
        .filter(|token| !token.is_empty())
        .map(|token| token.trim().to_string())
        .collect()
}
