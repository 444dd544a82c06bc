//! Columbus CSV Library
//!
//! A Rust library for converting native CSV track logs of the Columbus V-900
//! GPS/audio data logger into a normalized track and waypoint model.
//!
//! This library provides tools for:
//! - Parsing V-900 CSV files in both simple (10 field) and extended (15 field) mode
//! - Tolerant per-field conversion of timestamps and GPS quality (DOP) values
//! - Resolving referenced audio recordings against the track directory
//! - Rescuing audio files the logger recorded without writing a CSV reference
//! - Sniffing whether an arbitrary file looks like a V-900 track log

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod v900_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AudioLink, Classification, GpsFix, Position, Track, WayPoint};
pub use app::services::v900_parser::{
    ColumbusReader, ConversionResult, ConversionSummary, is_columbus_file,
};
pub use config::ImportOptions;

/// Result type alias for the Columbus CSV importer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Columbus CSV import operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Structural format violation in a track file. Fatal for the whole
    /// import; carries the 1-based line number of the offending record.
    #[error("format error in file '{file}', line {line}: {message}")]
    Format {
        file: String,
        line: usize,
        message: String,
    },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a format error for a specific line of a track file
    pub fn format(file: impl Into<String>, line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            file: file.into(),
            line,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
