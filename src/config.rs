//! Configuration management for the import engine.
//!
//! Provides the option surface consumed by the conversion driver and the
//! CLI: warning behavior for tolerated conversion errors, summary display,
//! missing-audio reporting and DOP ingestion.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options consumed by a single import run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Warn once at the end of a run when date or DOP fields failed to convert
    pub warn_on_conversion_errors: bool,

    /// Print the import summary (track/waypoint/audio counters) after a run
    pub show_summary: bool,

    /// Warn for every referenced audio file that could not be found on disk
    pub warn_on_missing_audio: bool,

    /// Skip ingestion of fix mode and PDOP/HDOP/VDOP from extended records
    pub ignore_dop: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            warn_on_conversion_errors: true,
            show_summary: true,
            warn_on_missing_audio: true,
            ignore_dop: false,
        }
    }
}

impl ImportOptions {
    /// Disable the end-of-run conversion error warning
    pub fn without_conversion_warnings(mut self) -> Self {
        self.warn_on_conversion_errors = false;
        self
    }

    /// Disable the import summary
    pub fn without_summary(mut self) -> Self {
        self.show_summary = false;
        self
    }

    /// Disable per-file missing audio warnings
    pub fn without_missing_audio_warnings(mut self) -> Self {
        self.warn_on_missing_audio = false;
        self
    }

    /// Skip DOP and fix mode fields of extended records
    pub fn with_ignore_dop(mut self) -> Self {
        self.ignore_dop = true;
        self
    }

    /// Default location of the options file under the user configuration
    /// directory
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("columbus-csv").join("config.json"))
    }

    /// Load options from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file {}", path.display()),
                e,
            )
        })?;

        serde_json::from_str(&content).map_err(|e| {
            Error::configuration(format!(
                "Invalid config file {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load options with the layered approach: explicit file if given,
    /// otherwise the default config file if it exists, otherwise defaults.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_file {
            debug!("Loading options from {}", path.display());
            return Self::load_from_file(path);
        }

        if let Some(default_path) = Self::default_config_path() {
            if default_path.exists() {
                debug!("Loading options from {}", default_path.display());
                return Self::load_from_file(&default_path);
            }
        }

        debug!("No config file found, using default options");
        Ok(Self::default())
    }
}
