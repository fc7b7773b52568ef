//! Console and report output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Highest verbosity level that changes what is printed.
pub const MAX_VERBOSITY: u8 = 3;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OutputConfig {
    /// Verbosity level (0-3). Default: 0.
    pub verbosity: Option<u8>,
    /// Suppress progress lines. Default: false.
    pub silent: Option<bool>,
    /// Use ANSI colors. Default: true.
    pub color: Option<bool>,
    /// Path of the JSON violation report.
    pub report: Option<PathBuf>,
    /// Path of an ignore list generated from the run's violations.
    pub write_ignore: Option<PathBuf>,
}

impl OutputConfig {
    pub fn effective_verbosity(&self) -> u8 {
        self.verbosity.unwrap_or(0)
    }

    pub fn effective_silent(&self) -> bool {
        self.silent.unwrap_or(false)
    }

    pub fn effective_color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
