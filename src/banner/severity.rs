// SPDX-License-Identifier: MPL-2.0
//! Severity levels.

use crate::config::{
    DEFAULT_ERROR_DURATION_MS, DEFAULT_INFO_DURATION_MS, DEFAULT_SUCCESS_DURATION_MS,
    DEFAULT_WARNING_DURATION_MS,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Severity level determines banner styling and default resting duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Failure requiring attention (red, 7s).
    Error,
    /// Something to keep an eye on (amber, 5s).
    Warning,
    /// Operation completed (green, 4s).
    Success,
    /// Neutral information (blue, 5s).
    #[default]
    Info,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warning,
        Severity::Success,
        Severity::Info,
    ];

    /// Returns the resting duration used by the per-severity shortcuts.
    #[must_use]
    pub fn default_duration(self) -> Duration {
        let ms = match self {
            Severity::Error => DEFAULT_ERROR_DURATION_MS,
            Severity::Warning => DEFAULT_WARNING_DURATION_MS,
            Severity::Success => DEFAULT_SUCCESS_DURATION_MS,
            Severity::Info => DEFAULT_INFO_DURATION_MS,
        };
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Success => "success",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = std::convert::Infallible;

    /// Unknown names map to `Info`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "error" => Severity::Error,
            "warning" | "warn" => Severity::Warning,
            "success" => Severity::Success,
            _ => Severity::Info,
        })
    }
}
