// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

/// Bound on `default_arrival_offset_minutes` in either direction, 30 days.
pub const MAX_ARRIVAL_OFFSET_MINUTES: i64 = 30 * 24 * 60;

/// Session settings for a terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    /// Number of berths, numbered from 1.
    pub berth_count: usize,
    pub berth_name_prefix: String,
    /// Length of the per-berth "next up" preview.
    pub preview_len: usize,
    /// Offset from the scheduled time used when a record has no predicted
    /// arrival and `derive_missing_arrival` is set.
    pub default_arrival_offset_minutes: i64,
    pub derive_missing_arrival: bool,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            berth_count: 12,
            berth_name_prefix: "Berth".to_string(),
            preview_len: 5,
            default_arrival_offset_minutes: 60,
            derive_missing_arrival: true,
        }
    }
}

impl TerminalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.berth_count == 0 {
            return Err(ConfigError::ZeroBerths);
        }
        if self.preview_len == 0 {
            return Err(ConfigError::ZeroPreview);
        }
        let offset = self.default_arrival_offset_minutes;
        if !(-MAX_ARRIVAL_OFFSET_MINUTES..=MAX_ARRIVAL_OFFSET_MINUTES).contains(&offset) {
            return Err(ConfigError::ArrivalOffsetOutOfRange(offset));
        }
        Ok(())
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigError::Json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::open(path).map_err(ConfigError::Io)?;
        let config: Self =
            serde_json::from_reader(BufReader::new(file)).map_err(ConfigError::Json)?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    ZeroBerths,
    ZeroPreview,
    ArrivalOffsetOutOfRange(i64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "Invalid configuration: {}", e),
            ConfigError::ZeroBerths => write!(f, "The terminal needs at least one berth."),
            ConfigError::ZeroPreview => write!(f, "The preview length must be positive."),
            ConfigError::ArrivalOffsetOutOfRange(m) => write!(
                f,
                "Arrival offset of {} minutes exceeds the {} minute limit.",
                m, MAX_ARRIVAL_OFFSET_MINUTES
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
