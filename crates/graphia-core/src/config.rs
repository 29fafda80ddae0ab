// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphiaError, Result};

/// Settings for the orchestration layer and the command-line front end.
///
/// The analysis thresholds are calibrated constants and are deliberately
/// absent here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Pretty-print JSON output.
    pub pretty_json: bool,
    /// Attach the deterministic offline career summary to reports when no
    /// narrative generator is available.
    pub offline_summary: bool,
    /// Uploads larger than this are rejected before decoding.
    pub max_upload_bytes: usize,
    /// Decoded images with more pixels than this are rejected.
    pub max_image_pixels: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            pretty_json: false,
            offline_summary: false,
            max_upload_bytes: 20 * 1024 * 1024,
            max_image_pixels: 40_000_000,
        }
    }
}

impl AppConfig {
    /// Load a config from a JSON file. Missing keys take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.max_upload_bytes == 0 {
            return Err(GraphiaError::Config("max_upload_bytes must be positive".into()));
        }
        if self.max_image_pixels == 0 {
            return Err(GraphiaError::Config("max_image_pixels must be positive".into()));
        }
        Ok(())
    }
}
