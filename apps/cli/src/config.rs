// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CLI configuration: optional JSON file plus environment overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use shelfscan_layout::BookFootprint;
use shelfscan_shelves::{BookshelfPreset, DetectionConfig};
use std::path::Path;

/// Settings for one run of the tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Shelf detection tolerances.
    pub detection: DetectionConfig,
    /// Book dimensions used by the layout.
    pub footprint: BookFootprint,
}

impl Config {
    /// Read a config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// Add the preset's excluded shelves to any already configured.
    pub fn with_preset(mut self, preset: &BookshelfPreset) -> Self {
        self.detection
            .excluded_shelf_indices
            .extend(preset.excluded_shelves.iter().copied());
        self
    }

    /// Apply `SHELFSCAN_*` overrides from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`. Unparseable values keep the current setting.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str, current: f64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(current)
        };

        let d = &mut self.detection;
        d.min_shelf_width = read("SHELFSCAN_MIN_SHELF_WIDTH", d.min_shelf_width);
        d.min_shelf_depth = read("SHELFSCAN_MIN_SHELF_DEPTH", d.min_shelf_depth);
        d.height_tolerance = read("SHELFSCAN_HEIGHT_TOLERANCE", d.height_tolerance);
        d.merge_threshold = read("SHELFSCAN_MERGE_THRESHOLD", d.merge_threshold);
        self
    }

    /// Check both halves before any work starts.
    pub fn validate(&self) -> Result<()> {
        self.detection.validate()?;
        self.footprint.validate()?;
        Ok(())
    }
}
