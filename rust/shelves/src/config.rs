// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Detection configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use shelfscan_geometry::Vector3D;
use std::collections::BTreeSet;

/// Parameters of one detection run
///
/// Immutable for the duration of a run; pass a new value to re-run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DetectionConfig {
    /// Minimum X extent of a candidate surface (meters)
    pub min_shelf_width: f64,
    /// Minimum Z extent of a candidate surface (meters)
    pub min_shelf_depth: f64,
    /// Height bucket size: vertices within one bucket count as one surface.
    /// Must be strictly positive.
    pub height_tolerance: f64,
    /// Candidates closer than this in height are merged into one shelf
    pub merge_threshold: f64,
    /// Added to every world position before classification
    pub offsets: Vector3D,
    /// Positions in the final, height-sorted shelf list to drop
    pub excluded_shelf_indices: BTreeSet<usize>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            min_shelf_width: 0.0001,
            min_shelf_depth: 0.15,
            height_tolerance: 0.02,
            merge_threshold: 0.05,
            offsets: Vector3D::ZERO,
            excluded_shelf_indices: BTreeSet::new(),
        }
    }
}

impl DetectionConfig {
    /// Replace the position offsets
    pub fn with_offsets(mut self, x: f64, y: f64, z: f64) -> Self {
        self.offsets = Vector3D::new(x, y, z);
        self
    }

    /// Replace the excluded shelf indices
    pub fn with_excluded_shelves(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.excluded_shelf_indices = indices.into_iter().collect();
        self
    }

    /// Reject configurations a detection run cannot honour.
    ///
    /// Values are never clamped; the caller gets the offending field back.
    pub fn validate(&self) -> Result<()> {
        non_negative("min_shelf_width", self.min_shelf_width)?;
        non_negative("min_shelf_depth", self.min_shelf_depth)?;
        non_negative("merge_threshold", self.merge_threshold)?;
        finite("height_tolerance", self.height_tolerance)?;
        if self.height_tolerance <= 0.0 {
            return Err(Error::InvalidConfig {
                field: "height_tolerance",
                value: self.height_tolerance,
                reason: "must be greater than zero",
            });
        }
        finite("offsets.x", self.offsets.x)?;
        finite("offsets.y", self.offsets.y)?;
        finite("offsets.z", self.offsets.z)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidConfig {
            field,
            value,
            reason: "must be finite",
        })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    finite(field, value)?;
    if value < 0.0 {
        return Err(Error::InvalidConfig {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(DetectionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_thresholds_are_valid() {
        let config = DetectionConfig {
            min_shelf_width: 0.0,
            min_shelf_depth: 0.0,
            merge_threshold: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_negative_merge_threshold_rejected() {
        let config = DetectionConfig {
            merge_threshold: -0.01,
            ..Default::default()
        };
        match config.validate() {
            Err(Error::InvalidConfig { field, .. }) => assert_eq!(field, "merge_threshold"),
            other => panic!("expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_height_tolerance_rejected() {
        let config = DetectionConfig {
            height_tolerance: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig { field: "height_tolerance", .. })
        ));
    }

    #[test]
    fn test_nan_rejected() {
        let config = DetectionConfig {
            min_shelf_depth: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = DetectionConfig::default().with_offsets(0.0, f64::INFINITY, 0.0);
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig { field: "offsets.y", .. })
        ));
    }

    #[test]
    fn test_json_roundtrip_with_partial_input() {
        let config: DetectionConfig =
            serde_json::from_str(r#"{"min_shelf_depth":0.2,"excluded_shelf_indices":[2,0]}"#)
                .unwrap();
        assert_eq!(config.min_shelf_depth, 0.2);
        assert_eq!(config.height_tolerance, 0.02);
        assert_eq!(
            config.excluded_shelf_indices.iter().copied().collect::<Vec<_>>(),
            vec![0, 2]
        );

        let json = serde_json::to_string(&config).unwrap();
        let back: DetectionConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
