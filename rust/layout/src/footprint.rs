// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Book dimensions and base transform used by the layout

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// Fixed footprint of a book model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookFootprint {
    /// Slot width along the shelf (meters)
    pub book_width: f64,
    /// Nominal book height before scale jitter (meters)
    pub book_height: f64,
    /// Extra clearance kept at each end of a shelf row (meters)
    pub shelf_margin: f64,
    /// Scale applied to the book model along X
    pub base_scale_x: f64,
    /// Scale applied to the book model along Z
    pub base_scale_z: f64,
    /// Rotation about Z so the spine faces the room (radians)
    pub base_roll: f64,
}

impl Default for BookFootprint {
    fn default() -> Self {
        Self {
            book_width: 0.045,
            book_height: 0.25,
            shelf_margin: 0.01,
            base_scale_x: 1.25,
            base_scale_z: 1.75,
            base_roll: std::f64::consts::PI,
        }
    }
}

impl BookFootprint {
    pub fn validate(&self) -> Result<(), LayoutError> {
        positive("book_width", self.book_width)?;
        positive("book_height", self.book_height)?;
        positive("base_scale_x", self.base_scale_x)?;
        positive("base_scale_z", self.base_scale_z)?;
        if !(self.shelf_margin.is_finite() && self.shelf_margin >= 0.0) {
            return Err(LayoutError::InvalidFootprint {
                field: "shelf_margin",
                value: self.shelf_margin,
                reason: "must be finite and not negative",
            });
        }
        if !self.base_roll.is_finite() {
            return Err(LayoutError::InvalidFootprint {
                field: "base_roll",
                value: self.base_roll,
                reason: "must be finite",
            });
        }
        Ok(())
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), LayoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LayoutError::InvalidFootprint {
            field,
            value,
            reason: "must be finite and greater than zero",
        })
    }
}
