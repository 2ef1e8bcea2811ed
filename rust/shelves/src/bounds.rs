// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bounds and usable placement space of a vertex group

use nalgebra::Point3;
use serde::{Deserialize, Serialize};
use shelfscan_geometry::Bounds;

/// Clearance kept free around placed objects (meters)
pub const USABLE_MARGIN: f64 = 0.05;

/// Bounds extent shrunk by placement clearance
///
/// Width loses the margin on both sides, depth only at the back: shelves
/// are assumed to stand against a wall. Either value may be negative when
/// the surface is smaller than the margins.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UsableSpace {
    pub width: f64,
    pub depth: f64,
}

impl UsableSpace {
    /// Derive usable space from a surface's bounds
    #[inline]
    pub fn from_bounds(bounds: &Bounds) -> Self {
        Self {
            width: bounds.width() - USABLE_MARGIN * 2.0,
            depth: bounds.depth() - USABLE_MARGIN,
        }
    }

    /// No room to place anything
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.depth > 0.0)
    }
}

/// Axis-aligned box spanning the selected vertices
///
/// Returns an empty box for an empty selection.
pub fn bounds_of(indices: &[usize], positions: &[Point3<f64>]) -> Bounds {
    indices.iter().map(|&i| positions[i]).collect()
}
