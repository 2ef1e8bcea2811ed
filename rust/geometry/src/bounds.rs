// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding boxes

use crate::point::Vector3D;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
///
/// An empty box starts at `(+inf, +inf, +inf)`–`(-inf, -inf, -inf)` so that
/// folding in the first sample yields a degenerate box around that sample.
/// Once at least one sample has been included, `min <= max` on every axis.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Bounds {
    pub min: Vector3D,
    pub max: Vector3D,
}

impl Bounds {
    /// Create bounds from explicit corners
    #[inline]
    pub fn new(min: Vector3D, max: Vector3D) -> Self {
        Self { min, max }
    }

    /// Create an empty box ready to be folded over samples
    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Vector3D::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Vector3D::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Check if no sample has been folded in yet
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grow the box to contain a point
    #[inline]
    pub fn include(&mut self, p: &Point3<f64>) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.min.z = self.min.z.min(p.z);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
        self.max.z = self.max.z.max(p.z);
    }

    /// Component-wise union of two boxes
    #[inline]
    pub fn union(&self, other: &Bounds) -> Bounds {
        Bounds {
            min: Vector3D::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Vector3D::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Extent along X
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along Z
    #[inline]
    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// Box centre
    #[inline]
    pub fn center(&self) -> Vector3D {
        Vector3D::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
            (self.min.z + self.max.z) / 2.0,
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::empty()
    }
}

impl FromIterator<Point3<f64>> for Bounds {
    fn from_iter<I: IntoIterator<Item = Point3<f64>>>(iter: I) -> Self {
        let mut bounds = Bounds::empty();
        for p in iter {
            bounds.include(&p);
        }
        bounds
    }
}
