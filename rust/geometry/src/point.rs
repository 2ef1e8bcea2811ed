// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serializable 3D triple used across the data model

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A 3D triple (simplified for serialization)
///
/// Used for positions, offsets, rotations and scales in everything that
/// crosses a crate or process boundary. Arithmetic happens on the nalgebra
/// types; convert with [`Vector3D::to_nalgebra`] and friends.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3D {
    pub const ZERO: Vector3D = Vector3D { x: 0.0, y: 0.0, z: 0.0 };

    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_nalgebra(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn to_point(&self) -> Point3<f64> {
        Point3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn from_nalgebra(v: &Vector3<f64>) -> Self {
        Self { x: v.x, y: v.y, z: v.z }
    }

    #[inline]
    pub fn from_point(p: &Point3<f64>) -> Self {
        Self { x: p.x, y: p.y, z: p.z }
    }

    /// True when every component is finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<[f64; 3]> for Vector3D {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}
