// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh data structures

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Triangle mesh in flat-buffer form
///
/// Mirrors the attribute layout handed over by a model loader: `positions`
/// and `normals` are parallel `(x, y, z)` arrays, `indices` are triangle
/// corners. Normals may be missing entirely, in which case the mesh is
/// still renderable but useless for surface analysis.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Mesh {
    /// Vertex positions (x, y, z)
    pub positions: Vec<f32>,
    /// Vertex normals (nx, ny, nz)
    #[serde(default)]
    pub normals: Vec<f32>,
    /// Triangle indices (i0, i1, i2)
    #[serde(default)]
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex with normal
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>, normal: Vector3<f64>) {
        self.positions.push(position.x as f32);
        self.positions.push(position.y as f32);
        self.positions.push(position.z as f32);

        self.normals.push(normal.x as f32);
        self.normals.push(normal.y as f32);
        self.normals.push(normal.z as f32);
    }

    /// Add a triangle
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.push(i0);
        self.indices.push(i1);
        self.indices.push(i2);
    }

    /// Add a planar quad as two triangles sharing one flat normal
    ///
    /// Corners are expected in winding order.
    pub fn add_quad(&mut self, corners: [Point3<f64>; 4], normal: Vector3<f64>) {
        let base = self.vertex_count() as u32;
        for corner in corners {
            self.add_vertex(corner, normal);
        }
        self.add_triangle(base, base + 1, base + 2);
        self.add_triangle(base, base + 2, base + 3);
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether positions and normals are both present and line up per vertex
    #[inline]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
            && self.positions.len() % 3 == 0
            && self.normals.len() == self.positions.len()
    }

    /// Local position of vertex `i`, widened to f64
    #[inline]
    pub fn position(&self, i: usize) -> Point3<f64> {
        let p = &self.positions[i * 3..i * 3 + 3];
        Point3::new(p[0] as f64, p[1] as f64, p[2] as f64)
    }

    /// Local normal of vertex `i`, widened to f64
    #[inline]
    pub fn normal(&self, i: usize) -> Vector3<f64> {
        let n = &self.normals[i * 3..i * 3 + 3];
        Vector3::new(n[0] as f64, n[1] as f64, n[2] as f64)
    }
}
