// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! World-space geometry sampling
//!
//! Lifts a mesh's local vertex data into world space: positions go through
//! the full affine transform and then receive the additive offset, normals go
//! through the normal matrix (inverse-transpose of the upper 3x3) and are
//! never translated or offset.

use crate::mesh::Mesh;
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

/// Parallel world-space positions and normals of one mesh
#[derive(Debug, Clone, Default)]
pub struct WorldSamples {
    pub positions: Vec<Point3<f64>>,
    pub normals: Vec<Vector3<f64>>,
}

impl WorldSamples {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Normal matrix of an affine transform, `None` when the linear part is singular
pub fn normal_matrix(world: &Matrix4<f64>) -> Option<Matrix3<f64>> {
    let linear: Matrix3<f64> = world.fixed_view::<3, 3>(0, 0).into_owned();
    linear.try_inverse().map(|inv| inv.transpose())
}

/// Transform a mesh's vertices into world space
///
/// Returns `None` when the mesh has no usable normal attribute (absent, or
/// not parallel to the positions) or when the transform collapses a
/// dimension so no normal matrix exists. Both cases mean the mesh
/// contributes nothing to surface analysis; neither is an error.
///
/// Transformed normals are renormalized, so non-uniform or scaled transforms
/// still yield unit normals.
pub fn sample_world_geometry(
    mesh: &Mesh,
    world: &Matrix4<f64>,
    offset: &Vector3<f64>,
) -> Option<WorldSamples> {
    if !mesh.has_normals() {
        tracing::debug!(
            positions = mesh.positions.len(),
            normals = mesh.normals.len(),
            "mesh has no usable normal attribute, skipping"
        );
        return None;
    }

    let Some(normal_matrix) = normal_matrix(world) else {
        tracing::debug!("mesh world transform is singular, skipping");
        return None;
    };

    let count = mesh.vertex_count();
    let mut samples = WorldSamples {
        positions: Vec::with_capacity(count),
        normals: Vec::with_capacity(count),
    };

    for i in 0..count {
        let position = world.transform_point(&mesh.position(i)) + *offset;
        let normal = normal_matrix * mesh.normal(i);

        samples.positions.push(position);
        samples
            .normals
            .push(normal.try_normalize(f64::EPSILON).unwrap_or(normal));
    }

    Some(samples)
}
