// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shelfscan Geometry
//!
//! Geometry primitives shared by shelf detection and book layout: flat-buffer
//! triangle meshes, a serializable scene graph with per-node transforms, and
//! the world-space sampler that turns local vertex data into world positions
//! and normals.
//!
//! Decoding of model files happens elsewhere; everything here works on
//! buffers that are already in memory.

pub mod bounds;
pub mod mesh;
pub mod point;
pub mod sampler;
pub mod scene;

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Matrix4, Point3, Vector3};

pub use bounds::Bounds;
pub use mesh::Mesh;
pub use point::Vector3D;
pub use sampler::{sample_world_geometry, WorldSamples};
pub use scene::{MeshId, SceneNode, WorldMesh};
