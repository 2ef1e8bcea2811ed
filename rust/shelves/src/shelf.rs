// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shelf candidates and consolidated shelves

use crate::bounds::UsableSpace;
use serde::{Deserialize, Serialize};
use shelfscan_geometry::{Bounds, MeshId, Vector3D, WorldMesh};

/// The mesh node a shelf was detected on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMesh {
    pub id: MeshId,
    pub name: Option<String>,
}

impl From<&WorldMesh<'_>> for SourceMesh {
    fn from(mesh: &WorldMesh<'_>) -> Self {
        Self {
            id: mesh.id,
            name: mesh.name.map(str::to_owned),
        }
    }
}

/// Unmerged, unvalidated horizontal surface from one height bucket of one mesh
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShelfCandidate {
    pub height: f64,
    pub bounds: Bounds,
    pub usable_space: UsableSpace,
    pub source_mesh: SourceMesh,
    pub applied_offsets: Vector3D,
}

impl ShelfCandidate {
    pub fn new(height: f64, bounds: Bounds, source_mesh: SourceMesh, applied_offsets: Vector3D) -> Self {
        Self {
            height,
            usable_space: UsableSpace::from_bounds(&bounds),
            bounds,
            source_mesh,
            applied_offsets,
        }
    }
}

/// Validated, merged shelf
///
/// A shelf's position in the height-sorted list returned by detection is
/// its identity for exclusion and book placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelf {
    pub height: f64,
    pub bounds: Bounds,
    pub usable_space: UsableSpace,
    /// Representative source: the lowest of the merged candidates
    pub source_mesh: SourceMesh,
    pub applied_offsets: Vector3D,
}

/// Shelf position data for shelf-relative decorations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShelfSummary {
    pub height: f64,
    pub bounds: Bounds,
    pub applied_offsets: Vector3D,
}

impl From<ShelfCandidate> for Shelf {
    fn from(c: ShelfCandidate) -> Self {
        Self {
            height: c.height,
            bounds: c.bounds,
            usable_space: c.usable_space,
            source_mesh: c.source_mesh,
            applied_offsets: c.applied_offsets,
        }
    }
}

impl Shelf {
    /// Fold `other` into this shelf
    ///
    /// Bounds are unioned, height is the plain mean of the two heights and
    /// usable space is recomputed. Source mesh and offsets stay this shelf's.
    pub fn merged_with(&self, other: &Shelf) -> Shelf {
        let bounds = self.bounds.union(&other.bounds);
        Shelf {
            height: (self.height + other.height) / 2.0,
            bounds,
            usable_space: UsableSpace::from_bounds(&bounds),
            source_mesh: self.source_mesh.clone(),
            applied_offsets: self.applied_offsets,
        }
    }

    pub fn summary(&self) -> ShelfSummary {
        ShelfSummary {
            height: self.height,
            bounds: self.bounds,
            applied_offsets: self.applied_offsets,
        }
    }
}
