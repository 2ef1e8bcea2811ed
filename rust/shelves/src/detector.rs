// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shelf detection over a scene tree
//!
//! Per mesh: sample to world space, classify upward vertices into height
//! buckets, bound each bucket into a candidate. Across meshes: validate,
//! merge, sort, exclude. Each step is a pure function of its inputs, so the
//! per-mesh part runs in parallel and the result is identical to a serial run.

use crate::bounds::bounds_of;
use crate::classifier::classify_horizontal;
use crate::config::DetectionConfig;
use crate::error::Result;
use crate::merge::{filter_excluded, is_valid_candidate, merge_shelves, sort_by_height};
use crate::shelf::{Shelf, ShelfCandidate, SourceMesh};
use rayon::prelude::*;
use serde::Serialize;
use shelfscan_geometry::{sample_world_geometry, SceneNode, WorldMesh};

/// Candidates extracted from a single mesh node
#[derive(Debug, Clone, Default)]
pub struct MeshCandidates {
    pub candidates: Vec<ShelfCandidate>,
    pub upward_vertices: usize,
    pub height_groups: usize,
    /// Node had no usable normals or a singular transform
    pub skipped: bool,
}

/// Counters describing one detection run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DetectionStats {
    pub meshes_visited: usize,
    pub meshes_skipped: usize,
    pub upward_vertices: usize,
    pub height_groups: usize,
    pub candidates: usize,
    pub rejected_candidates: usize,
    pub merged_shelves: usize,
    pub excluded_shelves: usize,
    pub final_shelves: usize,
}

/// Result of a detection run
#[derive(Debug, Clone, Serialize)]
pub struct ShelfDetection {
    /// Ascending by height; list position is the shelf's identity
    pub shelves: Vec<Shelf>,
    pub stats: DetectionStats,
}

/// Build shelf candidates for one world-space mesh
pub fn extract_mesh_candidates(mesh: &WorldMesh<'_>, config: &DetectionConfig) -> MeshCandidates {
    let offset = config.offsets.to_nalgebra();
    let Some(samples) = sample_world_geometry(mesh.mesh, &mesh.world, &offset) else {
        tracing::debug!(mesh = mesh.id.0, name = ?mesh.name, "skipping mesh without usable normals");
        return MeshCandidates {
            skipped: true,
            ..Default::default()
        };
    };

    let buckets = classify_horizontal(&samples, config.height_tolerance);
    let upward_vertices = buckets.values().map(Vec::len).sum();

    tracing::debug!(
        mesh = mesh.id.0,
        name = ?mesh.name,
        upward_vertices,
        height_groups = buckets.len(),
        "found upward-facing vertices"
    );

    // Bucket order carries no meaning; sort keys so candidate lists are reproducible
    let mut keys: Vec<i64> = buckets.keys().copied().collect();
    keys.sort_unstable();

    let source = SourceMesh::from(mesh);
    let candidates = keys
        .iter()
        .map(|key| {
            let bounds = bounds_of(&buckets[key], &samples.positions);
            ShelfCandidate::new(
                *key as f64 * config.height_tolerance,
                bounds,
                source.clone(),
                config.offsets,
            )
        })
        .collect();

    MeshCandidates {
        candidates,
        upward_vertices,
        height_groups: buckets.len(),
        skipped: false,
    }
}

/// Validate, merge, sort and filter candidates gathered from any number of meshes
///
/// Does not validate `config`; callers going through [`detect_shelves`] get
/// that for free.
pub fn consolidate_candidates(
    candidates: Vec<ShelfCandidate>,
    config: &DetectionConfig,
) -> ShelfDetection {
    let mut stats = DetectionStats {
        candidates: candidates.len(),
        ..Default::default()
    };

    let valid: Vec<Shelf> = candidates
        .into_iter()
        .filter(|c| is_valid_candidate(c, config))
        .map(Shelf::from)
        .collect();
    stats.rejected_candidates = stats.candidates - valid.len();

    let valid_count = valid.len();
    let mut merged = merge_shelves(valid, config.merge_threshold);
    sort_by_height(&mut merged);
    stats.merged_shelves = merged.len();

    tracing::info!(
        candidates = valid_count,
        shelves = merged.len(),
        "merged {} initial shelves into {} final shelves",
        valid_count,
        merged.len()
    );

    let shelves = filter_excluded(merged, &config.excluded_shelf_indices);
    stats.excluded_shelves = stats.merged_shelves - shelves.len();
    stats.final_shelves = shelves.len();

    ShelfDetection { shelves, stats }
}

/// Detect shelves in a scene and report what happened along the way
pub fn detect_shelves_with_report(
    scene: &SceneNode,
    config: &DetectionConfig,
) -> Result<ShelfDetection> {
    config.validate()?;

    let meshes = scene.world_meshes();
    let per_mesh: Vec<MeshCandidates> = meshes
        .par_iter()
        .map(|mesh| extract_mesh_candidates(mesh, config))
        .collect();

    let meshes_skipped = per_mesh.iter().filter(|m| m.skipped).count();
    let upward_vertices = per_mesh.iter().map(|m| m.upward_vertices).sum();
    let height_groups = per_mesh.iter().map(|m| m.height_groups).sum();
    let candidates = per_mesh.into_iter().flat_map(|m| m.candidates).collect();

    let mut detection = consolidate_candidates(candidates, config);
    detection.stats.meshes_visited = meshes.len();
    detection.stats.meshes_skipped = meshes_skipped;
    detection.stats.upward_vertices = upward_vertices;
    detection.stats.height_groups = height_groups;

    Ok(detection)
}

/// Detect shelves in a scene
///
/// Returns the shelves ascending by height with excluded positions removed.
/// An empty list is a normal outcome for meshes without shelf-like surfaces.
pub fn detect_shelves(scene: &SceneNode, config: &DetectionConfig) -> Result<Vec<Shelf>> {
    detect_shelves_with_report(scene, config).map(|d| d.shelves)
}
