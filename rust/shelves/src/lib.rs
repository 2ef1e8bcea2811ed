// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shelf detection for third-party bookshelf meshes
//!
//! The pipeline is a chain of pure stages:
//! 1. Sample each mesh node into world space (`shelfscan_geometry::sampler`)
//! 2. Classify upward-facing vertices into height buckets ([`classifier`])
//! 3. Bound each bucket and derive usable space ([`bounds`])
//! 4. Validate, merge near-height candidates, sort, exclude ([`merge`])
//!
//! [`detect_shelves`] drives the whole thing over a scene tree.
//!
//! # Usage
//!
//! ```rust,ignore
//! use shelfscan_shelves::{detect_shelves, DetectionConfig};
//!
//! let config = DetectionConfig::default().with_excluded_shelves([0]);
//! let shelves = detect_shelves(&scene, &config)?;
//! for (i, shelf) in shelves.iter().enumerate() {
//!     println!("shelf {i} at {:.3}m", shelf.height);
//! }
//! ```

pub mod bounds;
pub mod classifier;
pub mod config;
pub mod detector;
pub mod error;
pub mod merge;
pub mod preset;
pub mod shelf;

pub use bounds::{UsableSpace, USABLE_MARGIN};
pub use classifier::{classify_horizontal, height_key, HeightBuckets, UP_THRESHOLD};
pub use config::DetectionConfig;
pub use detector::{
    consolidate_candidates, detect_shelves, detect_shelves_with_report, extract_mesh_candidates,
    DetectionStats, MeshCandidates, ShelfDetection,
};
pub use error::{Error, Result};
pub use merge::{filter_excluded, is_valid_candidate, merge_shelves, sort_by_height};
pub use preset::{find_preset, BookshelfPreset, BOOKSHELF_PRESETS};
pub use shelf::{Shelf, ShelfCandidate, ShelfSummary, SourceMesh};
