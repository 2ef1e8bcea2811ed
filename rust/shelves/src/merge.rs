// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Shelf validation, merging, ordering and exclusion
//!
//! Merging is a single greedy left-to-right pass over height-sorted shelves.
//! Each shelf is compared to the running accumulator, not to the first
//! member of the group, so a chain of closely spaced heights can pull in a
//! shelf that is further than the threshold from where the chain started.
//! Uneven real-world shelf meshes rely on this to consolidate.

use crate::config::DetectionConfig;
use crate::shelf::{Shelf, ShelfCandidate};
use std::collections::BTreeSet;

/// A candidate is kept when its bounds are at least the configured size
pub fn is_valid_candidate(candidate: &ShelfCandidate, config: &DetectionConfig) -> bool {
    candidate.bounds.width() >= config.min_shelf_width
        && candidate.bounds.depth() >= config.min_shelf_depth
}

/// Stable ascending sort by height
pub fn sort_by_height(shelves: &mut [Shelf]) {
    shelves.sort_by(|a, b| a.height.total_cmp(&b.height));
}

/// Merge shelves whose heights differ by less than `merge_threshold`
///
/// The input order does not matter; the output is sorted by height.
pub fn merge_shelves(mut shelves: Vec<Shelf>, merge_threshold: f64) -> Vec<Shelf> {
    sort_by_height(&mut shelves);

    let mut sorted = shelves.into_iter();
    let Some(mut current) = sorted.next() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    for next in sorted {
        if (current.height - next.height).abs() < merge_threshold {
            current = current.merged_with(&next);
        } else {
            merged.push(std::mem::replace(&mut current, next));
        }
    }
    merged.push(current);

    merged
}

/// Drop the shelves at the given list positions, keeping the rest in order
///
/// Indices refer to the height-sorted, merged list. Indices past the end
/// are ignored.
pub fn filter_excluded(shelves: Vec<Shelf>, excluded: &BTreeSet<usize>) -> Vec<Shelf> {
    if excluded.is_empty() {
        return shelves;
    }

    shelves
        .into_iter()
        .enumerate()
        .filter(|(index, _)| !excluded.contains(index))
        .map(|(_, shelf)| shelf)
        .collect()
}
