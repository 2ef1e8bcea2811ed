// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Surface classification: upward-facing vertices grouped by height

use rustc_hash::FxHashMap;
use shelfscan_geometry::WorldSamples;

/// Minimum up-component of a unit normal for a vertex to count as a shelf top
pub const UP_THRESHOLD: f64 = 0.99;

/// Height bucket key -> vertex indices in that bucket
///
/// Iteration order is unspecified; ordering comes from the final height sort.
pub type HeightBuckets = FxHashMap<i64, Vec<usize>>;

/// Bucket key of a height: `round(height / tolerance)`, halves rounded up
#[inline]
pub fn height_key(height: f64, tolerance: f64) -> i64 {
    (height / tolerance + 0.5).floor() as i64
}

/// Group nearly-upward-facing vertices by quantized height
///
/// Vertices with a non-finite position or normal are ignored.
pub fn classify_horizontal(samples: &WorldSamples, tolerance: f64) -> HeightBuckets {
    let mut buckets = HeightBuckets::default();

    for (i, (position, normal)) in samples.positions.iter().zip(&samples.normals).enumerate() {
        if !(normal.y > UP_THRESHOLD) {
            continue;
        }
        if !position.coords.iter().all(|c| c.is_finite()) {
            continue;
        }
        buckets
            .entry(height_key(position.y, tolerance))
            .or_default()
            .push(i);
    }

    buckets
}
