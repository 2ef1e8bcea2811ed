// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Deterministic per-slot jitter
//!
//! Not a random number generator: a fixed hash of the slot seed whose only
//! job is to look irregular and to come out the same on every run.

/// Seed of a book slot
#[inline]
pub fn slot_seed(shelf_index: usize, slot_index: usize) -> f64 {
    (shelf_index * 1000 + slot_index) as f64
}

/// Fractional part of `sin(seed) * 10000`, in `[0, 1)`
#[inline]
pub fn pseudo_random(seed: f64) -> f64 {
    let x = seed.sin() * 10000.0;
    let r = x - x.floor();
    // A tiny negative x rounds up to exactly 1.0
    if r < 1.0 {
        r
    } else {
        0.0
    }
}
