// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Book layout engine

use crate::catalog::BookRecord;
use crate::error::LayoutError;
use crate::footprint::BookFootprint;
use crate::jitter::{pseudo_random, slot_seed};
use serde::{Deserialize, Serialize};
use shelfscan_geometry::Vector3D;
use shelfscan_shelves::Shelf;

/// Final transform and identity of one placed book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookPlacement {
    pub position: Vector3D,
    /// Euler angles (radians)
    pub rotation: Vector3D,
    pub scale: Vector3D,
    pub book_record: BookRecord,
    pub shelf_index: usize,
    pub book_index_on_shelf: usize,
}

impl BookPlacement {
    /// Key that stays stable across recomputes with the same shelves
    pub fn key(&self) -> String {
        format!("book-{}-{}", self.shelf_index, self.book_index_on_shelf)
    }
}

/// Number of book slots a shelf offers
///
/// Zero for shelves whose usable space is degenerate or narrower than the
/// row margins.
pub fn shelf_capacity(shelf: &Shelf, footprint: &BookFootprint) -> usize {
    if shelf.usable_space.is_degenerate() {
        return 0;
    }
    let available = shelf.usable_space.width - footprint.shelf_margin * 2.0;
    if !(available > 0.0) {
        return 0;
    }
    (available / footprint.book_width).floor() as usize
}

/// Place books from `catalog` onto `shelves`
///
/// Shelves are filled in list order, slots left to right, records strictly
/// in catalog order. Placement stops when the catalog is exhausted; unused
/// slots stay empty. The output is a pure function of the inputs.
pub fn layout_books(
    shelves: &[Shelf],
    catalog: &[BookRecord],
    footprint: &BookFootprint,
) -> Result<Vec<BookPlacement>, LayoutError> {
    footprint.validate()?;

    let mut placements = Vec::with_capacity(catalog.len());
    let mut books = catalog.iter();

    'shelves: for (shelf_index, shelf) in shelves.iter().enumerate() {
        let capacity = shelf_capacity(shelf, footprint);
        if capacity == 0 {
            continue;
        }

        // Row of `capacity` slots centred on the shelf
        let row_width = capacity as f64 * footprint.book_width;
        let start_x = shelf.bounds.center().x - row_width / 2.0;
        let z = shelf.bounds.min.z + shelf.usable_space.depth / 2.0;

        for slot in 0..capacity {
            let Some(book) = books.next() else {
                break 'shelves;
            };

            let r = pseudo_random(slot_seed(shelf_index, slot));
            let rotation_jitter = r * 0.01 - 0.005;
            let scale = 1.0 + r * 0.25;

            placements.push(BookPlacement {
                position: Vector3D::new(
                    start_x + (slot as f64 + 0.5) * footprint.book_width,
                    shelf.height + footprint.book_height * scale / 2.0 + r * 0.001,
                    z,
                ),
                rotation: Vector3D::new(0.0, rotation_jitter, footprint.base_roll),
                scale: Vector3D::new(footprint.base_scale_x, scale, footprint.base_scale_z),
                book_record: book.clone(),
                shelf_index,
                book_index_on_shelf: slot,
            });
        }
    }

    tracing::debug!(
        shelves = shelves.len(),
        catalog = catalog.len(),
        placed = placements.len(),
        "laid out books"
    );

    Ok(placements)
}
