// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Book placement across detected shelves
//!
//! Given the height-ordered shelf list from `shelfscan-shelves` and an
//! ordered book catalog, [`layout_books`] fills shelves bottom to top, each
//! left to right, one book per slot, until the catalog runs out. Every book
//! gets a small deterministic rotation/scale jitter keyed on its shelf and
//! slot, so the same inputs always produce the same scene.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod footprint;
pub mod jitter;

pub use catalog::{load_catalog, slugify, BookRecord};
pub use engine::{layout_books, shelf_capacity, BookPlacement};
pub use error::{CatalogError, LayoutError};
pub use footprint::BookFootprint;
pub use jitter::{pseudo_random, slot_seed};
