// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for catalog loading and book layout

use thiserror::Error;

/// Errors raised before a layout run starts
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("Invalid book footprint: {field} = {value} ({reason})")]
    InvalidFootprint {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Errors reading a book catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog entry {index} has an empty title")]
    EmptyTitle { index: usize },
}
