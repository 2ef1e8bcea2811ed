// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for shelf detection.
//!
//! Only configuration problems are errors. Meshes without normals, empty
//! scenes and degenerate shelves all produce empty or partial results.

/// Result type alias for shelf detection.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur before a detection run starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A tolerance or threshold is negative, zero where it must be positive, or not finite.
    #[error("invalid detection config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// No built-in bookshelf preset has the requested id.
    #[error("unknown bookshelf preset: {0}")]
    UnknownPreset(String),
}
