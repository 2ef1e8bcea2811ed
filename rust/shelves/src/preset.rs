// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Built-in bookshelf models and their detection settings
//!
//! Each model is placed into the room with its own transform, and some have a
//! bottom board (plinth) that detection picks up as a shelf even though books
//! never go there, so those exclude shelf 0.

use crate::config::DetectionConfig;
use crate::error::{Error, Result};
use nalgebra::{Matrix4, Vector3};
use serde::Serialize;

/// A bookshelf model selectable in the room editor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BookshelfPreset {
    pub id: &'static str,
    pub name: &'static str,
    /// Asset path of the model
    pub src: &'static str,
    pub position: [f64; 3],
    pub scale: [f64; 3],
    pub excluded_shelves: &'static [usize],
}

pub const BOOKSHELF_PRESETS: &[BookshelfPreset] = &[
    BookshelfPreset {
        id: "classic",
        name: "Classic Wooden Bookshelf",
        src: "/bookshelf.glb",
        position: [0.0, 0.0, -2.3],
        scale: [2.0, 2.0, 2.0],
        excluded_shelves: &[0],
    },
    BookshelfPreset {
        id: "modern",
        name: "Modern Bookshelf",
        src: "/wooden_bookshelf_vmhndfu_high.glb",
        position: [0.0, 2.0, -2.5],
        scale: [2.0, 2.0, 2.0],
        excluded_shelves: &[],
    },
    BookshelfPreset {
        id: "modern-3",
        name: "Wooden Bookshelf",
        src: "/cc0_shelf_5.glb",
        position: [0.9, 0.75, -2.3],
        scale: [1.5, 1.5, 1.5],
        excluded_shelves: &[0],
    },
];

/// Look up a built-in preset by id
pub fn find_preset(id: &str) -> Result<&'static BookshelfPreset> {
    BOOKSHELF_PRESETS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| Error::UnknownPreset(id.to_string()))
}

impl BookshelfPreset {
    /// Default detection settings with this model's exclusions
    pub fn detection_config(&self) -> DetectionConfig {
        DetectionConfig::default().with_excluded_shelves(self.excluded_shelves.iter().copied())
    }

    /// Room placement of the model: translate * scale
    pub fn placement_transform(&self) -> Matrix4<f64> {
        let [x, y, z] = self.position;
        let [sx, sy, sz] = self.scale;
        Matrix4::new_translation(&Vector3::new(x, y, z))
            * Matrix4::new_nonuniform_scaling(&Vector3::new(sx, sy, sz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    #[test]
    fn test_find_preset() {
        let preset = find_preset("modern-3").unwrap();
        assert_eq!(preset.name, "Wooden Bookshelf");
        assert!(matches!(find_preset("gothic"), Err(Error::UnknownPreset(_))));
    }

    #[test]
    fn test_preset_ids_unique() {
        for (i, a) in BOOKSHELF_PRESETS.iter().enumerate() {
            for b in &BOOKSHELF_PRESETS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_detection_config_carries_exclusions() {
        let config = find_preset("classic").unwrap().detection_config();
        assert!(config.excluded_shelf_indices.contains(&0));
        assert_eq!(config.height_tolerance, DetectionConfig::default().height_tolerance);

        let config = find_preset("modern").unwrap().detection_config();
        assert!(config.excluded_shelf_indices.is_empty());
    }

    #[test]
    fn test_placement_scales_then_translates() {
        let preset = find_preset("modern-3").unwrap();
        let p = preset
            .placement_transform()
            .transform_point(&Point3::new(1.0, 1.0, 0.0));
        assert_relative_eq!(p.x, 2.4, epsilon = 1e-12);
        assert_relative_eq!(p.y, 2.25, epsilon = 1e-12);
        assert_relative_eq!(p.z, -2.3, epsilon = 1e-12);
    }
}
