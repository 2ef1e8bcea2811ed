// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use approx::assert_relative_eq;
use nalgebra::{Matrix4, Point3, Vector3};
use shelfscan_geometry::{Mesh, SceneNode};
use shelfscan_shelves::{detect_shelves, detect_shelves_with_report, DetectionConfig};

fn scenario_config() -> DetectionConfig {
    DetectionConfig {
        min_shelf_width: 0.0001,
        min_shelf_depth: 0.15,
        height_tolerance: 0.02,
        merge_threshold: 0.05,
        ..Default::default()
    }
}

/// Upward-facing rectangle at height `y`, spanning x in [x0, x0 + width], z in [0, depth]
fn board(y: f64, x0: f64, width: f64, depth: f64) -> Mesh {
    let mut mesh = Mesh::new();
    mesh.add_quad(
        [
            Point3::new(x0, y, 0.0),
            Point3::new(x0 + width, y, 0.0),
            Point3::new(x0 + width, y, depth),
            Point3::new(x0, y, depth),
        ],
        Vector3::y(),
    );
    mesh
}

/// Closed-ish box side: a vertical panel that must never produce shelves
fn side_panel(x: f64, height: f64, depth: f64) -> Mesh {
    let mut mesh = Mesh::new();
    mesh.add_quad(
        [
            Point3::new(x, 0.0, 0.0),
            Point3::new(x, 0.0, depth),
            Point3::new(x, height, depth),
            Point3::new(x, height, 0.0),
        ],
        Vector3::x(),
    );
    mesh
}

fn bookshelf(heights: &[f64]) -> SceneNode {
    let mut root = SceneNode::group("bookshelf");
    root.add_child(SceneNode::with_mesh("left", side_panel(0.0, 2.0, 0.3)));
    root.add_child(SceneNode::with_mesh("right", side_panel(1.0, 2.0, 0.3)));
    for (i, &y) in heights.iter().enumerate() {
        root.add_child(SceneNode::with_mesh(format!("board-{i}"), board(y, 0.0, 1.0, 0.3)));
    }
    root
}

#[test]
fn two_close_boards_merge_into_one_shelf() {
    let mut root = SceneNode::group("scene");
    root.add_child(SceneNode::with_mesh("a", board(0.40, 0.0, 1.0, 0.3)));
    root.add_child(SceneNode::with_mesh("b", board(0.42, 0.0, 1.0, 0.3)));
    root.add_child(SceneNode::with_mesh("c", board(1.0, 0.0, 1.0, 0.3)));

    let shelves = detect_shelves(&root, &scenario_config()).unwrap();

    assert_eq!(shelves.len(), 2);
    assert_relative_eq!(shelves[0].height, 0.41, epsilon = 1e-6);
    assert_relative_eq!(shelves[1].height, 1.0, epsilon = 1e-6);
    assert_eq!(shelves[0].source_mesh.name.as_deref(), Some("a"));
}

#[test]
fn no_upward_vertices_yields_no_shelves() {
    let mut root = SceneNode::group("panels");
    root.add_child(SceneNode::with_mesh("left", side_panel(0.0, 2.0, 0.3)));
    root.add_child(SceneNode::with_mesh("right", side_panel(1.0, 2.0, 0.3)));

    assert!(detect_shelves(&root, &scenario_config()).unwrap().is_empty());
    assert!(detect_shelves(&SceneNode::group("empty"), &scenario_config())
        .unwrap()
        .is_empty());
}

#[test]
fn nodes_without_normals_are_skipped() {
    let mut bare = board(0.8, 0.0, 1.0, 0.3);
    bare.normals.clear();

    let mut root = bookshelf(&[0.4]);
    root.add_child(SceneNode::with_mesh("no-normals", bare));

    let detection = detect_shelves_with_report(&root, &scenario_config()).unwrap();
    assert_eq!(detection.shelves.len(), 1);
    assert_eq!(detection.stats.meshes_visited, 4);
    assert_eq!(detection.stats.meshes_skipped, 1);
}

#[test]
fn flattened_nodes_are_skipped() {
    let mut root = bookshelf(&[0.4, 1.0]);
    // Zero Y scale collapses the board into a plane with no inverse
    let flat = Matrix4::new_nonuniform_scaling(&Vector3::new(1.0, 0.0, 1.0));
    root.add_child(SceneNode::with_mesh("flattened", board(1.5, 0.0, 1.0, 0.3)).transformed(&flat));

    let detection = detect_shelves_with_report(&root, &scenario_config()).unwrap();
    assert_eq!(detection.shelves.len(), 2);
    assert_eq!(detection.stats.meshes_visited, 5);
    assert_eq!(detection.stats.meshes_skipped, 1);
    assert_relative_eq!(detection.shelves[1].height, 1.0, epsilon = 1e-6);
}

#[test]
fn output_is_sorted_by_height() {
    let root = bookshelf(&[1.6, 0.2, 1.2, 0.8, 0.4]);
    let shelves = detect_shelves(&root, &scenario_config()).unwrap();

    assert_eq!(shelves.len(), 5);
    for pair in shelves.windows(2) {
        assert!(pair[0].height < pair[1].height);
    }
}

#[test]
fn exclusion_uses_sorted_positions() {
    let root = bookshelf(&[1.6, 0.2, 1.2, 0.8, 0.4]);
    let all = detect_shelves(&root, &scenario_config()).unwrap();

    let config = scenario_config().with_excluded_shelves([2]);
    let kept = detect_shelves(&root, &config).unwrap();

    assert_eq!(kept.len(), 4);
    assert_eq!(kept, vec![all[0].clone(), all[1].clone(), all[3].clone(), all[4].clone()]);
}

#[test]
fn excluding_first_of_three_renumbers() {
    let root = bookshelf(&[0.3, 0.9, 1.5]);
    let all = detect_shelves(&root, &scenario_config()).unwrap();
    assert_eq!(all.len(), 3);

    let detection =
        detect_shelves_with_report(&root, &scenario_config().with_excluded_shelves([0])).unwrap();
    assert_eq!(detection.shelves, vec![all[1].clone(), all[2].clone()]);
    assert_eq!(detection.stats.excluded_shelves, 1);
    assert_eq!(detection.stats.final_shelves, 2);
}

#[test]
fn world_transform_moves_shelves() {
    let placement = Matrix4::new_translation(&Vector3::new(0.0, 2.0, -2.5))
        * Matrix4::new_scaling(2.0);
    let root = bookshelf(&[0.25, 0.75]).transformed(&placement);

    let shelves = detect_shelves(&root, &scenario_config()).unwrap();
    assert_eq!(shelves.len(), 2);
    assert_relative_eq!(shelves[0].height, 2.5, epsilon = 1e-6);
    assert_relative_eq!(shelves[1].height, 3.5, epsilon = 1e-6);
    assert_relative_eq!(shelves[0].bounds.width(), 2.0, epsilon = 1e-6);
    assert_relative_eq!(shelves[0].bounds.min.z, -2.5, epsilon = 1e-6);
    assert_relative_eq!(shelves[0].usable_space.depth, 0.55, epsilon = 1e-6);
}

#[test]
fn shallow_surfaces_are_rejected() {
    let mut root = bookshelf(&[0.5]);
    // Top trim: wide but only 10cm deep
    root.add_child(SceneNode::with_mesh("trim", board(2.0, 0.0, 1.0, 0.1)));

    let detection = detect_shelves_with_report(&root, &scenario_config()).unwrap();
    assert_eq!(detection.shelves.len(), 1);
    assert_eq!(detection.stats.rejected_candidates, 1);
}

#[test]
fn repeated_runs_are_identical() {
    let root = bookshelf(&[0.2, 0.21, 0.6, 0.62, 0.64, 1.1, 1.5]);
    let first = detect_shelves(&root, &scenario_config()).unwrap();
    let second = detect_shelves(&root, &scenario_config()).unwrap();
    assert_eq!(first, second);
}
