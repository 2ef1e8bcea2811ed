// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Scene graph: a tree of nodes carrying local transforms and optional meshes
//!
//! Transforms are stored column-major (`[f64; 16]`), matching the layout
//! used by glTF and most WebGL scene graphs, so decoded assets can be handed
//! over without reshuffling.

use crate::mesh::Mesh;
use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};

const IDENTITY: [f64; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

fn identity_transform() -> [f64; 16] {
    IDENTITY
}

/// Identity of a mesh node within one scene: its position in depth-first
/// pre-order among the nodes that carry a mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MeshId(pub usize);

/// A node of the scene tree
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SceneNode {
    #[serde(default)]
    pub name: Option<String>,
    /// Local transform relative to the parent, column-major
    #[serde(default = "identity_transform")]
    pub transform: [f64; 16],
    #[serde(default)]
    pub mesh: Option<Mesh>,
    #[serde(default)]
    pub children: Vec<SceneNode>,
}

/// A mesh node resolved to world space
#[derive(Debug, Clone, Copy)]
pub struct WorldMesh<'a> {
    pub id: MeshId,
    pub name: Option<&'a str>,
    pub mesh: &'a Mesh,
    /// Accumulated parent-to-world transform including this node's own
    pub world: Matrix4<f64>,
}

impl SceneNode {
    /// Create an empty group node
    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            transform: IDENTITY,
            mesh: None,
            children: Vec::new(),
        }
    }

    /// Create a leaf node holding a mesh
    pub fn with_mesh(name: impl Into<String>, mesh: Mesh) -> Self {
        Self {
            mesh: Some(mesh),
            ..Self::group(name)
        }
    }

    /// Replace the local transform
    pub fn transformed(mut self, matrix: &Matrix4<f64>) -> Self {
        self.transform.copy_from_slice(matrix.as_slice());
        self
    }

    /// Append a child node
    pub fn add_child(&mut self, child: SceneNode) {
        self.children.push(child);
    }

    /// Local transform as a matrix
    #[inline]
    pub fn local_matrix(&self) -> Matrix4<f64> {
        Matrix4::from_column_slice(&self.transform)
    }

    /// Collect every mesh node with its world transform
    ///
    /// Walks the tree depth-first in pre-order, composing each node's local
    /// transform onto its parent's. The root's own transform is applied.
    pub fn world_meshes(&self) -> Vec<WorldMesh<'_>> {
        let mut meshes = Vec::new();
        let mut stack = vec![(self, Matrix4::<f64>::identity())];

        while let Some((node, parent_world)) = stack.pop() {
            let world = parent_world * node.local_matrix();

            if let Some(mesh) = &node.mesh {
                meshes.push(WorldMesh {
                    id: MeshId(meshes.len()),
                    name: node.name.as_deref(),
                    mesh,
                    world,
                });
            }

            // Reverse so the first child is visited first
            for child in node.children.iter().rev() {
                stack.push((child, world));
            }
        }

        meshes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};

    fn tagged_mesh(tag: f32) -> Mesh {
        Mesh {
            positions: vec![tag, 0.0, 0.0],
            normals: vec![0.0, 1.0, 0.0],
            indices: Vec::new(),
        }
    }

    #[test]
    fn test_preorder_traversal() {
        let mut root = SceneNode::group("root");
        let mut left = SceneNode::with_mesh("left", tagged_mesh(1.0));
        left.add_child(SceneNode::with_mesh("left-child", tagged_mesh(2.0)));
        root.add_child(left);
        root.add_child(SceneNode::group("empty"));
        root.add_child(SceneNode::with_mesh("right", tagged_mesh(3.0)));

        let meshes = root.world_meshes();
        let names: Vec<_> = meshes.iter().map(|m| m.name.unwrap()).collect();
        assert_eq!(names, vec!["left", "left-child", "right"]);
        let ids: Vec<_> = meshes.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![MeshId(0), MeshId(1), MeshId(2)]);
    }

    #[test]
    fn test_world_transform_composition() {
        let parent_tf = Matrix4::new_translation(&Vector3::new(0.0, 2.0, 0.0));
        let child_tf = Matrix4::new_scaling(2.0);

        let mut root = SceneNode::group("root").transformed(&parent_tf);
        root.add_child(SceneNode::with_mesh("child", tagged_mesh(1.0)).transformed(&child_tf));

        let meshes = root.world_meshes();
        assert_eq!(meshes.len(), 1);

        let p = meshes[0].world.transform_point(&Point3::new(1.0, 1.0, 0.0));
        assert_relative_eq!(p.x, 2.0);
        assert_relative_eq!(p.y, 4.0);
        assert_relative_eq!(p.z, 0.0);
    }

    #[test]
    fn test_deserialize_defaults_to_identity() {
        let node: SceneNode = serde_json::from_str(r#"{"name":"n"}"#).unwrap();
        assert_eq!(node.local_matrix(), Matrix4::identity());
        assert!(node.mesh.is_none());
        assert!(node.children.is_empty());
    }
}
