//! Bone deduplication and indexing across all meshes of a scene

use std::collections::HashMap;

use glam::Mat4;
use log::{debug, warn};

use crate::scene::RawMesh;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A uniquely named bone with its dense index
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoneInfo {
    pub name: String,
    /// Slot in every baked frame, also the joint index in the skinning shader
    pub index: usize,
    /// Bind-pose offset matrix in engine layout
    pub offset: Mat4,
}

/// Deduplicated, indexed bone set of a model.
///
/// Bones are ordered by first appearance while scanning meshes in order.
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Skeleton {
    bones: Vec<BoneInfo>,
    by_name: HashMap<String, usize>,
}

impl Skeleton {
    /// Build the skeleton from a scene's meshes.
    ///
    /// The first occurrence of a bone name wins; later duplicates are
    /// ignored even when their offset matrices differ.
    pub fn from_meshes(meshes: &[RawMesh]) -> Self {
        let mut bones: Vec<BoneInfo> = Vec::new();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for mesh in meshes {
            for bone in &mesh.bones {
                let offset = bone.offset_matrix.to_mat4();

                if let Some(&existing) = by_name.get(&bone.name) {
                    if bones[existing].offset != offset {
                        warn!(
                            "Bone '{}' on mesh '{}' has a different offset than its first occurrence, keeping the first",
                            bone.name, mesh.name
                        );
                    }
                    continue;
                }

                let index = bones.len();
                by_name.insert(bone.name.clone(), index);
                bones.push(BoneInfo {
                    name: bone.name.clone(),
                    index,
                    offset,
                });
            }
        }

        debug!(
            "Built skeleton with {} bones from {} meshes",
            bones.len(),
            meshes.len()
        );

        Self { bones, by_name }
    }

    /// Number of bones, also the length of every baked frame
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Bones in index order
    pub fn bones(&self) -> &[BoneInfo] {
        &self.bones
    }

    pub fn bone(&self, index: usize) -> Option<&BoneInfo> {
        self.bones.get(index)
    }

    /// Dense index of a bone by name
    pub fn bone_index(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn bone_by_name(&self, name: &str) -> Option<&BoneInfo> {
        self.bone_index(name).and_then(|i| self.bones.get(i))
    }
}
