//! Node hierarchy walk producing per-bone skinning matrices
//!
//! The baker composes every node's local transform with its parent's
//! accumulated transform, then maps nodes that are registered bones into
//! skinning space:
//!
//! ```text
//! accumulated = parent_accumulated * local
//! skinning    = inverse(root_bind) * accumulated * bone_offset
//! ```
//!
//! Matrices use glam's column-vector convention, so the products read right
//! to left: offset first, root inverse last.

use std::collections::HashMap;

use glam::Mat4;
use log::{trace, warn};

use super::channel::NodeAnimChannel;
use super::interpolation::local_transform;
use crate::config::KeyframeWrap;
use crate::error::{BakeError, Result};
use crate::scene::NodeTree;
use crate::skeleton::Skeleton;

/// Per-node lookups resolved once per clip
#[derive(Debug, Clone, Copy, Default)]
struct NodeBinding {
    channel: Option<usize>,
    bone: Option<usize>,
}

/// Computes one frame of bone matrices for a clip
///
/// Holds only shared references plus precomputed lookups, so a single baker
/// can serve several worker threads as long as each brings its own output
/// and scratch buffers.
#[derive(Debug)]
pub struct HierarchyBaker<'a> {
    animation: &'a str,
    nodes: &'a NodeTree,
    skeleton: &'a Skeleton,
    channels: &'a [NodeAnimChannel],
    bindings: Vec<NodeBinding>,
    root_inverse: Mat4,
    output_rate: f64,
    ticks_per_second: f64,
    wrap: KeyframeWrap,
}

impl<'a> HierarchyBaker<'a> {
    /// Prepare a baker for one clip
    ///
    /// Fails if the root node's bind transform cannot be inverted.
    pub fn new(
        animation: &'a str,
        nodes: &'a NodeTree,
        skeleton: &'a Skeleton,
        channels: &'a [NodeAnimChannel],
        output_rate: f64,
        ticks_per_second: f64,
        wrap: KeyframeWrap,
    ) -> Result<Self> {
        let root_inverse = invert_root(animation, nodes.root_transform())?;

        // First channel for a node name wins
        let mut channel_lookup: HashMap<&str, usize> = HashMap::with_capacity(channels.len());
        for (index, channel) in channels.iter().enumerate() {
            channel_lookup
                .entry(channel.node_name.as_str())
                .or_insert(index);
        }

        let bindings: Vec<NodeBinding> = nodes
            .iter()
            .map(|(_, node)| NodeBinding {
                channel: channel_lookup.get(node.name.as_str()).copied(),
                bone: skeleton.bone_index(&node.name),
            })
            .collect();

        for bone in skeleton.bones() {
            if nodes.find(&bone.name).is_none() {
                warn!(
                    "Animation '{}': bone '{}' has no node in the hierarchy, it keeps the identity matrix",
                    animation, bone.name
                );
            }
        }

        Ok(Self {
            animation,
            nodes,
            skeleton,
            channels,
            bindings,
            root_inverse,
            output_rate,
            ticks_per_second,
            wrap,
        })
    }

    /// Number of matrices written per frame
    pub fn bone_count(&self) -> usize {
        self.skeleton.bone_count()
    }

    /// Clip time in ticks for an output frame
    pub fn frame_time(&self, frame: usize) -> f64 {
        frame as f64 / self.output_rate * self.ticks_per_second
    }

    /// Bake one frame into `out`, allocating its own scratch space
    pub fn bake_frame(&self, frame: usize, out: &mut [Mat4]) -> Result<()> {
        let mut scratch = Vec::with_capacity(self.nodes.len());
        self.bake_frame_with_scratch(frame, out, &mut scratch)
    }

    /// Bake one frame into `out`.
    ///
    /// `out` must hold exactly [`bone_count`](Self::bone_count) matrices,
    /// otherwise [`BakeError::FrameBufferSize`] is returned. It is reset to
    /// identity first, so bones that no node maps to stay at
    /// identity. `scratch` holds the accumulated node transforms and can be
    /// reused between frames.
    pub fn bake_frame_with_scratch(
        &self,
        frame: usize,
        out: &mut [Mat4],
        scratch: &mut Vec<Mat4>,
    ) -> Result<()> {
        let expected = self.skeleton.bone_count();
        if out.len() != expected {
            return Err(BakeError::FrameBufferSize {
                expected,
                actual: out.len(),
            });
        }
        out.fill(Mat4::IDENTITY);

        let time = self.frame_time(frame);
        trace!(
            "Animation '{}': baking frame {} at tick {:.3}",
            self.animation, frame, time
        );

        scratch.clear();
        scratch.reserve(self.nodes.len());

        // Pre-order arena: a parent's accumulated transform is always ready
        // before its children are visited.
        for ((_, node), binding) in self.nodes.iter().zip(&self.bindings) {
            let local = match binding.channel {
                Some(index) => local_transform(&self.channels[index], time, self.wrap),
                None => node.transform,
            };

            let parent = node
                .parent
                .and_then(|p| scratch.get(p.index()).copied())
                .unwrap_or(Mat4::IDENTITY);
            let accumulated = parent * local;
            scratch.push(accumulated);

            if let Some(bone_index) = binding.bone {
                if let (Some(bone), Some(slot)) =
                    (self.skeleton.bone(bone_index), out.get_mut(bone_index))
                {
                    // Last writer wins if two nodes share a bone name
                    *slot = self.root_inverse * accumulated * bone.offset;
                }
            }
        }

        if let Some(bone) = out.iter().position(|m| !m.is_finite()) {
            return Err(BakeError::NonFiniteMatrix {
                animation: self.animation.to_string(),
                frame,
                bone,
            });
        }

        Ok(())
    }
}

/// Invert the root bind transform, rejecting singular matrices
fn invert_root(animation: &str, root: Mat4) -> Result<Mat4> {
    let determinant = root.determinant();
    if !determinant.is_finite() || determinant.abs() <= f32::MIN_POSITIVE {
        return Err(BakeError::SingularRootTransform {
            animation: animation.to_string(),
            determinant,
        });
    }

    let inverse = root.inverse();
    if !inverse.is_finite() {
        return Err(BakeError::SingularRootTransform {
            animation: animation.to_string(),
            determinant,
        });
    }

    Ok(inverse)
}
