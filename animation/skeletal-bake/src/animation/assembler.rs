//! Whole-clip baking into a dense frame table

use glam::Mat4;
use log::{debug, warn};

use super::baker::HierarchyBaker;
use super::channel::{NodeAnimChannel, extract_channels};
use crate::config::BakeOptions;
use crate::error::{BakeError, Result};
use crate::scene::{NodeTree, RawAnimation};
use crate::skeleton::Skeleton;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A baked animation clip
///
/// Frames are stored back to back in one buffer with a stride of
/// `bone_count` matrices, so every frame `0..frame_count` exists and has
/// exactly one matrix per bone. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelAnimation {
    pub name: String,
    /// Duration in ticks
    pub duration: f64,
    /// Tick rate used for baking, after substitution of malformed values
    pub ticks_per_second: f64,
    /// Output frames per second the table was baked at
    pub output_rate: f64,
    pub channels: Vec<NodeAnimChannel>,
    frame_count: usize,
    bone_count: usize,
    matrices: Vec<Mat4>,
}

impl ModelAnimation {
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn bone_count(&self) -> usize {
        self.bone_count
    }

    /// Bone matrices of one frame, indexed by bone index
    pub fn frame(&self, frame: usize) -> Option<&[Mat4]> {
        if frame >= self.frame_count {
            return None;
        }
        let start = frame.checked_mul(self.bone_count)?;
        let end = start.checked_add(self.bone_count)?;
        self.matrices.get(start..end)
    }

    /// Matrix of one bone in one frame
    pub fn bone_matrix(&self, frame: usize, bone: usize) -> Option<Mat4> {
        if bone >= self.bone_count {
            return None;
        }
        self.frame(frame).map(|m| m[bone])
    }

    /// All frames in order
    ///
    /// A frame missing from the matrix buffer (only possible for a table
    /// deserialized from inconsistent data) comes out empty.
    pub fn frames(&self) -> impl ExactSizeIterator<Item = &[Mat4]> {
        (0..self.frame_count).map(move |f| self.frame(f).unwrap_or(&[]))
    }

    /// Channel driving the named node, if any
    pub fn channel(&self, node_name: &str) -> Option<&NodeAnimChannel> {
        self.channels.iter().find(|c| c.node_name == node_name)
    }

    /// Clip length in seconds
    pub fn duration_seconds(&self) -> f64 {
        self.duration / self.ticks_per_second
    }

    /// Frame matrices as column-major floats for GPU upload
    pub fn frame_gpu_data(&self, frame: usize) -> Option<Vec<f32>> {
        self.frame(frame).map(|matrices| {
            let mut data = Vec::with_capacity(matrices.len() * 16);
            for m in matrices {
                data.extend_from_slice(&m.to_cols_array());
            }
            data
        })
    }
}

/// Number of output frames for a clip: `floor(duration / tps * output_rate)`
pub fn frame_count(duration: f64, ticks_per_second: f64, output_rate: f64) -> usize {
    let frames = (duration / ticks_per_second * output_rate).floor();
    if frames.is_finite() && frames > 0.0 {
        frames as usize
    } else {
        0
    }
}

/// Bake one clip against a skeleton and node hierarchy
///
/// All frames are computed up front; memory use is
/// `frame_count * bone_count * size_of::<Mat4>()`.
pub fn bake_animation(
    animation: &RawAnimation,
    nodes: &NodeTree,
    skeleton: &Skeleton,
    options: &BakeOptions,
) -> Result<ModelAnimation> {
    options.validate()?;

    let ticks_per_second = options.effective_ticks_per_second(animation.ticks_per_second);
    if ticks_per_second != animation.ticks_per_second {
        warn!(
            "Animation '{}' declares {} ticks per second, using {}",
            animation.name, animation.ticks_per_second, ticks_per_second
        );
    }

    let channels = extract_channels(animation);
    let frames = frame_count(animation.duration, ticks_per_second, options.output_rate);
    let bone_count = skeleton.bone_count();

    let baker = HierarchyBaker::new(
        &animation.name,
        nodes,
        skeleton,
        &channels,
        options.output_rate,
        ticks_per_second,
        options.wrap,
    )?;

    let mut matrices = allocate_frame_table(&animation.name, frames, bone_count)?;
    bake_frames(&baker, &mut matrices, bone_count, options)?;

    debug!(
        "Baked animation '{}': {} frames, {} bones, {} channels",
        animation.name,
        frames,
        bone_count,
        channels.len()
    );

    Ok(ModelAnimation {
        name: animation.name.clone(),
        duration: animation.duration,
        ticks_per_second,
        output_rate: options.output_rate,
        channels,
        frame_count: frames,
        bone_count,
        matrices,
    })
}

/// Identity-filled buffer for `frames * bones` matrices, or an error if the
/// size overflows or cannot be allocated
fn allocate_frame_table(animation: &str, frames: usize, bones: usize) -> Result<Vec<Mat4>> {
    let too_large = || BakeError::FrameTableTooLarge {
        animation: animation.to_string(),
        frames,
        bones,
    };

    let len = frames.checked_mul(bones).ok_or_else(too_large)?;
    let mut matrices = Vec::new();
    matrices.try_reserve_exact(len).map_err(|_| too_large())?;
    matrices.resize(len, Mat4::IDENTITY);
    Ok(matrices)
}

#[cfg(not(feature = "parallel"))]
fn bake_frames(
    baker: &HierarchyBaker<'_>,
    matrices: &mut [Mat4],
    bone_count: usize,
    _options: &BakeOptions,
) -> Result<()> {
    if bone_count == 0 {
        return Ok(());
    }

    let mut scratch = Vec::new();
    for (frame, out) in matrices.chunks_exact_mut(bone_count).enumerate() {
        baker.bake_frame_with_scratch(frame, out, &mut scratch)?;
    }
    Ok(())
}

#[cfg(feature = "parallel")]
fn bake_frames(
    baker: &HierarchyBaker<'_>,
    matrices: &mut [Mat4],
    bone_count: usize,
    options: &BakeOptions,
) -> Result<()> {
    if bone_count == 0 {
        return Ok(());
    }
    crate::parallel::bake_frames_parallel(baker, matrices, bone_count, options.num_threads)
}
