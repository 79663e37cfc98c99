//! Skeletal animation baking
//!
//! This module turns sparse per-node keyframe tracks into dense per-frame
//! bone matrix tables:
//! - Channel extraction from importer tracks
//! - Keyframe interpolation (linear for translation and scale, slerp for rotation)
//! - Node hierarchy composition into skinning matrices
//! - Whole-clip assembly at a fixed output rate
//!
//! # Example
//!
//! ```rust,ignore
//! use skeletal_bake::animation::bake_animation;
//! use skeletal_bake::{BakeOptions, NodeTree, Skeleton};
//!
//! let skeleton = Skeleton::from_meshes(&scene.meshes);
//! let nodes = NodeTree::from_raw(&scene.root);
//! let walk = bake_animation(&scene.animations[0], &nodes, &skeleton, &BakeOptions::default())?;
//!
//! // Matrices of frame 10, one per bone
//! let pose = walk.frame(10);
//! ```

mod assembler;
mod baker;
mod channel;
mod interpolation;
mod types;

pub use assembler::{ModelAnimation, bake_animation, frame_count};
pub use baker::HierarchyBaker;
pub use channel::{NodeAnimChannel, extract_channels};
pub use interpolation::{
    find_key_index, interpolate_rotation, interpolate_scale, interpolate_translation,
    local_transform, sample_keys, sample_rotation, sample_scale, sample_translation,
};
pub use types::{Interpolate, Key, QuatKey, VectorKey};
