//! Skeletal animation baking
//!
//! Converts an imported scene (node hierarchy, mesh bone lists with
//! bind-pose offsets, and sparse per-node keyframe tracks) into dense,
//! frame-indexed tables of skinning matrices ready for GPU upload.
//!
//! # Example
//!
//! ```rust,no_run
//! use skeletal_bake::{BakeOptions, BakedModel, RawScene};
//!
//! # fn import() -> RawScene { RawScene::default() }
//! let scene: RawScene = import();
//! let model = BakedModel::from_scene(&scene, &BakeOptions::default())?;
//!
//! for clip in &model.animations {
//!     let frame = 0;
//!     if let Some(matrices) = clip.frame(frame) {
//!         assert_eq!(matrices.len(), model.skeleton.bone_count());
//!     }
//! }
//! # Ok::<(), skeletal_bake::BakeError>(())
//! ```

pub mod animation;
pub mod config;
pub mod error;
pub mod model;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod scene;
pub mod skeleton;

pub use animation::{ModelAnimation, NodeAnimChannel, bake_animation};
pub use config::{BakeOptions, KeyframeWrap};
pub use error::{BakeError, Result};
pub use model::BakedModel;
pub use scene::{
    NodeId, NodeTree, RawAnimation, RawBone, RawMesh, RawNode, RawNodeTrack, RawQuatKey,
    RawScene, RawVectorKey, RowMatrix, SceneNode,
};
pub use skeleton::{BoneInfo, Skeleton};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
