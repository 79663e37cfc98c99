//! Load-time baking of a whole imported scene

use std::sync::Arc;

use log::{debug, warn};

use crate::animation::{ModelAnimation, bake_animation};
use crate::config::BakeOptions;
use crate::error::Result;
use crate::scene::{NodeTree, RawScene};
use crate::skeleton::Skeleton;

/// Skeleton, hierarchy and baked clips of one model
///
/// Everything is immutable after [`from_scene`](Self::from_scene); the
/// skeleton and clips sit behind `Arc` so any number of playing instances
/// and threads can share them.
#[derive(Debug, Clone)]
pub struct BakedModel {
    pub skeleton: Arc<Skeleton>,
    pub nodes: NodeTree,
    pub animations: Vec<Arc<ModelAnimation>>,
}

impl BakedModel {
    /// Build the skeleton and bake every clip of the scene in order.
    ///
    /// A clip that fails to bake aborts the load, unless
    /// [`BakeOptions::skip_failed_animations`] is set, in which case it is
    /// logged and left out.
    pub fn from_scene(scene: &RawScene, options: &BakeOptions) -> Result<Self> {
        options.validate()?;

        let skeleton = Skeleton::from_meshes(&scene.meshes);
        let nodes = NodeTree::from_raw(&scene.root);

        let mut animations = Vec::with_capacity(scene.animations.len());
        for raw in &scene.animations {
            match bake_animation(raw, &nodes, &skeleton, options) {
                Ok(baked) => animations.push(Arc::new(baked)),
                Err(e) if options.skip_failed_animations && e.is_fatal_bake() => {
                    warn!("Skipping animation '{}': {}", raw.name, e);
                }
                Err(e) => return Err(e),
            }
        }

        debug!(
            "Baked model: {} nodes, {} bones, {}/{} animations",
            nodes.len(),
            skeleton.bone_count(),
            animations.len(),
            scene.animations.len()
        );

        Ok(Self {
            skeleton: Arc::new(skeleton),
            nodes,
            animations,
        })
    }

    /// Look up a baked clip by name
    pub fn animation(&self, name: &str) -> Option<&Arc<ModelAnimation>> {
        self.animations.iter().find(|a| a.name == name)
    }

    pub fn animation_count(&self) -> usize {
        self.animations.len()
    }
}
