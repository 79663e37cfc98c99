//! Parallel frame baking

use glam::Mat4;
use log::debug;
use rayon::prelude::*;

use crate::animation::HierarchyBaker;
use crate::error::{BakeError, Result};

/// Bake every frame of `matrices` in parallel.
///
/// Frames are independent, so each chunk of `bone_count` matrices is
/// handed to a worker as its private output buffer. Each worker also keeps
/// its own node scratch buffer across the frames it processes.
pub fn bake_frames_parallel(
    baker: &HierarchyBaker<'_>,
    matrices: &mut [Mat4],
    bone_count: usize,
    num_threads: Option<usize>,
) -> Result<()> {
    if bone_count == 0 {
        return Ok(());
    }

    let run = |matrices: &mut [Mat4]| -> Result<()> {
        matrices
            .par_chunks_mut(bone_count)
            .enumerate()
            .try_for_each_init(Vec::new, |scratch, (frame, out)| {
                baker.bake_frame_with_scratch(frame, out, scratch)
            })
    };

    match num_threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| BakeError::ThreadPool(e.to_string()))?;
            debug!("Baking {} frames on {} threads", matrices.len() / bone_count, threads);
            pool.install(|| run(matrices))
        }
        None => run(matrices),
    }
}
