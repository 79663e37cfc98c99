//! Parallel baking must match frame-by-frame sequential baking

#![cfg(feature = "parallel")]

mod common;

use glam::Mat4;
use pretty_assertions::assert_eq;
use skeletal_bake::animation::{HierarchyBaker, extract_channels};
use skeletal_bake::{BakeOptions, NodeTree, Skeleton, bake_animation};

use common::character_scene;

#[test]
fn test_parallel_matches_sequential() {
    let scene = character_scene();
    let skeleton = Skeleton::from_meshes(&scene.meshes);
    let nodes = NodeTree::from_raw(&scene.root);
    let clip = &scene.animations[0];

    for threads in [None, Some(1), Some(3)] {
        let options = BakeOptions {
            num_threads: threads,
            ..BakeOptions::default()
        };
        let baked = bake_animation(clip, &nodes, &skeleton, &options).unwrap();

        let channels = extract_channels(clip);
        let baker = HierarchyBaker::new(
            &clip.name,
            &nodes,
            &skeleton,
            &channels,
            options.output_rate,
            baked.ticks_per_second,
            options.wrap,
        )
        .unwrap();

        let mut expected = vec![Mat4::ZERO; skeleton.bone_count()];
        for (frame, actual) in baked.frames().enumerate() {
            baker.bake_frame(frame, &mut expected).unwrap();
            assert_eq!(actual, expected.as_slice(), "frame {frame} with {threads:?} threads");
        }
    }
}
