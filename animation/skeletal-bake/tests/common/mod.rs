//! Shared scene fixtures for integration tests

#![allow(dead_code)]

use glam::{Mat4, Quat, Vec3};
use skeletal_bake::{
    RawAnimation, RawBone, RawMesh, RawNode, RawNodeTrack, RawQuatKey, RawScene, RawVectorKey,
};

/// Route library logging to the test harness, ignoring repeat calls
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Track with full position, rotation and scale keys at the given times
pub fn track(node: &str, keys: &[(f64, Vec3, Quat, Vec3)]) -> RawNodeTrack {
    RawNodeTrack {
        node_name: node.to_string(),
        position_keys: keys
            .iter()
            .map(|(t, p, _, _)| RawVectorKey::new(*t, *p))
            .collect(),
        rotation_keys: keys
            .iter()
            .map(|(t, _, r, _)| RawQuatKey::new(*t, *r))
            .collect(),
        scaling_keys: keys
            .iter()
            .map(|(t, _, _, s)| RawVectorKey::new(*t, *s))
            .collect(),
    }
}

/// Root with one child bone, child slides from the origin to +X
pub fn root_child_scene() -> RawScene {
    RawScene {
        root: RawNode::new("root", Mat4::IDENTITY).with_child(RawNode::new("child", Mat4::IDENTITY)),
        meshes: vec![RawMesh::new("body", vec![RawBone::new("child", Mat4::IDENTITY)])],
        animations: vec![RawAnimation {
            name: "Slide".to_string(),
            duration: 60.0,
            ticks_per_second: 30.0,
            channels: vec![track(
                "child",
                &[
                    (0.0, Vec3::ZERO, Quat::IDENTITY, Vec3::ONE),
                    (30.0, Vec3::X, Quat::IDENTITY, Vec3::ONE),
                ],
            )],
        }],
    }
}

/// Humanoid-ish hierarchy spread over two meshes that share bones
pub fn character_scene() -> RawScene {
    let root = RawNode::new("Armature", Mat4::from_scale(Vec3::splat(0.01))).with_child(
        RawNode::new("Hips", Mat4::from_translation(Vec3::new(0.0, 100.0, 0.0)))
            .with_child(
                RawNode::new("Spine", Mat4::from_translation(Vec3::new(0.0, 20.0, 0.0)))
                    .with_child(RawNode::new(
                        "Head",
                        Mat4::from_translation(Vec3::new(0.0, 40.0, 0.0)),
                    )),
            )
            .with_child(RawNode::new(
                "LeftLeg",
                Mat4::from_translation(Vec3::new(10.0, -5.0, 0.0)),
            ))
            .with_child(RawNode::new(
                "RightLeg",
                Mat4::from_translation(Vec3::new(-10.0, -5.0, 0.0)),
            )),
    );

    let offset = |y: f32| Mat4::from_translation(Vec3::new(0.0, -y, 0.0));
    let meshes = vec![
        RawMesh::new(
            "Body",
            vec![
                RawBone::new("Hips", offset(100.0)),
                RawBone::new("Spine", offset(120.0)),
                RawBone::new("LeftLeg", offset(95.0)),
                RawBone::new("RightLeg", offset(95.0)),
            ],
        ),
        RawMesh::new(
            "HeadMesh",
            vec![
                RawBone::new("Spine", offset(120.0)),
                RawBone::new("Head", offset(160.0)),
            ],
        ),
    ];

    let swing = |angle: f32| Quat::from_rotation_x(angle);
    let animations = vec![RawAnimation {
        name: "Walk".to_string(),
        duration: 48.0,
        ticks_per_second: 24.0,
        channels: vec![
            track(
                "Hips",
                &[
                    (0.0, Vec3::new(0.0, 100.0, 0.0), Quat::IDENTITY, Vec3::ONE),
                    (24.0, Vec3::new(0.0, 98.0, 30.0), Quat::IDENTITY, Vec3::ONE),
                    (48.0, Vec3::new(0.0, 100.0, 60.0), Quat::IDENTITY, Vec3::ONE),
                ],
            ),
            track(
                "LeftLeg",
                &[
                    (0.0, Vec3::new(10.0, -5.0, 0.0), swing(0.4), Vec3::ONE),
                    (24.0, Vec3::new(10.0, -5.0, 0.0), swing(-0.4), Vec3::ONE),
                    (48.0, Vec3::new(10.0, -5.0, 0.0), swing(0.4), Vec3::ONE),
                ],
            ),
            track(
                "RightLeg",
                &[
                    (0.0, Vec3::new(-10.0, -5.0, 0.0), swing(-0.4), Vec3::ONE),
                    (24.0, Vec3::new(-10.0, -5.0, 0.0), swing(0.4), Vec3::ONE),
                    (48.0, Vec3::new(-10.0, -5.0, 0.0), swing(-0.4), Vec3::ONE),
                ],
            ),
        ],
    }];

    RawScene {
        root,
        meshes,
        animations,
    }
}
