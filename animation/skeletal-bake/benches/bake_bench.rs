use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use glam::{Mat4, Quat, Vec3};
use std::hint::black_box;
use skeletal_bake::{
    BakeOptions, NodeTree, RawAnimation, RawBone, RawMesh, RawNode, RawNodeTrack, RawQuatKey,
    RawScene, RawVectorKey, Skeleton, bake_animation,
};

/// Straight chain of `bones` joints, each animated with 30 keys
fn create_chain_scene(bones: usize) -> RawScene {
    let link = Mat4::from_translation(Vec3::Y);

    let mut node = RawNode::new(format!("joint_{}", bones - 1), link);
    for i in (0..bones - 1).rev() {
        node = RawNode::new(format!("joint_{i}"), link).with_child(node);
    }
    let root = RawNode::new("root", Mat4::IDENTITY).with_child(node);

    let mesh_bones = (0..bones)
        .map(|i| {
            RawBone::new(
                format!("joint_{i}"),
                Mat4::from_translation(Vec3::new(0.0, -(i as f32 + 1.0), 0.0)),
            )
        })
        .collect();

    let channels = (0..bones)
        .map(|i| {
            let times = (0..30).map(|k| f64::from(k) * 4.0);
            RawNodeTrack {
                node_name: format!("joint_{i}"),
                position_keys: times
                    .clone()
                    .map(|t| RawVectorKey::new(t, Vec3::Y))
                    .collect(),
                rotation_keys: times
                    .clone()
                    .map(|t| RawQuatKey::new(t, Quat::from_rotation_z((t * 0.01) as f32)))
                    .collect(),
                scaling_keys: times.map(|t| RawVectorKey::new(t, Vec3::ONE)).collect(),
            }
        })
        .collect();

    RawScene {
        root,
        meshes: vec![RawMesh::new("body", mesh_bones)],
        animations: vec![RawAnimation {
            name: "Wave".to_string(),
            duration: 120.0,
            ticks_per_second: 30.0,
            channels,
        }],
    }
}

fn bake_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bake_animation");

    for bones in [16, 64, 128] {
        let scene = create_chain_scene(bones);
        let skeleton = Skeleton::from_meshes(&scene.meshes);
        let nodes = NodeTree::from_raw(&scene.root);
        let options = BakeOptions::default();

        group.bench_with_input(BenchmarkId::from_parameter(bones), &bones, |b, _| {
            b.iter(|| {
                let baked =
                    bake_animation(black_box(&scene.animations[0]), &nodes, &skeleton, &options)
                        .unwrap();
                black_box(baked.frame_count());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bake_benchmark);
criterion_main!(benches);
