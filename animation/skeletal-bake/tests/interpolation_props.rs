//! Property checks for keyframe sampling

use glam::{Quat, Vec3};
use proptest::prelude::*;
use skeletal_bake::KeyframeWrap;
use skeletal_bake::animation::{QuatKey, VectorKey, sample_keys};

fn vec3() -> impl Strategy<Value = Vec3> {
    (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn rotation() -> impl Strategy<Value = Quat> {
    (vec3(), -3.0f32..3.0).prop_map(|(axis, angle)| {
        let axis = axis.try_normalize().unwrap_or(Vec3::Y);
        Quat::from_axis_angle(axis, angle)
    })
}

proptest! {
    #[test]
    fn vector_sample_stays_between_keys(
        a in vec3(),
        b in vec3(),
        start in 0.0f64..50.0,
        span in 0.5f64..50.0,
        fraction in 0.0f64..=1.0,
    ) {
        let keys = [VectorKey::new(start, a), VectorKey::new(start + span, b)];
        let value: Vec3 = sample_keys(&keys, start + span * fraction, KeyframeWrap::Wrap).unwrap();

        let lo = a.min(b) - Vec3::splat(1e-3);
        let hi = a.max(b) + Vec3::splat(1e-3);
        prop_assert!(value.cmpge(lo).all() && value.cmple(hi).all(), "{value} outside {a}..{b}");
    }

    #[test]
    fn rotation_sample_is_unit(
        a in rotation(),
        b in rotation(),
        fraction in 0.0f64..=1.0,
    ) {
        let keys = [QuatKey::new(0.0, a), QuatKey::new(10.0, b)];
        let value: Quat = sample_keys(&keys, 10.0 * fraction, KeyframeWrap::Wrap).unwrap();
        prop_assert!((value.length() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn wrap_and_clamp_agree_on_sorted_keys(
        a in vec3(),
        b in vec3(),
        c in vec3(),
        time in -10.0f64..40.0,
    ) {
        let keys = [
            VectorKey::new(0.0, a),
            VectorKey::new(10.0, b),
            VectorKey::new(25.0, c),
        ];
        let wrapped: Vec3 = sample_keys(&keys, time, KeyframeWrap::Wrap).unwrap();
        let clamped: Vec3 = sample_keys(&keys, time, KeyframeWrap::Clamp).unwrap();
        prop_assert!((wrapped - clamped).length() < 1e-4);
    }
}
