//! Keyframe interpolation for node animation channels

use glam::{Mat4, Quat, Vec3};

use super::channel::NodeAnimChannel;
use super::types::{Interpolate, Key};
use crate::config::KeyframeWrap;

/// Find the earlier key of the bracketing pair for `time`.
///
/// Returns the first index `i` with `time < keys[i + 1].time`, scanning in
/// order so that duplicate or unsorted timestamps resolve the same way every
/// time. When no such index exists (at or past the last key) the last index
/// is returned. Returns None if there are no keys.
pub fn find_key_index<T>(keys: &[Key<T>], time: f64) -> Option<usize> {
    if keys.is_empty() {
        return None;
    }

    Some(
        keys.windows(2)
            .position(|pair| time < pair[1].time)
            .unwrap_or(keys.len() - 1),
    )
}

/// Sample a key sequence at `time`
///
/// A single key is returned as is. Past the last key the pair is
/// either wrapped to key 0 or clamped, depending on `wrap`.
pub fn sample_keys<T: Interpolate>(keys: &[Key<T>], time: f64, wrap: KeyframeWrap) -> Option<T> {
    let index = find_key_index(keys, time)?;
    if keys.len() == 1 {
        return Some(keys[0].value);
    }

    let next = if index + 1 < keys.len() {
        index + 1
    } else {
        match wrap {
            KeyframeWrap::Wrap => (index + 1) % keys.len(),
            KeyframeWrap::Clamp => return Some(keys[index].value),
        }
    };

    let start = &keys[index];
    let end = &keys[next];
    let span = end.time - start.time;
    let delta = if span.abs() > f64::EPSILON {
        (time - start.time) / span
    } else {
        0.0
    };
    let delta = if delta.is_nan() {
        0.0
    } else {
        delta.clamp(0.0, 1.0)
    };

    Some(start.value.interpolate(&end.value, delta as f32))
}

/// Interpolated translation, zero if the channel has no position keys
pub fn sample_translation(channel: &NodeAnimChannel, time: f64, wrap: KeyframeWrap) -> Vec3 {
    sample_keys(&channel.positions, time, wrap).unwrap_or(Vec3::ZERO)
}

/// Interpolated rotation, identity if the channel has no rotation keys
pub fn sample_rotation(channel: &NodeAnimChannel, time: f64, wrap: KeyframeWrap) -> Quat {
    sample_keys(&channel.rotations, time, wrap).unwrap_or(Quat::IDENTITY)
}

/// Interpolated scale, one if the channel has no scale keys
pub fn sample_scale(channel: &NodeAnimChannel, time: f64, wrap: KeyframeWrap) -> Vec3 {
    sample_keys(&channel.scales, time, wrap).unwrap_or(Vec3::ONE)
}

/// Translation matrix at `time`
pub fn interpolate_translation(channel: &NodeAnimChannel, time: f64, wrap: KeyframeWrap) -> Mat4 {
    Mat4::from_translation(sample_translation(channel, time, wrap))
}

/// Rotation matrix at `time`
pub fn interpolate_rotation(channel: &NodeAnimChannel, time: f64, wrap: KeyframeWrap) -> Mat4 {
    Mat4::from_quat(sample_rotation(channel, time, wrap))
}

/// Scale matrix at `time`
pub fn interpolate_scale(channel: &NodeAnimChannel, time: f64, wrap: KeyframeWrap) -> Mat4 {
    Mat4::from_scale(sample_scale(channel, time, wrap))
}

/// Local transform of the channel's node at `time`: scale first, then
/// rotation, then translation.
pub fn local_transform(channel: &NodeAnimChannel, time: f64, wrap: KeyframeWrap) -> Mat4 {
    interpolate_translation(channel, time, wrap)
        * interpolate_rotation(channel, time, wrap)
        * interpolate_scale(channel, time, wrap)
}
