//! Conversion of importer keyframe tracks into per-node channels

use glam::{Quat, Vec3};
use log::debug;

use super::types::{QuatKey, VectorKey};
use crate::scene::{RawAnimation, RawNodeTrack};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Keyframe tracks driving one scene node during one clip
///
/// Matched against the node tree by `node_name`, not against bones.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeAnimChannel {
    pub node_name: String,
    pub positions: Vec<VectorKey>,
    pub rotations: Vec<QuatKey>,
    pub scales: Vec<VectorKey>,
}

impl NodeAnimChannel {
    /// Convert one importer track, keeping times and values verbatim
    pub fn from_raw(track: &RawNodeTrack) -> Self {
        Self {
            node_name: track.node_name.clone(),
            positions: track
                .position_keys
                .iter()
                .map(|k| VectorKey::new(k.time, Vec3::from_array(k.value)))
                .collect(),
            rotations: track
                .rotation_keys
                .iter()
                .map(|k| QuatKey::new(k.time, Quat::from_array(k.value)))
                .collect(),
            scales: track
                .scaling_keys
                .iter()
                .map(|k| VectorKey::new(k.time, Vec3::from_array(k.value)))
                .collect(),
        }
    }

    /// Total number of keys over all three tracks
    pub fn key_count(&self) -> usize {
        self.positions.len() + self.rotations.len() + self.scales.len()
    }

    /// Whether every track holds at most one key, i.e. the channel is a
    /// constant pose for the whole clip
    pub fn is_static(&self) -> bool {
        self.positions.len() <= 1 && self.rotations.len() <= 1 && self.scales.len() <= 1
    }
}

/// Extract one channel per track that has at least one key.
///
/// Channels keep the clip's track order. No resampling or time validation
/// happens here.
pub fn extract_channels(animation: &RawAnimation) -> Vec<NodeAnimChannel> {
    let mut channels = Vec::with_capacity(animation.channels.len());

    for track in &animation.channels {
        if !track.has_keys() {
            debug!(
                "Animation '{}': skipping track for node '{}' with no keys",
                animation.name, track.node_name
            );
            continue;
        }

        if track.position_keys.is_empty()
            || track.rotation_keys.is_empty()
            || track.scaling_keys.is_empty()
        {
            debug!(
                "Animation '{}': node '{}' is missing a track (positions {}, rotations {}, scales {}), using identity for it",
                animation.name,
                track.node_name,
                track.position_keys.len(),
                track.rotation_keys.len(),
                track.scaling_keys.len()
            );
        }

        channels.push(NodeAnimChannel::from_raw(track));
    }

    channels
}
