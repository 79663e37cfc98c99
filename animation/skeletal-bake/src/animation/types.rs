//! Keyframe value types

use glam::{Quat, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time-stamped sample of one animated property
///
/// `time` is in the owning channel's tick domain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Key<T> {
    pub time: f64,
    pub value: T,
}

impl<T> Key<T> {
    pub const fn new(time: f64, value: T) -> Self {
        Self { time, value }
    }
}

/// Translation or scale keyframe
pub type VectorKey = Key<Vec3>;

/// Rotation keyframe
pub type QuatKey = Key<Quat>;

/// Trait for values that can be blended between two keyframes
pub trait Interpolate: Copy {
    /// Blend from self towards other, `t` in `[0, 1]`
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for Vec3 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        *self + (*other - *self) * t
    }
}

impl Interpolate for Quat {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        // Renormalize to keep drift out of the rotation matrix
        self.slerp(*other, t).normalize()
    }
}
