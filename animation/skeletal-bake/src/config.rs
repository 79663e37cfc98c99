//! Options controlling how clips are baked

use crate::error::{BakeError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed output frame rate of the baked table (frames per second)
pub const DEFAULT_OUTPUT_RATE: f64 = 60.0;

/// Tick rate substituted when a clip declares zero or negative ticks per second
pub const DEFAULT_TICKS_PER_SECOND: f64 = 25.0;

/// What a keyframe lookup does once the query time is at or past the last key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum KeyframeWrap {
    /// Pair the last key with key 0 (`(i + 1) % count`).
    ///
    /// For increasing timestamps the blend factor comes out non-positive and
    /// clamps to 0, so this holds the last key just like [`Clamp`](Self::Clamp).
    #[default]
    Wrap,
    /// Hold the last key's value
    Clamp,
}

/// Options for a bake
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BakeOptions {
    /// Output frames per second
    pub output_rate: f64,
    /// Substitute for a clip's ticks per second when it is zero or negative
    pub default_ticks_per_second: f64,
    /// Out-of-range keyframe behavior
    pub wrap: KeyframeWrap,
    /// Whether a scene bake drops clips that fail instead of failing the load
    pub skip_failed_animations: bool,
    /// Number of worker threads (None = use rayon default). Only used with
    /// the `parallel` feature.
    pub num_threads: Option<usize>,
}

impl Default for BakeOptions {
    fn default() -> Self {
        Self {
            output_rate: DEFAULT_OUTPUT_RATE,
            default_ticks_per_second: DEFAULT_TICKS_PER_SECOND,
            wrap: KeyframeWrap::default(),
            skip_failed_animations: false,
            num_threads: None,
        }
    }
}

impl BakeOptions {
    /// Create options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output frame rate
    pub fn output_rate(mut self, rate: f64) -> Self {
        self.output_rate = rate;
        self
    }

    /// Set the fallback ticks per second
    pub fn default_ticks_per_second(mut self, ticks: f64) -> Self {
        self.default_ticks_per_second = ticks;
        self
    }

    /// Set the out-of-range keyframe behavior
    pub fn wrap(mut self, wrap: KeyframeWrap) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set whether failing clips are skipped during a scene bake
    pub fn skip_failed_animations(mut self, skip: bool) -> Self {
        self.skip_failed_animations = skip;
        self
    }

    /// Set the number of worker threads
    pub fn threads(mut self, num: usize) -> Self {
        self.num_threads = Some(num);
        self
    }

    /// Check that the rates are usable
    pub fn validate(&self) -> Result<()> {
        if !self.output_rate.is_finite() || self.output_rate <= 0.0 {
            return Err(BakeError::InvalidOptions(format!(
                "output_rate must be a positive finite number, got {}",
                self.output_rate
            )));
        }
        if !self.default_ticks_per_second.is_finite() || self.default_ticks_per_second <= 0.0 {
            return Err(BakeError::InvalidOptions(format!(
                "default_ticks_per_second must be a positive finite number, got {}",
                self.default_ticks_per_second
            )));
        }
        if self.num_threads == Some(0) {
            return Err(BakeError::InvalidOptions(
                "num_threads must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Ticks per second to bake with, substituting the default for
    /// malformed (zero, negative or non-finite) source rates
    pub fn effective_ticks_per_second(&self, declared: f64) -> f64 {
        if declared.is_finite() && declared > 0.0 {
            declared
        } else {
            self.default_ticks_per_second
        }
    }
}
