//! Monotonic Timestamps
//!
//! Capture-interval checks only ever compare timestamp *differences*, so the
//! epoch is arbitrary: a live feed stamps frames against process start, and
//! replayed frame logs use their recorded stream offsets directly.

use serde::{Deserialize, Serialize};

/// A point in time, in seconds from an arbitrary monotonic epoch.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(f64);

impl Timestamp {
    /// Create from raw seconds
    #[inline]
    pub fn from_secs(secs: f64) -> Self {
        Self(secs)
    }

    /// Raw seconds value
    #[inline]
    pub fn as_secs(&self) -> f64 {
        self.0
    }

    /// Seconds elapsed since `earlier`. Clamped at zero so a clock hiccup
    /// never produces a negative interval.
    #[inline]
    pub fn secs_since(&self, earlier: Timestamp) -> f64 {
        (self.0 - earlier.0).max(0.0)
    }
}
