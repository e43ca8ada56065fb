//! Core types for hand landmarks
//!
//! A hand pose is an ordered sequence of keypoints in image pixel space;
//! index 0 is the wrist anchor against which all other points are measured.

use serde::{Deserialize, Serialize};

/// Number of keypoints per hand produced by the reference tracking model
pub const REFERENCE_KEYPOINT_COUNT: usize = 21;

/// A single tracked 2D location on a hand, in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keypoint {
    pub x: f32,
    pub y: f32,
}

impl Keypoint {
    /// Create from raw pixel coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Convert a tracker's normalized `[0, 1]` coordinates to pixel space,
    /// clamped to `[0, extent - 1]` on each axis. Trackers can report
    /// slightly out-of-range values for partially occluded joints.
    pub fn from_normalized(nx: f32, ny: f32, width: u32, height: u32) -> Self {
        let clamp = |n: f32, extent: u32| -> f32 {
            let max = extent.saturating_sub(1) as f32;
            ((n * extent as f32).trunc()).clamp(0.0, max)
        };
        Self {
            x: clamp(nx, width),
            y: clamp(ny, height),
        }
    }
}

/// Which hand the tracker believes an observation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Handedness {
    Left,
    Right,
}

/// One detected hand: an ordered keypoint sequence plus handedness.
#[derive(Debug, Clone, PartialEq)]
pub struct HandObservation {
    pub handedness: Handedness,
    pub keypoints: Vec<Keypoint>,
}

impl HandObservation {
    pub fn new(handedness: Handedness, keypoints: Vec<Keypoint>) -> Self {
        Self {
            handedness,
            keypoints,
        }
    }
}

/// A classifier-ready feature vector: `2 × keypoint_count` interleaved
/// `[dx, dy]` values, translation-invariant and max-abs normalized to
/// `[-1, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<f32>);

impl FeatureVector {
    pub(crate) fn from_values(values: Vec<f32>) -> Self {
        Self(values)
    }

    /// Feature values in keypoint order
    pub fn values(&self) -> &[f32] {
        &self.0
    }

    /// Vector width (2 × keypoint count)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
