//! Hand-tracker contract
//!
//! The tracking model (MediaPipe Hands or equivalent) is an external
//! collaborator. The session only needs two things from a frame source: a
//! way to mirror a frame horizontally, and a way to extract zero or more
//! hand observations from it.

use crate::landmark::HandObservation;

/// Horizontal mirroring. The session controller flips every frame before
/// tracking so a front-facing camera's left/right matches what the user sees
/// on screen.
pub trait Mirror {
    fn mirrored(&self) -> Self;
}

/// Detects hands in a frame. Returns zero or more observations, each with a
/// fixed keypoint count determined by the tracking model.
pub trait HandTracker {
    type Frame;

    fn detect_hands(&mut self, frame: &Self::Frame) -> Vec<HandObservation>;
}
