//! Frame Log Format
//!
//! Serialization format for captured hand-tracking output: per frame, the
//! stream offset, image dimensions, and zero or more hands' keypoints in the
//! tracker's normalized `[0, 1]` coordinates. A saved log replays a live
//! session byte-for-byte deterministically.

use crate::landmark::Handedness;
use crate::tracking::Mirror;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Current frame-log format version
pub const CURRENT_FORMAT_VERSION: &str = "1.0";

/// Frame-log metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameLogMetadata {
    /// Unique log ID
    pub id: Uuid,
    /// Log name
    pub name: String,
    /// When the log was recorded
    pub recorded_at: DateTime<Utc>,
    /// Total frame count
    pub frame_count: usize,
    /// Keypoints per hand in this log
    pub keypoint_count: usize,
    /// Version of the log format
    pub format_version: String,
}

impl FrameLogMetadata {
    fn new(name: String, keypoint_count: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            recorded_at: Utc::now(),
            frame_count: 0,
            keypoint_count,
            format_version: CURRENT_FORMAT_VERSION.to_string(),
        }
    }
}

/// One recorded hand: handedness plus normalized keypoint coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    pub handedness: Handedness,
    /// `[x, y]` pairs in the tracker's normalized coordinate space
    pub keypoints: Vec<[f32; 2]>,
}

/// One recorded frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Seconds from the start of the stream
    pub elapsed_secs: f64,
    /// Source image width in pixels
    pub width: u32,
    /// Source image height in pixels
    pub height: u32,
    /// Hands detected in this frame (possibly none)
    pub hands: Vec<HandRecord>,
}

impl Mirror for FrameRecord {
    /// Flip horizontally: normalized x becomes `1 - x`.
    fn mirrored(&self) -> Self {
        let hands = self
            .hands
            .iter()
            .map(|h| HandRecord {
                handedness: h.handedness,
                keypoints: h.keypoints.iter().map(|[x, y]| [1.0 - x, *y]).collect(),
            })
            .collect();
        Self {
            elapsed_secs: self.elapsed_secs,
            width: self.width,
            height: self.height,
            hands,
        }
    }
}

/// A complete recorded hand-tracking stream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameLog {
    pub metadata: FrameLogMetadata,
    pub frames: Vec<FrameRecord>,
}

impl FrameLog {
    /// Create a new empty log
    pub fn new(name: impl Into<String>, keypoint_count: usize) -> Self {
        Self {
            metadata: FrameLogMetadata::new(name.into(), keypoint_count),
            frames: Vec::new(),
        }
    }

    /// Append a frame and keep the metadata count in sync
    pub fn push_frame(&mut self, frame: FrameRecord) {
        self.frames.push(frame);
        self.metadata.frame_count = self.frames.len();
    }

    /// Structural validation: frame dimensions, keypoint counts, and finite
    /// coordinates. Runs before any frame reaches a session, so a malformed
    /// log never mutates session state.
    pub fn validate(&self) -> Result<()> {
        for (i, frame) in self.frames.iter().enumerate() {
            if frame.width == 0 || frame.height == 0 {
                return Err(Error::MalformedFrame(format!(
                    "frame {i}: zero image dimension {}x{}",
                    frame.width, frame.height
                )));
            }
            if !frame.elapsed_secs.is_finite() || frame.elapsed_secs < 0.0 {
                return Err(Error::MalformedFrame(format!(
                    "frame {i}: invalid elapsed_secs {}",
                    frame.elapsed_secs
                )));
            }
            for (h, hand) in frame.hands.iter().enumerate() {
                if hand.keypoints.len() != self.metadata.keypoint_count {
                    return Err(Error::MalformedFrame(format!(
                        "frame {i} hand {h}: {} keypoints, log declares {}",
                        hand.keypoints.len(),
                        self.metadata.keypoint_count
                    )));
                }
                if hand
                    .keypoints
                    .iter()
                    .any(|[x, y]| !x.is_finite() || !y.is_finite())
                {
                    return Err(Error::MalformedFrame(format!(
                        "frame {i} hand {h}: non-finite keypoint coordinate"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Load a log from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let log: Self = serde_json::from_str(&content)?;
        Ok(log)
    }

    /// Save the log as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
