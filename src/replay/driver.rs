//! Offline Replay Driver
//!
//! Feeds a recorded frame log through a session using the log's own stream
//! offsets as the clock, producing the same commits a live run would.

use crate::classify::SymbolClassifier;
use crate::landmark::{HandObservation, Keypoint};
use crate::replay::frame_log::{FrameLog, FrameRecord};
use crate::session::{FrameSnapshot, SessionController};
use crate::time::Timestamp;
use crate::tracking::HandTracker;
use crate::Result;
use tracing::info;

/// Tracker over pre-recorded frames: detection already happened at record
/// time, so this just converts normalized keypoints to pixel space.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayTracker;

impl HandTracker for ReplayTracker {
    type Frame = FrameRecord;

    fn detect_hands(&mut self, frame: &FrameRecord) -> Vec<HandObservation> {
        frame
            .hands
            .iter()
            .map(|hand| {
                let keypoints = hand
                    .keypoints
                    .iter()
                    .map(|[nx, ny]| Keypoint::from_normalized(*nx, *ny, frame.width, frame.height))
                    .collect();
                HandObservation::new(hand.handedness, keypoints)
            })
            .collect()
    }
}

/// Outcome of replaying a complete log
#[derive(Debug, Clone)]
pub struct ReplaySummary {
    /// Frames fed to the session
    pub frames_processed: usize,
    /// Symbols committed during the replay
    pub commits: usize,
    /// Final session snapshot
    pub final_snapshot: FrameSnapshot,
}

/// Replay a frame log through a fresh session with the given classifier.
///
/// The log is validated up front; a malformed log fails before any frame is
/// processed, and a log whose keypoint count disagrees with the classifier's
/// trained width is a fatal configuration error rather than a stream of
/// silently wrong classifications.
pub fn replay_log<C: SymbolClassifier>(
    log: &FrameLog,
    classifier: C,
    capture_interval_secs: f64,
) -> Result<ReplaySummary> {
    log.validate()?;
    if let Some(width) = classifier.feature_width() {
        let log_width = log.metadata.keypoint_count * 2;
        if log_width != width {
            return Err(crate::Error::Config(format!(
                "frame log produces {}-wide features ({} keypoints), classifier expects {}",
                log_width, log.metadata.keypoint_count, width
            )));
        }
    }

    let mut session = SessionController::new(ReplayTracker, classifier, capture_interval_secs);
    let mut commits = 0;
    let mut committed_len = 0;

    for frame in &log.frames {
        let snapshot = session.handle_frame(frame, Timestamp::from_secs(frame.elapsed_secs));
        if snapshot.committed_text.len() > committed_len {
            commits += 1;
            committed_len = snapshot.committed_text.len();
        }
    }

    let final_snapshot = session.snapshot();
    info!(
        frames = log.frames.len(),
        commits,
        sentence = %final_snapshot.committed_text,
        "replay complete"
    );

    Ok(ReplaySummary {
        frames_processed: log.frames.len(),
        commits,
        final_snapshot,
    })
}
