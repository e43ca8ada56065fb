//! Per-Frame Session Orchestration
//!
//! [`SessionController::handle_frame`] is the frame-processing entry point:
//! rate check, mirror, track, normalize, classify, debounce, assemble, in
//! that order. The tracker and classifier are generic so the state-machine
//! logic can be exercised with deterministic stand-ins.

use crate::classify::SymbolClassifier;
use crate::landmark::normalize;
use crate::session::debounce::{Presence, PresenceDebouncer, Transition};
use crate::session::rate_limit::CaptureRateLimiter;
use crate::session::sentence::SentenceAssembler;
use crate::tracking::{HandTracker, Mirror};
use crate::alphabet::Symbol;
use crate::time::Timestamp;
use serde::Serialize;
use tracing::{debug, info, warn};

/// Policy for frames with more than one detected hand. Every hand is
/// classified in detection order; only the policy decides which result
/// survives as the pending symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiHandPolicy {
    /// The last hand processed overwrites earlier ones.
    #[default]
    LastHandWins,
}

/// Serialized view of the session returned after every frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    /// The current uncommitted symbol, if any
    pub pending: Option<Symbol>,
    /// The committed sentence so far
    pub committed_text: String,
}

/// One logical fingerspelling session: owns the debounce/assembly state and
/// orchestrates tracker and classifier per incoming frame.
pub struct SessionController<T: HandTracker, C: SymbolClassifier> {
    tracker: T,
    classifier: C,
    limiter: CaptureRateLimiter,
    multi_hand: MultiHandPolicy,
    debouncer: PresenceDebouncer,
    assembler: SentenceAssembler,
    /// Time of the last frame on which a hand was actually classified.
    /// Untouched by rate-limited and handless frames, so the capture
    /// interval measures from the last successful classification.
    last_capture: Option<Timestamp>,
}

impl<T: HandTracker, C: SymbolClassifier> SessionController<T, C> {
    /// Create a session with the given capture interval in seconds.
    pub fn new(tracker: T, classifier: C, capture_interval_secs: f64) -> Self {
        Self {
            tracker,
            classifier,
            limiter: CaptureRateLimiter::new(capture_interval_secs),
            multi_hand: MultiHandPolicy::LastHandWins,
            debouncer: PresenceDebouncer::new(),
            assembler: SentenceAssembler::new(),
            last_capture: None,
        }
    }

    /// Process one frame and return the session snapshot.
    ///
    /// The whole sequence is one atomic unit with respect to the session
    /// state; callers submitting frames concurrently must serialize through
    /// [`SharedSession`](crate::session::SharedSession).
    pub fn handle_frame(&mut self, frame: &T::Frame, now: Timestamp) -> FrameSnapshot
    where
        T::Frame: Mirror,
    {
        if !self.limiter.should_capture(now, self.last_capture) {
            debug!("frame within capture interval, skipping");
            return self.snapshot();
        }

        // Mirror so the user's left/right matches the displayed image
        let mirrored = frame.mirrored();
        let hands = self.tracker.detect_hands(&mirrored);

        if hands.is_empty() {
            if self.debouncer.observe(false) == Transition::Departed {
                if let Some(sym) = self.assembler.commit_pending() {
                    info!(symbol = %sym, sentence = %self.assembler.current_text(),
                          "hand left the frame, committed symbol");
                }
            }
            return self.snapshot();
        }

        for hand in &hands {
            match normalize(&hand.keypoints) {
                Ok(features) => {
                    let symbol = self.classifier.classify(&features);
                    debug!(symbol = %symbol, handedness = ?hand.handedness, "classified hand");
                    match self.multi_hand {
                        MultiHandPolicy::LastHandWins => self.assembler.set_pending(symbol),
                    }
                }
                Err(e) => {
                    // Skip this hand's classification; it still counts as
                    // present for the debouncer.
                    warn!("skipping hand: {e}");
                }
            }
        }
        self.debouncer.observe(true);
        self.last_capture = Some(now);

        self.snapshot()
    }

    /// Current session snapshot without processing a frame
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            pending: self.assembler.pending(),
            committed_text: self.assembler.current_text(),
        }
    }

    /// Current presence state
    pub fn presence(&self) -> Presence {
        self.debouncer.state()
    }

    /// Number of committed symbols
    pub fn committed_len(&self) -> usize {
        self.assembler.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{HandObservation, Handedness, Keypoint};

    /// Test frame: hands are pre-baked observations
    #[derive(Clone, Default)]
    struct PoseFrame {
        hands: Vec<HandObservation>,
    }

    impl Mirror for PoseFrame {
        fn mirrored(&self) -> Self {
            self.clone()
        }
    }

    struct ScriptedTracker;

    impl HandTracker for ScriptedTracker {
        type Frame = PoseFrame;

        fn detect_hands(&mut self, frame: &PoseFrame) -> Vec<HandObservation> {
            frame.hands.clone()
        }
    }

    /// Classifies by the direction of the second keypoint's x offset
    struct DirectionClassifier;

    impl SymbolClassifier for DirectionClassifier {
        fn classify(&self, features: &crate::landmark::FeatureVector) -> Symbol {
            if features.values()[2] > 0.0 {
                Symbol('A')
            } else {
                Symbol('B')
            }
        }
    }

    fn hand_for(symbol: char) -> HandObservation {
        let dx = if symbol == 'A' { 10.0 } else { -10.0 };
        HandObservation::new(
            Handedness::Right,
            vec![Keypoint::new(50.0, 50.0), Keypoint::new(50.0 + dx, 60.0)],
        )
    }

    fn frame_with(symbols: &[char]) -> PoseFrame {
        PoseFrame {
            hands: symbols.iter().map(|&s| hand_for(s)).collect(),
        }
    }

    fn session() -> SessionController<ScriptedTracker, DirectionClassifier> {
        SessionController::new(ScriptedTracker, DirectionClassifier, 1.0)
    }

    fn at(secs: f64) -> Timestamp {
        Timestamp::from_secs(secs)
    }

    #[test]
    fn held_pose_then_removal_commits_exactly_once() {
        let mut s = session();
        s.handle_frame(&frame_with(&['A']), at(0.0));
        s.handle_frame(&frame_with(&['A']), at(2.0));
        let snap = s.handle_frame(&frame_with(&[]), at(4.0));
        assert_eq!(snap.committed_text, "A");
        assert_eq!(snap.pending, None);

        let snap = s.handle_frame(&frame_with(&[]), at(6.0));
        assert_eq!(snap.committed_text, "A");
    }

    #[test]
    fn last_pose_before_removal_wins() {
        let mut s = session();
        s.handle_frame(&frame_with(&['A']), at(0.0));
        s.handle_frame(&frame_with(&['B']), at(2.0));
        let snap = s.handle_frame(&frame_with(&[]), at(4.0));
        assert_eq!(snap.committed_text, "B");
    }

    #[test]
    fn rate_limited_frame_is_a_pure_noop() {
        let mut s = session();
        let first = s.handle_frame(&frame_with(&['A']), at(0.0));
        // within the interval, a frame with different content changes nothing
        let second = s.handle_frame(&frame_with(&['B']), at(0.3));
        assert_eq!(first, second);

        // the interval still measures from the first successful capture
        let third = s.handle_frame(&frame_with(&['B']), at(1.0));
        assert_eq!(third.pending, Some(Symbol('B')));
    }

    #[test]
    fn last_hand_wins_within_a_single_frame() {
        let mut s = session();
        let snap = s.handle_frame(&frame_with(&['A', 'B']), at(0.0));
        assert_eq!(snap.pending, Some(Symbol('B')));
    }

    #[test]
    fn degenerate_hand_is_skipped_but_still_counts_as_present() {
        let mut s = session();
        let degenerate = PoseFrame {
            hands: vec![HandObservation::new(
                Handedness::Left,
                vec![Keypoint::new(10.0, 10.0); 4],
            )],
        };
        let snap = s.handle_frame(&degenerate, at(0.0));
        assert_eq!(snap.pending, None);
        assert_eq!(s.presence(), Presence::Present);

        // removal with nothing pending commits nothing
        let snap = s.handle_frame(&frame_with(&[]), at(2.0));
        assert_eq!(snap.committed_text, "");
    }

    #[test]
    fn handless_frames_do_not_consume_the_capture_interval() {
        let mut s = session();
        s.handle_frame(&frame_with(&['A']), at(0.0));
        // last_capture stays at 0.0 through the handless frame at 2.0,
        // so the frame at 2.5 still passes the limiter
        s.handle_frame(&frame_with(&[]), at(2.0));
        let snap = s.handle_frame(&frame_with(&['B']), at(2.5));
        assert_eq!(snap.pending, Some(Symbol('B')));
    }

    #[test]
    fn committed_text_is_monotonic() {
        let mut s = session();
        let script: &[(&[char], f64)] = &[
            (&['A'], 0.0),
            (&[], 2.0),
            (&['B'], 4.0),
            (&['B'], 6.0),
            (&[], 8.0),
            (&[], 10.0),
            (&['A'], 12.0),
            (&[], 14.0),
        ];
        let mut prev_len = 0;
        for (symbols, t) in script {
            let snap = s.handle_frame(&frame_with(symbols), at(*t));
            assert!(snap.committed_text.len() >= prev_len);
            prev_len = snap.committed_text.len();
        }
        assert_eq!(s.snapshot().committed_text, "ABA");
    }
}
