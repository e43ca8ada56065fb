//! Integration tests for the frame-processing pipeline
//!
//! These tests drive the complete path a live deployment exercises:
//! Frame log -> mirroring -> replay tracker -> normalization ->
//! centroid classification -> presence debouncing -> sentence assembly.

use signscribe::classify::centroid::CentroidTemplate;
use signscribe::classify::CentroidModel;
use signscribe::landmark::normalize;
use signscribe::replay::{replay_log, FrameLog, FrameRecord, HandRecord, ReplayTracker};
use signscribe::session::{SessionController, SharedSession};
use signscribe::tracking::{HandTracker, Mirror};
use signscribe::{Handedness, Symbol, Timestamp};

const WIDTH: u32 = 640;
const HEIGHT: u32 = 480;

/// Pose "A": index finger offset to the right of the wrist
fn pose_a() -> Vec<[f32; 2]> {
    vec![[0.50, 0.50], [0.60, 0.48], [0.62, 0.46]]
}

/// Pose "B": index finger offset below the wrist
fn pose_b() -> Vec<[f32; 2]> {
    vec![[0.50, 0.50], [0.52, 0.62], [0.50, 0.66]]
}

fn frame(elapsed: f64, poses: &[Vec<[f32; 2]>]) -> FrameRecord {
    FrameRecord {
        elapsed_secs: elapsed,
        width: WIDTH,
        height: HEIGHT,
        hands: poses
            .iter()
            .map(|keypoints| HandRecord {
                handedness: Handedness::Right,
                keypoints: keypoints.clone(),
            })
            .collect(),
    }
}

/// Build a template by pushing a pose through the same mirror/track/normalize
/// path the session uses, so classification of that exact pose is exact.
fn template_for(symbol: char, pose: Vec<[f32; 2]>) -> CentroidTemplate {
    let mirrored = frame(0.0, &[pose]).mirrored();
    let hands = ReplayTracker.detect_hands(&mirrored);
    let features = normalize(&hands[0].keypoints).unwrap();
    CentroidTemplate {
        symbol,
        features: features.values().to_vec(),
    }
}

fn model() -> CentroidModel {
    CentroidModel::from_templates(
        vec![template_for('A', pose_a()), template_for('B', pose_b())],
        6,
    )
    .unwrap()
}

#[test]
fn full_pipeline_commits_on_each_hand_removal() {
    let mut log = FrameLog::new("pipeline", 3);
    log.push_frame(frame(0.0, &[pose_a()]));
    log.push_frame(frame(1.5, &[pose_a()]));
    log.push_frame(frame(3.0, &[]));
    log.push_frame(frame(4.5, &[pose_b()]));
    log.push_frame(frame(6.0, &[]));

    let summary = replay_log(&log, model(), 1.0).unwrap();
    assert_eq!(summary.commits, 2);
    assert_eq!(summary.final_snapshot.committed_text, "AB");
    assert_eq!(summary.final_snapshot.pending, None);
}

#[test]
fn last_pose_before_removal_wins_across_frames() {
    let mut log = FrameLog::new("lastwins", 3);
    log.push_frame(frame(0.0, &[pose_a()]));
    log.push_frame(frame(1.5, &[pose_b()]));
    log.push_frame(frame(3.0, &[]));

    let summary = replay_log(&log, model(), 1.0).unwrap();
    assert_eq!(summary.final_snapshot.committed_text, "B");
}

#[test]
fn last_hand_wins_within_one_frame() {
    let mut log = FrameLog::new("multihand", 3);
    log.push_frame(frame(0.0, &[pose_a(), pose_b()]));
    log.push_frame(frame(2.0, &[]));

    let summary = replay_log(&log, model(), 1.0).unwrap();
    assert_eq!(summary.final_snapshot.committed_text, "B");
}

#[test]
fn frames_within_the_interval_change_nothing() {
    let session = SharedSession::new(SessionController::new(ReplayTracker, model(), 1.0));

    let first = session.handle_frame(&frame(0.0, &[pose_a()]), Timestamp::from_secs(0.0));
    assert_eq!(first.pending, Some(Symbol('A')));

    // a different pose 0.4s later must be a pure no-op
    let second = session.handle_frame(&frame(0.4, &[pose_b()]), Timestamp::from_secs(0.4));
    assert_eq!(first, second);

    // even a hand-removal frame inside the interval is ignored
    let third = session.handle_frame(&frame(0.8, &[]), Timestamp::from_secs(0.8));
    assert_eq!(third.committed_text, "");
    assert_eq!(third.pending, Some(Symbol('A')));
}

#[test]
fn committed_text_never_shrinks() {
    let mut log = FrameLog::new("monotonic", 3);
    let script: &[(f64, &[Vec<[f32; 2]>])] = &[
        (0.0, &[pose_a()]),
        (2.0, &[]),
        (4.0, &[pose_b()]),
        (6.0, &[pose_b()]),
        (8.0, &[]),
        (10.0, &[]),
        (12.0, &[pose_a()]),
        (14.0, &[]),
    ];
    for (t, poses) in script {
        log.push_frame(frame(*t, poses));
    }
    log.validate().unwrap();

    let mut session = SessionController::new(ReplayTracker, model(), 1.0);
    let mut prev = 0;
    for f in &log.frames {
        let snap = session.handle_frame(f, Timestamp::from_secs(f.elapsed_secs));
        assert!(snap.committed_text.len() >= prev);
        prev = snap.committed_text.len();
    }
    assert_eq!(session.snapshot().committed_text, "ABA");
}

#[test]
fn shared_session_serializes_submitters() {
    let session = SharedSession::new(SessionController::new(ReplayTracker, model(), 0.0));

    // one submitter raises the hand
    let writer = session.clone();
    let handle = std::thread::spawn(move || {
        writer.handle_frame(&frame(0.0, &[pose_a()]), Timestamp::from_secs(0.0));
    });
    handle.join().unwrap();

    // several submitters race on "hand absent"; the commit must fire once
    let mut handles = Vec::new();
    for i in 0..4 {
        let s = session.clone();
        handles.push(std::thread::spawn(move || {
            let t = 1.0 + i as f64;
            s.handle_frame(&frame(t, &[]), Timestamp::from_secs(t));
        }));
    }
    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(session.committed_text(), "A");
    assert_eq!(session.snapshot().pending, None);
}

#[test]
fn degenerate_hand_never_poisons_the_sentence() {
    let collapsed = vec![[0.5, 0.5], [0.5, 0.5], [0.5, 0.5]];
    let mut log = FrameLog::new("degenerate", 3);
    log.push_frame(frame(0.0, &[collapsed]));
    log.push_frame(frame(2.0, &[]));
    log.push_frame(frame(4.0, &[pose_a()]));
    log.push_frame(frame(6.0, &[]));

    let summary = replay_log(&log, model(), 1.0).unwrap();
    // the collapsed hand was present but unclassifiable, so only 'A' commits
    assert_eq!(summary.final_snapshot.committed_text, "A");
    assert_eq!(summary.commits, 1);
}
