//! # Signscribe
//!
//! A fingerspelling session engine that turns a live stream of hand-pose
//! observations into committed text.
//!
//! ## Overview
//!
//! Per-frame hand keypoints (from an external tracker such as MediaPipe
//! Hands) are normalized into a pose-invariant feature vector, classified
//! into a symbol from a fixed alphabet, and debounced into a running
//! sentence: a symbol becomes permanent only when the hand leaves the frame.
//!
//! ## Quick Start
//!
//! ```no_run
//! use signscribe::classify::CentroidModel;
//! use signscribe::replay::{FrameLog, ReplayTracker};
//! use signscribe::session::SessionController;
//! use signscribe::time::Timestamp;
//!
//! let model = CentroidModel::load("model.json", 42).expect("load model");
//! let mut session = SessionController::new(ReplayTracker, model, 1.0);
//!
//! let log = FrameLog::load("frames.json").expect("load frames");
//! for frame in &log.frames {
//!     let snapshot = session.handle_frame(frame, Timestamp::from_secs(frame.elapsed_secs));
//!     println!("pending={:?} sentence={}", snapshot.pending, snapshot.committed_text);
//! }
//! ```
//!
//! ## Architecture
//!
//! The system is organized into the following modules:
//!
//! - [`landmark`]: Keypoint types and translation/scale normalization
//! - [`alphabet`]: The fixed, ordered symbol alphabet
//! - [`classify`]: Classifier contract and the bundled nearest-centroid model
//! - [`tracking`]: Hand-tracker contract and frame mirroring
//! - [`session`]: Rate limiting, presence debouncing, sentence assembly,
//!   and the per-frame orchestration entry point
//! - [`correction`]: On-demand grammar correction via an external model
//! - [`replay`]: Frame-log format and offline replay driver
//! - [`time`]: Monotonic timestamps
//! - [`app`]: CLI and configuration management
//!
//! ## Frame Pipeline
//!
//! ```text
//! ┌───────────┐   ┌────────────┐   ┌────────────┐   ┌────────────┐
//! │   Frame   │──▶│    Rate    │──▶│  Landmark  │──▶│   Symbol   │
//! │ (tracker) │   │  Limiter   │   │ Normalizer │   │ Classifier │
//! └───────────┘   └────────────┘   └────────────┘   └────────────┘
//!                                                          │
//!                                                          ▼
//! ┌───────────┐   ┌────────────┐                    ┌────────────┐
//! │ Snapshot  │◀──│  Sentence  │◀───── commit ──────│  Presence  │
//! │  Output   │   │ Assembler  │   (hand departed)  │ Debouncer  │
//! └───────────┘   └────────────┘                    └────────────┘
//! ```

pub mod time;
pub mod alphabet;
pub mod landmark;
pub mod classify;
pub mod tracking;
pub mod session;
pub mod correction;
pub mod replay;
pub mod app;

// Re-export commonly used types
pub use alphabet::{Alphabet, Symbol};
pub use landmark::{normalize, FeatureVector, HandObservation, Handedness, Keypoint};
pub use session::{FrameSnapshot, SessionController, SharedSession};
pub use time::Timestamp;

/// Result type alias for the session engine
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the session engine
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Normalization input collapsed to a single point; recovered locally by
    /// skipping that hand's classification for the current frame.
    #[error("degenerate hand geometry: all keypoints coincide with the anchor")]
    DegenerateGeometry,

    /// Frame input that must be rejected before any session state mutates.
    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    /// The corrector was asked to correct empty text.
    #[error("no input text provided for correction")]
    NoInputProvided,

    /// The external grammar-correction call failed.
    #[error("grammar correction failed: {0}")]
    CorrectionFailure(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
