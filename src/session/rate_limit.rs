//! Capture Rate Limiting
//!
//! Hand tracking and classifier inference are expensive per frame, so
//! classification runs at a fixed ceiling (default 1 Hz) independent of the
//! caller's frame rate. A rejected frame is a pure no-op for the session,
//! not an error.

use crate::time::Timestamp;

/// Enforces a minimum wall-clock interval between classifier invocations.
#[derive(Debug, Clone, Copy)]
pub struct CaptureRateLimiter {
    interval_secs: f64,
}

impl CaptureRateLimiter {
    /// Create with the minimum interval between captures, in seconds.
    pub fn new(interval_secs: f64) -> Self {
        Self { interval_secs }
    }

    /// Configured interval in seconds
    pub fn interval_secs(&self) -> f64 {
        self.interval_secs
    }

    /// True iff enough time has passed since the last successful capture.
    /// `last` is `None` before the first capture, so the first frame always
    /// passes.
    pub fn should_capture(&self, now: Timestamp, last: Option<Timestamp>) -> bool {
        match last {
            Some(last) => now.secs_since(last) >= self.interval_secs,
            None => true,
        }
    }
}
