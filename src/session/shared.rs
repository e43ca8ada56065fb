//! Shared Session Handle
//!
//! Exactly one logical session exists at a time, and the debounce transition
//! depends on reading and writing presence and pending state consistently:
//! two interleaved "hand absent" frames could otherwise double-commit. The
//! handle therefore holds the whole `handle_frame` sequence under a single
//! lock acquisition. Correction calls operate on a text snapshot taken here
//! and run without the lock.

use crate::classify::SymbolClassifier;
use crate::session::controller::{FrameSnapshot, SessionController};
use crate::tracking::{HandTracker, Mirror};
use crate::time::Timestamp;
use parking_lot::Mutex;
use std::sync::Arc;

/// Clonable, thread-safe handle to one session.
pub struct SharedSession<T: HandTracker, C: SymbolClassifier> {
    inner: Arc<Mutex<SessionController<T, C>>>,
}

impl<T: HandTracker, C: SymbolClassifier> Clone for SharedSession<T, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: HandTracker, C: SymbolClassifier> SharedSession<T, C> {
    pub fn new(controller: SessionController<T, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(controller)),
        }
    }

    /// Process one frame atomically with respect to other submitters.
    pub fn handle_frame(&self, frame: &T::Frame, now: Timestamp) -> FrameSnapshot
    where
        T::Frame: Mirror,
    {
        self.inner.lock().handle_frame(frame, now)
    }

    /// Snapshot of the current session state
    pub fn snapshot(&self) -> FrameSnapshot {
        self.inner.lock().snapshot()
    }

    /// Committed text snapshot, e.g. as input to the grammar corrector
    pub fn committed_text(&self) -> String {
        self.inner.lock().snapshot().committed_text
    }
}
