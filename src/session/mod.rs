//! Session state machine
//!
//! Everything between "a frame arrived" and "the sentence grew": capture
//! rate limiting, hand-presence debouncing, sentence assembly, and the
//! per-frame orchestration that ties them together.

pub mod controller;
pub mod debounce;
pub mod rate_limit;
pub mod sentence;
pub mod shared;

pub use controller::{FrameSnapshot, MultiHandPolicy, SessionController};
pub use debounce::{Presence, PresenceDebouncer, Transition};
pub use rate_limit::CaptureRateLimiter;
pub use sentence::SentenceAssembler;
pub use shared::SharedSession;
