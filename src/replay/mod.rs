//! Frame-log recording format and offline replay

pub mod driver;
pub mod frame_log;

pub use driver::{replay_log, ReplaySummary, ReplayTracker};
pub use frame_log::{FrameLog, FrameLogMetadata, FrameRecord, HandRecord, CURRENT_FORMAT_VERSION};
