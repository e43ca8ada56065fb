//! Hand landmark types and geometric normalization

pub mod normalize;
pub mod types;

pub use normalize::normalize;
pub use types::{FeatureVector, HandObservation, Handedness, Keypoint};
