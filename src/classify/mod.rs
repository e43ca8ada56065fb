//! Symbol classification
//!
//! The trained pose model is opaque to the session engine: anything that maps
//! a feature vector to exactly one alphabet symbol satisfies the contract.
//! [`CentroidModel`] is the bundled default, a nearest-centroid matcher over
//! per-class template vectors.

pub mod centroid;

pub use centroid::CentroidModel;

use crate::alphabet::Symbol;
use crate::landmark::FeatureVector;

/// Maps a feature vector to a symbol from the fixed alphabet.
///
/// Input width must match the model's trained width. Models with a fixed
/// width report it through [`feature_width`](Self::feature_width) so callers
/// can reject mismatched input up front instead of per frame.
pub trait SymbolClassifier {
    fn classify(&self, features: &FeatureVector) -> Symbol;

    /// Trained input width, if the model has a fixed one
    fn feature_width(&self) -> Option<usize> {
        None
    }
}
