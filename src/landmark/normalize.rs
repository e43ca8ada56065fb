//! Landmark Normalization
//!
//! Converts a raw ordered keypoint sequence into a translation- and
//! scale-invariant feature vector. The wrist anchor (index 0) is subtracted
//! from every point, the offsets are flattened in keypoint order, and the
//! result is divided by its maximum absolute value. Max-abs scaling (rather
//! than a geometric norm) keeps a single outlier joint from dominating the
//! whole vector.

use crate::landmark::types::{FeatureVector, Keypoint};
use crate::{Error, Result};

/// Normalize a hand's keypoints into a classifier-ready feature vector.
///
/// Pure function. Fails with [`Error::DegenerateGeometry`] when every
/// keypoint coincides with the anchor (max-abs is zero, so scaling is
/// undefined); empty input is treated the same way.
pub fn normalize(keypoints: &[Keypoint]) -> Result<FeatureVector> {
    let Some(anchor) = keypoints.first() else {
        return Err(Error::DegenerateGeometry);
    };
    let (bx, by) = (anchor.x, anchor.y);

    let mut values = Vec::with_capacity(keypoints.len() * 2);
    for kp in keypoints {
        values.push(kp.x - bx);
        values.push(kp.y - by);
    }

    let max_abs = values.iter().fold(0.0_f32, |m, v| m.max(v.abs()));
    if max_abs == 0.0 {
        return Err(Error::DegenerateGeometry);
    }

    for v in &mut values {
        *v /= max_abs;
    }
    Ok(FeatureVector::from_values(values))
}
