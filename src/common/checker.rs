//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::Sample;
use crate::error::{BoostError, Result};


const SIMPLEX_TOLERANCE: f32 = 1e-3;


/// Check whether the training sample is valid or not.
/// Returns the number of attributes shared by every sample.
#[inline]
pub(crate) fn check_sample(samples: &[Sample]) -> Result<usize> {
    // The training set must have at least one sample.
    let first = samples.first()
        .ok_or(BoostError::EmptySample)?;


    // Every sample must have the same number of attributes.
    let n_attributes = first.n();
    if let Some(s) = samples.iter().find(|s| s.n() != n_attributes) {
        return Err(BoostError::DimensionMismatch {
            expected: n_attributes,
            actual: s.n(),
        });
    }
    Ok(n_attributes)
}


/// Check the pair of a training set and its weights.
#[inline(always)]
pub(crate) fn check_weights(samples: &[Sample], weights: &[f32]) {
    assert_eq!(
        samples.len(), weights.len(),
        "every sample needs exactly one weight"
    );
    debug_assert!(
        weights.iter().all(|w| *w >= 0f32),
        "sample weights must be non-negative"
    );
}


/// Check whether `weights` is a probability vector.
#[inline(always)]
pub(crate) fn check_distribution(weights: &[f32]) {
    let sum = weights.iter().map(|w| *w as f64).sum::<f64>();
    let diff = (sum - 1f64).abs();
    assert!(
        diff < SIMPLEX_TOLERANCE as f64,
        "sum(weights[..]) = {sum}"
    );
}
