use std::collections::BTreeSet;

use crate::error::ProfileError;
use crate::metric::{DistanceMetric, MeanSquaredError};
use crate::types::{Profile, Token};

/// MSE distance between two profiles over the union of their characters
pub fn compare_profiles(unknown: &Profile, other: &Profile) -> Result<f64, ProfileError> {
    compare_with(&MeanSquaredError, unknown, other)
}

/// Align both profiles on the union of their characters and measure with `metric`.
///
/// A character missing from one side counts as 0.0 on that side.
pub fn compare_with<M: DistanceMetric + ?Sized>(
    metric: &M,
    unknown: &Profile,
    other: &Profile,
) -> Result<f64, ProfileError> {
    let all_chars: BTreeSet<Token> = unknown
        .freq()
        .keys()
        .chain(other.freq().keys())
        .copied()
        .collect();

    let unknown_aligned: Vec<f64> = all_chars.iter().map(|c| unknown.frequency(*c)).collect();
    let other_aligned: Vec<f64> = all_chars.iter().map(|c| other.frequency(*c)).collect();

    metric.distance(&unknown_aligned, &other_aligned)
}
