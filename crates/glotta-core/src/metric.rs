use crate::error::ProfileError;

/// Distance between two aligned frequency vectors
pub trait DistanceMetric {
    fn distance(&self, predicted: &[f64], actual: &[f64]) -> Result<f64, ProfileError>;
}

/// Mean of squared element-wise differences
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanSquaredError;

impl DistanceMetric for MeanSquaredError {
    fn distance(&self, predicted: &[f64], actual: &[f64]) -> Result<f64, ProfileError> {
        calculate_mse(predicted, actual)
    }
}

/// `sum((actual[i] - predicted[i])^2) / n`
///
/// # Errors
/// [`ProfileError::LengthMismatch`] when the lengths differ and
/// [`ProfileError::EmptySequence`] when both are empty.
pub fn calculate_mse(predicted: &[f64], actual: &[f64]) -> Result<f64, ProfileError> {
    if predicted.len() != actual.len() {
        return Err(ProfileError::LengthMismatch {
            left: predicted.len(),
            right: actual.len(),
        });
    }
    if actual.is_empty() {
        return Err(ProfileError::EmptySequence);
    }

    let sum: f64 = predicted
        .iter()
        .zip(actual)
        .map(|(p, a)| (a - p).powi(2))
        .sum();

    Ok(sum / actual.len() as f64)
}
