use crate::error::ProfileError;
use crate::types::{FrequencyMap, Token};

/// Relative frequency of every distinct token.
///
/// The divisor is the total token count, duplicates included.
pub fn calculate_frequencies(tokens: &[Token]) -> Result<FrequencyMap, ProfileError> {
    if tokens.is_empty() {
        return Err(ProfileError::EmptyTokens);
    }

    let mut counts: FrequencyMap = FrequencyMap::new();
    for token in tokens {
        *counts.entry(*token).or_insert(0.0) += 1.0;
    }

    let total = tokens.len() as f64;
    for count in counts.values_mut() {
        *count /= total;
    }

    Ok(counts)
}
