use crate::error::ProfileError;
use crate::frequency::calculate_frequencies;
use crate::tokenizer::tokenize;
use crate::types::{FrequencyMap, Profile, RawProfile};

/// Build the unigram profile of `text` under the label `language`
pub fn create_language_profile(language: &str, text: &str) -> Result<Profile, ProfileError> {
    if language.trim().is_empty() {
        return Err(ProfileError::EmptyName);
    }

    let freq = calculate_frequencies(&tokenize(text))?;
    Profile::new(language, freq)
}

/// Project a raw n-gram count profile onto lower-cased unigram frequencies.
///
/// Only keys that are a single character once trimmed are kept; every other
/// n-gram is dropped. Case variants of one letter merge into a single entry.
///
/// The trimmed char is what gets lower-cased, so `" A"` counts toward `a`.
pub fn preprocess_profile(raw: RawProfile) -> Result<Profile, ProfileError> {
    let name = raw.name.ok_or(ProfileError::MissingField("name"))?;
    let n_words = raw.n_words.ok_or(ProfileError::MissingField("n_words"))?;
    let counts = raw.freq.ok_or(ProfileError::MissingField("freq"))?;

    let total = match n_words.first() {
        Some(&total) if total.is_finite() && total > 0.0 => total,
        other => return Err(ProfileError::InvalidUnigramTotal(other.copied())),
    };

    let mut freq = FrequencyMap::new();
    for (ngram, count) in &counts {
        let mut chars = ngram.trim().chars();
        let (Some(unigram), None) = (chars.next(), chars.next()) else {
            continue;
        };

        // Lower-casing may expand one char; count each result as the tokenizer would
        for lower in unigram.to_lowercase() {
            *freq.entry(lower).or_insert(0.0) += count / total;
        }
    }

    tracing::debug!(
        "Preprocessed profile {name}: {} of {} n-grams kept as unigrams",
        freq.len(),
        counts.len()
    );

    Profile::new(name, freq)
}
