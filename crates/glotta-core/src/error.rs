/// Every way a profile cannot be built or compared
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("No tokens left after normalization")]
    EmptyTokens,

    #[error("Profile name must not be empty")]
    EmptyName,

    #[error("Raw profile is missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid unigram total: {0:?}")]
    InvalidUnigramTotal(Option<f64>),

    #[error("Frequency of {token:?} is outside [0, 1]: {value}")]
    InvalidFrequency { token: char, value: f64 },

    #[error("Sequences differ in length: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("Cannot compute a distance over empty sequences")]
    EmptySequence,

    #[error("No known profiles to compare against")]
    NoKnownProfiles,
}
