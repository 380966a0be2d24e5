use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// One normalized character of input text
pub type Token = char;

/// Character to relative frequency. Characters absent from the source are omitted.
pub type FrequencyMap = HashMap<Token, f64>;

/// Named unigram frequency profile of a language or a text.
///
/// Built once through [`Profile::new`] (or the builders in [`crate::profile`])
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProfileRecord")]
pub struct Profile {
    name: String,
    freq: FrequencyMap,
}

impl Profile {
    /// Create a profile from an already normalized frequency map
    pub fn new(name: impl Into<String>, freq: FrequencyMap) -> Result<Self, ProfileError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProfileError::EmptyName);
        }

        if let Some((&token, &value)) = freq
            .iter()
            .find(|(_, value)| !value.is_finite() || !(0.0..=1.0).contains(*value))
        {
            return Err(ProfileError::InvalidFrequency { token, value });
        }

        Ok(Self { name, freq })
    }

    /// Language label
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn freq(&self) -> &FrequencyMap {
        &self.freq
    }

    /// Relative frequency of a character, 0.0 when the profile never saw it
    pub fn frequency(&self, token: Token) -> f64 {
        self.freq.get(&token).copied().unwrap_or(0.0)
    }
}

#[derive(Deserialize)]
struct ProfileRecord {
    name: String,
    freq: FrequencyMap,
}

impl TryFrom<ProfileRecord> for Profile {
    type Error = ProfileError;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        Profile::new(record.name, record.freq)
    }
}

/// Externally produced profile holding absolute n-gram counts.
///
/// All fields are optional here so a missing key surfaces as
/// [`ProfileError::MissingField`] during preprocessing instead of a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawProfile {
    #[serde(default)]
    pub name: Option<String>,
    /// N-gram (any length) to absolute count
    #[serde(default)]
    pub freq: Option<HashMap<String, f64>>,
    /// First element is the total unigram count
    #[serde(default)]
    pub n_words: Option<Vec<f64>>,
}

/// Distance from an unknown profile to one known language
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub name: String,
    pub distance: f64,
}

impl Detection {
    pub fn new(name: impl Into<String>, distance: f64) -> Self {
        Self {
            name: name.into(),
            distance,
        }
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: MSE {:.5}", self.name, self.distance)
    }
}
