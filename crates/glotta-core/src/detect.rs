use crate::compare::compare_with;
use crate::error::ProfileError;
use crate::metric::{DistanceMetric, MeanSquaredError};
use crate::types::{Detection, Profile};

/// Pick the closer of two known profiles.
///
/// On an exact tie the alphabetically smaller name wins.
pub fn detect_language(
    unknown: &Profile,
    profile_1: &Profile,
    profile_2: &Profile,
) -> Result<String, ProfileError> {
    pick_with(&MeanSquaredError, unknown, profile_1, profile_2)
}

/// Distance to every known profile, closest first.
///
/// The sort is stable and keyed on distance only, so ties keep input order.
pub fn detect_language_advanced(
    unknown: &Profile,
    known: &[Profile],
) -> Result<Vec<Detection>, ProfileError> {
    rank_with(&MeanSquaredError, unknown, known)
}

fn pick_with<M: DistanceMetric>(
    metric: &M,
    unknown: &Profile,
    profile_1: &Profile,
    profile_2: &Profile,
) -> Result<String, ProfileError> {
    let mse_1 = compare_with(metric, unknown, profile_1)?;
    let mse_2 = compare_with(metric, unknown, profile_2)?;

    if mse_1 > mse_2 {
        return Ok(profile_2.name().to_string());
    }
    if mse_2 > mse_1 {
        return Ok(profile_1.name().to_string());
    }

    // Same distance: alphabetical order decides
    if profile_1.name() > profile_2.name() {
        Ok(profile_2.name().to_string())
    } else {
        Ok(profile_1.name().to_string())
    }
}

fn rank_with<M: DistanceMetric>(
    metric: &M,
    unknown: &Profile,
    known: &[Profile],
) -> Result<Vec<Detection>, ProfileError> {
    let mut distances = known
        .iter()
        .map(|profile| -> Result<Detection, ProfileError> {
            let distance = compare_with(metric, unknown, profile)?;
            tracing::debug!("{} vs {}: {distance}", unknown.name(), profile.name());
            Ok(Detection::new(profile.name(), distance))
        })
        .collect::<Result<Vec<_>, _>>()?;

    distances.sort_by(|a, b| a.distance.total_cmp(&b.distance));
    Ok(distances)
}

/// Known-language profiles ranked against unknown texts with one metric
pub struct Detector<M: DistanceMetric = MeanSquaredError> {
    metric: M,
    known: Vec<Profile>,
}

impl Default for Detector {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Detector {
    pub fn new(known: Vec<Profile>) -> Self {
        Self::with_metric(MeanSquaredError, known)
    }
}

impl<M: DistanceMetric> Detector<M> {
    pub fn with_metric(metric: M, known: Vec<Profile>) -> Self {
        Self { metric, known }
    }

    pub fn known(&self) -> &[Profile] {
        &self.known
    }

    /// Every known profile with its distance to `unknown`, closest first
    pub fn rank(&self, unknown: &Profile) -> Result<Vec<Detection>, ProfileError> {
        rank_with(&self.metric, unknown, &self.known)
    }

    /// Closest known profile
    pub fn best(&self, unknown: &Profile) -> Result<Detection, ProfileError> {
        self.rank(unknown)?
            .into_iter()
            .next()
            .ok_or(ProfileError::NoKnownProfiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::create_language_profile;
    use crate::types::FrequencyMap;

    const EN_TEXT: &str = "It is a truth universally acknowledged, that a single man in \
        possession of a good fortune, must be in want of a wife. However little known the \
        feelings or views of such a man may be on his first entering a neighbourhood, this \
        truth is so well fixed.";
    const DE_TEXT: &str = "Als Gregor Samsa eines Morgens aus unruhigen Träumen erwachte, fand er \
        sich in seinem Bett zu einem ungeheueren Ungeziefer verwandelt. Er lag auf seinem \
        panzerartig harten Rücken und sah, wenn er den Kopf ein wenig hob, seinen gewölbten, \
        braunen Bauch.";
    const ES_TEXT: &str = "En un lugar de la Mancha, de cuyo nombre no quiero acordarme, no ha \
        mucho tiempo que vivía un hidalgo de los de lanza en astillero, adarga antigua, rocín \
        flaco y galgo corredor. Una olla de algo más vaca que carnero, salpicón las más noches.";

    fn known() -> Vec<Profile> {
        vec![
            create_language_profile("en", EN_TEXT).unwrap(),
            create_language_profile("de", DE_TEXT).unwrap(),
            create_language_profile("es", ES_TEXT).unwrap(),
        ]
    }

    #[test]
    fn test_detect_picks_closer_profile() {
        let profiles = known();
        let text = "Whether I shall turn out to be the hero of my own life, or whether that \
            station will be held by anybody else, these pages must show.";
        let unknown = create_language_profile("unknown", text).unwrap();

        assert_eq!(detect_language(&unknown, &profiles[0], &profiles[1]).unwrap(), "en");
        assert_eq!(detect_language(&unknown, &profiles[1], &profiles[0]).unwrap(), "en");
    }

    #[test]
    fn test_detect_tie_returns_alphabetically_first() {
        let freq = FrequencyMap::from([('a', 0.5), ('b', 0.5)]);
        let unknown = Profile::new("unknown", FrequencyMap::from([('a', 1.0)])).unwrap();
        let english = Profile::new("English", freq.clone()).unwrap();
        let german = Profile::new("German", freq).unwrap();

        assert_eq!(detect_language(&unknown, &english, &german).unwrap(), "English");
        assert_eq!(detect_language(&unknown, &german, &english).unwrap(), "English");
    }

    #[test]
    fn test_detect_advanced_is_sorted() {
        let text = "Der schnelle braune Fuchs springt über den faulen Hund und dann rennt er \
            in den dunklen Wald zurück.";
        let unknown = create_language_profile("unknown", text).unwrap();
        let ranked = detect_language_advanced(&unknown, &known()).unwrap();

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].name, "de");
        assert!(ranked.windows(2).all(|pair| pair[0].distance <= pair[1].distance));
    }

    #[test]
    fn test_detect_advanced_ties_keep_input_order() {
        let freq = FrequencyMap::from([('x', 1.0)]);
        let unknown = Profile::new("unknown", FrequencyMap::from([('y', 1.0)])).unwrap();
        let profiles = vec![
            Profile::new("zulu", freq.clone()).unwrap(),
            Profile::new("alpha", freq).unwrap(),
        ];

        let ranked = detect_language_advanced(&unknown, &profiles).unwrap();
        let names: Vec<&str> = ranked.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["zulu", "alpha"]);
    }

    #[test]
    fn test_detect_advanced_empty_known() {
        let unknown = create_language_profile("unknown", "hello").unwrap();
        assert_eq!(detect_language_advanced(&unknown, &[]), Ok(vec![]));
    }

    #[test]
    fn test_detector_best() {
        let detector = Detector::new(known());
        let text = "Yo no sé dónde está la biblioteca, pero la casa de mi hermano queda cerca.";
        let unknown = create_language_profile("unknown", text).unwrap();

        assert_eq!(detector.known().len(), 3);
        assert_eq!(detector.best(&unknown).unwrap().name, "es");
    }

    #[test]
    fn test_detector_best_without_profiles() {
        let unknown = create_language_profile("unknown", "hello").unwrap();
        assert_eq!(
            Detector::default().best(&unknown),
            Err(ProfileError::NoKnownProfiles)
        );
    }

    #[test]
    fn test_detect_propagates_comparison_failure() {
        let empty = Profile::new("empty", FrequencyMap::new()).unwrap();
        let profiles = vec![Profile::new("other", FrequencyMap::new()).unwrap()];

        assert_eq!(
            detect_language_advanced(&empty, &profiles),
            Err(ProfileError::EmptySequence)
        );
    }
}
