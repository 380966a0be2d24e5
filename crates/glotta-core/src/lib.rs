pub mod compare;
pub mod detect;
pub mod error;
pub mod frequency;
pub mod metric;
pub mod profile;
pub mod report;
pub mod tokenizer;
pub mod types;

pub use compare::compare_profiles;
pub use detect::{Detector, detect_language, detect_language_advanced};
pub use error::ProfileError;
pub use frequency::calculate_frequencies;
pub use metric::{DistanceMetric, MeanSquaredError, calculate_mse};
pub use profile::{create_language_profile, preprocess_profile};
pub use report::{format_report, print_report};
pub use tokenizer::{Tokenizer, UnigramTokenizer, tokenize};
pub use types::{Detection, FrequencyMap, Profile, RawProfile, Token};
