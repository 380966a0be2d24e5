pub mod error;
pub mod loader;

pub use error::LoadError;
pub use loader::{collect_dir, collect_profiles, load_profile};
