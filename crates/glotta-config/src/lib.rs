use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::profiles::ProfilesConfig;
use self::report::ReportConfig;

pub mod profiles;
pub mod report;

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub profiles: ProfilesConfig,
    pub report: ReportConfig,

    /// Fallback tracing filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl Config {
    pub fn new() -> Self {
        let log_level = env::var("GLOTTA_LOG").unwrap_or_else(|_| default_log_level());

        Config {
            profiles: ProfilesConfig::new(),
            report: ReportConfig::new(),
            log_level,
        }
    }

    /// Load a JSON config file, falling back to the environment when it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using environment defaults", path.display());
            return Ok(Self::new());
        }

        tracing::info!("Loading config from {}", path.display());
        let reader = BufReader::new(File::open(path)?);
        let config = serde_json::from_reader(reader)?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            profiles: ProfilesConfig::default(),
            report: ReportConfig::default(),
            log_level: default_log_level(),
        }
    }
}
