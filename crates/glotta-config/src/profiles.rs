use std::env;

use serde::{Deserialize, Serialize};

/// Where known-language profiles are read from
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ProfilesConfig {
    /// Directory scanned for `*.json` raw profiles, if any
    pub dir: Option<String>,
    /// Extra profile files, loaded after the directory
    pub paths: Vec<String>,
}

impl ProfilesConfig {
    pub fn new() -> Self {
        let dir = env::var("GLOTTA_PROFILES_DIR").ok();

        Self {
            dir,
            paths: vec![],
        }
    }
}
