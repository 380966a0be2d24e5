use std::env;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReportConfig {
    /// Print only the N closest languages, all of them when unset
    pub top: Option<usize>,
}

impl ReportConfig {
    pub fn new() -> Self {
        let top = env::var("GLOTTA_TOP").ok().and_then(|v| v.parse().ok());

        Self { top }
    }
}
