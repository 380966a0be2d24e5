use std::path::PathBuf;

use glotta_core::ProfileError;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid profile {path}: {source}")]
    InvalidProfile {
        path: PathBuf,
        #[source]
        source: ProfileError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
