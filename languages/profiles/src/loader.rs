use std::fs;
use std::path::{Path, PathBuf};

use glotta_core::{Profile, RawProfile, preprocess_profile};

use crate::error::LoadError;

/// Read a raw n-gram profile from a JSON file
pub fn load_profile(path: impl AsRef<Path>) -> Result<RawProfile, LoadError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    tracing::debug!("Loading profile from file: {}", path.display());
    let json = fs::read_to_string(path)?;
    serde_json::from_str(&json).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and preprocess every profile, keeping the order of `paths`
pub fn collect_profiles<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<Profile>, LoadError> {
    let profiles = paths
        .iter()
        .map(|path| -> Result<Profile, LoadError> {
            let path = path.as_ref();
            let raw = load_profile(path)?;
            preprocess_profile(raw).map_err(|source| LoadError::InvalidProfile {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::info!("Loaded {} language profiles", profiles.len());
    Ok(profiles)
}

/// Collect every `*.json` profile directly inside `dir`, sorted by file name
pub fn collect_dir(dir: impl AsRef<Path>) -> Result<Vec<Profile>, LoadError> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory(dir.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        tracing::warn!("No profiles found in {}", dir.display());
    }

    collect_profiles(&paths)
}
