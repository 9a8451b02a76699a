//! Config storage for desk apps
//!
//! JSON files under the platform config directory.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Get the config directory for an app.
pub fn config_dir(app_name: &str) -> PathBuf {
    directories::ProjectDirs::from("org", "deskcalc", app_name)
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Read and deserialize a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Serialize to pretty JSON, creating parent directories as needed.
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let contents = serde_json::to_string_pretty(value)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        name: String,
        size: u32,
    }

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("deskcore-storage-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_save_then_load() {
        let dir = scratch("roundtrip");
        let path = dir.join("nested").join("sample.json");
        let sample = Sample { name: "calc".into(), size: 15 };

        save_json(&path, &sample).unwrap();
        let loaded: Sample = load_json(&path).unwrap();
        assert_eq!(loaded, sample);

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = scratch("missing").join("nope.json");
        let err = load_json::<Sample>(&path).unwrap_err();
        assert!(matches!(err, StorageError::Io(_)));
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let dir = scratch("malformed");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = load_json::<Sample>(&path).unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));

        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_config_dir_ends_with_app_name() {
        let dir = config_dir("deskcalc");
        match directories::ProjectDirs::from("org", "deskcalc", "deskcalc") {
            Some(dirs) => {
                assert_eq!(dir, dirs.config_dir());
                assert!(dir.to_string_lossy().contains("deskcalc"));
            }
            None => assert_eq!(dir, PathBuf::from(".")),
        }
    }
}
