//! Configuration loading and resolution.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use baseline_check::BaselineDataset;

use crate::error::CliResult;

pub const DATA_DIR_ENV: &str = "BASELINE_CHECK_DATA";
pub const DATASET_ENV: &str = "BASELINE_CHECK_DATASET";

/// Resolve the persistence directory: flag, then env var, then the home default.
pub fn resolve_data_dir(explicit: Option<&str>) -> PathBuf {
    if let Some(path) = explicit {
        return PathBuf::from(path);
    }

    if let Ok(env_path) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(env_path);
    }

    resolve_default_data_dir()
}

fn resolve_default_data_dir() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());

    PathBuf::from(home).join(".baseline-check")
}

/// Resolve a custom dataset path. `None` selects the embedded dataset.
pub fn resolve_dataset_path(explicit: Option<&str>) -> Option<PathBuf> {
    explicit
        .map(str::to_string)
        .or_else(|| std::env::var(DATASET_ENV).ok())
        .filter(|p| !p.is_empty())
        .map(PathBuf::from)
}

/// Load the dataset at `path`, or borrow the embedded one.
pub fn load_dataset(path: Option<&Path>) -> CliResult<Cow<'static, BaselineDataset>> {
    match path {
        Some(path) => {
            let dataset = BaselineDataset::from_file(path)?;
            tracing::info!(
                "Using dataset {} ({} entries)",
                path.display(),
                dataset.len()
            );
            Ok(Cow::Owned(dataset))
        }
        None => Ok(Cow::Borrowed(BaselineDataset::builtin())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_data_dir_wins() {
        assert_eq!(
            resolve_data_dir(Some("/tmp/bc")),
            PathBuf::from("/tmp/bc")
        );
        assert_eq!(
            resolve_dataset_path(Some("custom.json")),
            Some(PathBuf::from("custom.json"))
        );
    }

    #[test]
    fn test_default_data_dir_ends_with_app_dir() {
        if std::env::var(DATA_DIR_ENV).is_err() {
            assert!(resolve_data_dir(None).ends_with(".baseline-check"));
        }
    }

    #[test]
    fn test_load_dataset() {
        let builtin = load_dataset(None).unwrap();
        assert!(matches!(builtin, Cow::Borrowed(_)));
        assert_eq!(builtin.support("grid"), Some(true));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("baseline.json");
        std::fs::write(&path, r#"{"grid": false}"#).unwrap();
        let custom = load_dataset(Some(&path)).unwrap();
        assert_eq!(custom.support("grid"), Some(false));

        assert!(load_dataset(Some(&dir.path().join("missing.json"))).is_err());
    }
}
