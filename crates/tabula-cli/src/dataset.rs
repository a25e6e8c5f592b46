use anyhow::{Context, Result, bail};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabula_types::{Collection, load};
use tracing::{debug, info};

use crate::config::{Config, expand_tilde};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSource {
    /// Catalog key, when the dataset was named through the config file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    pub title: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub source: DatasetSource,
    pub collection: Collection,
}

/// Resolve a `<DATASET>` argument: a catalog key first, then a file path.
pub fn resolve(config: &Config, config_path: &Path, target: &str) -> Result<DatasetSource> {
    if let Some(path) = config.resolve_dataset(target, config_path) {
        let title = config.datasets[target]
            .title
            .clone()
            .unwrap_or_else(|| target.to_string());
        debug!(key = target, path = %path.display(), "resolved catalog dataset");
        return Ok(DatasetSource {
            key: Some(target.to_string()),
            title,
            path,
        });
    }

    let path = expand_tilde(target);
    if !path.exists() {
        bail!(
            "Unknown dataset '{}': not a catalog key and no such file",
            target
        );
    }

    let title = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.to_string());
    Ok(DatasetSource {
        key: None,
        title,
        path,
    })
}

pub fn open(config: &Config, config_path: &Path, target: &str) -> Result<LoadedDataset> {
    let source = resolve(config, config_path, target)?;
    let collection = load::from_path(&source.path)
        .with_context(|| format!("Failed to load dataset: {}", source.path.display()))?;

    info!(
        dataset = %source.title,
        records = collection.len(),
        "loaded dataset"
    );
    Ok(LoadedDataset { source, collection })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatasetEntry;
    use tempfile::TempDir;

    #[test]
    fn test_open_by_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("weekly.json");
        std::fs::write(&path, r#"[{"day": "Mon", "count": 5}]"#)?;

        let config_path = temp_dir.path().join("config.toml");
        let loaded = open(&Config::default(), &config_path, &path.to_string_lossy())?;
        assert_eq!(loaded.source.title, "weekly");
        assert_eq!(loaded.source.key, None);
        assert_eq!(loaded.collection.len(), 1);
        Ok(())
    }

    #[test]
    fn test_catalog_key_wins_over_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        std::fs::write(temp_dir.path().join("t.json"), r#"{"items": []}"#)?;

        let mut config = Config::default();
        config.set_dataset(
            "trends",
            DatasetEntry {
                title: Some("Monthly trends".to_string()),
                path: PathBuf::from("t.json"),
            },
        );

        let config_path = temp_dir.path().join("config.toml");
        let loaded = open(&config, &config_path, "trends")?;
        assert_eq!(loaded.source.key.as_deref(), Some("trends"));
        assert_eq!(loaded.source.title, "Monthly trends");
        assert!(loaded.collection.is_empty());
        Ok(())
    }

    #[test]
    fn test_unknown_dataset_is_an_error() {
        let err = resolve(&Config::default(), Path::new("config.toml"), "nope-404")
            .unwrap_err()
            .to_string();
        assert!(err.contains("Unknown dataset 'nope-404'"));
    }

    #[test]
    fn test_malformed_file_reports_path() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2]")?;

        let err = open(&Config::default(), &temp_dir.path().join("c.toml"), &path.to_string_lossy())
            .unwrap_err();
        assert!(format!("{:#}", err).contains("record 0 is not an object"));
        Ok(())
    }
}
