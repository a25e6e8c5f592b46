use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tabula_engine::{DEFAULT_PALETTE, DEFAULT_SERIES_COUNT};
use tabula_types::{ChartKind, ViewKind};
use tracing::warn;

pub const CONFIG_ENV: &str = "TABULA_CONFIG";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. TABULA_CONFIG environment variable (with tilde expansion)
/// 3. Platform config directory
/// 4. ~/.tabula/config.toml
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("tabula").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".tabula").join("config.toml"));
    }

    bail!("Could not determine config path: no HOME directory or config directory found")
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub default_view: ViewKind,
    #[serde(default)]
    pub default_chart: ChartKind,
    #[serde(default = "default_series_count")]
    pub default_series: usize,
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_series_count() -> usize {
    DEFAULT_SERIES_COUNT
}

fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect()
}

fn default_color() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_view: ViewKind::default(),
            default_chart: ChartKind::default(),
            default_series: DEFAULT_SERIES_COUNT,
            palette: default_palette(),
            color: true,
        }
    }
}

impl DisplayConfig {
    /// Configured palette, or the built-in one when the configured list is empty.
    pub fn palette(&self) -> Vec<String> {
        if self.palette.is_empty() {
            warn!("display.palette is empty, using the default palette");
            default_palette()
        } else {
            self.palette.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetEntry {
    #[serde(default)]
    pub title: Option<String>,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub datasets: BTreeMap<String, DatasetEntry>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn set_dataset(&mut self, key: impl Into<String>, entry: DatasetEntry) {
        self.datasets.insert(key.into(), entry);
    }

    /// File behind a catalog key. Relative paths resolve against the
    /// directory holding the config file.
    pub fn resolve_dataset(&self, key: &str, config_path: &Path) -> Option<PathBuf> {
        let entry = self.datasets.get(key)?;
        let path = expand_tilde(&entry.path.to_string_lossy());
        if path.is_absolute() {
            return Some(path);
        }

        let base = config_path.parent().unwrap_or_else(|| Path::new("."));
        Some(base.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.datasets.is_empty());
        assert_eq!(config.display.default_view, ViewKind::Table);
        assert_eq!(config.display.default_series, 3);
        assert_eq!(config.display.palette.len(), 12);
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(config, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_display_section() -> Result<()> {
        let config: Config = toml::from_str(
            r#"
            [display]
            default_view = "chart"
            default_chart = "line"

            [datasets.trends]
            title = "Monthly trends"
            path = "data/trends.json"
            "#,
        )?;

        assert_eq!(config.display.default_view, ViewKind::Chart);
        assert_eq!(config.display.default_chart, ChartKind::Line);
        assert_eq!(config.display.default_series, 3);
        assert!(config.display.color);
        assert_eq!(
            config.datasets["trends"].title.as_deref(),
            Some("Monthly trends")
        );
        Ok(())
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.display.palette = vec!["#000000".to_string()];
        config.set_dataset(
            "weekly",
            DatasetEntry {
                title: None,
                path: PathBuf::from("weekly.json"),
            },
        );

        config.save_to(&config_path)?;
        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        Ok(())
    }

    #[test]
    fn test_resolve_dataset_relative_to_config_dir() {
        let mut config = Config::default();
        config.set_dataset(
            "trends",
            DatasetEntry {
                title: None,
                path: PathBuf::from("data/trends.json"),
            },
        );
        config.set_dataset(
            "abs",
            DatasetEntry {
                title: None,
                path: PathBuf::from("/srv/abs.json"),
            },
        );

        let config_path = Path::new("/etc/tabula/config.toml");
        assert_eq!(
            config.resolve_dataset("trends", config_path),
            Some(PathBuf::from("/etc/tabula/data/trends.json"))
        );
        assert_eq!(
            config.resolve_dataset("abs", config_path),
            Some(PathBuf::from("/srv/abs.json"))
        );
        assert_eq!(config.resolve_dataset("missing", config_path), None);
    }

    #[test]
    fn test_empty_palette_falls_back() {
        let display = DisplayConfig {
            palette: Vec::new(),
            ..DisplayConfig::default()
        };
        assert_eq!(display.palette()[0], "#6366F1");
    }

    #[test]
    fn test_explicit_config_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/tabula.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/tabula.toml"));
        Ok(())
    }
}
