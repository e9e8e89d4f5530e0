use crate::Result;
use folio_types::ALL_CATEGORY_ID;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub assets: AssetConfig,

    #[serde(default)]
    pub apps: AppConfig,

    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Load config from file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        super::validation::warn_unknown_fields(&content, "config.json");
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Where the catalog comes from
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Catalog file overriding both the user catalog and the built-in one
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Asset resolution
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetConfig {
    /// Directory or `http(s)://` base that root-relative asset URLs resolve against
    #[serde(default)]
    pub base: Option<String>,
}

/// External applications
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Command used to open documents and images, e.g. "zathura" or "firefox --new-window"
    #[serde(default)]
    pub opener: Option<String>,
}

/// Gallery view settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    #[serde(default = "default_columns")]
    pub columns: usize,

    #[serde(default = "default_start_category")]
    pub start_category: String,
}

const MAX_COLUMNS: usize = 6;

fn default_columns() -> usize {
    3
}
fn default_start_category() -> String {
    ALL_CATEGORY_ID.to_string()
}

impl UiConfig {
    /// Grid columns clamped to what a terminal card grid can show
    #[must_use]
    pub fn grid_columns(&self) -> usize {
        self.columns.clamp(1, MAX_COLUMNS)
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            start_category: default_start_category(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.catalog.path.is_none());
        assert!(config.assets.base.is_none());
        assert!(config.apps.opener.is_none());
        assert_eq!(config.ui.columns, 3);
        assert_eq!(config.ui.start_category, "all");
    }

    #[test]
    fn test_config_load_nonexistent_returns_default() {
        let path = std::path::Path::new("/nonexistent/path/config.json");
        let config = Config::load(path).unwrap();
        assert_eq!(config.ui.columns, 3);
    }

    #[test]
    fn test_config_load_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"ui": {{"columns": 4, "startCategory": "ai"}}, "apps": {{"opener": "zathura"}}}}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.ui.columns, 4);
        assert_eq!(config.ui.start_category, "ai");
        assert_eq!(config.apps.opener.as_deref(), Some("zathura"));
    }

    #[test]
    fn test_config_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{invalid json}}").unwrap();

        let result = Config::load(file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_grid_columns_clamped() {
        let mut ui = UiConfig::default();
        assert_eq!(ui.grid_columns(), 3);
        ui.columns = 0;
        assert_eq!(ui.grid_columns(), 1);
        ui.columns = 40;
        assert_eq!(ui.grid_columns(), 6);
    }

    #[test]
    fn test_config_empty_json() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config.ui.columns, 3);
        assert_eq!(config.ui.start_category, "all");
    }
}
