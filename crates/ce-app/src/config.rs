//! Application configuration

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ce_core::Feature;
use ce_data::DatasetConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Source table and parsing options
    pub dataset: DatasetConfig,

    /// Histogram feature before the user picks one
    pub default_feature: Feature,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            default_feature: Feature::GdpPerCapita,
        }
    }
}

impl AppConfig {
    /// Read the JSON config at `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.dataset.delimiter_byte()?;
        Ok(config)
    }

    /// Command-line data path wins over the config file
    pub fn with_data_path(mut self, data: Option<PathBuf>) -> Self {
        if let Some(path) = data {
            self.dataset.path = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config.default_feature, Feature::GdpPerCapita);
        assert_eq!(config.dataset.path, PathBuf::from("countries_dashboard.csv"));
    }

    #[test]
    fn test_file_and_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "dataset": {{ "path": "a.csv" }}, "default_feature": "Birthrate" }}"#
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path()))
            .unwrap()
            .with_data_path(Some(PathBuf::from("b.csv")));
        assert_eq!(config.default_feature, Feature::Birthrate);
        assert_eq!(config.dataset.path, PathBuf::from("b.csv"));
    }

    #[test]
    fn test_unknown_default_feature_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "default_feature": "Happiness" }}"#).unwrap();
        assert!(AppConfig::load(Some(file.path())).is_err());
    }
}
