//! Source file configuration for the dataset store

use std::fs;
use std::path::{Path, PathBuf};
use serde::{Serialize, Deserialize};

use super::null_handling::NullConfig;
use crate::LoadError;

/// Default location of the exported clustering table
pub const DEFAULT_DATASET_PATH: &str = "countries_dashboard.csv";

/// How to read the source table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the CSV file
    pub path: PathBuf,

    /// Field delimiter, must be a single ASCII character
    pub delimiter: char,

    /// Null handling configuration
    pub null_config: NullConfig,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET_PATH),
            delimiter: ',',
            null_config: NullConfig::default(),
        }
    }
}

impl DatasetConfig {
    /// Configuration for a file with default parsing options
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Read a JSON configuration file
    pub fn from_json_file(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.delimiter_byte()?;
        Ok(config)
    }

    /// Delimiter as the byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8, LoadError> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(LoadError::Config(format!(
                "delimiter {:?} is not a single ASCII character",
                self.delimiter
            )))
        }
    }

    /// Get the file name
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string()
    }
}
