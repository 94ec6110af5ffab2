//! Dataset store for the cluster explorer
//!
//! Loads the pre-labeled country table once, assigns each row its stable
//! `RowId`, and serves region-filtered base populations. Nothing here mutates
//! after load.

pub mod config;
pub mod dataset;
pub mod export;
pub mod index;
pub mod schema;

use thiserror::Error;

// Re-exports
pub use config::{DatasetConfig, NullConfig};
pub use dataset::{Dataset, Record, Row};
pub use index::RegionIndex;
pub use schema::ColumnLayout;

/// Errors that can occur while loading the dataset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(String),

    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("invalid value {value:?} in column '{column}' at row {row}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<csv::Error> for LoadError {
    fn from(error: csv::Error) -> Self {
        match error.kind() {
            csv::ErrorKind::Io(io_err) => {
                LoadError::Io(std::io::Error::new(io_err.kind(), error.to_string()))
            }
            _ => LoadError::Csv(error.to_string()),
        }
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(error: serde_json::Error) -> Self {
        LoadError::Config(error.to_string())
    }
}
