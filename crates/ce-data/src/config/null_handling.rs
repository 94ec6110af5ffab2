//! Missing-value handling for numeric and categorical cells

use std::num::ParseFloatError;

use serde::{Serialize, Deserialize};

/// Which raw cell values count as missing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NullConfig {
    /// Patterns to treat as null
    pub patterns: Vec<String>,

    /// Whether to trim whitespace before checking
    pub trim_whitespace: bool,

    /// Case sensitive matching
    pub case_sensitive: bool,
}

impl Default for NullConfig {
    fn default() -> Self {
        Self {
            patterns: vec![
                String::new(),
                "NaN".to_string(),
                "N/A".to_string(),
                "NA".to_string(),
                "null".to_string(),
                "None".to_string(),
            ],
            trim_whitespace: true,
            case_sensitive: false,
        }
    }
}

impl NullConfig {
    /// Check if a value should be treated as null
    pub fn is_null(&self, value: &str) -> bool {
        let test_value = if self.trim_whitespace {
            value.trim()
        } else {
            value
        };

        self.patterns.iter().any(|pattern| {
            if self.case_sensitive {
                test_value == pattern
            } else {
                test_value.eq_ignore_ascii_case(pattern)
            }
        })
    }

    /// Parse an optional numeric cell.
    ///
    /// `Ok(None)` for missing cells, `Err` when the cell holds something that
    /// is neither missing nor a number.
    pub fn parse_number(&self, value: &str) -> Result<Option<f64>, ParseFloatError> {
        if self.is_null(value) {
            return Ok(None);
        }
        let number = value.trim().parse::<f64>()?;
        Ok(Some(number).filter(|v| !v.is_nan()))
    }

    /// Optional text cell, `None` when missing. Text is kept verbatim.
    pub fn parse_text(&self, value: &str) -> Option<String> {
        if self.is_null(value) {
            None
        } else {
            Some(value.to_string())
        }
    }
}
