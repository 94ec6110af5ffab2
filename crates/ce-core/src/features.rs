//! The six socioeconomic features carried by every row

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a caller names a feature outside the recognized set.
///
/// This is a control/UI bug, never a data condition, so it is surfaced rather
/// than defaulted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown feature '{name}', expected one of: {}", Feature::column_names().join(", "))]
pub struct InvalidFeatureError {
    pub name: String,
}

/// Numeric feature columns, in dashboard order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Feature {
    GdpPerCapita,
    Literacy,
    InfantMortality,
    Phones,
    Birthrate,
    Deathrate,
}

impl Feature {
    pub const ALL: [Feature; 6] = [
        Feature::GdpPerCapita,
        Feature::Literacy,
        Feature::InfantMortality,
        Feature::Phones,
        Feature::Birthrate,
        Feature::Deathrate,
    ];

    /// Column header in the source table
    pub fn column_name(self) -> &'static str {
        match self {
            Feature::GdpPerCapita => "GDP ($ per capita)",
            Feature::Literacy => "Literacy (%)",
            Feature::InfantMortality => "Infant mortality (per 1000 births)",
            Feature::Phones => "Phones (per 1000)",
            Feature::Birthrate => "Birthrate",
            Feature::Deathrate => "Deathrate",
        }
    }

    /// Position within [`Feature::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn column_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|f| f.column_name()).collect()
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for Feature {
    type Err = InvalidFeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.column_name() == s)
            .ok_or_else(|| InvalidFeatureError { name: s.to_string() })
    }
}

impl TryFrom<String> for Feature {
    type Error = InvalidFeatureError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Feature> for &'static str {
    fn from(feature: Feature) -> Self {
        feature.column_name()
    }
}

/// One optional value per feature, indexed by [`Feature`]
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureValues([Option<f64>; 6]);

impl FeatureValues {
    pub fn new(values: [Option<f64>; 6]) -> Self {
        Self(values)
    }

    pub fn get(&self, feature: Feature) -> Option<f64> {
        self.0[feature.index()]
    }

    pub fn set(&mut self, feature: Feature, value: Option<f64>) {
        self.0[feature.index()] = value;
    }

    /// Iterate `(feature, value)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Feature, Option<f64>)> + '_ {
        Feature::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_feature() {
        let feature: Feature = "Infant mortality (per 1000 births)".parse().unwrap();
        assert_eq!(feature, Feature::InfantMortality);
        assert_eq!(feature.index(), 2);
    }

    #[test]
    fn test_parse_unknown_feature() {
        let err = "Nonexistent".parse::<Feature>().unwrap_err();
        assert_eq!(err.name, "Nonexistent");
        assert!(err.to_string().contains("GDP ($ per capita)"));
    }

    #[test]
    fn test_column_names_round_trip() {
        for feature in Feature::ALL {
            assert_eq!(feature.column_name().parse::<Feature>().unwrap(), feature);
        }
    }

    #[test]
    fn test_serde_uses_column_name() {
        let json = serde_json::to_string(&Feature::Phones).unwrap();
        assert_eq!(json, "\"Phones (per 1000)\"");
        let err = serde_json::from_str::<Feature>("\"Phones\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_feature_values_access() {
        let mut values = FeatureValues::default();
        values.set(Feature::Birthrate, Some(12.5));
        assert_eq!(values.get(Feature::Birthrate), Some(12.5));
        assert_eq!(values.get(Feature::Deathrate), None);
        assert_eq!(values.iter().filter(|(_, v)| v.is_some()).count(), 1);
    }
}
