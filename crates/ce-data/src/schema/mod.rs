use ce_core::Feature;

use crate::LoadError;

pub const REGION_COLUMN: &str = "Region";
pub const CLUSTER_COLUMN: &str = "cluster_label";
pub const PC1_COLUMN: &str = "pc1";
pub const PC2_COLUMN: &str = "pc2";
/// Optional hover label
pub const COUNTRY_COLUMN: &str = "Country";

/// Every column the store refuses to load without
pub fn required_columns() -> Vec<&'static str> {
    let mut columns = Feature::column_names();
    columns.extend([REGION_COLUMN, CLUSTER_COLUMN, PC1_COLUMN, PC2_COLUMN]);
    columns
}

/// Positions of the known columns within a header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub region: usize,
    pub cluster: usize,
    pub pc1: usize,
    pub pc2: usize,
    pub country: Option<usize>,
    /// Indexed by [`Feature::index`]
    pub features: [usize; 6],
}

impl ColumnLayout {
    /// Locate the known columns, reporting every missing required one at once.
    ///
    /// Extra columns are ignored. Names must match exactly.
    pub fn from_headers<'a, I>(headers: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let headers: Vec<&str> = headers.into_iter().collect();
        let position = |name: &str| headers.iter().position(|h| *h == name);

        let missing: Vec<String> = required_columns()
            .into_iter()
            .filter(|name| position(*name).is_none())
            .map(str::to_string)
            .collect();
        if !missing.is_empty() {
            return Err(LoadError::MissingColumns(missing));
        }

        let require = |name: &str| {
            position(name).ok_or_else(|| LoadError::MissingColumns(vec![name.to_string()]))
        };
        let mut features = [0usize; 6];
        for feature in Feature::ALL {
            features[feature.index()] = require(feature.column_name())?;
        }

        Ok(Self {
            region: require(REGION_COLUMN)?,
            cluster: require(CLUSTER_COLUMN)?,
            pc1: require(PC1_COLUMN)?,
            pc2: require(PC2_COLUMN)?,
            country: position(COUNTRY_COLUMN),
            features,
        })
    }

    pub fn feature(&self, feature: Feature) -> usize {
        self.features[feature.index()]
    }
}
