//! The loaded table and its rows

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ce_core::{ClusterLabel, Feature, FeatureValues, Identified, RowId};
use csv::{ReaderBuilder, StringRecord};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{DatasetConfig, NullConfig};
use crate::index::RegionIndex;
use crate::schema::ColumnLayout;
use crate::LoadError;

/// One country
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub row_id: RowId,
    pub country: Option<String>,
    pub region: Option<String>,
    pub cluster: ClusterLabel,
    pub features: FeatureValues,
    /// Projection coordinates, used for scatter placement only
    pub pc1: f64,
    pub pc2: f64,
}

impl Row {
    pub fn feature(&self, feature: Feature) -> Option<f64> {
        self.features.get(feature)
    }

    pub fn in_region(&self, region: &str) -> bool {
        self.region.as_deref() == Some(region)
    }
}

impl Identified for Row {
    fn row_id(&self) -> RowId {
        self.row_id
    }
}

/// Row contents before an id has been assigned
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub country: Option<String>,
    pub region: Option<String>,
    pub cluster: ClusterLabel,
    pub features: FeatureValues,
    pub pc1: f64,
    pub pc2: f64,
}

impl Record {
    pub fn new(region: Option<&str>, cluster: impl Into<ClusterLabel>, pc1: f64, pc2: f64) -> Self {
        Self {
            country: None,
            region: region.map(str::to_string),
            cluster: cluster.into(),
            features: FeatureValues::default(),
            pc1,
            pc2,
        }
    }

    pub fn with_country(mut self, country: &str) -> Self {
        self.country = Some(country.to_string());
        self
    }

    pub fn with_feature(mut self, feature: Feature, value: f64) -> Self {
        self.features.set(feature, Some(value));
        self
    }

    fn into_row(self, row_id: RowId) -> Row {
        Row {
            row_id,
            country: self.country,
            region: self.region,
            cluster: self.cluster,
            features: self.features,
            pc1: self.pc1,
            pc2: self.pc2,
        }
    }
}

/// Immutable, ordered table of rows.
///
/// `rows()[i].row_id == RowId(i)` for every row.
#[derive(Debug, Clone)]
pub struct Dataset {
    source_name: String,
    rows: Vec<Row>,
    regions: RegionIndex,
}

impl Dataset {
    /// Load a CSV file with default parsing options
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        Self::load_with(&DatasetConfig::new(path.as_ref()))
    }

    /// Load the file described by `config`
    pub fn load_with(config: &DatasetConfig) -> Result<Self, LoadError> {
        let file = File::open(&config.path)?;
        let dataset = Self::from_reader(BufReader::new(file), config, config.file_name())?;
        info!(
            "Loaded {} rows across {} regions from {}",
            dataset.len(),
            dataset.regions().len(),
            config.path.display()
        );
        Ok(dataset)
    }

    /// Parse CSV text from any reader
    pub fn from_reader<R: Read>(
        reader: R,
        config: &DatasetConfig,
        source_name: impl Into<String>,
    ) -> Result<Self, LoadError> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(config.delimiter_byte()?)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let layout = ColumnLayout::from_headers(headers.iter())?;
        debug!("Resolved column layout: {:?}", layout);

        let mut records = Vec::new();
        for (idx, result) in csv_reader.records().enumerate() {
            let record = result?;
            records.push(parse_record(&record, idx, &layout, &headers, &config.null_config)?);
        }

        Ok(Self::from_records(source_name, records))
    }

    /// Build a dataset, assigning ids in iteration order
    pub fn from_records(
        source_name: impl Into<String>,
        records: impl IntoIterator<Item = Record>,
    ) -> Self {
        let rows: Vec<Row> = records
            .into_iter()
            .enumerate()
            .map(|(idx, record)| record.into_row(RowId(idx)))
            .collect();
        let regions = RegionIndex::build(&rows);

        Self {
            source_name: source_name.into(),
            rows,
            regions,
        }
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, row_id: RowId) -> Option<&Row> {
        self.rows.get(row_id.index())
    }

    /// Sorted distinct regions, the options offered by the region filter
    pub fn regions(&self) -> &[String] {
        self.regions.names()
    }

    /// Rows in scope for `region`, in load order.
    ///
    /// `None` or an empty string means no filter. A region that never occurs
    /// gives an empty population.
    pub fn base_population(&self, region: Option<&str>) -> Vec<&Row> {
        match region.filter(|r| !r.is_empty()) {
            None => self.rows.iter().collect(),
            Some(region) if !self.regions.contains(region) => {
                debug!("Region {:?} does not occur, base population is empty", region);
                Vec::new()
            }
            Some(region) => self
                .regions
                .rows_in(region)
                .iter()
                .filter_map(|id| self.get(*id))
                .collect(),
        }
    }
}

fn parse_record(
    record: &StringRecord,
    idx: usize,
    layout: &ColumnLayout,
    headers: &StringRecord,
    nulls: &NullConfig,
) -> Result<Record, LoadError> {
    let cell = |col: usize| record.get(col).unwrap_or("");
    let invalid = |col: usize| LoadError::InvalidValue {
        row: idx,
        column: headers.get(col).unwrap_or_default().to_string(),
        value: cell(col).to_string(),
    };

    let cluster = nulls
        .parse_text(cell(layout.cluster))
        .map(|label| ClusterLabel::new(label.trim()))
        .ok_or_else(|| invalid(layout.cluster))?;

    let mut features = FeatureValues::default();
    for feature in Feature::ALL {
        let col = layout.feature(feature);
        let value = nulls.parse_number(cell(col)).map_err(|_| invalid(col))?;
        features.set(feature, value);
    }

    let required_number = |col: usize| match nulls.parse_number(cell(col)) {
        Ok(Some(v)) => Ok(v),
        _ => Err(invalid(col)),
    };

    Ok(Record {
        country: layout.country.and_then(|col| nulls.parse_text(cell(col))),
        region: nulls.parse_text(cell(layout.region)),
        cluster,
        features,
        pc1: required_number(layout.pc1)?,
        pc2: required_number(layout.pc2)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;

    const HEADER: &str = "Country,Region,GDP ($ per capita),Literacy (%),\
        Infant mortality (per 1000 births),Phones (per 1000),Birthrate,Deathrate,\
        cluster_label,pc1,pc2";

    fn write_csv(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        write!(file, "{}", body).unwrap();
        file
    }

    #[test]
    fn test_load_assigns_ids_in_file_order() {
        let file = write_csv(
            "Albania,EASTERN EUROPE,4500,86.5,21.52,71.2,15.11,5.22,1,0.3,-1.2\n\
             Algeria,NORTHERN AFRICA,6000,70.0,31.0,78.1,17.14,4.61,0,-0.4,0.8\n\
             Angola,SUB-SAHARAN AFRICA,1900,42.0,191.19,7.8,45.11,24.2,2,-2.5,1.1\n",
        );
        let dataset = Dataset::load(file.path()).unwrap();

        assert_eq!(dataset.len(), 3);
        for (idx, row) in dataset.rows().iter().enumerate() {
            assert_eq!(row.row_id, RowId(idx));
        }
        let angola = dataset.get(RowId(2)).unwrap();
        assert_eq!(angola.country.as_deref(), Some("Angola"));
        assert_eq!(angola.cluster.as_str(), "2");
        assert_eq!(angola.feature(Feature::InfantMortality), Some(191.19));
        assert_eq!(angola.pc1, -2.5);
    }

    #[test]
    fn test_missing_cells_load_as_absent() {
        let file = write_csv("Nowhere,,1000,,10,,NaN,5,0,0.0,0.0\n");
        let dataset = Dataset::load(file.path()).unwrap();
        let row = &dataset.rows()[0];

        assert_eq!(row.region, None);
        assert_eq!(row.feature(Feature::Literacy), None);
        assert_eq!(row.feature(Feature::Birthrate), None);
        assert_eq!(row.feature(Feature::Deathrate), Some(5.0));
        assert!(dataset.regions().is_empty());
    }

    #[test]
    fn test_missing_required_column_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Country,Region,pc1,pc2").unwrap();
        writeln!(file, "A,B,0,0").unwrap();

        match Dataset::load(file.path()) {
            Err(LoadError::MissingColumns(missing)) => {
                assert!(missing.contains(&"cluster_label".to_string()));
                assert!(missing.contains(&"Deathrate".to_string()));
            }
            other => panic!("expected missing columns, got {:?}", other),
        }
    }

    #[test]
    fn test_unreadable_source_fails() {
        let err = Dataset::load("/definitely/not/here.csv").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_non_numeric_feature_fails() {
        let file = write_csv("X,R,lots,1,1,1,1,1,0,0,0\n");
        match Dataset::load(file.path()) {
            Err(LoadError::InvalidValue { row, column, value }) => {
                assert_eq!(row, 0);
                assert_eq!(column, "GDP ($ per capita)");
                assert_eq!(value, "lots");
            }
            other => panic!("expected invalid value, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_projection_fails() {
        let file = write_csv("X,R,1,1,1,1,1,1,0,,0\n");
        let err = Dataset::load(file.path()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidValue { ref column, .. } if column == "pc1"));
    }

    #[test]
    fn test_alternate_delimiter() {
        let text = format!("{}\nX;R;1;2;3;4;5;6;0;0.5;0.5\n", HEADER.replace(',', ";"));
        let config = DatasetConfig {
            delimiter: ';',
            ..DatasetConfig::default()
        };
        let dataset = Dataset::from_reader(text.as_bytes(), &config, "inline").unwrap();
        assert_eq!(dataset.rows()[0].feature(Feature::Deathrate), Some(6.0));
        assert_eq!(dataset.source_name(), "inline");
    }

    fn five_rows() -> Dataset {
        Dataset::from_records(
            "five",
            vec![
                Record::new(Some("A"), "0", 0.0, 0.0),
                Record::new(Some("A"), "1", 0.0, 0.0),
                Record::new(Some("B"), "0", 0.0, 0.0),
                Record::new(Some("B"), "1", 0.0, 0.0),
                Record::new(Some("B"), "1", 0.0, 0.0),
            ],
        )
    }

    #[test]
    fn test_base_population_by_region() {
        let dataset = five_rows();
        let base = dataset.base_population(Some("B"));
        let ids: Vec<usize> = base.iter().map(|r| r.row_id.index()).collect();
        assert_eq!(ids, vec![2, 3, 4]);

        assert_eq!(dataset.base_population(None).len(), 5);
        assert_eq!(dataset.base_population(Some("")).len(), 5);
        assert!(dataset.base_population(Some("C")).is_empty());
    }

    proptest! {
        #[test]
        fn prop_row_ids_are_contiguous(regions in proptest::collection::vec(0u8..4, 0..64)) {
            let records = regions
                .iter()
                .map(|r| Record::new(Some(format!("R{}", r).as_str()), "0", 0.0, 0.0));
            let dataset = Dataset::from_records("prop", records);

            prop_assert_eq!(dataset.len(), regions.len());
            for (idx, row) in dataset.rows().iter().enumerate() {
                prop_assert_eq!(row.row_id, RowId(idx));
            }
        }

        #[test]
        fn prop_region_filter_narrows(
            regions in proptest::collection::vec(0u8..4, 1..64),
            pick in 0u8..5,
        ) {
            let records = regions
                .iter()
                .map(|r| Record::new(Some(format!("R{}", r).as_str()), "0", 0.0, 0.0));
            let dataset = Dataset::from_records("prop", records);
            let region = format!("R{}", pick);

            let filtered = dataset.base_population(Some(&region));
            prop_assert!(filtered.len() <= dataset.len());
            prop_assert!(filtered.iter().all(|row| row.in_region(&region)));
            prop_assert_eq!(filtered.len(), regions.iter().filter(|r| **r == pick).count());
            prop_assert_eq!(dataset.base_population(None).len(), dataset.len());
        }
    }
}
