//! Region index over the loaded rows

use ahash::AHashMap;
use ce_core::RowId;

use crate::dataset::Row;

/// Maps each region to its rows, in load order
#[derive(Debug, Clone, Default)]
pub struct RegionIndex {
    rows_by_region: AHashMap<String, Vec<RowId>>,
    /// Distinct region names, sorted
    names: Vec<String>,
}

impl RegionIndex {
    /// Build the index; rows without a region are not indexed
    pub fn build(rows: &[Row]) -> Self {
        let mut rows_by_region: AHashMap<String, Vec<RowId>> = AHashMap::new();
        for row in rows {
            if let Some(region) = &row.region {
                rows_by_region
                    .entry(region.clone())
                    .or_insert_with(Vec::new)
                    .push(row.row_id);
            }
        }

        let mut names: Vec<String> = rows_by_region.keys().cloned().collect();
        names.sort();

        Self { rows_by_region, names }
    }

    /// Row ids in `region`, empty when the region is unknown
    pub fn rows_in(&self, region: &str) -> &[RowId] {
        self.rows_by_region
            .get(region)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, region: &str) -> bool {
        self.rows_by_region.contains_key(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Dataset, Record};

    #[test]
    fn test_index_groups_and_sorts() {
        let dataset = Dataset::from_records(
            "test",
            vec![
                Record::new(Some("WEST"), "0", 0.0, 0.0),
                Record::new(Some("EAST"), "1", 0.0, 0.0),
                Record::new(None, "1", 0.0, 0.0),
                Record::new(Some("WEST"), "1", 0.0, 0.0),
            ],
        );
        let index = RegionIndex::build(dataset.rows());

        assert_eq!(index.names(), &["EAST".to_string(), "WEST".to_string()]);
        assert_eq!(index.rows_in("WEST"), &[RowId(0), RowId(3)]);
        assert!(index.rows_in("NORTH").is_empty());
        assert!(!index.contains(""));
    }
}
