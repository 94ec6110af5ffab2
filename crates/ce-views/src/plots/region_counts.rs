//! Active rows counted per (region, cluster) for a stacked bar chart

use ce_core::ClusterLabel;
use ce_data::Row;
use itertools::Itertools;
use serde::Serialize;

pub const REGION_COUNTS_TITLE: &str = "Selected countries by region (stacked)";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCount {
    pub region: String,
    pub cluster: ClusterLabel,
    pub count: usize,
}

/// Non-zero counts ordered by (region, cluster). Rows without a region are
/// not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCountsView {
    pub title: String,
    pub entries: Vec<RegionCount>,
}

impl RegionCountsView {
    pub fn from_rows(active: &[&Row]) -> Self {
        let entries = active
            .iter()
            .copied()
            .filter_map(|row| row.region.as_deref().map(move |region| (region, &row.cluster)))
            .counts()
            .into_iter()
            .sorted()
            .map(|((region, cluster), count)| RegionCount {
                region: region.to_string(),
                cluster: cluster.clone(),
                count,
            })
            .collect();

        Self {
            title: REGION_COUNTS_TITLE.to_string(),
            entries,
        }
    }

    pub fn count_of(&self, region: &str, cluster: &ClusterLabel) -> usize {
        self.entries
            .iter()
            .find(|e| e.region == region && &e.cluster == cluster)
            .map_or(0, |e| e.count)
    }

    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
