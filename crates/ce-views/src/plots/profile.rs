//! Per-cluster feature means over the active subset

use std::collections::BTreeMap;

use ce_core::{ClusterLabel, Feature};
use ce_data::Row;
use serde::Serialize;

use super::utils::mean;

pub const PROFILE_TITLE: &str = "Cluster profile (mean values, filtered)";

/// Mean of one feature within one cluster.
///
/// `mean` is absent when every row of the cluster is missing that feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileEntry {
    pub cluster: ClusterLabel,
    pub feature: Feature,
    pub mean: Option<f64>,
}

/// Long-format (cluster, feature, mean) triples for a grouped bar chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterProfileView {
    pub title: String,
    /// Feature-major, cluster-minor
    pub entries: Vec<ProfileEntry>,
}

impl ClusterProfileView {
    /// Clusters absent from `active` are absent from the output
    pub fn from_rows(active: &[&Row]) -> Self {
        let mut clusters: BTreeMap<&ClusterLabel, Vec<&Row>> = BTreeMap::new();
        for row in active.iter().copied() {
            clusters.entry(&row.cluster).or_default().push(row);
        }

        let entries = Feature::ALL
            .into_iter()
            .flat_map(|feature| {
                clusters.iter().map(move |(cluster, rows)| ProfileEntry {
                    cluster: (*cluster).clone(),
                    feature,
                    mean: mean(rows.iter().filter_map(|row| row.feature(feature))),
                })
            })
            .collect();

        Self {
            title: PROFILE_TITLE.to_string(),
            entries,
        }
    }

    pub fn clusters(&self) -> Vec<&ClusterLabel> {
        let mut clusters: Vec<&ClusterLabel> = self.entries.iter().map(|e| &e.cluster).collect();
        clusters.sort();
        clusters.dedup();
        clusters
    }

    pub fn mean_of(&self, cluster: &ClusterLabel, feature: Feature) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| &e.cluster == cluster && e.feature == feature)
            .and_then(|e| e.mean)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
