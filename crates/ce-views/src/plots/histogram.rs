//! Histogram of one feature over the active subset, stacked by cluster

use std::collections::BTreeMap;

use ce_core::{ClusterLabel, Feature};
use ce_data::Row;
use serde::Serialize;

use super::utils::{bin_index, value_range, BinLayout};

/// Fixed bin count for the distribution view
pub const HISTOGRAM_BINS: usize = 30;

/// Per-cluster counts, one entry per bin
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramSeries {
    pub cluster: ClusterLabel,
    pub counts: Vec<usize>,
}

/// Binned distribution of a feature.
///
/// With no present values in the subset `edges` and `series` are both empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramView {
    pub feature: Feature,
    pub title: String,
    /// `bin_count() + 1` bin edges, ascending
    pub edges: Vec<f64>,
    /// One series per cluster with at least one present value, in label order
    pub series: Vec<HistogramSeries>,
}

impl HistogramView {
    pub fn from_rows(active: &[&Row], feature: Feature) -> Self {
        let title = format!("Distribution of {} (filtered)", feature);

        let mut present: Vec<(&ClusterLabel, f64)> = Vec::new();
        for row in active.iter().copied() {
            if let Some(value) = row.feature(feature).filter(|v| v.is_finite()) {
                present.push((&row.cluster, value));
            }
        }
        let values: Vec<f64> = present.iter().map(|(_, v)| *v).collect();

        let Some((min, max)) = value_range(&values) else {
            tracing::debug!("No values for {} in active subset, histogram left empty", feature);
            return Self {
                feature,
                title,
                edges: Vec::new(),
                series: Vec::new(),
            };
        };

        let layout = BinLayout::spanning(min, max, HISTOGRAM_BINS);
        let edges = layout.edges();
        let mut by_cluster: BTreeMap<ClusterLabel, Vec<usize>> = BTreeMap::new();
        for (cluster, value) in present {
            let counts = by_cluster
                .entry(cluster.clone())
                .or_insert_with(|| vec![0; layout.num_bins]);
            counts[bin_index(&edges, value)] += 1;
        }

        Self {
            feature,
            title,
            edges,
            series: by_cluster
                .into_iter()
                .map(|(cluster, counts)| HistogramSeries { cluster, counts })
                .collect(),
        }
    }

    pub fn bin_count(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Number of values binned across all clusters
    pub fn total(&self) -> usize {
        self.series.iter().flat_map(|s| s.counts.iter()).sum()
    }
}
