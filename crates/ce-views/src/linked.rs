//! Aggregation engine: all four views from one base population and subset

use ce_core::Feature;
use ce_data::Row;
use serde::Serialize;

use crate::plots::{ClusterProfileView, HistogramView, RegionCountsView, ScatterView};

/// Everything the rendering layer draws for one invocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedViews {
    pub scatter: ScatterView,
    pub histogram: HistogramView,
    pub profile: ClusterProfileView,
    pub counts: RegionCountsView,
}

impl LinkedViews {
    /// Scatter from `base`; histogram, profile and counts from `active`.
    ///
    /// Pure: the same inputs always give identical views.
    pub fn compute(base: &[&Row], active: &[&Row], feature: Feature) -> Self {
        Self {
            scatter: ScatterView::from_rows(base),
            histogram: HistogramView::from_rows(active, feature),
            profile: ClusterProfileView::from_rows(active),
            counts: RegionCountsView::from_rows(active),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::five_rows;
    use proptest::prelude::*;

    #[test]
    fn test_scatter_ignores_subset() {
        let dataset = five_rows();
        let base = dataset.base_population(None);
        let active = vec![base[1]];
        let views = LinkedViews::compute(&base, &active, Feature::Literacy);

        assert_eq!(views.scatter.len(), 5);
        assert_eq!(views.counts.total(), 1);
        assert_eq!(views.histogram.total(), 1);
        assert_eq!(views.profile.clusters().len(), 1);
    }

    proptest! {
        #[test]
        fn prop_recompute_is_identical(
            mask in proptest::collection::vec(any::<bool>(), 5),
            feature_idx in 0usize..6,
        ) {
            let dataset = five_rows();
            let base = dataset.base_population(None);
            let active: Vec<&Row> = base
                .iter()
                .zip(&mask)
                .filter(|(_, keep)| **keep)
                .map(|(row, _)| *row)
                .collect();
            let feature = Feature::ALL[feature_idx];

            let first = LinkedViews::compute(&base, &active, feature);
            let second = LinkedViews::compute(&base, &active, feature);
            prop_assert_eq!(first, second);
        }
    }
}
