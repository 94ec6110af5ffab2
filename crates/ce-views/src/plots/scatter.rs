//! Projection scatter: the selection surface

use ce_core::{ClusterLabel, FeatureValues, RowId};
use ce_data::Row;
use serde::Serialize;

pub const SCATTER_TITLE: &str = "PCA Scatter (click or box/lasso select to filter other charts)";

/// One plotted country.
///
/// `row_id` is opaque correlation payload: the rendering layer hands it back
/// inside click and range events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub row_id: RowId,
    pub x: f64,
    pub y: f64,
    pub cluster: ClusterLabel,
    pub country: Option<String>,
    pub region: Option<String>,
    pub features: FeatureValues,
}

/// Scatter data for the whole region-filtered base population
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterView {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterView {
    /// Always built from the base population, never the active subset
    pub fn from_rows(base: &[&Row]) -> Self {
        let points = base
            .iter()
            .map(|row| ScatterPoint {
                row_id: row.row_id,
                x: row.pc1,
                y: row.pc2,
                cluster: row.cluster.clone(),
                country: row.country.clone(),
                region: row.region.clone(),
                features: row.features,
            })
            .collect();

        Self {
            title: SCATTER_TITLE.to_string(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::five_rows;

    #[test]
    fn test_points_carry_row_ids_and_projection() {
        let dataset = five_rows();
        let base = dataset.base_population(Some("B"));
        let view = ScatterView::from_rows(&base);

        let ids: Vec<RowId> = view.points.iter().map(|p| p.row_id).collect();
        assert_eq!(ids, vec![RowId(2), RowId(3), RowId(4)]);
        assert_eq!(view.points[0].x, dataset.rows()[2].pc1);
        assert_eq!(view.points[0].y, dataset.rows()[2].pc2);
        assert_eq!(view.points[0].country.as_deref(), Some("Country 2"));
        assert_eq!(view.title, SCATTER_TITLE);
    }

    #[test]
    fn test_empty_base() {
        let view = ScatterView::from_rows(&[]);
        assert!(view.is_empty());
    }
}
