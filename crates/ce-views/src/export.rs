//! Columnar export of the views for the charting layer

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use ce_core::Feature;

use crate::plots::{ClusterProfileView, HistogramView, RegionCountsView, ScatterView};

fn batch(fields: Vec<Field>, columns: Vec<ArrayRef>) -> Result<RecordBatch, ArrowError> {
    RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
}

impl ScatterView {
    /// `row_id, pc1, pc2, cluster_label, Country, Region` plus the six features
    pub fn to_record_batch(&self) -> Result<RecordBatch, ArrowError> {
        let points = &self.points;
        let mut fields = vec![
            Field::new("row_id", DataType::UInt64, false),
            Field::new("pc1", DataType::Float64, false),
            Field::new("pc2", DataType::Float64, false),
            Field::new("cluster_label", DataType::Utf8, false),
            Field::new("Country", DataType::Utf8, true),
            Field::new("Region", DataType::Utf8, true),
        ];
        let mut columns: Vec<ArrayRef> = vec![
            Arc::new(UInt64Array::from(
                points.iter().map(|p| p.row_id.index() as u64).collect::<Vec<_>>(),
            )),
            Arc::new(Float64Array::from(points.iter().map(|p| p.x).collect::<Vec<_>>())),
            Arc::new(Float64Array::from(points.iter().map(|p| p.y).collect::<Vec<_>>())),
            Arc::new(StringArray::from(
                points.iter().map(|p| p.cluster.as_str()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                points.iter().map(|p| p.country.as_deref()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                points.iter().map(|p| p.region.as_deref()).collect::<Vec<_>>(),
            )),
        ];
        for feature in Feature::ALL {
            fields.push(Field::new(feature.column_name(), DataType::Float64, true));
            columns.push(Arc::new(Float64Array::from(
                points.iter().map(|p| p.features.get(feature)).collect::<Vec<_>>(),
            )));
        }
        batch(fields, columns)
    }
}

impl HistogramView {
    /// One row per (cluster, bin): `cluster_label, bin_start, bin_end, count`
    pub fn to_record_batch(&self) -> Result<RecordBatch, ArrowError> {
        let mut clusters = Vec::new();
        let mut starts = Vec::new();
        let mut ends = Vec::new();
        let mut counts = Vec::new();

        for series in &self.series {
            for (bin, count) in series.counts.iter().enumerate() {
                clusters.push(series.cluster.as_str());
                starts.push(self.edges[bin]);
                ends.push(self.edges[bin + 1]);
                counts.push(*count as u64);
            }
        }

        batch(
            vec![
                Field::new("cluster_label", DataType::Utf8, false),
                Field::new("bin_start", DataType::Float64, false),
                Field::new("bin_end", DataType::Float64, false),
                Field::new("count", DataType::UInt64, false),
            ],
            vec![
                Arc::new(StringArray::from(clusters)),
                Arc::new(Float64Array::from(starts)),
                Arc::new(Float64Array::from(ends)),
                Arc::new(UInt64Array::from(counts)),
            ],
        )
    }
}

impl ClusterProfileView {
    /// `cluster_label, feature, mean`
    pub fn to_record_batch(&self) -> Result<RecordBatch, ArrowError> {
        let entries = &self.entries;
        batch(
            vec![
                Field::new("cluster_label", DataType::Utf8, false),
                Field::new("feature", DataType::Utf8, false),
                Field::new("mean", DataType::Float64, true),
            ],
            vec![
                Arc::new(StringArray::from(
                    entries.iter().map(|e| e.cluster.as_str()).collect::<Vec<_>>(),
                )),
                Arc::new(StringArray::from(
                    entries.iter().map(|e| e.feature.column_name()).collect::<Vec<_>>(),
                )),
                Arc::new(Float64Array::from(entries.iter().map(|e| e.mean).collect::<Vec<_>>())),
            ],
        )
    }
}

impl RegionCountsView {
    /// `Region, cluster_label, count`
    pub fn to_record_batch(&self) -> Result<RecordBatch, ArrowError> {
        let entries = &self.entries;
        batch(
            vec![
                Field::new("Region", DataType::Utf8, false),
                Field::new("cluster_label", DataType::Utf8, false),
                Field::new("count", DataType::UInt64, false),
            ],
            vec![
                Arc::new(StringArray::from(
                    entries.iter().map(|e| e.region.as_str()).collect::<Vec<_>>(),
                )),
                Arc::new(StringArray::from(
                    entries.iter().map(|e| e.cluster.as_str()).collect::<Vec<_>>(),
                )),
                Arc::new(UInt64Array::from(
                    entries.iter().map(|e| e.count as u64).collect::<Vec<_>>(),
                )),
            ],
        )
    }
}
