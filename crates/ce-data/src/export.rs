//! Columnar export of the loaded table

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use ce_core::Feature;

use crate::dataset::Dataset;
use crate::schema::{CLUSTER_COLUMN, COUNTRY_COLUMN, PC1_COLUMN, PC2_COLUMN, REGION_COLUMN};

/// Name of the synthetic id column
pub const ROW_ID_COLUMN: &str = "row_id";

impl Dataset {
    /// The table as a single record batch, `row_id` first
    pub fn to_record_batch(&self) -> Result<RecordBatch, ArrowError> {
        let rows = self.rows();

        let mut fields = vec![
            Field::new(ROW_ID_COLUMN, DataType::UInt64, false),
            Field::new(COUNTRY_COLUMN, DataType::Utf8, true),
            Field::new(REGION_COLUMN, DataType::Utf8, true),
            Field::new(CLUSTER_COLUMN, DataType::Utf8, false),
        ];
        let mut columns: Vec<ArrayRef> = vec![
            Arc::new(UInt64Array::from(
                rows.iter().map(|r| r.row_id.index() as u64).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.country.as_deref()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.region.as_deref()).collect::<Vec<_>>(),
            )),
            Arc::new(StringArray::from(
                rows.iter().map(|r| r.cluster.as_str()).collect::<Vec<_>>(),
            )),
        ];

        for feature in Feature::ALL {
            fields.push(Field::new(feature.column_name(), DataType::Float64, true));
            columns.push(Arc::new(Float64Array::from(
                rows.iter().map(|r| r.feature(feature)).collect::<Vec<_>>(),
            )));
        }

        fields.push(Field::new(PC1_COLUMN, DataType::Float64, false));
        columns.push(Arc::new(Float64Array::from(rows.iter().map(|r| r.pc1).collect::<Vec<_>>())));
        fields.push(Field::new(PC2_COLUMN, DataType::Float64, false));
        columns.push(Arc::new(Float64Array::from(rows.iter().map(|r| r.pc2).collect::<Vec<_>>())));

        RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)
    }
}
