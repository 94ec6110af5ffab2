//! The four linked aggregate views

pub mod scatter;
pub mod histogram;
pub mod profile;
pub mod region_counts;

// Utilities
pub mod utils;

// Re-exports
pub use scatter::{ScatterView, ScatterPoint};
pub use histogram::{HistogramView, HistogramSeries, HISTOGRAM_BINS};
pub use profile::{ClusterProfileView, ProfileEntry};
pub use region_counts::{RegionCountsView, RegionCount};
