//! Linked views for cluster exploration
//!
//! Given the dataset, the held click/range events and the two controls, this
//! crate resolves the active subset and builds the scatter, histogram,
//! cluster-profile and region-count views that the charting layer renders.

mod controller;
mod export;
mod linked;
pub mod plots;
mod session;

pub use controller::{InteractionController, UpdateRequest, UpdateResponse};
pub use linked::LinkedViews;
pub use plots::{
    ClusterProfileView, HistogramSeries, HistogramView, ProfileEntry, RegionCount,
    RegionCountsView, ScatterPoint, ScatterView, HISTOGRAM_BINS,
};
pub use session::{Session, SessionCommand};
