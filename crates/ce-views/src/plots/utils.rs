//! Utilities for plot views

pub mod stats;

// Re-export commonly used items
pub use stats::{bin_index, mean, value_range, BinLayout};
