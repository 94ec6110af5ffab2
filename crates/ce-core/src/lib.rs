//! Core vocabulary for the cluster explorer
//!
//! This crate provides row identity, the feature set, interaction events and
//! the selection rules shared by the data store and the linked views.

pub mod events;
pub mod features;
pub mod interaction;
pub mod row;
pub mod selection;
pub mod sync;

// Re-export commonly used types
pub use events::{EventBus, Event, EventHandler, handler_from_fn};
pub use features::{Feature, FeatureValues, InvalidFeatureError};
pub use interaction::{
    ClickEvent, InteractionState, RangeSelectEvent, SelectionPhase, TriggerSource,
};
pub use row::{ClusterLabel, Identified, RowId};
pub use selection::{resolve, Resolution, ResolutionRule};
pub use sync::InteractionSync;
