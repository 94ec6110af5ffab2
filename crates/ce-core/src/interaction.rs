//! Interaction events echoed by the rendering layer

use serde::{Deserialize, Serialize};

use crate::row::RowId;

/// A single point clicked on the scatter view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    pub row_id: RowId,
}

impl ClickEvent {
    pub fn new(row_id: impl Into<RowId>) -> Self {
        Self { row_id: row_id.into() }
    }
}

/// A completed box or lasso selection. May carry no ids at all.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RangeSelectEvent {
    pub row_ids: Vec<RowId>,
}

impl RangeSelectEvent {
    pub fn new<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<RowId>,
    {
        Self {
            row_ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.row_ids.is_empty()
    }
}

/// What caused the current invocation.
///
/// The rendering layer reports this explicitly so reset handling does not
/// depend on inspecting which input changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerSource {
    /// First render, nothing has been touched yet
    Initial,
    RangeSelect,
    Click,
    RegionChange,
    FeatureChange,
    Reset,
}

impl TriggerSource {
    pub fn is_reset(self) -> bool {
        matches!(self, TriggerSource::Reset)
    }
}

/// Logical phase of the held selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPhase {
    Idle,
    Selected,
}

/// Selection the rendering layer holds between invocations
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InteractionState {
    pub range: Option<RangeSelectEvent>,
    pub click: Option<ClickEvent>,
}

impl InteractionState {
    pub fn new(range: Option<RangeSelectEvent>, click: Option<ClickEvent>) -> Self {
        Self { range, click }
    }

    /// Nothing held
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.range.is_some() || self.click.is_some() {
            SelectionPhase::Selected
        } else {
            SelectionPhase::Idle
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase() == SelectionPhase::Idle
    }

    /// State after a trigger is applied: reset clears both events, anything
    /// else passes them through untouched.
    pub fn after_trigger(self, trigger: TriggerSource) -> Self {
        if trigger.is_reset() {
            Self::idle()
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_tracks_held_events() {
        assert_eq!(InteractionState::idle().phase(), SelectionPhase::Idle);

        let clicked = InteractionState::new(None, Some(ClickEvent::new(3)));
        assert_eq!(clicked.phase(), SelectionPhase::Selected);

        // An empty lasso is still a held event
        let empty_range = InteractionState::new(Some(RangeSelectEvent::default()), None);
        assert_eq!(empty_range.phase(), SelectionPhase::Selected);
    }

    #[test]
    fn test_reset_clears_both_events() {
        let state = InteractionState::new(
            Some(RangeSelectEvent::new([1usize, 2])),
            Some(ClickEvent::new(4)),
        );
        assert!(state.clone().after_trigger(TriggerSource::Reset).is_idle());
        assert_eq!(state.clone().after_trigger(TriggerSource::RegionChange), state);
    }

    #[test]
    fn test_trigger_wire_names() {
        let trigger: TriggerSource = serde_json::from_str("\"range_select\"").unwrap();
        assert_eq!(trigger, TriggerSource::RangeSelect);
    }
}
