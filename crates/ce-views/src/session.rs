//! Session: holds the echoed interaction state between invocations

use std::sync::Arc;

use ce_core::events::events::{DatasetLoaded, SelectionCleared, SelectionResolved};
use ce_core::{
    ClickEvent, EventBus, InteractionState, InteractionSync, InvalidFeatureError,
    RangeSelectEvent, TriggerSource,
};
use ce_data::Dataset;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::controller::{InteractionController, UpdateRequest, UpdateResponse};

/// One interaction as reported by the rendering layer.
///
/// `click` and `range` carry the payload of a click or range trigger; for
/// other triggers they are ignored and the held events are reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCommand {
    pub trigger: TriggerSource,
    #[serde(default)]
    pub click: Option<ClickEvent>,
    #[serde(default)]
    pub range: Option<RangeSelectEvent>,
    pub feature: String,
    #[serde(default)]
    pub region: Option<String>,
}

impl SessionCommand {
    /// Held state with this command's payload applied.
    ///
    /// A click replaces only the held click and a range selection only the
    /// held range; an absent payload on its own trigger clears that event.
    fn merge_into(&self, held: &InteractionState) -> InteractionState {
        let mut next = held.clone();
        match self.trigger {
            TriggerSource::Click => next.click = self.click,
            TriggerSource::RangeSelect => next.range = self.range.clone(),
            _ => {}
        }
        next
    }
}

/// A dataset, its controller, and the interaction state one client holds
pub struct Session {
    controller: InteractionController,
    state: InteractionSync,
    event_bus: Arc<EventBus>,
}

impl Session {
    pub fn new(dataset: Arc<Dataset>, event_bus: Arc<EventBus>) -> Self {
        event_bus.publish(DatasetLoaded {
            source_name: dataset.source_name().to_string(),
            row_count: dataset.len(),
            region_count: dataset.regions().len(),
        });

        Self {
            controller: InteractionController::new(dataset),
            state: InteractionSync::new(),
            event_bus,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        self.controller.dataset()
    }

    /// Currently held interaction state
    pub fn state(&self) -> InteractionState {
        self.state.snapshot()
    }

    /// Apply one command atomically.
    ///
    /// Merge, resolution and commit of the new held state happen under one
    /// lock. On error the held state is untouched.
    pub fn apply(&self, command: &SessionCommand) -> Result<UpdateResponse, InvalidFeatureError> {
        let response = self.state.transact::<_, InvalidFeatureError, _>(|held| {
            let request = UpdateRequest {
                trigger: command.trigger,
                state: command.merge_into(held),
                feature: command.feature.clone(),
                region: command.region.clone(),
            };
            let response = self.controller.update(&request)?;
            let next = response.state.clone();
            Ok((response, next))
        })?;

        info!(
            "{:?}: {} of {} rows active ({:?})",
            command.trigger, response.active_rows, response.base_rows, response.rule
        );

        if command.trigger.is_reset() {
            self.event_bus.publish(SelectionCleared);
        }
        self.event_bus.publish(SelectionResolved {
            trigger: command.trigger,
            rule: response.rule,
            base_rows: response.base_rows,
            active_rows: response.active_rows,
        });

        Ok(response)
    }
}
