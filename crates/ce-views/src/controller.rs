//! Interaction controller: the single entry point per interaction

use std::sync::Arc;

use ce_core::{
    resolve, Feature, InteractionState, InvalidFeatureError, ResolutionRule, TriggerSource,
};
use ce_data::Dataset;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::linked::LinkedViews;

/// Inputs of one invocation, as the rendering layer holds them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateRequest {
    pub trigger: TriggerSource,
    /// Range and click events currently held by the rendering layer
    #[serde(default)]
    pub state: InteractionState,
    /// Column name of the histogram feature
    pub feature: String,
    /// Region filter, `None` for all regions
    #[serde(default)]
    pub region: Option<String>,
}

/// Views to draw plus the interaction state to hold for the next call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateResponse {
    pub views: LinkedViews,
    pub state: InteractionState,
    pub rule: ResolutionRule,
    pub base_rows: usize,
    pub active_rows: usize,
}

/// Turns interaction inputs into linked views over a shared dataset
#[derive(Debug, Clone)]
pub struct InteractionController {
    dataset: Arc<Dataset>,
}

impl InteractionController {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Run one invocation.
    ///
    /// Steps, in order: validate the feature, take the region-filtered base
    /// population, clear both events if a reset caused this call, resolve the
    /// active subset, then build the views. The returned state is what the
    /// rendering layer must hold next; an unknown feature fails before any of
    /// that happens.
    pub fn update(&self, request: &UpdateRequest) -> Result<UpdateResponse, InvalidFeatureError> {
        let feature: Feature = request.feature.parse()?;

        let base = self.dataset.base_population(request.region.as_deref());
        let state = request.state.clone().after_trigger(request.trigger);

        let resolution = resolve(&base, state.range.as_ref(), state.click.as_ref());
        debug!(
            "Trigger {:?} resolved {} of {} rows via {:?}",
            request.trigger,
            resolution.rows.len(),
            base.len(),
            resolution.rule
        );

        let views = LinkedViews::compute(&base, &resolution.rows, feature);

        Ok(UpdateResponse {
            views,
            state,
            rule: resolution.rule,
            base_rows: base.len(),
            active_rows: resolution.rows.len(),
        })
    }
}
