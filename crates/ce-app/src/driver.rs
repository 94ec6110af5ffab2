//! JSON-lines driver: one interaction per input line, one response per output line

use std::io::{BufRead, Write};

use anyhow::Result;
use ce_core::{ClickEvent, Feature, RangeSelectEvent, TriggerSource};
use ce_views::{Session, SessionCommand};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::warn;

/// An interaction as written by the rendering layer.
///
/// `feature` replaces the current histogram feature whenever present.
/// `region` is only read on `initial` and `region_change` triggers, where a
/// missing or null value means all regions.
#[derive(Debug, Deserialize)]
struct InputLine {
    trigger: TriggerSource,
    #[serde(default)]
    click: Option<ClickEvent>,
    #[serde(default)]
    range: Option<RangeSelectEvent>,
    #[serde(default)]
    feature: Option<String>,
    #[serde(default)]
    region: Option<String>,
}

/// Control values the dropdowns would hold
#[derive(Debug, Clone, PartialEq)]
struct Controls {
    feature: String,
    region: Option<String>,
}

pub struct Driver {
    session: Session,
    controls: Controls,
}

impl Driver {
    pub fn new(session: Session, default_feature: Feature) -> Self {
        Self {
            session,
            controls: Controls {
                feature: default_feature.column_name().to_string(),
                region: None,
            },
        }
    }

    /// Process one line; always yields a JSON value, errors included
    pub fn handle_line(&mut self, line: &str) -> Value {
        let input: InputLine = match serde_json::from_str(line) {
            Ok(input) => input,
            Err(e) => {
                warn!("Rejected malformed input: {}", e);
                return json!({ "ok": false, "error": format!("malformed input: {}", e) });
            }
        };

        let mut controls = self.controls.clone();
        if let Some(feature) = input.feature {
            controls.feature = feature;
        }
        if matches!(input.trigger, TriggerSource::Initial | TriggerSource::RegionChange) {
            controls.region = input.region;
        }

        let command = SessionCommand {
            trigger: input.trigger,
            click: input.click,
            range: input.range,
            feature: controls.feature.clone(),
            region: controls.region.clone(),
        };

        match self.session.apply(&command) {
            Ok(response) => {
                self.controls = controls;
                json!({ "ok": true, "response": response })
            }
            Err(e) => {
                warn!("Update rejected: {}", e);
                json!({ "ok": false, "error": e.to_string() })
            }
        }
    }

    /// Drive the session until `input` is exhausted. Returns lines handled.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<usize> {
        let mut handled = 0;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let reply = self.handle_line(&line);
            serde_json::to_writer(&mut output, &reply)?;
            writeln!(output)?;
            output.flush()?;
            handled += 1;
        }
        Ok(handled)
    }
}
