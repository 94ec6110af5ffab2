//! Selection resolution: events + base population -> active subset

use ahash::AHashSet;
use serde::Serialize;

use crate::interaction::{ClickEvent, RangeSelectEvent};
use crate::row::Identified;

/// Which precedence rule produced the active subset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionRule {
    /// Range ids intersected with the base population
    Range,
    /// The clicked row (possibly out of scope, giving an empty subset)
    Click,
    /// No usable event, everything in scope is active
    Everything,
}

/// Active subset together with the rule that chose it
#[derive(Debug, Clone)]
pub struct Resolution<T> {
    pub rows: Vec<T>,
    pub rule: ResolutionRule,
}

/// Resolve the active subset of `base`.
///
/// Precedence:
/// 1. a range event whose ids intersect `base` selects that intersection;
/// 2. otherwise a click selects the clicked row if it is in `base`, else nothing;
/// 3. otherwise the whole of `base` is active.
///
/// A range event with no ids, or only ids outside `base`, has no usable ids and
/// falls through to rule 2. Output keeps the order of `base`.
pub fn resolve<T>(
    base: &[T],
    range: Option<&RangeSelectEvent>,
    click: Option<&ClickEvent>,
) -> Resolution<T>
where
    T: Identified + Clone,
{
    if let Some(range) = range.filter(|r| !r.is_empty()) {
        let wanted: AHashSet<_> = range.row_ids.iter().copied().collect();
        let rows: Vec<T> = base
            .iter()
            .filter(|row| wanted.contains(&row.row_id()))
            .cloned()
            .collect();

        if !rows.is_empty() {
            tracing::debug!("Range selection kept {} of {} ids", rows.len(), wanted.len());
            return Resolution { rows, rule: ResolutionRule::Range };
        }
        tracing::debug!("Range selection has no ids in scope, falling through");
    }

    if let Some(click) = click {
        let rows = base
            .iter()
            .filter(|row| row.row_id() == click.row_id)
            .take(1)
            .cloned()
            .collect();
        return Resolution { rows, rule: ResolutionRule::Click };
    }

    Resolution {
        rows: base.to_vec(),
        rule: ResolutionRule::Everything,
    }
}
