//! Statistical utilities for the aggregate views

use itertools::{Itertools, MinMaxResult};

/// Arithmetic mean of the present values, `None` when there are none
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Observed `[min, max]` of the values, `None` when empty
pub fn value_range(values: &[f64]) -> Option<(f64, f64)> {
    match values.iter().copied().minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => None,
        MinMaxResult::OneElement(v) => Some((v, v)),
        MinMaxResult::MinMax(lo, hi) => Some((lo, hi)),
    }
}

/// Equal-width bin layout over a closed range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinLayout {
    pub start: f64,
    pub end: f64,
    pub num_bins: usize,
}

impl BinLayout {
    /// Span `[min, max]` with `num_bins` bins.
    ///
    /// A zero-width range is widened to one unit centred on the value so that
    /// every bin keeps a positive width.
    pub fn spanning(min: f64, max: f64, num_bins: usize) -> Self {
        let (start, end) = if max > min { (min, max) } else { (min - 0.5, min + 0.5) };
        Self {
            start,
            end,
            num_bins: num_bins.max(1),
        }
    }

    pub fn width(&self) -> f64 {
        (self.end - self.start) / self.num_bins as f64
    }

    /// `num_bins + 1` edges; the last edge is exactly `end`
    pub fn edges(&self) -> Vec<f64> {
        let width = self.width();
        (0..=self.num_bins)
            .map(|i| {
                if i == self.num_bins {
                    self.end
                } else {
                    self.start + width * i as f64
                }
            })
            .collect()
    }

    /// Bin holding `value`. Bins are half-open except the last, which also
    /// holds `end`.
    pub fn bin_of(&self, value: f64) -> usize {
        bin_index(&self.edges(), value)
    }
}

/// Bin of `value` given ascending `edges`, clamped to the outer bins.
///
/// Decided by the edges themselves so a value always lies inside the
/// `[edges[bin], edges[bin + 1]]` that gets exported for it.
pub fn bin_index(edges: &[f64], value: f64) -> usize {
    match edges.len() {
        0..=2 => 0,
        n => edges[1..n - 1].partition_point(|edge| *edge <= value),
    }
}
