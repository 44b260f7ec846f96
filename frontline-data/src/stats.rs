//! Summary statistics computed alongside the processed series.

use frontline_types::RatePoint;
use serde::Serialize;
use std::cmp::Ordering;

/// Default lag, in days, for percent-change comparisons.
pub const DEFAULT_PERCENT_CHANGE_LAG: usize = 7;

/// Default trailing window, in days, for [`rolling_mean`].
pub const DEFAULT_ROLLING_MEAN_WINDOW: usize = 7;

/// Headline numbers for a layer over the selected date range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaSummary {
    /// Most recent value.
    pub current: f64,
    /// Last value minus first value.
    pub net: f64,
    /// Net change spread over the number of observations, per 30 days.
    pub avg_per_30_days: f64,
}

/// Current value, net change and average change per 30 days.
///
/// The average divides by the number of observations, not the calendar
/// span, matching how the dashboard sidebar reports it. Empty input gives
/// all zeros.
pub fn summarize(values: &[f64]) -> AreaSummary {
    let (Some(&first), Some(&last)) = (values.first(), values.last()) else {
        return AreaSummary::default();
    };
    let net = last - first;
    AreaSummary {
        current: last,
        net,
        avg_per_30_days: net / values.len() as f64 * 30.0,
    }
}

/// Mean of the `rate` field, or zero when there are no points.
pub fn mean_rate(points: &[RatePoint]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    points.iter().map(|p| p.rate).sum::<f64>() / points.len() as f64
}

/// Pearson correlation coefficient over the first `min(x.len(), y.len())`
/// pairs.
///
/// Returns zero for empty input and whenever either side has no variance,
/// instead of `NaN`.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }

    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y).take(n) {
        sum_x += xi;
        sum_y += yi;
        sum_xy += xi * yi;
        sum_x2 += xi * xi;
        sum_y2 += yi * yi;
    }

    let n = n as f64;
    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Trailing mean over the last `window` values, ending at each index.
///
/// The first `window - 1` outputs average the shorter prefix available, so
/// the output has the same length as the input. A zero window is treated
/// as one.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    (0..values.len())
        .map(|i| {
            let slice = &values[(i + 1).saturating_sub(window)..=i];
            slice.iter().sum::<f64>() / slice.len() as f64
        })
        .collect()
}

/// Percent change of each value against the value `lag` steps earlier.
///
/// A non-positive base gives 0 rather than an infinite or negative-base
/// percentage. The output has `len - lag` entries and is empty when the
/// series is not longer than the lag.
pub fn lagged_percent_change(values: &[f64], lag: usize) -> Vec<f64> {
    if values.len() <= lag {
        return Vec::new();
    }
    values[lag..]
        .iter()
        .zip(values)
        .map(|(&current, &previous)| {
            if previous > 0.0 {
                (current - previous) / previous * 100.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Two series restricted to the dates they share.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AlignedPair {
    pub dates: Vec<String>,
    pub left: Vec<f64>,
    pub right: Vec<f64>,
}

/// Inner-join two date-sorted series on their dates.
pub fn align_by_date<S: AsRef<str>, T: AsRef<str>>(
    left_dates: &[S],
    left_values: &[f64],
    right_dates: &[T],
    right_values: &[f64],
) -> AlignedPair {
    let left_len = left_dates.len().min(left_values.len());
    let right_len = right_dates.len().min(right_values.len());
    let mut aligned = AlignedPair::default();
    let (mut i, mut j) = (0, 0);

    while i < left_len && j < right_len {
        let (a, b) = (left_dates[i].as_ref(), right_dates[j].as_ref());
        match a.cmp(b) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                aligned.dates.push(a.to_string());
                aligned.left.push(left_values[i]);
                aligned.right.push(right_values[j]);
                i += 1;
                j += 1;
            }
        }
    }

    aligned
}
