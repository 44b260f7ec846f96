//! Ordinary least-squares trend line over the series index.

use frontline_types::TrendResult;

/// Fit `value = intercept + slope * index` by ordinary least squares.
///
/// Fewer than two values cannot define a line: the slope is zero, the
/// intercept is the single value (or zero), and the trend is a copy of the
/// input.
pub fn linear_trend(values: &[f64]) -> TrendResult {
    let n = values.len();
    if n < 2 {
        return TrendResult {
            slope: 0.0,
            intercept: values.first().copied().unwrap_or(0.0),
            trend_values: values.to_vec(),
        };
    }

    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2) = (0.0, 0.0, 0.0, 0.0);
    for (i, &y) in values.iter().enumerate() {
        let x = i as f64;
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
    }

    let n_f = n as f64;
    let slope = (n_f * sum_xy - sum_x * sum_y) / (n_f * sum_x2 - sum_x * sum_x);
    let intercept = (sum_y - slope * sum_x) / n_f;
    let trend_values = (0..n).map(|i| intercept + slope * i as f64).collect();

    TrendResult {
        slope,
        intercept,
        trend_values,
    }
}
