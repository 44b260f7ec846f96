//! Centered rolling rate of change.

use frontline_types::RatePoint;

/// Default averaging window, in days.
pub const DEFAULT_WINDOW_DAYS: usize = 30;

/// Days the rate is scaled to, regardless of the averaging window.
pub const RATE_PERIOD_DAYS: f64 = 30.0;

/// Rolling rate of change in units per 30 days (km²/month for area data).
///
/// For every index with a full half-window on both sides, the day-over-day
/// deltas across the window are averaged and scaled by 30. Indices within
/// `window_days / 2` of either end produce no point, so a series no longer
/// than `2 * (window_days / 2)` yields nothing. A window below two days
/// averages zero deltas and gives `NaN` rates.
pub fn rate_of_change<S: AsRef<str>>(
    dates: &[S],
    values: &[f64],
    window_days: usize,
) -> Vec<RatePoint> {
    let n = values.len();
    let half = window_days / 2;
    let mut result = Vec::with_capacity(n.saturating_sub(2 * half));

    for i in half..n.saturating_sub(half) {
        let start = i - half;
        let end = (n - 1).min(i + half);

        let deltas = &values[start..=end];
        let count = end - start;
        let sum: f64 = deltas.windows(2).map(|pair| pair[1] - pair[0]).sum();
        let avg_daily = sum / count as f64;

        result.push(RatePoint {
            date: dates
                .get(i)
                .map(|d| d.as_ref().to_string())
                .unwrap_or_default(),
            area: values[i],
            rate: avg_daily * RATE_PERIOD_DAYS,
        });
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn daily_dates(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("2024-01-{:02}", i + 1)).collect()
    }

    #[test]
    fn test_output_length_trims_both_ends() {
        let dates = daily_dates(31);
        let values: Vec<f64> = (0..31).map(|i| i as f64).collect();
        assert_eq!(rate_of_change(&dates, &values, 30).len(), 1);
        assert_eq!(rate_of_change(&dates, &values, 10).len(), 21);
        assert_eq!(rate_of_change(&dates, &values, 11).len(), 21);
    }

    #[test]
    fn test_short_series_produces_nothing() {
        let dates = daily_dates(20);
        let values = vec![1.0; 20];
        assert!(rate_of_change(&dates, &values, DEFAULT_WINDOW_DAYS).is_empty());

        let dates = daily_dates(30);
        let values = vec![1.0; 30];
        assert!(rate_of_change(&dates, &values, DEFAULT_WINDOW_DAYS).is_empty());
    }

    #[test]
    fn test_constant_growth_scales_to_thirty_days() {
        let dates = daily_dates(9);
        let values: Vec<f64> = (0..9).map(|i| 100.0 + 2.0 * i as f64).collect();
        let points = rate_of_change(&dates, &values, 4);
        assert_eq!(points.len(), 5);
        for point in &points {
            assert!((point.rate - 60.0).abs() < 1e-9);
        }
        assert_eq!(points[0].date, "2024-01-03");
        assert_eq!(points[0].area, 104.0);
        assert_eq!(points[4].date, "2024-01-07");
    }

    #[test]
    fn test_single_jump_is_averaged_over_window() {
        let dates = daily_dates(5);
        let values = [0.0, 0.0, 10.0, 10.0, 10.0];
        let points = rate_of_change(&dates, &values, 2);
        // half = 1: windows (0,2], (1,3], (2,4]
        let rates: Vec<f64> = points.iter().map(|p| p.rate).collect();
        assert_eq!(rates, vec![150.0, 150.0, 0.0]);
    }

    #[test]
    fn test_window_below_two_gives_nan() {
        let dates = daily_dates(3);
        let points = rate_of_change(&dates, &[1.0, 2.0, 3.0], 1);
        assert_eq!(points.len(), 3);
        assert!(points.iter().all(|p| p.rate.is_nan()));
    }
}
