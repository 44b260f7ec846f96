//! Linear interpolation of step-function series.
//!
//! Control-map snapshots are published in infrequent batches, so the daily
//! area series holds flat for days and then jumps. Spreading each jump
//! evenly across the days since the previous update approximates the
//! gradual change that actually happened on the ground.

/// Default minimum absolute jump, in km², that counts as a real update.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Indices where the series genuinely changes.
///
/// Always contains index 0 and `n - 1`, plus every index whose value
/// differs from its predecessor by more than `threshold`. Returned in
/// ascending order without duplicates.
pub fn change_points(values: &[f64], threshold: f64) -> Vec<usize> {
    if values.is_empty() {
        return Vec::new();
    }

    let mut indices = vec![0];
    for (i, pair) in values.windows(2).enumerate() {
        if (pair[1] - pair[0]).abs() > threshold {
            indices.push(i + 1);
        }
    }

    let last = values.len() - 1;
    if indices.last() != Some(&last) {
        indices.push(last);
    }
    indices
}

/// Convert a step-function series into a linearly interpolated one.
///
/// Series shorter than two points are returned unchanged. Change points
/// keep their observed value exactly; every other index is placed on the
/// straight line between the change points that bracket it.
///
/// The interpolation works on indices, so `dates` is assumed to hold one
/// observation per day in ascending order, paired with `values`.
pub fn interpolate_step_function<S: AsRef<str>>(
    dates: &[S],
    values: &[f64],
    threshold: f64,
) -> Vec<f64> {
    debug_assert_eq!(dates.len(), values.len(), "dates and values must pair up");
    let n = values.len();
    if n < 2 {
        return values.to_vec();
    }

    let changes = change_points(values, threshold);
    let mut result = Vec::with_capacity(n);

    for i in 0..n {
        let (lo, hi) = bracket(&changes, i);
        let (x0, x1) = (changes[lo], changes[hi]);
        let (y0, y1) = (values[x0], values[x1]);

        let value = if i == x0 || x0 == x1 {
            y0
        } else if i == x1 {
            y1
        } else {
            y0 + (y1 - y0) * (i - x0) as f64 / (x1 - x0) as f64
        };
        result.push(value);
    }

    result
}

/// Binary search for the pair of change-point positions enclosing `i`.
///
/// `lo` ends on the largest change point `<= i` (or the second to last one
/// when `i` is the final index) and `hi` on the one after it.
fn bracket(changes: &[usize], i: usize) -> (usize, usize) {
    let mut lo = 0;
    let mut hi = changes.len() - 1;
    while lo + 1 < hi {
        let mid = (lo + hi) / 2;
        if changes[mid] <= i {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo, hi)
}
