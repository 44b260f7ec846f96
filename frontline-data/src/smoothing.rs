//! Rolling median smoothing.

/// Default rolling median window, in days.
pub const DEFAULT_WINDOW: usize = 7;

/// Apply a centered rolling median to suppress outliers.
///
/// Each output is the median of `values[i - window/2 ..= i + window/2]`.
/// Near the ends the window is truncated rather than padded, so no value
/// is invented beyond the edges of the series. For an even-length
/// truncated window the upper of the two middle elements is taken. Every
/// output value is one of the input values.
pub fn rolling_median(values: &[f64], window: usize) -> Vec<f64> {
    let n = values.len();
    let half = window / 2;
    // A window wider than the series never holds more than the series.
    let mut scratch: Vec<f64> = Vec::with_capacity(n.min(window).max(1));
    let mut result = Vec::with_capacity(n);

    for i in 0..n {
        let start = i.saturating_sub(half);
        let end = n.min(i.saturating_add(half).saturating_add(1));

        scratch.clear();
        scratch.extend_from_slice(&values[start..end]);
        scratch.sort_by(|a, b| a.total_cmp(b));
        result.push(scratch[scratch.len() / 2]);
    }

    result
}
