//! Per-layer extraction from the mixed daily-area dataset.

use crate::config::ProcessingConfig;
use crate::interpolation::interpolate_step_function;
use crate::smoothing::rolling_median;
use frontline_types::{DailyArea, LayerSeries, LayerType};

/// Extract one layer with the default threshold and median window.
///
/// See [`extract_layer_with`].
pub fn extract_layer(data: &[DailyArea], layer: &LayerType) -> LayerSeries {
    extract_layer_with(data, layer, &ProcessingConfig::default())
}

/// Filter `data` down to `layer`, sort it by date, and derive the
/// interpolated and smoothed series.
///
/// The sort is stable and compares the ISO date strings directly. A layer
/// with no records gives an empty [`LayerSeries`].
pub fn extract_layer_with(
    data: &[DailyArea],
    layer: &LayerType,
    config: &ProcessingConfig,
) -> LayerSeries {
    let mut records: Vec<&DailyArea> = data.iter().filter(|d| &d.layer_type == layer).collect();
    records.sort_by(|a, b| a.date.cmp(&b.date));

    let dates: Vec<String> = records.iter().map(|d| d.date.clone()).collect();
    let raw: Vec<f64> = records.iter().map(|d| d.area_km2).collect();
    let interpolated = interpolate_step_function(&dates, &raw, config.threshold);
    let smoothed = rolling_median(&interpolated, config.median_window);

    log::debug!(
        "layer {}: {} of {} records, {} days",
        layer,
        records.len(),
        data.len(),
        dates.len()
    );

    LayerSeries {
        dates,
        raw,
        interpolated,
        smoothed,
    }
}
