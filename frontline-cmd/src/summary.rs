//! Headline statistics: summary, correlate and info.

use crate::loader::Dataset;
use crate::output::{write_csv, write_json, OutputFormat};
use crate::state::DashboardState;
use frontline_data::stats::{
    align_by_date, lagged_percent_change, pearson_correlation, rolling_mean, summarize,
    DEFAULT_ROLLING_MEAN_WINDOW,
};
use frontline_data::ProcessingConfig;
use frontline_types::LayerType;
use log::info;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    pub layer: LayerType,
    pub start: Option<String>,
    pub end: Option<String>,
    pub days: usize,
    pub current: f64,
    pub net: f64,
    pub avg_per_30_days: f64,
    pub events_in_range: usize,
    pub selected_events_in_range: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationReport {
    pub layer: LayerType,
    pub other: LayerType,
    /// Days both layers have data for.
    pub shared_days: usize,
    /// Pearson r of the displayed values.
    pub levels: f64,
    /// Pearson r of the lagged percent changes of the rolling means.
    pub rates: f64,
    pub lag: usize,
    pub mean_window: usize,
}

/// Sidebar numbers for one layer: computed on the raw snapshots, as the
/// sidebar always did, independent of the interpolation toggle.
pub fn summary_report(
    state: &DashboardState,
    dataset: &Dataset,
    layer: &LayerType,
    config: &ProcessingConfig,
) -> SummaryReport {
    let series = state.select_layer(&dataset.areas, layer, config);
    let summary = summarize(&series.raw);
    let (start, end) = match state.date_range {
        Some(range) => {
            let (start, end) = range.bounds();
            (Some(start), Some(end))
        }
        None => (None, None),
    };

    SummaryReport {
        layer: layer.clone(),
        start,
        end,
        days: series.len(),
        current: summary.current,
        net: summary.net,
        avg_per_30_days: summary.avg_per_30_days,
        events_in_range: state.events_in_range(&dataset.events).len(),
        selected_events_in_range: state.visible_events(&dataset.events).len(),
    }
}

/// Correlate two layers over the dates they share.
///
/// Percent changes are taken on a trailing mean of each side, so single-day
/// jumps in the snapshots do not dominate `rates`.
pub fn correlation_report(
    state: &DashboardState,
    dataset: &Dataset,
    layer: &LayerType,
    other: &LayerType,
    lag: usize,
    config: &ProcessingConfig,
) -> CorrelationReport {
    let left = state.select_layer(&dataset.areas, layer, config);
    let right = state.select_layer(&dataset.areas, other, config);
    let aligned = align_by_date(
        &left.dates,
        left.values(state.show_interpolation),
        &right.dates,
        right.values(state.show_interpolation),
    );

    let levels = pearson_correlation(&aligned.left, &aligned.right);
    let window = DEFAULT_ROLLING_MEAN_WINDOW;
    let rates = pearson_correlation(
        &lagged_percent_change(&rolling_mean(&aligned.left, window), lag),
        &lagged_percent_change(&rolling_mean(&aligned.right, window), lag),
    );

    CorrelationReport {
        layer: layer.clone(),
        other: other.clone(),
        shared_days: aligned.dates.len(),
        levels,
        rates,
        lag,
        mean_window: window,
    }
}

pub fn run_summary<W: Write>(
    out: &mut W,
    format: OutputFormat,
    state: &DashboardState,
    dataset: &Dataset,
    layer: &LayerType,
    config: &ProcessingConfig,
) -> anyhow::Result<()> {
    let report = summary_report(state, dataset, layer, config);
    match format {
        OutputFormat::Json => write_json(out, &report),
        OutputFormat::Csv => write_csv(out, &[report]),
    }
}

pub fn run_correlate<W: Write>(
    out: &mut W,
    format: OutputFormat,
    state: &DashboardState,
    dataset: &Dataset,
    (layer, other): (&LayerType, &LayerType),
    lag: usize,
    config: &ProcessingConfig,
) -> anyhow::Result<()> {
    let report = correlation_report(state, dataset, layer, other, lag, config);
    info!(
        "{} vs {}: r(levels) {:.3}, r(rates) {:.3} over {} shared days",
        layer, other, report.levels, report.rates, report.shared_days
    );
    match format {
        OutputFormat::Json => write_json(out, &report),
        OutputFormat::Csv => write_csv(out, &[report]),
    }
}

pub fn run_info<W: Write>(out: &mut W, format: OutputFormat, dataset: &Dataset) -> anyhow::Result<()> {
    let Some(metadata) = &dataset.metadata else {
        anyhow::bail!("no metadata.json in the data directory");
    };
    if format == OutputFormat::Csv {
        anyhow::bail!("info only supports --format json");
    }
    write_json(out, metadata)
}
