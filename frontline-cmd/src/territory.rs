//! Territory-series commands: layer, monthly, rate, trend.
//!
//! Each command extracts the selected layer through the view state, runs
//! one processing step over the displayed values, and writes the result.

use crate::output::{write_csv, write_json, OutputFormat};
use crate::state::DashboardState;
use frontline_data::monthly::monthly_changes;
use frontline_data::rate::rate_of_change;
use frontline_data::stats::mean_rate;
use frontline_data::trend::linear_trend;
use frontline_data::ProcessingConfig;
use frontline_types::{DailyArea, LayerSeries, LayerType, MonthlyChange, RatePoint, TrendResult};
use log::info;
use serde::Serialize;
use std::io::Write;

/// One CSV row of a [`LayerSeries`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerRow {
    pub date: String,
    pub raw: f64,
    pub interpolated: f64,
    pub smoothed: f64,
}

/// One CSV row of a [`TrendResult`], paired with the fitted input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendRow {
    pub date: String,
    pub value: f64,
    pub trend: f64,
}

pub fn layer_rows(series: &LayerSeries) -> Vec<LayerRow> {
    (0..series.len())
        .map(|i| LayerRow {
            date: series.dates[i].clone(),
            raw: series.raw[i],
            interpolated: series.interpolated[i],
            smoothed: series.smoothed[i],
        })
        .collect()
}

pub fn trend_rows(dates: &[String], values: &[f64], trend: &TrendResult) -> Vec<TrendRow> {
    dates
        .iter()
        .zip(values)
        .zip(&trend.trend_values)
        .map(|((date, &value), &fitted)| TrendRow {
            date: date.clone(),
            value,
            trend: fitted,
        })
        .collect()
}

pub fn monthly_report(
    state: &DashboardState,
    areas: &[DailyArea],
    layer: &LayerType,
    config: &ProcessingConfig,
) -> Vec<MonthlyChange> {
    let series = state.select_layer(areas, layer, config);
    monthly_changes(&series.dates, series.values(state.show_interpolation))
}

pub fn rate_report(
    state: &DashboardState,
    areas: &[DailyArea],
    layer: &LayerType,
    config: &ProcessingConfig,
) -> Vec<RatePoint> {
    let series = state.select_layer(areas, layer, config);
    rate_of_change(
        &series.dates,
        series.values(state.show_interpolation),
        config.rate_window_days,
    )
}

/// Fit the trend and keep the dates and values it was fitted on.
pub fn trend_report(
    state: &DashboardState,
    areas: &[DailyArea],
    layer: &LayerType,
    config: &ProcessingConfig,
) -> (LayerSeries, TrendResult) {
    let series = state.select_layer(areas, layer, config);
    let trend = linear_trend(series.values(state.show_interpolation));
    (series, trend)
}

pub fn run_layer<W: Write>(
    out: &mut W,
    format: OutputFormat,
    state: &DashboardState,
    areas: &[DailyArea],
    layer: &LayerType,
    config: &ProcessingConfig,
) -> anyhow::Result<()> {
    let series = state.select_layer(areas, layer, config);
    info!("layer {}: {} days", layer, series.len());
    match format {
        OutputFormat::Json => write_json(out, &series),
        OutputFormat::Csv => write_csv(out, &layer_rows(&series)),
    }
}

pub fn run_monthly<W: Write>(
    out: &mut W,
    format: OutputFormat,
    state: &DashboardState,
    areas: &[DailyArea],
    layer: &LayerType,
    config: &ProcessingConfig,
) -> anyhow::Result<()> {
    let changes = monthly_report(state, areas, layer, config);
    info!("layer {}: {} monthly changes", layer, changes.len());
    match format {
        OutputFormat::Json => write_json(out, &changes),
        OutputFormat::Csv => write_csv(out, &changes),
    }
}

pub fn run_rate<W: Write>(
    out: &mut W,
    format: OutputFormat,
    state: &DashboardState,
    areas: &[DailyArea],
    layer: &LayerType,
    config: &ProcessingConfig,
) -> anyhow::Result<()> {
    let points = rate_report(state, areas, layer, config);
    info!(
        "layer {}: {} rate points, mean {:.1} km²/month over a {}-day window",
        layer,
        points.len(),
        mean_rate(&points),
        config.rate_window_days
    );
    match format {
        OutputFormat::Json => write_json(out, &points),
        OutputFormat::Csv => write_csv(out, &points),
    }
}

pub fn run_trend<W: Write>(
    out: &mut W,
    format: OutputFormat,
    state: &DashboardState,
    areas: &[DailyArea],
    layer: &LayerType,
    config: &ProcessingConfig,
) -> anyhow::Result<()> {
    let (series, trend) = trend_report(state, areas, layer, config);
    info!(
        "layer {}: slope {:.3} km²/day, intercept {:.1}",
        layer, trend.slope, trend.intercept
    );
    match format {
        OutputFormat::Json => write_json(out, &trend),
        OutputFormat::Csv => {
            let values = series.values(state.show_interpolation);
            write_csv(out, &trend_rows(&series.dates, values, &trend))
        }
    }
}
