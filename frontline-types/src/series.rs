//! Series produced by the processing library.
//!
//! All structs derive `Serialize` with camelCase field names so the output
//! matches what the chart components consume.

use serde::{Deserialize, Serialize};

/// The canonical per-layer tuple consumed by every territory chart.
///
/// All four vectors have identical length and index correspondence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerSeries {
    pub dates: Vec<String>,
    pub raw: Vec<f64>,
    pub interpolated: Vec<f64>,
    pub smoothed: Vec<f64>,
}

impl LayerSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// The values a chart displays: interpolated when interpolation is
    /// switched on, the raw snapshots otherwise.
    pub fn values(&self, show_interpolation: bool) -> &[f64] {
        if show_interpolation {
            &self.interpolated
        } else {
            &self.raw
        }
    }
}

/// Net change between the last observation of a month and the last
/// observation of the previous month that has data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyChange {
    /// "YYYY-MM"
    pub month: String,
    pub change: f64,
}

/// A centered rolling rate of change, expressed per 30 days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatePoint {
    pub date: String,
    pub area: f64,
    pub rate: f64,
}

/// Ordinary least-squares fit of value against index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendResult {
    pub slope: f64,
    pub intercept: f64,
    pub trend_values: Vec<f64>,
}
