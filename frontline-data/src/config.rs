//! Tunable parameters for the processing pipeline.

use crate::{interpolation, rate, smoothing, stats};
use serde::{Deserialize, Serialize};

/// Parameters shared by every processing call.
///
/// Missing fields in a config file fall back to the defaults the charts
/// have always used.
///
/// ```rust
/// use frontline_data::ProcessingConfig;
///
/// let config: ProcessingConfig = serde_json::from_str(r#"{"medianWindow": 9}"#).unwrap();
/// assert_eq!(config.median_window, 9);
/// assert_eq!(config.threshold, 0.5);
/// assert_eq!(config.rate_window_days, 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProcessingConfig {
    /// Minimum absolute jump, in km², treated as a real control-map update.
    pub threshold: f64,
    /// Rolling median window for the smoothed series.
    pub median_window: usize,
    /// Averaging window for the rate-of-change series.
    pub rate_window_days: usize,
    /// Lag for percent-change comparisons.
    pub percent_change_lag: usize,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        ProcessingConfig {
            threshold: interpolation::DEFAULT_THRESHOLD,
            median_window: smoothing::DEFAULT_WINDOW,
            rate_window_days: rate::DEFAULT_WINDOW_DAYS,
            percent_change_lag: stats::DEFAULT_PERCENT_CHANGE_LAG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ProcessingConfig;

    #[test]
    fn test_defaults() {
        let config = ProcessingConfig::default();
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.median_window, 7);
        assert_eq!(config.rate_window_days, 30);
        assert_eq!(config.percent_change_lag, 7);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let config: ProcessingConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ProcessingConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config: ProcessingConfig =
            serde_json::from_str(r#"{"threshold": 2.0, "rateWindowDays": 14}"#).unwrap();
        assert_eq!(config.threshold, 2.0);
        assert_eq!(config.rate_window_days, 14);
        assert_eq!(config.median_window, 7);
    }
}
