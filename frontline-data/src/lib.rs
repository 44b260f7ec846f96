//! Time-series processing for territorial-control and event data.
//!
//! This crate turns raw dated observations into the series the charts
//! draw. Every function is pure: inputs are borrowed, outputs are freshly
//! allocated, and nothing is cached between calls, so callers may run
//! several extractions in parallel without coordination.
//!
//! The leaf functions trust their caller: dates must already be sorted
//! ascending and unique. [`layer::extract_layer`] upholds that before
//! delegating.
//!
//! ```rust
//! use frontline_data::layer::extract_layer;
//! use frontline_types::{DailyArea, LayerType};
//!
//! let data = vec![
//!     DailyArea::new("2024-01-03", "ukraine_control_map", 150.0),
//!     DailyArea::new("2024-01-01", "ukraine_control_map", 100.0),
//!     DailyArea::new("2024-01-02", "kursk_russian_advances", 5.0),
//!     DailyArea::new("2024-01-02", "ukraine_control_map", 100.0),
//! ];
//! let series = extract_layer(&data, &LayerType::UkraineControlMap);
//! assert_eq!(series.dates, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
//! assert_eq!(series.interpolated, vec![100.0, 125.0, 150.0]);
//! ```

pub mod config;
pub mod filter;
pub mod interpolation;
pub mod layer;
pub mod monthly;
pub mod rate;
pub mod smoothing;
pub mod stats;
pub mod trend;

pub use config::ProcessingConfig;
