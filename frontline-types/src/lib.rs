//! Core data model for the exported territorial-control datasets.
//!
//! Every struct here mirrors one JSON file produced by the upstream export
//! step (`daily_areas.json`, `events.json`, `metadata.json`) or one series
//! handed back by the processing library.

pub mod daily_area;
pub mod date_range;
pub mod event;
pub mod layer;
pub mod metadata;
pub mod series;

pub use daily_area::DailyArea;
pub use date_range::{DateRange, IsoBounds};
pub use event::MilitaryEvent;
pub use layer::LayerType;
pub use metadata::DashboardMetadata;
pub use series::{LayerSeries, MonthlyChange, RatePoint, TrendResult};
