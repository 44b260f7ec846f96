use crate::layer::LayerType;
use serde::{Deserialize, Serialize};

/// One controlled-area snapshot for a named layer on a given day.
///
/// Layers are interleaved in a single flat list in `daily_areas.json` with
/// no ordering guarantee; see `frontline_data::layer::extract_layer` for the
/// filtering and sorting step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyArea {
    /// Calendar day, "YYYY-MM-DD".
    pub date: String,
    pub layer_type: LayerType,
    /// Controlled area in square kilometres.
    pub area_km2: f64,
}

impl DailyArea {
    pub fn new(date: impl Into<String>, layer_type: impl Into<LayerType>, area_km2: f64) -> Self {
        DailyArea {
            date: date.into(),
            layer_type: layer_type.into(),
            area_km2,
        }
    }
}
