use crate::layer::LayerType;
use serde::{Deserialize, Serialize};

/// First and last day covered by an export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDateRange {
    pub start: String,
    pub end: String,
}

/// Contents of `metadata.json`, written once per export run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetadata {
    pub date_range: ExportDateRange,
    pub layer_types: Vec<LayerType>,
    pub total_daily_records: u64,
    pub total_events: u64,
    pub territory_change_points: u64,
    pub kursk_change_points: u64,
    pub export_timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::DashboardMetadata;
    use crate::layer::LayerType;

    #[test]
    fn test_deserialize_metadata() {
        let json = r#"{
            "dateRange": {"start": "2023-11-01", "end": "2026-01-26"},
            "layerTypes": ["ukraine_control_map", "kursk_russian_advances"],
            "totalDailyRecords": 1650,
            "totalEvents": 42,
            "territoryChangePoints": 310,
            "kurskChangePoints": 57,
            "exportTimestamp": "2026-01-27T04:12:00Z"
        }"#;
        let metadata: DashboardMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.date_range.start, "2023-11-01");
        assert_eq!(metadata.layer_types.len(), 2);
        assert_eq!(metadata.layer_types[1], LayerType::KurskRussianAdvances);
        assert_eq!(metadata.kursk_change_points, 57);
    }
}
