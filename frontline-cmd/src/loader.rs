//! Reading the exported JSON datasets from disk.
//!
//! The export step writes one directory per run:
//!
//! - `daily_areas.json` - `[{date, layerType, areaKm2}]` (required)
//! - `events.json` - `[{date, name, importance, ...}]` (optional)
//! - `metadata.json` - `{dateRange, layerTypes, ...}` (optional)
//!
//! The three files are read concurrently.

use anyhow::Context;
use frontline_data::ProcessingConfig;
use frontline_types::{DailyArea, DashboardMetadata, DateRange, MilitaryEvent};
use log::{info, warn};
use std::path::Path;

pub const DAILY_AREAS_FILE: &str = "daily_areas.json";
pub const EVENTS_FILE: &str = "events.json";
pub const METADATA_FILE: &str = "metadata.json";

/// Everything one export run produced.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub areas: Vec<DailyArea>,
    pub events: Vec<MilitaryEvent>,
    pub metadata: Option<DashboardMetadata>,
}

impl Dataset {
    /// The span the export covers: the metadata's date range when present
    /// and parseable, otherwise the earliest and latest area record.
    pub fn full_date_range(&self) -> Option<DateRange> {
        if let Some(metadata) = &self.metadata {
            match DateRange::parse(&metadata.date_range.start, &metadata.date_range.end) {
                Ok(range) => return Some(range),
                Err(e) => warn!("ignoring metadata date range: {}", e),
            }
        }

        let first = self.areas.iter().map(|d| d.date.as_str()).min()?;
        let last = self.areas.iter().map(|d| d.date.as_str()).max()?;
        match DateRange::parse(first, last) {
            Ok(range) => Some(range),
            Err(e) => {
                warn!("cannot derive date range from records: {}", e);
                None
            }
        }
    }
}

pub fn parse_daily_areas(json: &str) -> anyhow::Result<Vec<DailyArea>> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_events(json: &str) -> anyhow::Result<Vec<MilitaryEvent>> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_metadata(json: &str) -> anyhow::Result<DashboardMetadata> {
    Ok(serde_json::from_str(json)?)
}

/// Read a file, treating a missing file as `None`.
async fn read_optional(path: &Path) -> anyhow::Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(body) => Ok(Some(body)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

async fn load_daily_areas(dir: &Path) -> anyhow::Result<Vec<DailyArea>> {
    let path = dir.join(DAILY_AREAS_FILE);
    let body = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_daily_areas(&body).with_context(|| format!("failed to parse {}", path.display()))
}

async fn load_events(dir: &Path) -> anyhow::Result<Vec<MilitaryEvent>> {
    let path = dir.join(EVENTS_FILE);
    match read_optional(&path).await? {
        Some(body) => {
            parse_events(&body).with_context(|| format!("failed to parse {}", path.display()))
        }
        None => {
            warn!("{} not found, continuing without events", path.display());
            Ok(Vec::new())
        }
    }
}

async fn load_metadata(dir: &Path) -> anyhow::Result<Option<DashboardMetadata>> {
    let path = dir.join(METADATA_FILE);
    match read_optional(&path).await? {
        Some(body) => parse_metadata(&body)
            .map(Some)
            .with_context(|| format!("failed to parse {}", path.display())),
        None => Ok(None),
    }
}

/// Load all three dataset files from `dir`.
pub async fn load_dataset(dir: &Path) -> anyhow::Result<Dataset> {
    let (areas, events, metadata) =
        tokio::try_join!(load_daily_areas(dir), load_events(dir), load_metadata(dir))?;
    info!(
        "loader: Loaded {} daily area records and {} events from {}",
        areas.len(),
        events.len(),
        dir.display()
    );
    Ok(Dataset {
        areas,
        events,
        metadata,
    })
}

/// Load processing parameters from a JSON file, or use the defaults.
pub async fn load_config(path: Option<&Path>) -> anyhow::Result<ProcessingConfig> {
    let Some(path) = path else {
        return Ok(ProcessingConfig::default());
    };
    let body = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: ProcessingConfig = serde_json::from_str(&body)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    info!("loader: Using processing config {:?}", config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontline_types::LayerType;
    use std::path::PathBuf;

    const AREAS_JSON: &str = r#"[
        {"date": "2024-01-02", "layerType": "ukraine_control_map", "areaKm2": 100.5},
        {"date": "2024-01-01", "layerType": "ukraine_control_map", "areaKm2": 100.0},
        {"date": "2024-08-10", "layerType": "kursk_russian_advances", "areaKm2": 4.25}
    ]"#;

    const METADATA_JSON: &str = r#"{
        "dateRange": {"start": "2023-11-01", "end": "2026-01-26"},
        "layerTypes": ["ukraine_control_map", "kursk_russian_advances"],
        "totalDailyRecords": 3,
        "totalEvents": 0,
        "territoryChangePoints": 1,
        "kurskChangePoints": 0,
        "exportTimestamp": "2026-01-27T04:12:00Z"
    }"#;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("frontline-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_daily_areas() {
        let areas = parse_daily_areas(AREAS_JSON).unwrap();
        assert_eq!(areas.len(), 3);
        assert_eq!(areas[2].layer_type, LayerType::KurskRussianAdvances);
        assert_eq!(areas[0].area_km2, 100.5);
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        assert!(parse_daily_areas(r#"[{"date": "2024-01-01"}]"#).is_err());
    }

    #[test]
    fn test_full_date_range_prefers_metadata() {
        let dataset = Dataset {
            areas: parse_daily_areas(AREAS_JSON).unwrap(),
            events: Vec::new(),
            metadata: Some(parse_metadata(METADATA_JSON).unwrap()),
        };
        let range = dataset.full_date_range().unwrap();
        assert_eq!(range.bounds(), ("2023-11-01".to_string(), "2026-01-26".to_string()));
    }

    #[test]
    fn test_full_date_range_falls_back_to_records() {
        let dataset = Dataset {
            areas: parse_daily_areas(AREAS_JSON).unwrap(),
            ..Dataset::default()
        };
        let range = dataset.full_date_range().unwrap();
        assert_eq!(range.bounds(), ("2024-01-01".to_string(), "2024-08-10".to_string()));
        assert!(Dataset::default().full_date_range().is_none());
    }

    #[tokio::test]
    async fn test_load_dataset_with_optional_files_missing() {
        let dir = scratch_dir("areas-only");
        std::fs::write(dir.join(DAILY_AREAS_FILE), AREAS_JSON).unwrap();

        let dataset = load_dataset(&dir).await.unwrap();
        assert_eq!(dataset.areas.len(), 3);
        assert!(dataset.events.is_empty());
        assert!(dataset.metadata.is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_load_dataset_requires_daily_areas() {
        let dir = scratch_dir("empty");
        let err = load_dataset(&dir).await.unwrap_err();
        assert!(err.to_string().contains(DAILY_AREAS_FILE));
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[tokio::test]
    async fn test_load_config_defaults_without_path() {
        let config = load_config(None).await.unwrap();
        assert_eq!(config, ProcessingConfig::default());
    }
}
