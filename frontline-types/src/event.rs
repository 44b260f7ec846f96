use serde::{Deserialize, Serialize};

/// A notable military event from `events.json`, drawn as an overlay on the
/// territory charts.
///
/// The score fields are the export's 0-10 style ratings and are passed
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilitaryEvent {
    pub date: String,
    pub name: String,
    pub importance: f64,
    pub territorial: f64,
    pub strategic: f64,
    pub cascade: f64,
    pub confidence: String,
}
