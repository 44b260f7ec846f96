use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A named category of area measurement within the mixed daily-area dataset.
///
/// The two layers the export currently produces get their own variants;
/// anything else is carried through as [`LayerType::Other`] so a new layer
/// in the export does not require a code change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayerType {
    /// Total Russian-controlled territory in Ukraine.
    #[default]
    UkraineControlMap,
    /// Russian advances inside the Kursk salient.
    KurskRussianAdvances,
    Other(String),
}

impl LayerType {
    pub const UKRAINE_CONTROL_MAP: &'static str = "ukraine_control_map";
    pub const KURSK_RUSSIAN_ADVANCES: &'static str = "kursk_russian_advances";

    /// The label used in the exported JSON.
    pub fn as_str(&self) -> &str {
        match self {
            LayerType::UkraineControlMap => Self::UKRAINE_CONTROL_MAP,
            LayerType::KurskRussianAdvances => Self::KURSK_RUSSIAN_ADVANCES,
            LayerType::Other(name) => name,
        }
    }

    /// The layers every export is expected to contain.
    pub fn known() -> [LayerType; 2] {
        [LayerType::UkraineControlMap, LayerType::KurskRussianAdvances]
    }
}

impl From<&str> for LayerType {
    fn from(value: &str) -> Self {
        match value {
            Self::UKRAINE_CONTROL_MAP => LayerType::UkraineControlMap,
            Self::KURSK_RUSSIAN_ADVANCES => LayerType::KurskRussianAdvances,
            other => LayerType::Other(other.to_string()),
        }
    }
}

impl From<String> for LayerType {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::UKRAINE_CONTROL_MAP => LayerType::UkraineControlMap,
            Self::KURSK_RUSSIAN_ADVANCES => LayerType::KurskRussianAdvances,
            _ => LayerType::Other(value),
        }
    }
}

impl From<LayerType> for String {
    fn from(value: LayerType) -> Self {
        match value {
            LayerType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for LayerType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(LayerType::from(s))
    }
}

impl fmt::Display for LayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
