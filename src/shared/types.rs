use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Land area units supported by the calculator.
///
/// Serialized with the camelCase identifiers used in persisted history
/// (`"squareMeter"`, `"biswansi"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LandUnit {
    Biswansi,
    Biswa,
    Bigha,
    Hectare,
    SquareMeter,
    SquareFeet,
}

impl LandUnit {
    /// All units in display order
    pub const ALL: [LandUnit; 6] = [
        LandUnit::Biswansi,
        LandUnit::Biswa,
        LandUnit::Bigha,
        LandUnit::Hectare,
        LandUnit::SquareMeter,
        LandUnit::SquareFeet,
    ];

    /// Canonical identifier, also used as the `units.<id>` translation key
    pub fn id(&self) -> &'static str {
        match self {
            LandUnit::Biswansi => "biswansi",
            LandUnit::Biswa => "biswa",
            LandUnit::Bigha => "bigha",
            LandUnit::Hectare => "hectare",
            LandUnit::SquareMeter => "squareMeter",
            LandUnit::SquareFeet => "squareFeet",
        }
    }
}

impl fmt::Display for LandUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Hi,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Hi => "hi",
            Language::En => "en",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hi" | "hindi" => Ok(Language::Hi),
            "en" | "english" => Ok(Language::En),
            other => Err(format!("Unsupported language: {}", other)),
        }
    }
}

/// The same area expressed in every supported unit at once.
///
/// Produced fresh by every conversion and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionValues {
    // Older persisted entries predate biswansi
    #[serde(default)]
    pub biswansi: f64,
    pub biswa: f64,
    pub bigha: f64,
    pub hectare: f64,
    pub square_meter: f64,
    pub square_feet: f64,
}

impl ConversionValues {
    /// Value expressed in `unit`
    pub fn get(&self, unit: LandUnit) -> f64 {
        match unit {
            LandUnit::Biswansi => self.biswansi,
            LandUnit::Biswa => self.biswa,
            LandUnit::Bigha => self.bigha,
            LandUnit::Hectare => self.hectare,
            LandUnit::SquareMeter => self.square_meter,
            LandUnit::SquareFeet => self.square_feet,
        }
    }

    /// `(unit, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (LandUnit, f64)> + '_ {
        LandUnit::ALL.iter().map(move |unit| (*unit, self.get(*unit)))
    }
}

/// One past conversion snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub values: ConversionValues,
}

impl HistoryEntry {
    pub fn new(values: ConversionValues) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now().timestamp_millis(),
            values,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulkConversionItem {
    pub value: f64,
    pub unit: LandUnit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BulkConversionResult {
    pub input: BulkConversionItem,
    pub converted: ConversionValues,
}

/// The single persisted record. Current calculator values are deliberately absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}
