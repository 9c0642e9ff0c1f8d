use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The four measurable quantities the engine knows about.
///
/// A fixed closed set: dispatch is a plain match, no dynamic registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuantityKind {
    Length,
    Weight,
    Volume,
    Temperature,
}

impl QuantityKind {
    pub const ALL: [QuantityKind; 4] = [
        QuantityKind::Length,
        QuantityKind::Weight,
        QuantityKind::Volume,
        QuantityKind::Temperature,
    ];

    /// Display name, as shown in the history pane
    pub fn label(&self) -> &'static str {
        match self {
            QuantityKind::Length => "Length",
            QuantityKind::Weight => "Weight",
            QuantityKind::Volume => "Volume",
            QuantityKind::Temperature => "Temperature",
        }
    }
}

impl std::fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertRequest {
    pub kind: QuantityKind,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertResponse {
    pub result: f64,
    pub formatted_result: String,
    pub from_unit: String,
    pub to_unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

// Unit descriptor for populating pickers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitInfo {
    pub symbol: String, // Catalog key (e.g., "m", "kg")
    pub name: String,   // Display name (e.g., "Meters", "Kilograms")
    pub kind: QuantityKind,
}

/// A single logged conversion
///
/// Immutable once created: the history never edits records, only appends
/// them and (on clear) drops them all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub kind: QuantityKind,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
}

impl ConversionRecord {
    pub fn new(kind: QuantityKind, value: f64, from_unit: &str, to_unit: &str, result: f64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            kind,
            value,
            from_unit: from_unit.to_string(),
            to_unit: to_unit.to_string(),
            result,
        }
    }

    /// One display line for the history pane:
    /// `2024-03-01 12:00:00 - Length: 1 km = 1000.0000 m`
    pub fn display_line(&self) -> String {
        format!(
            "{} - {}: {} {} = {:.4} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.kind,
            self.value,
            self.from_unit,
            self.result,
            self.to_unit
        )
    }
}
