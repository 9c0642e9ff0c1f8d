//! Boundary facade for a presentation layer
//!
//! Converts, formats for display, and records successful conversions in one
//! place so a widget only has to read the response and refresh its history
//! view. Rounding happens only here; the engine keeps full precision.

use serde_json::json;
use tracing::debug;

use crate::core::engine;
use crate::core::history::ConversionHistory;
use crate::shared::error::ConvertResult;
use crate::shared::types::{ConvertRequest, ConvertResponse, QuantityKind, UnitInfo};

/// Result line rendered to 4 decimal places, e.g. `1 km = 1000.0000 m`
pub fn format_result(value: f64, from_unit: &str, result: f64, to_unit: &str) -> String {
    format!("{} {} = {:.4} {}", value, from_unit, result, to_unit)
}

/// Owns the engine boundary and the conversion history.
///
/// One instance per UI session; the history has single-owner semantics, so
/// the converter is the one writer.
#[derive(Debug, Default)]
pub struct Converter {
    history: ConversionHistory,
}

impl Converter {
    pub fn new() -> Self {
        Self {
            history: ConversionHistory::new(),
        }
    }

    /// Convert and, on success, record.
    ///
    /// Failed conversions are returned to the caller and leave the history
    /// untouched.
    pub fn convert(&mut self, request: &ConvertRequest) -> ConvertResult<ConvertResponse> {
        let result = engine::convert(request.kind, request.value, &request.from_unit, &request.to_unit)?;

        let record = self.history.record(
            request.kind,
            request.value,
            &request.from_unit,
            &request.to_unit,
            result,
        );
        debug!(kind = %request.kind, result, "conversion handled");

        Ok(ConvertResponse {
            result,
            formatted_result: format_result(request.value, &request.from_unit, result, &request.to_unit),
            from_unit: request.from_unit.clone(),
            to_unit: request.to_unit.clone(),
            metadata: Some(json!({
                "kind": request.kind,
                "record_id": record.id,
                "timestamp": record.timestamp,
            })),
        })
    }

    /// Units to offer for a quantity kind (picker population)
    pub fn units_for(&self, kind: QuantityKind) -> Vec<UnitInfo> {
        engine::units_for(kind)
    }

    pub fn history(&self) -> &ConversionHistory {
        &self.history
    }

    /// Rendered history lines, most recent first
    pub fn history_lines(&self) -> Vec<String> {
        self.history.list().iter().map(|r| r.display_line()).collect()
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}
