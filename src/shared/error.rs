//! Strict error handling for the conversion engine
//!
//! All errors are recoverable signals, never panics, and serializable so a
//! presentation layer can forward them as-is.

use serde::Serialize;
use thiserror::Error;

use crate::shared::types::QuantityKind;

/// Conversion errors
///
/// The only failure the engine itself can produce is a unit name that the
/// relevant catalog does not know. Numeric parse failures are a
/// presentation-layer concern and never reach the engine.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "detail")]
pub enum ConvertError {
    /// From- or to-unit not present in the catalog for the requested kind
    #[error("Unknown {kind} unit: {unit}")]
    UnknownUnit { kind: QuantityKind, unit: String },
}

impl ConvertError {
    pub fn unknown_unit(kind: QuantityKind, unit: &str) -> Self {
        ConvertError::UnknownUnit {
            kind,
            unit: unit.to_string(),
        }
    }
}

// Helper type alias for engine results
pub type ConvertResult<T> = Result<T, ConvertError>;
