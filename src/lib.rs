//! Conversion widgets engine
//!
//! Library backend for a unit converter: four quantity kinds (length,
//! weight, volume, temperature), immutable unit catalogs, and an in-memory
//! history of past conversions. The presentation layer (widget UI, CLI,
//! whatever drives this) owns input parsing and display refresh; this crate
//! owns the arithmetic and the bookkeeping.

pub mod api;
pub mod core;
pub mod shared;

pub use crate::api::Converter;
pub use crate::core::engine::temperature::{convert_temperature, TemperatureUnit};
pub use crate::core::engine::{convert, convert_length, convert_volume, convert_weight, units_for};
pub use crate::core::history::ConversionHistory;
pub use crate::shared::error::{ConvertError, ConvertResult};
pub use crate::shared::types::{
    ConversionRecord, ConvertRequest, ConvertResponse, QuantityKind, UnitInfo,
};
