//! Conversion engine
//!
//! Length, weight, and volume conversions are table-driven: every unit
//! carries one factor relative to the catalog's base unit (meters, grams,
//! liters), and a conversion scales to base then to target. Adding a unit
//! means adding one factor, not one factor per unit pair. Temperature is
//! affine rather than multiplicative and lives in its own module, but it
//! routes through a base unit (Kelvin) the same way.

pub mod temperature;

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::shared::error::{ConvertError, ConvertResult};
use crate::shared::types::{QuantityKind, UnitInfo};
use self::temperature::TemperatureUnit;

// ============================================================================
// Unit Catalogs
// ============================================================================

/// Unit definition with its factor relative to the catalog's base unit
#[derive(Debug, Clone)]
pub struct UnitDef {
    pub symbol: &'static str,
    pub name: &'static str,
    pub factor: f64, // Multiplier to convert to the base unit; always > 0
}

/// Immutable mapping from unit symbol to definition, one per multiplicative
/// quantity. Initialized once at startup and never mutated.
pub struct UnitCatalog {
    kind: QuantityKind,
    defs: Vec<UnitDef>,
    index: HashMap<&'static str, f64>,
}

impl UnitCatalog {
    fn new(kind: QuantityKind, table: &[(&'static str, &'static str, f64)]) -> Self {
        let defs: Vec<UnitDef> = table
            .iter()
            .map(|&(symbol, name, factor)| UnitDef { symbol, name, factor })
            .collect();
        let index = defs.iter().map(|d| (d.symbol, d.factor)).collect();
        Self { kind, defs, index }
    }

    pub fn kind(&self) -> QuantityKind {
        self.kind
    }

    /// Factor to the base unit, after alias normalization
    pub fn factor(&self, unit: &str) -> Option<f64> {
        self.index.get(normalize(unit)?).copied()
    }

    pub fn contains(&self, unit: &str) -> bool {
        self.factor(unit).is_some()
    }

    /// Scale-to-base-then-to-target conversion.
    ///
    /// Fails with `UnknownUnit` if either symbol is absent; the error keeps
    /// the caller's original spelling.
    pub fn convert(&self, value: f64, from: &str, to: &str) -> ConvertResult<f64> {
        let from_factor = self
            .factor(from)
            .ok_or_else(|| ConvertError::unknown_unit(self.kind, from))?;
        let to_factor = self
            .factor(to)
            .ok_or_else(|| ConvertError::unknown_unit(self.kind, to))?;

        // Same unit (possibly spelled differently): identity, exactly
        if from_factor == to_factor {
            return Ok(value);
        }

        let base = value * from_factor;
        let result = base / to_factor;
        debug!(kind = %self.kind, value, from, to, result, "converted");
        Ok(result)
    }

    /// Units in catalog declaration order, for picker population
    pub fn units(&self) -> Vec<UnitInfo> {
        self.defs
            .iter()
            .map(|d| UnitInfo {
                symbol: d.symbol.to_string(),
                name: d.name.to_string(),
                kind: self.kind,
            })
            .collect()
    }
}

/// Length units (base: meters)
pub static LENGTH_UNITS: Lazy<UnitCatalog> = Lazy::new(|| {
    UnitCatalog::new(
        QuantityKind::Length,
        &[
            ("mm", "Millimeters", 0.001),
            ("cm", "Centimeters", 0.01),
            ("m", "Meters", 1.0),
            ("km", "Kilometers", 1000.0),
            ("inch", "Inches", 0.0254),
            ("ft", "Feet", 0.3048),
            ("yd", "Yards", 0.9144),
            ("mile", "Miles", 1609.344),
        ],
    )
});

/// Weight units (base: grams)
pub static WEIGHT_UNITS: Lazy<UnitCatalog> = Lazy::new(|| {
    UnitCatalog::new(
        QuantityKind::Weight,
        &[
            ("mg", "Milligrams", 0.001),
            ("g", "Grams", 1.0),
            ("kg", "Kilograms", 1000.0),
            ("oz", "Ounces", 28.3495),
            ("lb", "Pounds", 453.592),
            ("ton", "Tons", 907185.0),
        ],
    )
});

/// Volume units (base: liters)
pub static VOLUME_UNITS: Lazy<UnitCatalog> = Lazy::new(|| {
    UnitCatalog::new(
        QuantityKind::Volume,
        &[
            ("ml", "Milliliters", 0.001),
            ("l", "Liters", 1.0),
            ("gal", "Gallons", 3.78541),
            ("qt", "Quarts", 0.946353),
            ("pt", "Pints", 0.473176),
            ("cup", "Cups", 0.236588),
            ("fl_oz", "Fluid Ounces", 0.0295735),
        ],
    )
});

// Unit aliases: common long and short spellings mapped to catalog symbols.
// Unknown spellings fall through so the catalog rejects them with the
// caller's original string.
fn normalize(unit: &str) -> Option<&str> {
    let lower = unit.to_lowercase();
    let canonical = match lower.as_str() {
        // Length
        "mm" | "millimeter" | "millimeters" => "mm",
        "cm" | "centimeter" | "centimeters" => "cm",
        "m" | "meter" | "meters" => "m",
        "km" | "kilometer" | "kilometers" => "km",
        "inch" | "inches" | "in" => "inch",
        "ft" | "foot" | "feet" => "ft",
        "yd" | "yard" | "yards" => "yd",
        "mile" | "miles" | "mi" => "mile",
        // Weight
        "mg" | "milligram" | "milligrams" => "mg",
        "g" | "gram" | "grams" => "g",
        "kg" | "kilogram" | "kilograms" => "kg",
        "oz" | "ounce" | "ounces" => "oz",
        "lb" | "lbs" | "pound" | "pounds" => "lb",
        "ton" | "tons" => "ton",
        // Volume
        "ml" | "milliliter" | "milliliters" => "ml",
        "l" | "liter" | "liters" | "litre" | "litres" => "l",
        "gal" | "gallon" | "gallons" => "gal",
        "qt" | "quart" | "quarts" => "qt",
        "pt" | "pint" | "pints" => "pt",
        "cup" | "cups" => "cup",
        "fl_oz" | "floz" | "fl-oz" | "fluid ounce" | "fluid ounces" => "fl_oz",
        _ => return None,
    };
    Some(canonical)
}

// ============================================================================
// Public conversion operations
// ============================================================================

pub fn convert_length(value: f64, from: &str, to: &str) -> ConvertResult<f64> {
    LENGTH_UNITS.convert(value, from, to)
}

pub fn convert_weight(value: f64, from: &str, to: &str) -> ConvertResult<f64> {
    WEIGHT_UNITS.convert(value, from, to)
}

pub fn convert_volume(value: f64, from: &str, to: &str) -> ConvertResult<f64> {
    VOLUME_UNITS.convert(value, from, to)
}

/// Kind-dispatched conversion with string unit names.
///
/// This is the boundary a presentation layer calls: one selector, one value,
/// two unit names. Temperature unit names are validated here (the typed
/// `convert_temperature` is infallible on the enum domain).
pub fn convert(kind: QuantityKind, value: f64, from: &str, to: &str) -> ConvertResult<f64> {
    match kind {
        QuantityKind::Length => convert_length(value, from, to),
        QuantityKind::Weight => convert_weight(value, from, to),
        QuantityKind::Volume => convert_volume(value, from, to),
        QuantityKind::Temperature => {
            let from: TemperatureUnit = from.parse()?;
            let to: TemperatureUnit = to.parse()?;
            Ok(temperature::convert_temperature(value, from, to))
        }
    }
}

/// All units for one quantity kind, in display order
pub fn units_for(kind: QuantityKind) -> Vec<UnitInfo> {
    match kind {
        QuantityKind::Length => LENGTH_UNITS.units(),
        QuantityKind::Weight => WEIGHT_UNITS.units(),
        QuantityKind::Volume => VOLUME_UNITS.units(),
        QuantityKind::Temperature => TemperatureUnit::ALL
            .iter()
            .map(|t| UnitInfo {
                symbol: t.name().to_string(),
                name: t.name().to_string(),
                kind: QuantityKind::Temperature,
            })
            .collect(),
    }
}
