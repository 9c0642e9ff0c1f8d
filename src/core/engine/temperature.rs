//! Temperature conversion
//!
//! Not table-driven: Celsius and Fahrenheit are affine transforms of the
//! base unit (Kelvin), so the scale-factor arithmetic of the other catalogs
//! does not apply. The routing is the same, though: convert the input to
//! Kelvin, then Kelvin to the target.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::error::ConvertError;
use crate::shared::types::QuantityKind;

const KELVIN_OFFSET: f64 = 273.15;

/// The closed set of supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    fn to_kelvin(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value + KELVIN_OFFSET,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0 + KELVIN_OFFSET,
            TemperatureUnit::Kelvin => value,
        }
    }

    fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => kelvin - KELVIN_OFFSET,
            TemperatureUnit::Fahrenheit => (kelvin - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => kelvin,
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "celsius" | "c" | "°c" => Ok(TemperatureUnit::Celsius),
            "fahrenheit" | "f" | "°f" => Ok(TemperatureUnit::Fahrenheit),
            "kelvin" | "k" => Ok(TemperatureUnit::Kelvin),
            _ => Err(ConvertError::unknown_unit(QuantityKind::Temperature, s)),
        }
    }
}

/// Two-hop conversion through Kelvin.
///
/// Infallible: the enum domain makes invalid units unrepresentable, so
/// validation happens at the string boundary, not here.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    to.from_kelvin(from.to_kelvin(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use TemperatureUnit::{Celsius, Fahrenheit, Kelvin};

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_fixed_points() {
        assert_eq!(convert_temperature(0.0, Celsius, Fahrenheit), 32.0);
        assert_eq!(convert_temperature(100.0, Celsius, Kelvin), 373.15);
        assert_eq!(convert_temperature(32.0, Fahrenheit, Celsius), 0.0);
        assert_eq!(convert_temperature(0.0, Kelvin, Celsius), -273.15);
    }

    #[test]
    fn test_boiling_point_in_fahrenheit() {
        assert!((convert_temperature(100.0, Celsius, Fahrenheit) - 212.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_identity() {
        for unit in TemperatureUnit::ALL {
            assert_eq!(convert_temperature(-40.5, unit, unit), -40.5);
        }
    }

    #[test]
    fn test_round_trip_all_pairs() {
        for from in TemperatureUnit::ALL {
            for to in TemperatureUnit::ALL {
                let there = convert_temperature(21.7, from, to);
                let back = convert_temperature(there, to, from);
                assert!(
                    (back - 21.7).abs() < TOLERANCE,
                    "round trip {} -> {} drifted: {}",
                    from,
                    to,
                    back
                );
            }
        }
    }

    #[test]
    fn test_minus_forty_crossover() {
        // -40 is the one point where the Celsius and Fahrenheit scales meet
        assert!((convert_temperature(-40.0, Celsius, Fahrenheit) + 40.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_parse_names_and_symbols() {
        assert_eq!("Celsius".parse::<TemperatureUnit>().unwrap(), Celsius);
        assert_eq!("fahrenheit".parse::<TemperatureUnit>().unwrap(), Fahrenheit);
        assert_eq!("K".parse::<TemperatureUnit>().unwrap(), Kelvin);
        assert_eq!("°C".parse::<TemperatureUnit>().unwrap(), Celsius);
        assert!("Rankine".parse::<TemperatureUnit>().is_err());
    }

    #[test]
    fn test_no_domain_validation() {
        // Below absolute zero is degenerate but the engine is a pure
        // calculator; it computes anyway
        let result = convert_temperature(-500.0, Celsius, Kelvin);
        assert!(result < 0.0);
    }
}
