//! Temperature units and the unit-selecting conversion
//!
//! Two flavours of the same conversion live here: [`convert_raw`] keeps the
//! sentinel contract of the serial stream (an unknown unit yields `-1.0`),
//! while [`try_convert_raw`] reports the unknown unit as an error.

use core::fmt;

use super::TemperatureCalibration;

/// Value returned in place of a temperature when the unit symbol is unknown
pub const INVALID_UNIT_SENTINEL: f32 = -1.0;

/// Temperature unit, selected by its single-character symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureUnit {
    /// Degrees Celsius (`'C'`)
    Celsius,
    /// Degrees Fahrenheit (`'F'`)
    Fahrenheit,
}

impl TemperatureUnit {
    /// Look up a unit by symbol. Only uppercase `'C'` and `'F'` are recognized.
    pub const fn from_symbol(symbol: char) -> Result<Self, UnitError> {
        match symbol {
            'C' => Ok(TemperatureUnit::Celsius),
            'F' => Ok(TemperatureUnit::Fahrenheit),
            other => Err(UnitError::InvalidUnit(other)),
        }
    }

    /// The symbol this unit is selected by
    pub const fn symbol(self) -> char {
        match self {
            TemperatureUnit::Celsius => 'C',
            TemperatureUnit::Fahrenheit => 'F',
        }
    }

    /// Express a Celsius temperature in this unit
    #[inline]
    pub fn convert_celsius(self, celsius: f32) -> f32 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }
}

/// Error for an unrecognized unit symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UnitError {
    /// The symbol is neither `'C'` nor `'F'`
    InvalidUnit(char),
}

impl fmt::Display for UnitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitError::InvalidUnit(c) => write!(f, "invalid temperature unit '{}'", c),
        }
    }
}

/// Convert a raw ADC sample into the unit named by `unit`.
///
/// Always returns a value: an unknown unit symbol yields
/// [`INVALID_UNIT_SENTINEL`].
pub fn convert_raw(raw: u16, unit: char) -> f32 {
    try_convert_raw(raw, unit).unwrap_or(INVALID_UNIT_SENTINEL)
}

/// Convert a raw ADC sample into the unit named by `unit`, rejecting
/// unknown unit symbols.
pub fn try_convert_raw(raw: u16, unit: char) -> Result<f32, UnitError> {
    let unit = TemperatureUnit::from_symbol(unit)?;
    let celsius = TemperatureCalibration::RP2040_DEFAULT.raw_to_celsius(raw);
    Ok(unit.convert_celsius(celsius))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn celsius(raw: u16) -> f32 {
        TemperatureCalibration::RP2040_DEFAULT.raw_to_celsius(raw)
    }

    #[test]
    fn test_celsius_is_identity() {
        for raw in [0u16, 1, 876, 2048, 4095] {
            assert_eq!(convert_raw(raw, 'C'), celsius(raw));
        }
    }

    #[test]
    fn test_fahrenheit_conversion() {
        for raw in [0u16, 876, 2048, 4095] {
            assert_eq!(convert_raw(raw, 'F'), celsius(raw) * 9.0 / 5.0 + 32.0);
        }
    }

    #[test]
    fn test_raw_zero_scenario() {
        let c = convert_raw(0, 'C');
        let f = convert_raw(0, 'F');
        assert!((c - 437.23).abs() < 0.01, "got {}", c);
        // 437.2266 * 9 / 5 + 32
        assert!((f - 819.008).abs() < 0.01, "got {}", f);
        assert_eq!(convert_raw(0, 'Z'), -1.0);
    }

    #[test]
    fn test_unknown_units_give_sentinel() {
        for unit in ['Z', 'c', 'f', 'K', ' ', '\0', '°'] {
            assert_eq!(convert_raw(1000, unit), INVALID_UNIT_SENTINEL);
        }
    }

    #[test]
    fn test_try_convert_reports_unit() {
        assert_eq!(try_convert_raw(0, 'K'), Err(UnitError::InvalidUnit('K')));
        assert_eq!(try_convert_raw(2048, 'C'), Ok(convert_raw(2048, 'C')));
    }

    #[test]
    fn test_symbol_round_trip() {
        for unit in [TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit] {
            assert_eq!(TemperatureUnit::from_symbol(unit.symbol()), Ok(unit));
        }
    }

    #[test]
    fn test_freezing_and_boiling() {
        assert_eq!(TemperatureUnit::Fahrenheit.convert_celsius(0.0), 32.0);
        assert_eq!(TemperatureUnit::Fahrenheit.convert_celsius(100.0), 212.0);
    }
}
