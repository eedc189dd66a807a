//! Temperature calibration domain service
//!
//! This module provides the calibration that turns raw ADC codes from the
//! RP2040 onboard sensor into degrees Celsius.

use crate::config::{ADC_RANGE, ADC_VREF};

/// Temperature calibration parameters
///
/// Converts raw ADC readings to temperature in Celsius using the sensor's
/// published reference point:
///
/// ```text
/// voltage     = raw * vref / 4096
/// temperature = reference_temp_c - (voltage - reference_voltage) / slope
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureCalibration {
    /// Volts per ADC code
    pub conversion_factor: f32,
    /// Temperature at the reference point (°C)
    pub reference_temp_c: f32,
    /// Sensor voltage at the reference point (V)
    pub reference_voltage: f32,
    /// Sensor slope (V per °C), positive; the sensor voltage falls as it warms
    pub slope: f32,
}

impl TemperatureCalibration {
    /// RP2040 datasheet calibration
    ///
    /// `temp = 27 - (voltage - 0.706) / 0.001721` with a 3.3 V reference and
    /// a 12-bit conversion. These constants must stay exactly as they are so
    /// readings match the reference firmware bit for bit.
    pub const RP2040_DEFAULT: Self = Self {
        conversion_factor: ADC_VREF / ADC_RANGE as f32,
        reference_temp_c: 27.0,
        reference_voltage: 0.706,
        slope: 0.001721,
    };

    /// Scale a raw ADC code to the sensed voltage
    #[inline]
    pub fn raw_to_voltage(&self, raw: u16) -> f32 {
        raw as f32 * self.conversion_factor
    }

    /// Apply the linear calibration to a sensed voltage
    #[inline]
    pub fn voltage_to_celsius(&self, voltage: f32) -> f32 {
        self.reference_temp_c - (voltage - self.reference_voltage) / self.slope
    }

    /// Convert an ADC reading to temperature in Celsius
    #[inline]
    pub fn raw_to_celsius(&self, raw: u16) -> f32 {
        self.voltage_to_celsius(self.raw_to_voltage(raw))
    }
}

impl Default for TemperatureCalibration {
    fn default() -> Self {
        Self::RP2040_DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_factor_is_vref_over_4096() {
        let cal = TemperatureCalibration::RP2040_DEFAULT;
        assert_eq!(cal.conversion_factor, 3.3f32 / 4096.0);
    }

    #[test]
    fn test_zero_raw_is_zero_volts() {
        let cal = TemperatureCalibration::RP2040_DEFAULT;
        assert_eq!(cal.raw_to_voltage(0), 0.0);
        // 27.0 + 0.706 / 0.001721
        let temp = cal.raw_to_celsius(0);
        assert!((temp - 437.23).abs() < 0.01, "got {}", temp);
    }

    #[test]
    fn test_mid_scale() {
        let cal = TemperatureCalibration::RP2040_DEFAULT;
        let v = cal.raw_to_voltage(2048);
        assert!((v - 1.65).abs() < 1e-6);
        let temp = cal.raw_to_celsius(2048);
        assert!((temp - (-521.52)).abs() < 0.01, "got {}", temp);
    }

    #[test]
    fn test_matches_formula_over_full_range() {
        let cal = TemperatureCalibration::default();
        for raw in 0..=4095u16 {
            let voltage = 3.3f32 * raw as f32 / 4096.0;
            let expected = 27.0f32 - (voltage - 0.706) / 0.001721;
            let got = cal.raw_to_celsius(raw);
            assert!(
                (got - expected).abs() <= 1e-3,
                "raw {}: got {}, expected {}",
                raw,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_reference_point() {
        let cal = TemperatureCalibration::default();
        assert_eq!(cal.voltage_to_celsius(0.706), 27.0);
    }

    #[test]
    fn test_warmer_means_lower_raw() {
        let cal = TemperatureCalibration::default();
        assert!(cal.raw_to_celsius(870) > cal.raw_to_celsius(880));
    }
}
