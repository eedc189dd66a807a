//! Sensor reader: one ADC conversion turned into a temperature

use crate::domain::{TemperatureCalibration, TemperatureUnit, INVALID_UNIT_SENTINEL};
use crate::ports::{AdcPort, SensorError};

/// Reads the onboard temperature sensor through an [`AdcPort`].
///
/// The ADC must already be initialized with the temperature input
/// selected; the reader never touches the ADC configuration.
pub struct TemperatureReader<A: AdcPort> {
    adc: A,
    calibration: TemperatureCalibration,
    last_raw: Option<u16>,
}

impl<A: AdcPort> TemperatureReader<A> {
    /// Wrap an already configured ADC
    pub fn new(adc: A) -> Self {
        Self {
            adc,
            calibration: TemperatureCalibration::RP2040_DEFAULT,
            last_raw: None,
        }
    }

    /// Last raw ADC value (for diagnostics)
    pub fn last_raw_value(&self) -> Option<u16> {
        self.last_raw
    }

    /// Acquire one raw sample
    pub fn read_raw(&mut self) -> Result<u16, SensorError> {
        let raw = self.adc.read()?;
        self.last_raw = Some(raw);
        Ok(raw)
    }

    /// Read the temperature in the unit named by `unit` (`'C'` or `'F'`).
    ///
    /// An unknown unit symbol is not an error: the ADC is still read and
    /// the result is [`INVALID_UNIT_SENTINEL`]. The only error is a failed
    /// conversion reported by the port.
    pub fn read_temperature(&mut self, unit: char) -> Result<f32, SensorError> {
        let raw = self.read_raw()?;
        Ok(match TemperatureUnit::from_symbol(unit) {
            Ok(unit) => unit.convert_celsius(self.calibration.raw_to_celsius(raw)),
            Err(_) => INVALID_UNIT_SENTINEL,
        })
    }

    /// Read the temperature in a typed unit
    pub fn read_in(&mut self, unit: TemperatureUnit) -> Result<f32, SensorError> {
        let raw = self.read_raw()?;
        Ok(unit.convert_celsius(self.calibration.raw_to_celsius(raw)))
    }

    #[cfg(test)]
    pub(crate) fn adc_mut(&mut self) -> &mut A {
        &mut self.adc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::convert_raw;

    struct FixedAdc {
        raw: u16,
        reads: usize,
        fail: bool,
    }

    impl AdcPort for FixedAdc {
        fn initialize(&mut self) -> Result<(), SensorError> {
            Ok(())
        }

        fn set_temperature_sensor_enabled(&mut self, _enabled: bool) {}

        fn select_input(&mut self, _channel: u8) -> Result<(), SensorError> {
            Ok(())
        }

        fn read(&mut self) -> Result<u16, SensorError> {
            self.reads += 1;
            if self.fail {
                Err(SensorError::ReadFailed)
            } else {
                Ok(self.raw)
            }
        }
    }

    fn reader(raw: u16) -> TemperatureReader<FixedAdc> {
        TemperatureReader::new(FixedAdc {
            raw,
            reads: 0,
            fail: false,
        })
    }

    #[test]
    fn test_matches_pure_conversion() {
        let mut r = reader(876);
        assert_eq!(r.read_temperature('C'), Ok(convert_raw(876, 'C')));
        assert_eq!(r.read_temperature('F'), Ok(convert_raw(876, 'F')));
        assert_eq!(r.last_raw_value(), Some(876));
    }

    #[test]
    fn test_invalid_unit_still_reads_adc() {
        let mut r = reader(0);
        assert_eq!(r.read_temperature('Z'), Ok(-1.0));
        assert_eq!(r.adc_mut().reads, 1);
    }

    #[test]
    fn test_typed_unit() {
        let mut r = reader(2048);
        let c = r.read_in(TemperatureUnit::Celsius).unwrap();
        assert!((c - (-521.52)).abs() < 0.01, "got {}", c);
    }

    #[test]
    fn test_read_failure_propagates() {
        let mut r = TemperatureReader::new(FixedAdc {
            raw: 0,
            reads: 0,
            fail: true,
        });
        assert_eq!(r.read_temperature('C'), Err(SensorError::ReadFailed));
        assert_eq!(r.last_raw_value(), None);
    }
}
