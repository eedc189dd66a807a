//! RP2040 onboard temperature sensor adapter
//!
//! This adapter implements the AdcPort trait for the RP2040's built-in
//! temperature sensor, which sits on ADC input 4.

use embassy_rp::adc::{Adc, Blocking, Channel as AdcChannel, Config};
use embassy_rp::peripherals::{ADC, ADC_TEMP_SENSOR};
use embassy_rp::Peri;

use crate::config::TEMPERATURE_SENSOR_CHANNEL;
use crate::ports::adc::{AdcPort, SensorError};

/// RP2040 onboard temperature sensor adapter
///
/// Holds the raw peripherals until the acquisition setup asks for them,
/// so the embassy-rp drivers are created exactly once.
pub struct Rp2040TempSensor<'d> {
    /// ADC peripheral, consumed by `initialize`
    adc_peri: Option<Peri<'d, ADC>>,
    /// Temperature sensor, consumed by the first enable
    sensor_peri: Option<Peri<'d, ADC_TEMP_SENSOR>>,
    /// ADC driver (blocking mode, no DMA)
    adc: Option<Adc<'d, Blocking>>,
    /// Temperature sensor channel
    channel: Option<AdcChannel<'d>>,
    enabled: bool,
    selected: bool,
}

impl<'d> Rp2040TempSensor<'d> {
    /// Create a new RP2040 temperature sensor adapter
    ///
    /// # Arguments
    ///
    /// * `adc` - ADC peripheral
    /// * `sensor` - Temperature sensor peripheral
    pub fn new(adc: Peri<'d, ADC>, sensor: Peri<'d, ADC_TEMP_SENSOR>) -> Self {
        Self {
            adc_peri: Some(adc),
            sensor_peri: Some(sensor),
            adc: None,
            channel: None,
            enabled: false,
            selected: false,
        }
    }
}

impl<'d> AdcPort for Rp2040TempSensor<'d> {
    fn initialize(&mut self) -> Result<(), SensorError> {
        let peri = self.adc_peri.take().ok_or(SensorError::AlreadyInitialized)?;
        self.adc = Some(Adc::new_blocking(peri, Config::default()));
        Ok(())
    }

    fn set_temperature_sensor_enabled(&mut self, enabled: bool) {
        if enabled {
            if let Some(sensor) = self.sensor_peri.take() {
                self.channel = Some(AdcChannel::new_temp_sensor(sensor));
            }
        }
        self.enabled = enabled;
    }

    fn select_input(&mut self, channel: u8) -> Result<(), SensorError> {
        if self.adc.is_none() {
            return Err(SensorError::NotInitialized);
        }
        // Input 4 is the only one this adapter owns a channel for
        if channel != TEMPERATURE_SENSOR_CHANNEL {
            return Err(SensorError::InvalidChannel(channel));
        }
        if !self.enabled {
            return Err(SensorError::SensorDisabled);
        }
        self.selected = true;
        Ok(())
    }

    fn read(&mut self) -> Result<u16, SensorError> {
        if !self.enabled {
            return Err(SensorError::SensorDisabled);
        }
        if !self.selected {
            return Err(SensorError::NotInitialized);
        }
        let adc = self.adc.as_mut().ok_or(SensorError::NotInitialized)?;
        let channel = self.channel.as_mut().ok_or(SensorError::SensorDisabled)?;

        adc.blocking_read(channel).map_err(|_| SensorError::ReadFailed)
    }
}
