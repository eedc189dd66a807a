//! Build-time configuration
//!
//! Everything here is fixed for the lifetime of the binary. The only knob
//! exposed through cargo features is the reporting unit (`fahrenheit`) and
//! whether the board LED is driven (`status-led`).

use crate::domain::TemperatureUnit;

/// Unit the firmware reports temperatures in.
#[cfg(not(feature = "fahrenheit"))]
pub const TEMPERATURE_UNIT: TemperatureUnit = TemperatureUnit::Celsius;

/// Unit the firmware reports temperatures in.
#[cfg(feature = "fahrenheit")]
pub const TEMPERATURE_UNIT: TemperatureUnit = TemperatureUnit::Fahrenheit;

/// ADC reference voltage (ADC_VREF on the Pico)
pub const ADC_VREF: f32 = 3.3;

/// ADC resolution in bits
pub const ADC_RESOLUTION_BITS: u32 = 12;

/// Number of distinct ADC codes (`1 << 12`)
pub const ADC_RANGE: u32 = 1 << ADC_RESOLUTION_BITS;

/// ADC input wired to the onboard temperature sensor on RP2040
pub const TEMPERATURE_SENSOR_CHANNEL: u8 = 4;

/// Baud rate of the data UART (matches the Pico SDK stdio default)
pub const UART_BAUD_RATE: u32 = 115_200;

/// Raspberry Pi USB vendor ID, used by the host to find the board
pub const RASPBERRY_PI_VID: u16 = 0x2e8a;
