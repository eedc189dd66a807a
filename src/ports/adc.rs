//! ADC port - abstraction over the analog-to-digital converter
//!
//! This trait lets the sensor reader and the acquisition loop drive the
//! converter without knowing the specific HAL behind it (embassy-rp, a
//! register-level driver, or a mock in tests).

use core::fmt;

/// Error type for ADC operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// `read` or `select_input` called before `initialize`
    NotInitialized,
    /// `initialize` called a second time
    AlreadyInitialized,
    /// Temperature channel selected while the sensor bias is off
    SensorDisabled,
    /// Requested input does not exist or is not owned by this adapter
    InvalidChannel(u8),
    /// The conversion itself failed
    ReadFailed,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::NotInitialized => f.write_str("ADC not initialized"),
            SensorError::AlreadyInitialized => f.write_str("ADC already initialized"),
            SensorError::SensorDisabled => f.write_str("temperature sensor not enabled"),
            SensorError::InvalidChannel(ch) => write!(f, "invalid ADC input {}", ch),
            SensorError::ReadFailed => f.write_str("ADC conversion failed"),
        }
    }
}

/// Port for the analog-to-digital converter
///
/// Configuration (`initialize`, `set_temperature_sensor_enabled`,
/// `select_input`) is global to the peripheral and done once at startup;
/// `read` never reconfigures anything.
///
/// # Example Implementation
///
/// ```ignore
/// struct RegisterAdc { adc: pac::ADC }
///
/// impl AdcPort for RegisterAdc {
///     fn initialize(&mut self) -> Result<(), SensorError> {
///         self.adc.cs().write(|w| w.set_en(true));
///         Ok(())
///     }
///     fn set_temperature_sensor_enabled(&mut self, enabled: bool) {
///         self.adc.cs().modify(|w| w.set_ts_en(enabled));
///     }
///     fn select_input(&mut self, channel: u8) -> Result<(), SensorError> {
///         self.adc.cs().modify(|w| w.set_ainsel(channel));
///         Ok(())
///     }
///     fn read(&mut self) -> Result<u16, SensorError> {
///         self.adc.cs().modify(|w| w.set_start_once(true));
///         while !self.adc.cs().read().ready() {}
///         Ok(self.adc.result().read().result())
///     }
/// }
/// ```
pub trait AdcPort {
    /// Bring the converter out of reset and enable it
    ///
    /// Called once per process. Adapters report a second call as
    /// [`SensorError::AlreadyInitialized`].
    fn initialize(&mut self) -> Result<(), SensorError>;

    /// Power the onboard temperature sensor bias on or off
    fn set_temperature_sensor_enabled(&mut self, enabled: bool);

    /// Route `channel` to the converter for subsequent reads
    fn select_input(&mut self, channel: u8) -> Result<(), SensorError>;

    /// Perform one conversion on the selected input
    ///
    /// Returns a raw 12-bit code in `[0, 4095]`.
    fn read(&mut self) -> Result<u16, SensorError>;
}
