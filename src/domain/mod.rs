//! Domain layer - pure conversion logic independent of hardware
//!
//! This module contains the calibration, the unit handling and the sample
//! entity. Nothing here touches a peripheral.

pub mod calibration;
pub mod reading;
pub mod unit;

pub use calibration::TemperatureCalibration;
pub use reading::SampleLine;
pub use unit::{convert_raw, try_convert_raw, TemperatureUnit, UnitError, INVALID_UNIT_SENTINEL};
