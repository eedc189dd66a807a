//! Application layer - the sensor reader and the acquisition loop
//!
//! Both are generic over the ports, so the firmware plugs in the RP2040
//! adapters and the tests plug in mocks.

pub mod acquisition;
pub mod reader;

pub use acquisition::{Acquisition, NoIndicator};
pub use reader::TemperatureReader;
