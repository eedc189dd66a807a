//! Adapters - concrete implementations of ports
//!
//! Adapters connect the acquisition loop to the RP2040 by implementing
//! the port traits on top of embassy-rp.
//!
//! # Available Adapters
//!
//! - **rp2040_temp**: RP2040 onboard temperature sensor via ADC input 4
//! - **embassy_clock**: microsecond timestamps from embassy-time
//! - **uart_output**: blocking UART transmitter
//! - **board_led**: GPIO status LED

pub mod board_led;
pub mod embassy_clock;
pub mod rp2040_temp;
pub mod uart_output;

pub use board_led::BoardLed;
pub use embassy_clock::EmbassyClock;
pub use rp2040_temp::Rp2040TempSensor;
pub use uart_output::UartOutput;
