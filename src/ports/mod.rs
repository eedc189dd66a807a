//! Ports (interfaces) defining the boundaries of the application
//!
//! Ports are traits that define how the acquisition logic interacts with
//! hardware. They allow the domain and the loop to remain independent of
//! a specific HAL.
//!
//! # Hexagonal Architecture
//!
//! In hexagonal architecture, ports define the "holes" in the hexagon where
//! adapters plug in:
//!
//! - **AdcPort**: How we sample the temperature sensor (embassy-rp, mock)
//! - **ClockPort**: Where timestamps come from (embassy-time, mock)
//! - **OutputPort**: Where formatted lines go (UART, stdout, mock)
//! - **StatusIndicator**: Optional LED

pub mod adc;
pub mod clock;
pub mod output;
pub mod status;

pub use adc::{AdcPort, SensorError};
pub use clock::ClockPort;
pub use output::{OutputError, OutputPort};
pub use status::StatusIndicator;
