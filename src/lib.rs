//! RP2040 Onboard Temperature DAQ Library
//!
//! This library provides a hexagonal architecture for sampling the RP2040
//! onboard temperature sensor and streaming timestamped readings over a
//! serial line, plus the host-side tooling that records that stream.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Domain Layer                                 │
//! │  - TemperatureCalibration: raw ADC -> voltage -> Celsius         │
//! │  - TemperatureUnit: Celsius / Fahrenheit selection               │
//! │  - SampleLine: timestamped reading on the wire                   │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ports (Traits)                               │
//! │  - AdcPort: initialize / enable sensor / select input / read     │
//! │  - ClockPort: monotonic microsecond counter                      │
//! │  - OutputPort: line-oriented serial sink                         │
//! │  - StatusIndicator: optional board LED                           │
//! └─────────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Adapters (feature `rp2040`)                  │
//! │  - Rp2040TempSensor: ADC input 4 via embassy-rp                  │
//! │  - EmbassyClock: embassy-time Instant                            │
//! │  - UartOutput: blocking UART0 TX                                 │
//! │  - BoardLed: GPIO status output                                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The acquisition loop in [`app`] only talks to the ports, so the whole
//! read-convert-emit cycle runs on the host in tests with mock ports.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;

// ============================================================================
// Protocol (shared between host and device)
// ============================================================================

pub mod protocol;

pub use protocol::{format_sample_line, parse_sample_line, LineBuf, ParseError, MAX_LINE_LEN};

// ============================================================================
// Hexagonal Architecture
// ============================================================================

/// Domain layer - pure conversion logic
pub mod domain;

/// Ports - traits defining hardware boundaries
pub mod ports;

/// Application layer - sensor reader and acquisition loop
pub mod app;

/// Adapters - RP2040 implementations of the ports
#[cfg(feature = "rp2040")]
pub mod adapters;

/// Host-side serial logger (std only)
#[cfg(feature = "std")]
pub mod host;

// Re-export key domain types
pub use domain::{
    convert_raw, try_convert_raw, SampleLine, TemperatureCalibration, TemperatureUnit, UnitError,
    INVALID_UNIT_SENTINEL,
};

// Re-export key port traits
pub use ports::{AdcPort, ClockPort, OutputError, OutputPort, SensorError, StatusIndicator};

// Re-export the application layer
pub use app::{Acquisition, TemperatureReader};

// Re-export adapters
#[cfg(feature = "rp2040")]
pub use adapters::{BoardLed, EmbassyClock, Rp2040TempSensor, UartOutput};
