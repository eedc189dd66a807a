//! Timestamped temperature sample
//!
//! This module defines the pair that leaves the device on every loop
//! iteration. It has no knowledge of how the pair is formatted or sent.

/// A timestamped temperature sample.
///
/// This is the core domain entity: one converted reading and the instant
/// it was taken, in the unit the firmware was built for.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SampleLine {
    /// Timestamp in microseconds since boot
    pub timestamp_us: u64,
    /// Temperature in the configured unit
    pub temperature: f32,
}

impl SampleLine {
    /// Create a new sample
    pub const fn new(timestamp_us: u64, temperature: f32) -> Self {
        Self {
            timestamp_us,
            temperature,
        }
    }
}
