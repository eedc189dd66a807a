//! Clock port - monotonic microsecond counter

/// Port for the timestamp source
///
/// The counter is monotonic and never wraps within the device's runtime
/// (a 64-bit microsecond counter lasts for more than half a million years).
pub trait ClockPort {
    /// Microseconds since boot
    fn now_us(&mut self) -> u64;
}
