//! Monotonic clock backed by the RP2040 TIMER through embassy-time

use crate::ports::ClockPort;

/// Microseconds since boot from `embassy_time::Instant`
///
/// Reading the instant only touches the 64-bit TIMER counter, so it works
/// without an executor running.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmbassyClock;

impl ClockPort for EmbassyClock {
    #[inline]
    fn now_us(&mut self) -> u64 {
        embassy_time::Instant::now().as_micros()
    }
}
