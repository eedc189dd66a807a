//! Host-side record: a device sample plus the host's receive time

use serde::{Deserialize, Serialize};

use crate::domain::SampleLine;

/// One accepted sample as stored by the logger
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostRecord {
    /// Device timestamp (µs since device boot)
    pub pico_timestamp_us: u64,
    /// Temperature as sent by the device
    pub temperature: f32,
    /// Host wall-clock receive time (µs since the Unix epoch)
    pub pc_time_us: u64,
    /// Receive delay relative to the first sample of the dataset (µs)
    pub latency_us: i64,
}

/// Aligns device and host clocks on the first sample of a dataset.
///
/// The first sample fixes `offset = pc - device`; every later sample gets
/// `latency = pc - (device + offset)`, so the first latency is 0 and later
/// ones show how much slower (positive) or faster (negative) the host
/// received a sample than the device produced it.
#[derive(Clone, Copy, Debug, Default)]
pub struct LatencyTracker {
    offset: Option<i128>,
}

impl LatencyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the offset; the next sample starts a new alignment
    pub fn reset(&mut self) {
        self.offset = None;
    }

    /// Current offset (host µs minus device µs), if aligned
    pub fn offset(&self) -> Option<i128> {
        self.offset
    }

    /// Stamp a sample received at `pc_time_us`
    pub fn stamp(&mut self, sample: SampleLine, pc_time_us: u64) -> HostRecord {
        let device = i128::from(sample.timestamp_us);
        let pc = i128::from(pc_time_us);
        let offset = *self.offset.get_or_insert(pc - device);
        let latency = pc - (device + offset);

        HostRecord {
            pico_timestamp_us: sample.timestamp_us,
            temperature: sample.temperature,
            pc_time_us,
            latency_us: latency.clamp(i64::MIN.into(), i64::MAX.into()) as i64,
        }
    }
}
