//! Line capture: turn a byte stream from the device into host records

use std::io::{BufRead, ErrorKind};
use std::time::{SystemTime, UNIX_EPOCH};

use super::error::{LoggerError, Result};
use super::record::{HostRecord, LatencyTracker};
use crate::ports::ClockPort;
use crate::protocol::parse_sample_line;

/// Host wall clock in microseconds since the Unix epoch
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_us(&mut self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or(0)
    }
}

/// Reads sample lines from `reader`, stamping each with the host clock.
///
/// Blank and malformed lines are skipped. Read timeouts are retried, and a
/// line split across a timeout is kept and completed by the next read.
pub struct Capture<R: BufRead, C: ClockPort = SystemClock> {
    reader: R,
    clock: C,
    tracker: LatencyTracker,
    buf: Vec<u8>,
    skipped: u64,
}

impl<R: BufRead> Capture<R, SystemClock> {
    pub fn new(reader: R) -> Self {
        Self::with_clock(reader, SystemClock)
    }
}

impl<R: BufRead, C: ClockPort> Capture<R, C> {
    pub fn with_clock(reader: R, clock: C) -> Self {
        Self {
            reader,
            clock,
            tracker: LatencyTracker::new(),
            buf: Vec::with_capacity(64),
            skipped: 0,
        }
    }

    /// Lines discarded because they were not samples
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Start a new dataset: the next sample re-aligns the clocks
    pub fn reset_latency(&mut self) {
        self.tracker.reset();
    }

    /// Next valid record, or `None` at end of stream
    pub fn next_record(&mut self) -> Result<Option<HostRecord>> {
        loop {
            match self.reader.read_until(b'\n', &mut self.buf) {
                // EOF; a final line without '\n' is still parsed below
                Ok(0) if self.buf.is_empty() => return Ok(None),
                Ok(_) => {}
                Err(e) if matches!(e.kind(), ErrorKind::TimedOut | ErrorKind::Interrupted) => {
                    continue;
                }
                Err(e) => return Err(LoggerError::Io(e)),
            }

            let pc_time_us = self.clock.now_us();
            let text = String::from_utf8_lossy(&self.buf).into_owned();
            self.buf.clear();

            match parse_sample_line(&text) {
                Ok(sample) => return Ok(Some(self.tracker.stamp(sample, pc_time_us))),
                Err(e) => {
                    if !text.trim().is_empty() {
                        self.skipped += 1;
                        log::debug!("Skipping line {:?}: {}", text.trim_end(), e);
                    }
                }
            }
        }
    }

    /// Collect exactly `count` records
    pub fn collect(&mut self, count: usize) -> Result<Vec<HostRecord>> {
        let mut records = Vec::with_capacity(count);
        while records.len() < count {
            match self.next_record()? {
                Some(record) => records.push(record),
                None => {
                    log::warn!("Stream ended after {} of {} samples", records.len(), count);
                    return Err(LoggerError::Truncated {
                        got: records.len(),
                        wanted: count,
                    });
                }
            }
        }
        Ok(records)
    }
}
