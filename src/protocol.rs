//! Line protocol shared between the device and the host logger
//!
//! The device writes one ASCII line per sample:
//!
//! ```text
//! <timestamp_us> <temperature>\n
//! ```
//!
//! `timestamp_us` is an unsigned decimal integer, `temperature` a fixed
//! two-decimal float. There is no header, framing or checksum.
//!
//! Two decimals are produced by `{:.2}`, which rounds the exact binary value
//! of the `f32` to the nearest representable decimal, ties to even. This is
//! what C's `printf("%.02f")` does under the default rounding mode, so
//! `23.456f32` (stored as 23.4560012...) prints as `23.46`.

use core::fmt::{self, Write};

use crate::domain::SampleLine;
use crate::ports::OutputError;

/// Longest line `format_sample_line` will produce, newline included
pub const MAX_LINE_LEN: usize = 64;

/// Fixed-capacity buffer holding one formatted line
pub type LineBuf = heapless::String<MAX_LINE_LEN>;

/// Prefix of the verbose line format older firmware emitted
const VERBOSE_PREFIX: &str = "Onboard temperature @";

/// Render a sample as `<timestamp> <temperature:.2>\n`
pub fn format_sample_line(timestamp_us: u64, temperature: f32) -> Result<LineBuf, OutputError> {
    let mut line = LineBuf::new();
    writeln!(line, "{} {:.2}", timestamp_us, temperature).map_err(|_| OutputError::LineTooLong)?;
    Ok(line)
}

/// Error returned when a received line is not a sample
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Line is empty after trimming
    Empty,
    /// Wrong number of fields
    FieldCount(usize),
    /// Timestamp is not an unsigned integer
    InvalidTimestamp,
    /// Temperature is not a float
    InvalidTemperature,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => f.write_str("empty line"),
            ParseError::FieldCount(n) => write!(f, "expected 2 fields, found {}", n),
            ParseError::InvalidTimestamp => f.write_str("invalid timestamp"),
            ParseError::InvalidTemperature => f.write_str("invalid temperature"),
        }
    }
}

/// Parse one received line back into a sample.
///
/// Accepts the space-separated wire format, a comma-separated variant, and
/// the verbose `Onboard temperature @ <ts> = <temp> C` format.
pub fn parse_sample_line(line: &str) -> Result<SampleLine, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let (timestamp, temperature) = if let Some(rest) = line.strip_prefix(VERBOSE_PREFIX) {
        // "<ts> = <temp> <unit>"
        let mut words = rest.split_whitespace();
        match (words.next(), words.next(), words.next()) {
            (Some(ts), Some("="), Some(temp)) => (ts, temp),
            _ => return Err(ParseError::FieldCount(rest.split_whitespace().count())),
        }
    } else {
        let mut fields = line
            .split(|c: char| c == ',' || c.is_ascii_whitespace())
            .filter(|f| !f.is_empty());
        match (fields.next(), fields.next(), fields.next()) {
            (Some(ts), Some(temp), None) => (ts, temp),
            _ => {
                let count = line
                    .split(|c: char| c == ',' || c.is_ascii_whitespace())
                    .filter(|f| !f.is_empty())
                    .count();
                return Err(ParseError::FieldCount(count));
            }
        }
    };

    let timestamp_us = timestamp
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidTimestamp)?;
    let temperature = temperature
        .parse::<f32>()
        .map_err(|_| ParseError::InvalidTemperature)?;

    Ok(SampleLine::new(timestamp_us, temperature))
}
