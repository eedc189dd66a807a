//! Output port - line-oriented character sink
//!
//! This trait allows the acquisition loop to emit text lines without
//! knowing the transport (UART, USB CDC, stdout, a test buffer).

use core::fmt;

/// Error type for output operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// The transport rejected the write
    WriteFailed,
    /// The formatted line did not fit the line buffer
    LineTooLong,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::WriteFailed => f.write_str("output write failed"),
            OutputError::LineTooLong => f.write_str("line exceeds buffer"),
        }
    }
}

/// Port for the character stream the samples are written to
///
/// Writes are unbuffered from the caller's point of view: once
/// `write_line` returns, the line has been handed to the transport.
pub trait OutputPort {
    /// Write one line. `line` already carries its trailing `\n`.
    fn write_line(&mut self, line: &str) -> Result<(), OutputError>;
}
