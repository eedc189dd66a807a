//! Host logger errors

use thiserror::Error;

/// Everything that can stop the host logger
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No Raspberry Pi serial device found (use --list-ports or --port)")]
    NoDevice,
    #[error("Invalid sweep: step must be positive, got start={start} stop={stop} step={step}")]
    InvalidSweep { start: u64, stop: u64, step: u64 },
    #[error("Expected no count, one count, or start stop step; got {0} values")]
    InvalidCounts(usize),
    #[error("Stream ended after {got} of {wanted} samples")]
    Truncated { got: usize, wanted: usize },
    #[error("Binary record file is {0} bytes, not a multiple of {record} bytes", record = super::export::BINARY_RECORD_LEN)]
    PartialRecord(u64),
    #[error("Cannot tell the format of {}; expected .csv, .bin or .json", .0.display())]
    UnknownFormat(std::path::PathBuf),
}

pub type Result<T> = core::result::Result<T, LoggerError>;
