//! Host-side logger for the DAQ serial stream
//!
//! Reads `<timestamp_us> <temperature>` lines from the board, stamps each
//! with the host clock to measure receive latency, saves datasets as
//! CSV / binary / JSON and prints summary statistics.

pub mod capture;
pub mod error;
pub mod export;
pub mod plan;
pub mod record;
pub mod serial;
pub mod stats;

pub use capture::{Capture, SystemClock};
pub use error::{LoggerError, Result};
pub use export::{
    export_dataset, read_binary, read_csv, read_dataset, read_json, write_csv, write_csv_row,
    ExportFormat, ExportedFile, CSV_HEADER,
};
pub use plan::AcquisitionPlan;
pub use record::{HostRecord, LatencyTracker};
pub use stats::Analysis;
