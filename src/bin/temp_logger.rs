//! Onboard Temperature DAQ Host Logger
//!
//! This binary runs on your PC, reads the `<timestamp_us> <temperature>`
//! stream from the board and records it.
//!
//! ## Usage
//!
//! ```bash
//! # List available serial ports
//! cargo run --features std --bin temp_logger -- --list-ports
//!
//! # Stream samples as CSV until the board disconnects (auto-detects the Pico)
//! cargo run --features std --bin temp_logger
//!
//! # Record 1000 samples to temp_data_1000_entries.{csv,bin,json}
//! cargo run --features std --bin temp_logger -- 1000 --port /dev/ttyACM0
//!
//! # Sweep: datasets of 1000, 2000, ... 9000 samples
//! cargo run --features std --bin temp_logger -- 1000 10000 1000
//!
//! # Re-analyze a recorded dataset (.csv, .bin or .json)
//! cargo run --features std --bin temp_logger -- --analyze temp_data_1000_entries.csv
//! ```

use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::{info, warn};

use daq::config::UART_BAUD_RATE;
use daq::host::{
    export_dataset, read_dataset, serial, write_csv_row, AcquisitionPlan, Analysis, Capture,
    ExportFormat, LoggerError, CSV_HEADER,
};

/// Record the onboard temperature stream from an RP2040
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Samples per dataset: none to stream, N, or START STOP STEP
    #[arg(num_args = 0..=3, value_name = "COUNT")]
    counts: Vec<u64>,

    /// Serial port (default: first Raspberry Pi USB device)
    #[arg(short, long)]
    port: Option<String>,

    /// Baud rate
    #[arg(short, long, default_value_t = UART_BAUD_RATE)]
    baud: u32,

    /// Read timeout in milliseconds
    #[arg(long, default_value_t = 1000)]
    timeout_ms: u64,

    /// List serial ports and exit
    #[arg(long)]
    list_ports: bool,

    /// Directory datasets are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Formats to export
    #[arg(short, long, value_enum, value_delimiter = ',', default_values_t = ExportFormat::ALL)]
    format: Vec<ExportFormat>,

    /// Print the analysis of a recorded dataset (.csv, .bin or .json) and exit
    #[arg(long, value_name = "FILE")]
    analyze: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.verbose {
        builder.filter(None, log::LevelFilter::Debug);
    } else {
        builder.filter(None, log::LevelFilter::Info);
    }
    builder.init();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), LoggerError> {
    if args.list_ports {
        return serial::list_ports();
    }

    if let Some(path) = &args.analyze {
        let records = read_dataset(path)?;
        match Analysis::from_records(&records) {
            Some(analysis) => println!("{}", analysis),
            None => warn!("{} holds no records", path.display()),
        }
        return Ok(());
    }

    let plan = AcquisitionPlan::from_counts(&args.counts)?;
    let port = serial::open(
        args.port.clone(),
        args.baud,
        Duration::from_millis(args.timeout_ms),
    )?;
    let mut capture = Capture::new(BufReader::new(port));

    match plan {
        AcquisitionPlan::Stream => stream(&mut capture),
        AcquisitionPlan::Datasets(counts) => {
            for count in counts {
                record_dataset(&mut capture, count, &args)?;
            }
            Ok(())
        }
    }
}

/// Print every sample as CSV until the stream ends
fn stream<R: io::BufRead>(capture: &mut Capture<R>) -> Result<(), LoggerError> {
    info!("Streaming; press Ctrl-C to stop");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", CSV_HEADER)?;

    while let Some(record) = capture.next_record()? {
        write_csv_row(&mut out, &record)?;
        out.flush()?;
    }

    info!("Stream closed ({} lines skipped)", capture.skipped());
    Ok(())
}

fn record_dataset<R: io::BufRead>(
    capture: &mut Capture<R>,
    count: usize,
    args: &Args,
) -> Result<(), LoggerError> {
    info!("=== Acquiring {} events ===", count);
    capture.reset_latency();
    let records = capture.collect(count)?;

    let written = export_dataset(&args.output_dir, &records, &args.format)?;
    println!("\nData stored in:");
    for file in &written {
        let per_reading = file
            .bytes_per_record(records.len())
            .map(|b| format!("{:.1} bytes/reading", b))
            .unwrap_or_default();
        println!(
            "  {:<40} {:>10} bytes  {}",
            file.path.display().to_string(),
            file.bytes,
            per_reading
        );
    }

    if let Some(analysis) = Analysis::from_records(&records) {
        println!("\n{}", analysis);
    }
    Ok(())
}
