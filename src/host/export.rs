//! Dataset export and import: CSV, fixed-width binary and JSON
//!
//! All three carry the same four columns per record:
//! `pico_timestamp_us, temperature, pc_time_us, latency_us`.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use super::error::{LoggerError, Result};
use super::record::HostRecord;

/// Size of one binary record: `u64 f64 u64 i64`, little-endian
pub const BINARY_RECORD_LEN: usize = 32;

/// CSV header row
pub const CSV_HEADER: &str = "pico_timestamp_us,temperature,pc_time_us,latency_us";

/// Output file formats
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    #[value(name = "bin")]
    Binary,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Binary, ExportFormat::Json];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Binary => "bin",
            ExportFormat::Json => "json",
        }
    }

    /// Format named by a file's extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(ext))
    }
}

/// A dataset file written by [`export_dataset`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedFile {
    pub format: ExportFormat,
    pub path: PathBuf,
    /// Size on disk
    pub bytes: u64,
}

impl ExportedFile {
    /// Average bytes spent per reading, `None` for an empty dataset
    pub fn bytes_per_record(&self, records: usize) -> Option<f64> {
        (records > 0).then(|| self.bytes as f64 / records as f64)
    }
}

/// `temp_data_<count>_entries.<ext>`
pub fn dataset_file_name(count: usize, format: ExportFormat) -> String {
    format!("temp_data_{}_entries.{}", count, format.extension())
}

/// Write one CSV row (no header)
pub fn write_csv_row<W: Write>(out: &mut W, r: &HostRecord) -> std::io::Result<()> {
    writeln!(
        out,
        "{},{},{},{}",
        r.pico_timestamp_us, r.temperature, r.pc_time_us, r.latency_us
    )
}

/// Write records as CSV with a header row
pub fn write_csv<W: Write>(out: &mut W, records: &[HostRecord]) -> std::io::Result<()> {
    writeln!(out, "{}", CSV_HEADER)?;
    for r in records {
        write_csv_row(out, r)?;
    }
    Ok(())
}

/// Write records as packed 32-byte little-endian records
pub fn write_binary<W: Write>(out: &mut W, records: &[HostRecord]) -> std::io::Result<()> {
    for r in records {
        out.write_all(&encode_binary(r))?;
    }
    Ok(())
}

fn encode_binary(r: &HostRecord) -> [u8; BINARY_RECORD_LEN] {
    let mut bytes = [0u8; BINARY_RECORD_LEN];
    bytes[0..8].copy_from_slice(&r.pico_timestamp_us.to_le_bytes());
    bytes[8..16].copy_from_slice(&f64::from(r.temperature).to_le_bytes());
    bytes[16..24].copy_from_slice(&r.pc_time_us.to_le_bytes());
    bytes[24..32].copy_from_slice(&r.latency_us.to_le_bytes());
    bytes
}

fn decode_binary(bytes: &[u8; BINARY_RECORD_LEN]) -> HostRecord {
    let word = |i: usize| {
        let mut w = [0u8; 8];
        w.copy_from_slice(&bytes[i..i + 8]);
        w
    };
    HostRecord {
        pico_timestamp_us: u64::from_le_bytes(word(0)),
        temperature: f64::from_le_bytes(word(8)) as f32,
        pc_time_us: u64::from_le_bytes(word(16)),
        latency_us: i64::from_le_bytes(word(24)),
    }
}

/// Read back a binary record file
pub fn read_binary<R: Read>(input: &mut R) -> Result<Vec<HostRecord>> {
    let mut data = Vec::new();
    input.read_to_end(&mut data)?;
    if data.len() % BINARY_RECORD_LEN != 0 {
        return Err(LoggerError::PartialRecord(data.len() as u64));
    }

    Ok(data
        .chunks_exact(BINARY_RECORD_LEN)
        .map(|chunk| {
            let mut record = [0u8; BINARY_RECORD_LEN];
            record.copy_from_slice(chunk);
            decode_binary(&record)
        })
        .collect())
}

/// Read back a CSV file.
///
/// The header row is optional. Rows that do not hold four numeric fields
/// are skipped.
pub fn read_csv<R: BufRead>(input: R) -> Result<Vec<HostRecord>> {
    let mut records = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if index == 0 && line.trim() == CSV_HEADER {
            continue;
        }
        match parse_csv_row(&line) {
            Some(record) => records.push(record),
            None if line.trim().is_empty() => {}
            None => log::debug!("Skipping CSV row {}: {:?}", index + 1, line),
        }
    }
    Ok(records)
}

fn parse_csv_row(line: &str) -> Option<HostRecord> {
    let mut fields = line.trim().split(',').map(str::trim);
    let record = HostRecord {
        pico_timestamp_us: fields.next()?.parse().ok()?,
        temperature: fields.next()?.parse().ok()?,
        pc_time_us: fields.next()?.parse().ok()?,
        latency_us: fields.next()?.parse().ok()?,
    };
    fields.next().is_none().then_some(record)
}

/// Read back a JSON array of records
pub fn read_json<R: Read>(input: R) -> Result<Vec<HostRecord>> {
    Ok(serde_json::from_reader(input)?)
}

/// Read a dataset file, choosing the decoder from its extension
pub fn read_dataset(path: &Path) -> Result<Vec<HostRecord>> {
    let format =
        ExportFormat::from_path(path).ok_or_else(|| LoggerError::UnknownFormat(path.to_path_buf()))?;
    let file = File::open(path)?;
    match format {
        ExportFormat::Csv => read_csv(BufReader::new(file)),
        ExportFormat::Binary => read_binary(&mut BufReader::new(file)),
        ExportFormat::Json => read_json(BufReader::new(file)),
    }
}

/// Write records as a pretty-printed JSON array
pub fn write_json<W: Write>(out: &mut W, records: &[HostRecord]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, records)?;
    writeln!(out)?;
    Ok(())
}

/// Write one dataset in every requested format under `dir`
pub fn export_dataset(
    dir: &Path,
    records: &[HostRecord],
    formats: &[ExportFormat],
) -> Result<Vec<ExportedFile>> {
    let mut written = Vec::with_capacity(formats.len());

    for &format in formats {
        let path = dir.join(dataset_file_name(records.len(), format));
        let mut out = BufWriter::new(File::create(&path)?);
        match format {
            ExportFormat::Csv => write_csv(&mut out, records)?,
            ExportFormat::Binary => write_binary(&mut out, records)?,
            ExportFormat::Json => write_json(&mut out, records)?,
        }
        out.flush()?;
        let bytes = out.get_ref().metadata()?.len();
        log::info!("Wrote {} ({} bytes)", path.display(), bytes);
        written.push(ExportedFile { format, path, bytes });
    }

    Ok(written)
}
