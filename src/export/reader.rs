//! # Trace Reader
//!
//! Parses and validates trace files produced by this simulator or recorded
//! by the companion analyzer app.
//!
//! Validation failures carry the 1-based line they were found on; the header
//! row is line 1.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;

use crate::error::{Result, RsrpSimulatorError};
use crate::trace::record::{TraceRecord, CSV_HEADER, TIMESTAMP_FORMAT};

/// Lowest RSRP accepted on import, in dBm
pub const IMPORT_RSRP_MIN: i32 = -140;

/// Highest RSRP accepted on import, in dBm
pub const IMPORT_RSRP_MAX: i32 = -44;

/// Lowest RSRQ accepted on import, in dB
pub const IMPORT_RSRQ_MIN: i32 = -20;

/// Highest RSRQ accepted on import, in dB
pub const IMPORT_RSRQ_MAX: i32 = 0;

/// Read and validate all rows from a trace source
///
/// The header row is matched against the canonical column names, ignoring
/// case and spacing. Every data row must parse and every field must lie in
/// its accepted range. Whitespace-only lines are tolerated.
///
/// # Arguments
///
/// * `input` - Trace source
///
/// # Returns
///
/// * `Result<Vec<TraceRecord>>` - Rows in file order
///
/// # Errors
///
/// Returns [`RsrpSimulatorError::Import`] with the offending line for a
/// missing or wrong header, an unparseable field, or an out-of-range value.
pub fn read_records<R: Read>(input: R) -> Result<Vec<TraceRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut rows = Vec::new();
    let mut saw_header = false;

    for entry in reader.records() {
        let record = entry?;
        let line = record.position().map_or(0, |p| p.line() as usize);

        if !saw_header {
            validate_header(&record, line)?;
            saw_header = true;
            continue;
        }

        // Whitespace-only lines between rows are tolerated
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }

        rows.push(parse_row(&record, line)?);
    }

    if !saw_header {
        return Err(RsrpSimulatorError::Import(
            1,
            "missing header row".to_string(),
        ));
    }

    Ok(rows)
}

/// Read and validate a trace file
///
/// # Arguments
///
/// * `path` - Trace file path
///
/// # Errors
///
/// Returns error if the file cannot be opened or its contents fail
/// validation.
///
/// # Examples
///
/// ```no_run
/// use rsrp_simulator::export::reader::read_trace_file;
///
/// let records = read_trace_file("trace.csv")?;
/// println!("{} rows", records.len());
/// # Ok::<(), rsrp_simulator::error::RsrpSimulatorError>(())
/// ```
pub fn read_trace_file<P: AsRef<Path>>(path: P) -> Result<Vec<TraceRecord>> {
    let file = File::open(path)?;
    read_records(file)
}

/// Match the header row against the canonical column names
fn validate_header(record: &StringRecord, line: usize) -> Result<()> {
    let expected: Vec<&str> = CSV_HEADER.split(',').collect();
    let normalized: Vec<String> = record
        .iter()
        .map(|field| field.replace(' ', "").to_ascii_lowercase())
        .collect();

    if normalized != expected {
        return Err(RsrpSimulatorError::Import(
            line,
            format!("expected header '{}'", CSV_HEADER),
        ));
    }

    Ok(())
}

/// Parse and range-check one data row
fn parse_row(record: &StringRecord, line: usize) -> Result<TraceRecord> {
    if record.len() != 5 {
        return Err(RsrpSimulatorError::Import(
            line,
            format!("expected 5 fields, found {}", record.len()),
        ));
    }

    let timestamp = NaiveDateTime::parse_from_str(&record[0], TIMESTAMP_FORMAT).map_err(|err| {
        RsrpSimulatorError::Import(line, format!("invalid timestamp '{}': {}", &record[0], err))
    })?;

    let latitude = parse_number::<f64>(record, 1, "latitude", line)?;
    let longitude = parse_number::<f64>(record, 2, "longitude", line)?;
    let rsrp = parse_number::<i32>(record, 3, "rsrp", line)?;
    let rsrq = parse_number::<i32>(record, 4, "rsrq", line)?;

    if !(-90.0..=90.0).contains(&latitude) {
        return Err(RsrpSimulatorError::Import(
            line,
            format!("latitude {} must be between -90 and 90", latitude),
        ));
    }

    if !(-180.0..=180.0).contains(&longitude) {
        return Err(RsrpSimulatorError::Import(
            line,
            format!("longitude {} must be between -180 and 180", longitude),
        ));
    }

    if !(IMPORT_RSRP_MIN..=IMPORT_RSRP_MAX).contains(&rsrp) {
        return Err(RsrpSimulatorError::Import(
            line,
            format!(
                "rsrp {} must be between {} and {}",
                rsrp, IMPORT_RSRP_MIN, IMPORT_RSRP_MAX
            ),
        ));
    }

    if !(IMPORT_RSRQ_MIN..=IMPORT_RSRQ_MAX).contains(&rsrq) {
        return Err(RsrpSimulatorError::Import(
            line,
            format!(
                "rsrq {} must be between {} and {}",
                rsrq, IMPORT_RSRQ_MIN, IMPORT_RSRQ_MAX
            ),
        ));
    }

    Ok(TraceRecord {
        timestamp,
        latitude,
        longitude,
        rsrp,
        rsrq,
    })
}

/// Parse one numeric field, reporting its column name on failure
fn parse_number<T>(record: &StringRecord, index: usize, name: &str, line: usize) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    record[index].parse().map_err(|err| {
        RsrpSimulatorError::Import(
            line,
            format!("invalid {} '{}': {}", name, &record[index], err),
        )
    })
}
