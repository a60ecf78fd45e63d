//! # Trace Writer
//!
//! Serializes generated rows to CSV, header first.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::trace::record::{TraceRecord, CSV_HEADER};

/// Write the header and all rows to the given sink
///
/// The header row is always written, even for an empty trace, so the output
/// is a well-formed trace file regardless of row count.
///
/// # Arguments
///
/// * `out` - Destination sink
/// * `records` - Rows in file order
///
/// # Errors
///
/// Returns error if serialization or the underlying write fails.
pub fn write_records<W: Write>(out: W, records: &[TraceRecord]) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);

    writer.write_record(CSV_HEADER.split(','))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}

/// Create or overwrite a trace file with the given rows
///
/// # Arguments
///
/// * `path` - Destination file path
/// * `records` - Rows in file order
///
/// # Errors
///
/// Returns error if the file cannot be created or a write fails.
///
/// # Examples
///
/// ```no_run
/// use rsrp_simulator::export::writer::write_trace_file;
///
/// write_trace_file("trace.csv", &[])?;
/// # Ok::<(), rsrp_simulator::error::RsrpSimulatorError>(())
/// ```
pub fn write_trace_file<P: AsRef<Path>>(path: P, records: &[TraceRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_records(file, records)
}
