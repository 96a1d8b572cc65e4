//! Tabular (CSV) export of filtered records.

use std::io::Write;
use std::path::Path;

use crate::error::{SiftError, SiftResult};
use crate::types::LogRecord;

/// Export column order, fixed.
pub const CSV_HEADER: [&str; 4] = ["Timestamp", "Log Level", "UserID", "Message"];

/// Write records as CSV to any writer: header row, then one row per record
/// with the timestamp in the canonical input format.
pub fn write_csv<W: Write>(writer: W, records: &[LogRecord]) -> SiftResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)
        .map_err(|e| SiftError::Export(e.to_string()))?;
    for record in records {
        wtr.write_record([
            record.timestamp_str().as_str(),
            record.severity.as_str(),
            &record.actor_id,
            &record.message,
        ])
        .map_err(|e| SiftError::Export(e.to_string()))?;
    }
    wtr.flush().map_err(|e| SiftError::Export(e.to_string()))?;
    Ok(())
}

/// Write records as CSV to a file path.
pub fn export_csv(path: &Path, records: &[LogRecord]) -> SiftResult<()> {
    let file = std::fs::File::create(path)
        .map_err(|e| SiftError::Export(format!("{}: {e}", path.display())))?;
    write_csv(file, records)
}
