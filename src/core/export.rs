// LogTally - core/export.rs
//
// CSV and JSON rendering of query results for machine consumers.
// Core layer: writes to any Write trait object.

use crate::core::model::{LevelCounts, LogRecord};
use crate::util::error::ExportError;
use std::collections::BTreeMap;
use std::io::Write;

/// Write level counts as a JSON object with keys in sorted order.
pub fn export_counts_json<W: Write>(counts: &LevelCounts, mut writer: W) -> Result<(), ExportError> {
    let ordered: BTreeMap<&str, usize> = counts.sorted().into_iter().collect();
    serde_json::to_writer_pretty(&mut writer, &ordered)
        .map_err(|e| ExportError::Json { source: e })?;
    writeln!(writer).map_err(|e| ExportError::Io { source: e })
}

/// Write records as a JSON array of objects.
pub fn export_records_json<W: Write>(
    records: &[&LogRecord],
    mut writer: W,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|e| ExportError::Json { source: e })?;
    writeln!(writer).map_err(|e| ExportError::Io { source: e })?;
    Ok(records.len())
}

/// Write level counts as CSV: `level,count`, rows sorted by level.
pub fn export_counts_csv<W: Write>(counts: &LevelCounts, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["level", "count"])
        .map_err(|e| ExportError::Csv { source: e })?;

    for (level, count) in counts.sorted() {
        let count = count.to_string();
        csv_writer
            .write_record([level, count.as_str()])
            .map_err(|e| ExportError::Csv { source: e })?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })
}

/// Write records as CSV: `date,time,level,message`.
pub fn export_records_csv<W: Write>(
    records: &[&LogRecord],
    writer: W,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["date", "time", "level", "message"])
        .map_err(|e| ExportError::Csv { source: e })?;

    let mut count = 0;
    for record in records {
        csv_writer
            .write_record([
                &record.date,
                &record.time,
                &record.level,
                &record.message,
            ])
            .map_err(|e| ExportError::Csv { source: e })?;
        count += 1;
    }

    csv_writer
        .flush()
        .map_err(|e| ExportError::Io { source: e })?;

    Ok(count)
}
