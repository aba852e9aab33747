// LogTally - core/parser.rs
//
// Line-oriented record parsing.
// Core layer: works on in-memory text, never touches the filesystem.
//
// The layout is fixed: `<date> <time> <level> <message...>`, fields joined by
// single spaces. Only the shape is checked. A line with implausible field
// content is still a record.

use crate::core::model::{LogCollection, LogRecord};
use crate::util::constants;
use crate::util::error::ParseError;
use std::fmt;

/// Why a single line was not turned into a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFailure {
    /// Number of fields the line actually split into.
    pub found: usize,
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected {} fields (date time level message), found {}",
            constants::FIELD_COUNT,
            self.found
        )
    }
}

/// Result of parsing a whole file's content.
#[derive(Debug)]
pub struct ParseResult {
    /// Successfully parsed records, in file order.
    pub records: LogCollection,
    /// Number of rejected lines.
    pub rejected: u64,
    /// Total lines processed.
    pub lines_processed: u64,
}

/// Parse a single raw line into a record.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseFailure> {
    let fields: Vec<&str> = line.trim().splitn(constants::FIELD_COUNT, ' ').collect();
    match fields.as_slice() {
        [date, time, level, message] => Ok(LogRecord::new(*date, *time, *level, *message)),
        _ => Err(ParseFailure {
            found: fields.len(),
        }),
    }
}

/// Running state of the line fold in `parse_content`.
#[derive(Default)]
struct Accumulator {
    records: Vec<LogRecord>,
    rejected: u64,
    lines_processed: u64,
}

/// Parse every line of `content`.
///
/// Each rejected line is reported as a WARN event and skipped; it never
/// affects the records produced from other lines.
pub fn parse_content(content: &str) -> ParseResult {
    let acc = content
        .lines()
        .enumerate()
        .fold(Accumulator::default(), |mut acc, (line_idx, line)| {
            acc.lines_processed += 1;
            match parse_line(line) {
                Ok(record) => acc.records.push(record),
                Err(failure) => {
                    let error = ParseError::MissingFields {
                        line_number: (line_idx as u64) + 1,
                        found: failure.found,
                        preview: preview(line),
                    };
                    tracing::warn!("Skipping malformed {error}");
                    acc.rejected += 1;
                }
            }
            acc
        });

    tracing::debug!(
        records = acc.records.len(),
        rejected = acc.rejected,
        lines = acc.lines_processed,
        "Parsing complete"
    );

    ParseResult {
        records: LogCollection::new(acc.records),
        rejected: acc.rejected,
        lines_processed: acc.lines_processed,
    }
}

/// Truncate a line for diagnostic output.
fn preview(line: &str) -> String {
    let trimmed = line.trim();
    match trimmed.char_indices().nth(constants::DEBUG_MAX_LINE_PREVIEW) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_owned(),
    }
}
