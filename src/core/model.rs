// LogTally - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// platform dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Log Record
// =============================================================================

/// A single parsed log line: `<date> <time> <level> <message...>`.
///
/// Only produced by a successful parse and never mutated afterwards. The
/// date, time and level are kept as the raw tokens from the file; nothing
/// about their content is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub date: String,
    pub time: String,

    /// Severity label exactly as written. Free-form, not an enumeration.
    pub level: String,

    /// Remainder of the line after the level, inner whitespace preserved.
    pub message: String,
}

impl LogRecord {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        level: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            level: level.into(),
            message: message.into(),
        }
    }
}

/// Reconstructs the single-line shape the record was parsed from.
impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date, self.time, self.level, self.message
        )
    }
}

// =============================================================================
// Log Collection
// =============================================================================

/// All records of one file, in file order. Built once by the loader and
/// read-only thereafter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogCollection {
    records: Vec<LogRecord>,
}

impl LogCollection {
    pub fn new(records: Vec<LogRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LogRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// =============================================================================
// Level Counts
// =============================================================================

/// Occurrences per level string, keyed by the level exactly as it appeared
/// (`INFO` and `info` are different keys).
///
/// Storage is unordered; `sorted()` applies the lexicographic display order
/// so aggregation and presentation stay separate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounts {
    counts: HashMap<String, usize>,
}

impl LevelCounts {
    /// Add one occurrence of `level`.
    pub fn record(&mut self, level: &str) {
        match self.counts.get_mut(level) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(level.to_owned(), 1);
            }
        }
    }

    /// Count for an exact level string (0 when absent).
    pub fn get(&self, level: &str) -> usize {
        self.counts.get(level).copied().unwrap_or(0)
    }

    /// Number of distinct level strings.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Entries in ascending lexicographic order of the level string.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut rows: Vec<(&str, usize)> = self
            .counts
            .iter()
            .map(|(level, count)| (level.as_str(), *count))
            .collect();
        rows.sort_unstable_by(|a, b| a.0.cmp(b.0));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_reconstructs_line() {
        let record = LogRecord::new("2024-01-22", "08:31:10", "ERROR", "Disk  write failed.");
        assert_eq!(
            record.to_string(),
            "2024-01-22 08:31:10 ERROR Disk  write failed."
        );
    }

    #[test]
    fn test_level_counts_sorted_lexicographically() {
        let mut counts = LevelCounts::default();
        for level in ["WARN", "INFO", "ERROR", "INFO", "DEBUG"] {
            counts.record(level);
        }
        assert_eq!(
            counts.sorted(),
            vec![("DEBUG", 1), ("ERROR", 1), ("INFO", 2), ("WARN", 1)]
        );
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_uppercase_sorts_before_lowercase() {
        let mut counts = LevelCounts::default();
        counts.record("info");
        counts.record("INFO");
        assert_eq!(counts.sorted(), vec![("INFO", 1), ("info", 1)]);
    }

    #[test]
    fn test_missing_level_counts_zero() {
        let counts = LevelCounts::default();
        assert_eq!(counts.get("ERROR"), 0);
        assert!(counts.is_empty());
    }
}
