// LogTally - core/query.rs
//
// Level filter and per-level aggregation over a loaded collection.
// Core layer: pure logic, no I/O. Both queries can be run any number of
// times against the same collection.

use crate::core::model::{LevelCounts, LogCollection, LogRecord};

/// Records whose level equals `level`, ignoring case, in file order.
///
/// An empty result is valid and is not an error.
pub fn filter_by_level<'a>(collection: &'a LogCollection, level: &str) -> Vec<&'a LogRecord> {
    let target = level.to_lowercase();
    collection
        .iter()
        .filter(|record| record.level.to_lowercase() == target)
        .collect()
}

/// Occurrences per level string.
///
/// Unlike `filter_by_level`, levels are counted exactly as written, so
/// `INFO` and `info` end up under separate keys.
pub fn count_by_level(collection: &LogCollection) -> LevelCounts {
    collection
        .iter()
        .fold(LevelCounts::default(), |mut counts, record| {
            counts.record(&record.level);
            counts
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(level: &str, message: &str) -> LogRecord {
        LogRecord::new("2024-01-22", "08:30:01", level, message)
    }

    fn sample() -> LogCollection {
        LogCollection::new(vec![
            make_record("INFO", "User logged in successfully."),
            make_record("ERROR", "Disk write failed."),
            make_record("error", "Retry failed."),
            make_record("DEBUG", "Cache warm."),
            make_record("Error", "Gave up."),
        ])
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let logs = sample();
        let lower = filter_by_level(&logs, "error");
        let upper = filter_by_level(&logs, "ERROR");
        assert_eq!(lower, upper);
        assert_eq!(lower.len(), 3);
    }

    #[test]
    fn test_filter_preserves_file_order() {
        let logs = sample();
        let messages: Vec<_> = filter_by_level(&logs, "Error")
            .iter()
            .map(|r| r.message.as_str())
            .collect();
        assert_eq!(messages, vec!["Disk write failed.", "Retry failed.", "Gave up."]);
    }

    #[test]
    fn test_filter_without_matches_is_empty() {
        let logs = sample();
        assert!(filter_by_level(&logs, "WARNING").is_empty());
        assert!(filter_by_level(&LogCollection::default(), "INFO").is_empty());
    }

    #[test]
    fn test_count_keeps_case_variants_apart() {
        let logs = LogCollection::new(vec![make_record("INFO", "a"), make_record("info", "b")]);
        let counts = count_by_level(&logs);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("INFO"), 1);
        assert_eq!(counts.get("info"), 1);
    }

    #[test]
    fn test_count_totals_match_collection() {
        let logs = sample();
        let counts = count_by_level(&logs);
        assert_eq!(counts.total(), logs.len());
        assert_eq!(counts.get("ERROR"), 1);
        assert_eq!(counts.get("error"), 1);
        assert_eq!(counts.get("Error"), 1);
    }

    #[test]
    fn test_queries_are_repeatable() {
        let logs = sample();
        assert_eq!(count_by_level(&logs), count_by_level(&logs));
        assert_eq!(filter_by_level(&logs, "info"), filter_by_level(&logs, "info"));
    }
}
