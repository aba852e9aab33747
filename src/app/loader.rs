// LogTally - app/loader.rs
//
// Reads one log file end-to-end and turns it into a collection.
// All-or-nothing at the file level, permissive at the line level.

use crate::core::model::LogCollection;
use crate::core::parser::parse_content;
use crate::platform::config::AppConfig;
use crate::platform::fs::read_log_file;
use crate::util::error::LoadError;
use std::path::Path;

/// What a successful load produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// At least one line parsed.
    Entries(LogCollection),
    /// The file was empty or no line parsed. Not an error.
    NoEntries,
}

/// Load and parse the log file at `path`.
///
/// Malformed lines are reported and dropped by the parser. Only failures to
/// read the file itself are returned as errors.
pub fn load(path: &Path, config: &AppConfig) -> Result<LoadOutcome, LoadError> {
    let content = read_log_file(path, config.large_file_threshold)?;
    let result = parse_content(&content);

    tracing::info!(
        file = %path.display(),
        records = result.records.len(),
        rejected = result.rejected,
        lines = result.lines_processed,
        "Log file loaded"
    );

    if result.records.is_empty() {
        Ok(LoadOutcome::NoEntries)
    } else {
        Ok(LoadOutcome::Entries(result.records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_load_drops_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(
            &path,
            "2024-01-22 08:30:01 INFO User logged in successfully.\n\
             bad line\n\
             2024-01-22 08:31:10 ERROR Disk write failed.\n",
        )
        .unwrap();

        let records = match load(&path, &AppConfig::default()).unwrap() {
            LoadOutcome::Entries(records) => records,
            other => panic!("expected entries, got {other:?}"),
        };
        assert_eq!(records.len(), 2);
        assert_eq!(records.records()[1].message, "Disk write failed.");
    }

    #[test]
    fn test_empty_and_unparseable_files_have_no_entries() {
        let dir = tempfile::tempdir().unwrap();
        let empty = dir.path().join("empty.log");
        let junk = dir.path().join("junk.log");
        fs::write(&empty, "").unwrap();
        fs::write(&junk, "nothing\nuseful here\n\n").unwrap();

        assert_eq!(load(&empty, &AppConfig::default()).unwrap(), LoadOutcome::NoEntries);
        assert_eq!(load(&junk, &AppConfig::default()).unwrap(), LoadOutcome::NoEntries);
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("nope.log"), &AppConfig::default());
        assert!(matches!(result, Err(LoadError::NotFound { .. })));
    }
}
