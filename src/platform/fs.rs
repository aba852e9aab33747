// LogTally - platform/fs.rs
//
// Whole-file reading with failure classification.
// The file handle (and any mapping) lives only inside `read_log_file` and is
// released on every return path.

use crate::util::error::LoadError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read the full content of a log file as UTF-8.
///
/// Files of at least `large_file_threshold` bytes are memory-mapped instead
/// of being read through a heap buffer. Either way the whole file must be
/// valid UTF-8; a single bad byte fails the read with `LoadError::Decode`.
pub fn read_log_file(path: &Path, large_file_threshold: u64) -> Result<String, LoadError> {
    let io_err = |e| LoadError::from_io(path.to_path_buf(), e);

    let file = File::open(path).map_err(io_err)?;
    let size = file.metadata().map_err(io_err)?.len();

    tracing::debug!(file = %path.display(), size, "Opened log file");

    if size >= large_file_threshold {
        read_mapped(path, &file)
    } else {
        read_buffered(path, file, size)
    }
}

fn read_buffered(path: &Path, mut file: File, size_hint: u64) -> Result<String, LoadError> {
    let mut bytes = Vec::with_capacity(usize::try_from(size_hint).unwrap_or(0));
    file.read_to_end(&mut bytes)
        .map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;

    String::from_utf8(bytes).map_err(|e| LoadError::Decode {
        path: path.to_path_buf(),
        source: e.utf8_error(),
    })
}

fn read_mapped(path: &Path, file: &File) -> Result<String, LoadError> {
    tracing::debug!(file = %path.display(), "Memory-mapping large log file");

    // SAFETY: the map is read-only and dropped before returning. External
    // modification of the file while it is mapped is accepted as a risk for
    // a tool reading already-written logs.
    let mmap = unsafe { memmap2::Mmap::map(file) }
        .map_err(|e| LoadError::from_io(path.to_path_buf(), e))?;

    std::str::from_utf8(&mmap)
        .map(str::to_owned)
        .map_err(|e| LoadError::Decode {
            path: path.to_path_buf(),
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_reads_small_file() {
        let file = write_temp(b"2024-01-22 08:30:01 INFO hello\n");
        let content = read_log_file(file.path(), u64::MAX).unwrap();
        assert_eq!(content, "2024-01-22 08:30:01 INFO hello\n");
    }

    #[test]
    fn test_mapped_and_buffered_reads_agree() {
        let file = write_temp("2024-01-22 08:30:01 INFO caf\u{e9}\n".as_bytes());
        let buffered = read_log_file(file.path(), u64::MAX).unwrap();
        let mapped = read_log_file(file.path(), 1).unwrap();
        assert_eq!(buffered, mapped);
    }

    #[test]
    fn test_empty_file_reads_as_empty_string() {
        let file = write_temp(b"");
        assert_eq!(read_log_file(file.path(), u64::MAX).unwrap(), "");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_log_file(&dir.path().join("absent.log"), u64::MAX);
        assert!(
            matches!(result, Err(LoadError::NotFound { .. })),
            "expected NotFound, got {result:?}"
        );
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let file = write_temp(b"2024-01-22 08:30:01 INFO \xff\xfe broken\n");
        let buffered = read_log_file(file.path(), u64::MAX);
        let mapped = read_log_file(file.path(), 1);
        assert!(matches!(buffered, Err(LoadError::Decode { .. })));
        assert!(matches!(mapped, Err(LoadError::Decode { .. })));
    }
}
