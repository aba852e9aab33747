// LogTally - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Every failure kind is a closed enum returned by value and handled at the
// driver boundary; nothing is intercepted implicitly.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all LogTally operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum LogTallyError {
    /// Wrong number of positional arguments.
    Usage(UsageError),

    /// The log file could not be read in full.
    Load(LoadError),

    /// A machine-readable rendering (JSON/CSV) failed.
    Export(ExportError),

    /// Writing results to the output stream failed.
    Output { source: io::Error },
}

impl fmt::Display for LogTallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(e) => write!(f, "{e}"),
            Self::Load(e) => write!(f, "{e}"),
            Self::Export(e) => write!(f, "Export error: {e}"),
            Self::Output { source } => write!(f, "Error writing output: {source}"),
        }
    }
}

impl std::error::Error for LogTallyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Usage(e) => Some(e),
            Self::Load(e) => Some(e),
            Self::Export(e) => Some(e),
            Self::Output { source } => Some(source),
        }
    }
}

impl From<io::Error> for LogTallyError {
    fn from(source: io::Error) -> Self {
        Self::Output { source }
    }
}

// ---------------------------------------------------------------------------
// Usage errors
// ---------------------------------------------------------------------------

/// Errors caused by the shape of the command line, detected before any file
/// access is attempted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// No log file path was given.
    MissingPath,

    /// More positional arguments than `<path> [level]`.
    TooManyArguments { count: usize },
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPath => write!(f, "Error: No log file given."),
            Self::TooManyArguments { .. } => write!(f, "Error: Too many arguments."),
        }
    }
}

impl std::error::Error for UsageError {}

impl From<UsageError> for LogTallyError {
    fn from(e: UsageError) -> Self {
        Self::Usage(e)
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Fatal failures while reading a log file. Loading is all-or-nothing at the
/// file level, so any of these aborts the invocation.
#[derive(Debug)]
pub enum LoadError {
    /// The path does not exist.
    NotFound { path: PathBuf, source: io::Error },

    /// The process may not open or read the path.
    PermissionDenied { path: PathBuf, source: io::Error },

    /// The file content is not valid UTF-8.
    Decode {
        path: PathBuf,
        source: std::str::Utf8Error,
    },

    /// Any other I/O failure.
    Io { path: PathBuf, source: io::Error },
}

impl LoadError {
    /// Classify an I/O error raised while opening or reading `path`.
    pub fn from_io(path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path, source },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path, .. } => {
                write!(f, "Error: File '{}' not found.", path.display())
            }
            Self::PermissionDenied { source, .. } => write!(f, "Permission denied: {source}"),
            Self::Decode { source, .. } => write!(f, "Encoding error: {source}"),
            Self::Io { path, source } => {
                write!(f, "Error reading file '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound { source, .. } => Some(source),
            Self::PermissionDenied { source, .. } => Some(source),
            Self::Decode { source, .. } => Some(source),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<LoadError> for LogTallyError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// A structural defect in a single line. Never fatal: the line is dropped
/// and the rest of the file is still processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The line did not split into date, time, level and message.
    MissingFields {
        line_number: u64,
        found: usize,
        preview: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields {
                line_number,
                found,
                preview,
            } => write!(
                f,
                "line {line_number}: expected {} fields, found {found}: '{preview}'",
                super::constants::FIELD_COUNT
            ),
        }
    }
}

impl std::error::Error for ParseError {}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

/// Errors raised while rendering JSON or CSV output.
#[derive(Debug)]
pub enum ExportError {
    /// I/O error writing the rendered document.
    Io { source: io::Error },

    /// CSV serialisation error.
    Csv { source: csv::Error },

    /// JSON serialisation error.
    Json { source: serde_json::Error },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { source } => write!(f, "I/O error: {source}"),
            Self::Csv { source } => write!(f, "CSV error: {source}"),
            Self::Json { source } => write!(f, "JSON error: {source}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source } => Some(source),
            Self::Csv { source } => Some(source),
            Self::Json { source } => Some(source),
        }
    }
}

impl From<ExportError> for LogTallyError {
    fn from(e: ExportError) -> Self {
        Self::Export(e)
    }
}

/// Convenience type alias for LogTally results.
pub type Result<T> = std::result::Result<T, LogTallyError>;
