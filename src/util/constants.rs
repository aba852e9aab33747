// LogTally - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogTally";

/// Binary name shown in usage text.
pub const BIN_NAME: &str = "logtally";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Record layout
// =============================================================================

/// Number of fields in a record line: date, time, level, message.
pub const FIELD_COUNT: usize = 4;

// =============================================================================
// File reading
// =============================================================================

/// File size in bytes at or above which the file is memory-mapped rather
/// than read into a heap buffer.
pub const DEFAULT_LARGE_FILE_THRESHOLD: u64 = 100 * 1024 * 1024; // 100 MB

// =============================================================================
// Table layout
// =============================================================================

/// Default minimum width of the level column in the statistics table.
pub const DEFAULT_LEVEL_COLUMN_WIDTH: usize = 16;

/// Default minimum width of the count column in the statistics table.
pub const DEFAULT_COUNT_COLUMN_WIDTH: usize = 9;

/// Hard upper bound on the configurable level column width.
pub const MAX_LEVEL_COLUMN_WIDTH: usize = 64;

/// Hard upper bound on the configurable count column width.
pub const MAX_COUNT_COLUMN_WIDTH: usize = 32;

// =============================================================================
// Console messages
// =============================================================================

/// Printed when the file has no parseable line at all.
pub const NO_ENTRIES_MESSAGE: &str = "Log file is empty or contains no valid entries.";

/// Title line above the statistics table.
pub const STATS_TITLE: &str = "Logging level statistics:";

/// Header label of the level column.
pub const LEVEL_HEADER: &str = "Logging level";

/// Header label of the count column.
pub const COUNT_HEADER: &str = "Count";

// =============================================================================
// Logging
// =============================================================================

/// Default log level. Line rejections are emitted at WARN so they stay
/// visible without `--debug`.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Levels accepted for `[logging] level`. Nothing stricter than WARN, so a
/// config file cannot hide line rejections.
pub const CONFIG_LOG_LEVELS: [&str; 4] = ["warn", "info", "debug", "trace"];

/// Maximum length of a log line included in diagnostic output.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;
