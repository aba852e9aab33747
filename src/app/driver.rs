// LogTally - app/driver.rs
//
// Command driver: interprets the positional arguments, runs the load ->
// query -> render pipeline and maps the outcome to an exit status.
//
// Output streams are injected so the whole state machine can be exercised
// in tests without spawning a process.

use crate::app::loader::{self, LoadOutcome};
use crate::core::export;
use crate::core::model::{LevelCounts, LogRecord};
use crate::core::query::{count_by_level, filter_by_level};
use crate::core::render::{self, TableLayout};
use crate::platform::config::AppConfig;
use crate::util::constants;
use crate::util::error::{LogTallyError, Result, UsageError};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Console table / listing.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
    /// CSV with a header row.
    Csv,
}

/// What the user asked for, derived from the positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// `<path>`: per-level statistics.
    Stats { path: PathBuf },
    /// `<path> <level>`: listing of one level.
    Filter { path: PathBuf, level: String },
}

impl Invocation {
    /// Select the mode from the positional argument count.
    pub fn from_args(args: &[String]) -> std::result::Result<Self, UsageError> {
        match args {
            [] => Err(UsageError::MissingPath),
            [path] => Ok(Self::Stats {
                path: PathBuf::from(path),
            }),
            [path, level] => Ok(Self::Filter {
                path: PathBuf::from(path),
                level: level.clone(),
            }),
            _ => Err(UsageError::TooManyArguments { count: args.len() }),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Stats { path } | Self::Filter { path, .. } => path,
        }
    }
}

/// Process exit status of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

/// Usage text listing the accepted invocation forms.
pub fn usage() -> String {
    let bin = constants::BIN_NAME;
    format!(
        "Usage:\n\
         \x20 {bin} <path_to_log_file> [log_level]\n\
         \n\
         Example for statistics:\n\
         \x20 {bin} example.log\n\
         \n\
         Example for filtering (e.g., by 'ERROR' level):\n\
         \x20 {bin} example.log ERROR\n"
    )
}

/// Run one invocation. Results go to `out`; usage text and error messages
/// go to `err`.
pub fn run<O: Write, E: Write>(
    args: &[String],
    format: OutputFormat,
    config: &AppConfig,
    out: &mut O,
    err: &mut E,
) -> ExitStatus {
    match execute(args, format, config, out) {
        Ok(()) => ExitStatus::Success,
        Err(error) => {
            report(&error, err);
            ExitStatus::Failure
        }
    }
}

fn execute<O: Write>(
    args: &[String],
    format: OutputFormat,
    config: &AppConfig,
    out: &mut O,
) -> Result<()> {
    let invocation = Invocation::from_args(args)?;
    tracing::debug!(?invocation, ?format, "Invocation selected");

    let collection = match loader::load(invocation.path(), config)? {
        LoadOutcome::Entries(collection) => collection,
        LoadOutcome::NoEntries => {
            write_no_entries(&invocation, format, &config.layout, out)?;
            return Ok(out.flush()?);
        }
    };

    match &invocation {
        Invocation::Stats { .. } => {
            let counts = count_by_level(&collection);
            write_counts(&counts, format, &config.layout, out)?;
        }
        Invocation::Filter { level, .. } => {
            let matches = filter_by_level(&collection, level);
            tracing::debug!(level = %level, matched = matches.len(), "Filter applied");
            if matches.is_empty() && format != OutputFormat::Text {
                tracing::info!("{}", render::no_matches_message(level));
            }
            write_listing(level, &matches, format, out)?;
        }
    }

    Ok(out.flush()?)
}

fn write_counts<O: Write>(
    counts: &LevelCounts,
    format: OutputFormat,
    layout: &TableLayout,
    out: &mut O,
) -> Result<()> {
    match format {
        OutputFormat::Text => out.write_all(render::render_level_table(counts, layout).as_bytes())?,
        OutputFormat::Json => export::export_counts_json(counts, &mut *out)?,
        OutputFormat::Csv => export::export_counts_csv(counts, &mut *out)?,
    }
    Ok(())
}

fn write_listing<O: Write>(
    level: &str,
    records: &[&LogRecord],
    format: OutputFormat,
    out: &mut O,
) -> Result<()> {
    match format {
        OutputFormat::Text => out.write_all(render::render_listing(level, records).as_bytes())?,
        OutputFormat::Json => {
            export::export_records_json(records, &mut *out)?;
        }
        OutputFormat::Csv => {
            export::export_records_csv(records, &mut *out)?;
        }
    }
    Ok(())
}

/// The file had nothing to report. Text mode says so; machine formats emit
/// an empty document of the shape the mode would normally produce.
fn write_no_entries<O: Write>(
    invocation: &Invocation,
    format: OutputFormat,
    layout: &TableLayout,
    out: &mut O,
) -> Result<()> {
    if format == OutputFormat::Text {
        writeln!(out, "{}", constants::NO_ENTRIES_MESSAGE)?;
        return Ok(());
    }

    tracing::info!("{}", constants::NO_ENTRIES_MESSAGE);
    match invocation {
        Invocation::Stats { .. } => write_counts(&LevelCounts::default(), format, layout, out),
        Invocation::Filter { level, .. } => write_listing(level, &[], format, out),
    }
}

fn report<E: Write>(error: &LogTallyError, err: &mut E) {
    tracing::debug!(error = ?error, "Invocation failed");

    let written = match error {
        LogTallyError::Usage(UsageError::MissingPath) => err.write_all(usage().as_bytes()),
        LogTallyError::Usage(usage_error) => write!(err, "{usage_error}\n{}", usage()),
        other => writeln!(err, "{other}"),
    };

    // Nothing left to report to if stderr itself is gone.
    let _ = written.and_then(|()| err.flush());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_argument_count_selects_mode() {
        assert_eq!(Invocation::from_args(&args(&[])), Err(UsageError::MissingPath));
        assert_eq!(
            Invocation::from_args(&args(&["app.log"])),
            Ok(Invocation::Stats {
                path: PathBuf::from("app.log")
            })
        );
        assert_eq!(
            Invocation::from_args(&args(&["app.log", "error"])),
            Ok(Invocation::Filter {
                path: PathBuf::from("app.log"),
                level: "error".to_string(),
            })
        );
        assert_eq!(
            Invocation::from_args(&args(&["a", "b", "c"])),
            Err(UsageError::TooManyArguments { count: 3 })
        );
    }

    #[test]
    fn test_no_arguments_prints_usage_and_fails() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let status = run(&[], OutputFormat::Text, &AppConfig::default(), &mut out, &mut err);

        assert_eq!(status, ExitStatus::Failure);
        assert_eq!(status.code(), 1);
        assert!(out.is_empty());
        assert!(String::from_utf8(err).unwrap().starts_with("Usage:"));
    }

    #[test]
    fn test_too_many_arguments_fails_before_file_access() {
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let status = run(
            &args(&["/definitely/not/here.log", "INFO", "extra"]),
            OutputFormat::Text,
            &AppConfig::default(),
            &mut out,
            &mut err,
        );

        assert_eq!(status, ExitStatus::Failure);
        let err = String::from_utf8(err).unwrap();
        assert!(err.starts_with("Error: Too many arguments.\nUsage:"));
        assert!(!err.contains("not found"), "file must not be touched: {err}");
    }

    #[test]
    fn test_usage_mentions_both_forms() {
        let text = usage();
        assert!(text.contains("logtally <path_to_log_file> [log_level]"));
        assert!(text.contains("logtally example.log ERROR"));
    }
}
