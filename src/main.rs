// LogTally - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Optional config file loading
// 3. Logging initialisation (debug mode support)
// 4. Running the driver and setting the process exit status

use clap::Parser;
use logtally::app::driver::{self, OutputFormat};
use logtally::platform::config::{self, AppConfig};
use logtally::util;
use std::path::PathBuf;

/// LogTally - per-level statistics and level filtering for text log files.
///
/// With one argument, prints how many records each level has.
/// With a second argument, lists the records of that level (any case).
#[derive(Parser, Debug)]
#[command(name = "logtally", version, about)]
struct Cli {
    /// Log file path, optionally followed by the level to filter on.
    #[arg(value_name = "PATH [LEVEL]")]
    args: Vec<String>,

    /// Output format.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Read settings from this TOML file. Its [logging] level cannot be set
    /// below "warn", so malformed-line warnings always stay visible.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too and are not failures.
            let _ = e.print();
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    let (app_config, config_warnings) = match cli.config.as_deref() {
        Some(path) => config::load_config(path),
        None => (AppConfig::default(), Vec::new()),
    };

    util::logging::init(cli.debug, app_config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogTally starting"
    );

    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let status = driver::run(
        &cli.args,
        cli.format,
        &app_config,
        &mut stdout.lock(),
        &mut stderr.lock(),
    );

    std::process::exit(status.code());
}
