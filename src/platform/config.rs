// LogTally - platform/config.rs
//
// Optional config.toml loading with startup validation.
//
// There is no implicit config location: a file is only read when the user
// passes `--config <FILE>`. Invalid values produce actionable warnings and
// fall back to defaults; a bad config never stops the analysis.

use crate::core::render::TableLayout;
use crate::util::constants;
use std::path::Path;

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
    /// `[display]` section.
    pub display: DisplaySection,
    /// `[parsing]` section.
    pub parsing: ParsingSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// `[display]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Minimum width of the level column in the statistics table.
    pub level_width: Option<usize>,
    /// Minimum width of the count column in the statistics table.
    pub count_width: Option<usize>,
}

/// `[parsing]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct ParsingSection {
    /// Files at least this large are memory-mapped.
    pub large_file_threshold_bytes: Option<u64>,
}

/// Validated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
    /// Statistics table column widths.
    pub layout: TableLayout,
    /// Memory-map threshold in bytes.
    pub large_file_threshold: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            layout: TableLayout::default(),
            large_file_threshold: constants::DEFAULT_LARGE_FILE_THRESHOLD,
        }
    }
}

/// Load and validate the config file at `path`.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. Runs before logging is initialised, so warnings are returned
/// rather than logged.
pub fn load_config(path: &Path) -> (AppConfig, Vec<String>) {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            let msg = format!(
                "Could not read config file '{}': {e}. Using defaults.",
                path.display()
            );
            return (AppConfig::default(), vec![msg]);
        }
    };

    match toml::from_str::<RawConfig>(&content) {
        Ok(raw) => validate(raw),
        Err(e) => {
            let msg = format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                path.display()
            );
            (AppConfig::default(), vec![msg])
        }
    }
}

/// Validate each field against named constants, accumulating all problems.
pub fn validate(raw: RawConfig) -> (AppConfig, Vec<String>) {
    let mut config = AppConfig::default();
    let mut warnings: Vec<String> = Vec::new();

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let lowered = level.to_lowercase();
        if constants::CONFIG_LOG_LEVELS.contains(&lowered.as_str()) {
            config.log_level = Some(lowered);
        } else if lowered == "error" || lowered == "off" {
            warnings.push(format!(
                "[logging] level = \"{level}\" would hide malformed-line warnings. \
                 Using default ({}).",
                constants::DEFAULT_LOG_LEVEL,
            ));
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::CONFIG_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    // -- Display: level_width --
    if let Some(width) = raw.display.level_width {
        if (1..=constants::MAX_LEVEL_COLUMN_WIDTH).contains(&width) {
            config.layout.level_width = width;
        } else {
            warnings.push(format!(
                "[display] level_width = {width} is out of range (1-{}). Using default ({}).",
                constants::MAX_LEVEL_COLUMN_WIDTH,
                constants::DEFAULT_LEVEL_COLUMN_WIDTH,
            ));
        }
    }

    // -- Display: count_width --
    if let Some(width) = raw.display.count_width {
        if (1..=constants::MAX_COUNT_COLUMN_WIDTH).contains(&width) {
            config.layout.count_width = width;
        } else {
            warnings.push(format!(
                "[display] count_width = {width} is out of range (1-{}). Using default ({}).",
                constants::MAX_COUNT_COLUMN_WIDTH,
                constants::DEFAULT_COUNT_COLUMN_WIDTH,
            ));
        }
    }

    // -- Parsing: large_file_threshold_bytes --
    if let Some(bytes) = raw.parsing.large_file_threshold_bytes {
        if bytes >= 1 {
            config.large_file_threshold = bytes;
        } else {
            warnings.push(format!(
                "[parsing] large_file_threshold_bytes must be at least 1. Using default ({}).",
                constants::DEFAULT_LARGE_FILE_THRESHOLD,
            ));
        }
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_text: &str) -> (AppConfig, Vec<String>) {
        validate(toml::from_str(toml_text).unwrap())
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let (config, warnings) = parse("");
        assert!(warnings.is_empty());
        assert_eq!(config.layout, TableLayout::default());
        assert_eq!(config.large_file_threshold, constants::DEFAULT_LARGE_FILE_THRESHOLD);
        assert!(config.log_level.is_none());
    }

    #[test]
    fn test_valid_values_are_applied() {
        let (config, warnings) = parse(
            r#"
[logging]
level = "DEBUG"

[display]
level_width = 10
count_width = 4

[parsing]
large_file_threshold_bytes = 4096
"#,
        );
        assert!(warnings.is_empty(), "unexpected warnings: {warnings:?}");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.layout.level_width, 10);
        assert_eq!(config.layout.count_width, 4);
        assert_eq!(config.large_file_threshold, 4096);
    }

    #[test]
    fn test_out_of_range_values_warn_and_fall_back() {
        let (config, warnings) = parse(
            r#"
[logging]
level = "loud"

[display]
level_width = 0
count_width = 500

[parsing]
large_file_threshold_bytes = 0
"#,
        );
        assert_eq!(warnings.len(), 4);
        assert!(config.log_level.is_none());
        assert_eq!(config.layout, TableLayout::default());
        assert_eq!(config.large_file_threshold, constants::DEFAULT_LARGE_FILE_THRESHOLD);
    }

    #[test]
    fn test_levels_that_hide_rejections_fall_back() {
        for level in ["error", "OFF"] {
            let (config, warnings) = parse(&format!("[logging]\nlevel = \"{level}\"\n"));
            assert!(config.log_level.is_none());
            assert_eq!(warnings.len(), 1);
            assert!(warnings[0].contains("malformed-line"), "{warnings:?}");
        }
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let (_, warnings) = parse("[future]\nshiny = true\n");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unreadable_or_invalid_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();

        let (_, warnings) = load_config(&dir.path().join("missing.toml"));
        assert_eq!(warnings.len(), 1);

        let bad = dir.path().join("bad.toml");
        std::fs::write(&bad, "[display\nlevel_width = ").unwrap();
        let (config, warnings) = load_config(&bad);
        assert_eq!(warnings.len(), 1);
        assert_eq!(config.layout, TableLayout::default());
    }
}
