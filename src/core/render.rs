// LogTally - core/render.rs
//
// Console text rendering of query results. Pure formatting: no I/O, no
// decisions beyond layout.

use crate::core::model::{LevelCounts, LogRecord};
use crate::util::constants;
use std::fmt::Write;

/// Column widths of the statistics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    /// Minimum width of the left-justified level column.
    pub level_width: usize,
    /// Minimum width of the right-justified count column.
    pub count_width: usize,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            level_width: constants::DEFAULT_LEVEL_COLUMN_WIDTH,
            count_width: constants::DEFAULT_COUNT_COLUMN_WIDTH,
        }
    }
}

/// Render the per-level statistics table, rows sorted by level.
///
/// ```text
///
/// Logging level statistics:
/// Logging level    | Count
/// -----------------|-----------
/// ERROR            |         1
/// ```
pub fn render_level_table(counts: &LevelCounts, layout: &TableLayout) -> String {
    let lw = layout.level_width;
    let cw = layout.count_width;
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", constants::STATS_TITLE);
    let _ = writeln!(
        out,
        "{:<lw$} | {}",
        constants::LEVEL_HEADER,
        constants::COUNT_HEADER
    );
    let _ = writeln!(out, "{}|{}", "-".repeat(lw + 1), "-".repeat(cw + 2));

    for (level, count) in counts.sorted() {
        let _ = writeln!(out, "{level:<lw$} | {count:>cw$}");
    }
    out
}

/// Render the listing of records matching `level`.
///
/// Each record is written back in its original single-line shape. When
/// nothing matched, an explicit message replaces the (empty) listing.
pub fn render_listing(level: &str, records: &[&LogRecord]) -> String {
    let shown = display_level(level);
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "Log details for level '{shown}':");
    let _ = writeln!(out);

    if records.is_empty() {
        let _ = writeln!(out, "{}", no_matches_message(level));
    } else {
        for record in records {
            let _ = writeln!(out, "{record}");
        }
    }
    out
}

/// The line printed when a filter matched nothing.
pub fn no_matches_message(level: &str) -> String {
    format!("No entries found for level '{}'.", display_level(level))
}

/// Requested levels are shown upper-cased, whatever case was typed.
fn display_level(level: &str) -> String {
    level.to_uppercase()
}
