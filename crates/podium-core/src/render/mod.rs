//! Markup rendering for leaderboard snapshots.
//!
//! Rendering is pure: the same snapshot always produces identical markup,
//! and nothing here touches the display surface.

mod format;
mod html;
mod text;

pub use format::{escape_html, format_score};
pub use html::HtmlFormat;
pub use text::TextFormat;

use crate::board::{RankedRow, ScoreRecord, rank_rows};

/// Trait for board rendering formats.
///
/// Provides a common interface for different output formats (HTML, plain
/// text, etc.)
pub trait BoardFormat {
    /// Placeholder markup for a snapshot with no records.
    fn empty_state(&self) -> String;

    /// Placeholder markup shown when the board cannot be fetched.
    fn unavailable(&self) -> String;

    /// Render a single ranked row.
    fn format_row(&self, row: &RankedRow<'_>) -> String;

    /// Render all rows of a ranked snapshot.
    fn format_rows(&self, rows: &[RankedRow<'_>]) -> String {
        let mut output = String::new();
        for row in rows {
            output.push_str(&self.format_row(row));
            output.push('\n');
        }
        output
    }

    /// Render a full snapshot: the empty-state placeholder for empty input,
    /// ranked rows otherwise.
    fn render(&self, records: &[ScoreRecord]) -> String {
        if records.is_empty() {
            self.empty_state()
        } else {
            self.format_rows(&rank_rows(records))
        }
    }
}
