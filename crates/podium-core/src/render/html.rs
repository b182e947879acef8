//! HTML rendering.
//!
//! The class names here (`leaderboard-item`, `rank`, `medal`, `player-info`,
//! `username`, `score`, with `top1`/`top2`/`top3` modifiers and
//! `empty-state`) are the styling contract consumed by the page stylesheet.

use super::BoardFormat;
use super::format::{escape_html, format_score};
use crate::board::RankedRow;

/// HTML renderer producing `leaderboard-item` rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat;

impl BoardFormat for HtmlFormat {
    fn empty_state(&self) -> String {
        concat!(
            "<div class=\"empty-state\">",
            "<h2>\u{1F3C6}</h2>",
            "<p>No scores yet! Be the first to play!</p>",
            "</div>"
        )
        .to_string()
    }

    fn unavailable(&self) -> String {
        concat!(
            "<div class=\"empty-state\">",
            "<h2>\u{26A0}\u{FE0F}</h2>",
            "<p>Unable to load leaderboard. Please check your connection.</p>",
            "</div>"
        )
        .to_string()
    }

    fn format_row(&self, row: &RankedRow<'_>) -> String {
        let (rank_class, score_class, medal_div) = match row.medal {
            Some(medal) => (
                format!("rank {}", medal.css_class()),
                format!("score {}", medal.css_class()),
                format!("<div class=\"medal\">{}</div>", medal.glyph()),
            ),
            None => ("rank".to_string(), "score".to_string(), String::new()),
        };

        // Staggered entrance, 0.1s per position. Purely cosmetic.
        let delay = (row.rank - 1) as f64 * 0.1;

        format!(
            "<div class=\"leaderboard-item\" style=\"animation-delay: {delay:.1}s\">\
             <div class=\"{rank_class}\">{rank}</div>\
             {medal_div}\
             <div class=\"player-info\"><div class=\"username\">{username}</div></div>\
             <div class=\"{score_class}\">{score}</div>\
             </div>",
            rank = row.rank,
            username = escape_html(&row.record.username),
            score = format_score(row.record.score.as_f64()),
        )
    }
}
