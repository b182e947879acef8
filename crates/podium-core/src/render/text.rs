//! Plain-text rendering for terminal or file surfaces.

use super::BoardFormat;
use super::format::format_score;
use crate::board::RankedRow;

/// Tab-separated text renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormat;

impl BoardFormat for TextFormat {
    fn empty_state(&self) -> String {
        "No scores yet! Be the first to play!".to_string()
    }

    fn unavailable(&self) -> String {
        "Unable to load leaderboard. Please check your connection.".to_string()
    }

    fn format_row(&self, row: &RankedRow<'_>) -> String {
        let medal = row.medal.map(|m| m.glyph()).unwrap_or("-");
        format!(
            "{}\t{}\t{}\t{}",
            row.rank,
            medal,
            row.record.username,
            format_score(row.record.score.as_f64())
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{ScoreRecord, ScoreValue};

    fn record(username: &str, score: f64) -> ScoreRecord {
        ScoreRecord {
            username: username.to_string(),
            score: ScoreValue::Number(score),
        }
    }

    #[test]
    fn test_text_rows() {
        let records = vec![record("alice", 1500.0), record("bob", 900.0)];
        let text = TextFormat.render(&records);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "1\t\u{1F947}\talice\t1,500");
        assert_eq!(lines[1], "2\t\u{1F948}\tbob\t900");
    }

    #[test]
    fn test_text_unmedaled_row_placeholder() {
        let records = vec![
            record("a", 40.0),
            record("b", 30.0),
            record("c", 20.0),
            record("d", 10.0),
        ];
        let text = TextFormat.render(&records);

        assert!(text.lines().nth(3).unwrap().starts_with("4\t-\t"));
    }

    #[test]
    fn test_text_empty_state() {
        assert_eq!(TextFormat.render(&[]), "No scores yet! Be the first to play!");
    }
}
