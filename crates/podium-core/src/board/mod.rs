//! Score records and snapshot decoding.
//!
//! A snapshot is one fetched, ordered sequence of score records. The server
//! returns records already sorted descending by score; nothing here re-sorts
//! or mutates them.

mod medals;

pub use medals::{Medal, RankedRow, rank_rows, top_scores};

use serde::Deserialize;

use crate::error::Result;

/// One leaderboard entry as returned by the server.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScoreRecord {
    pub username: String,
    pub score: ScoreValue,
}

/// Score as it appears on the wire: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScoreValue {
    Number(f64),
    Text(String),
}

impl ScoreValue {
    /// Normalized numeric value. Text parses its longest numeric prefix
    /// (so `"100px"` scores 100); text with no numeric prefix becomes NaN.
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_float_prefix(s),
        }
    }
}

/// Parse the longest leading float out of `text` after skipping leading
/// whitespace: optional sign, digits with an optional fraction, optional
/// exponent. No numeric prefix at all yields NaN.
fn parse_float_prefix(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(|b| b.is_ascii_digit()) {
        end += 1;
    }
    let int_digits = end - int_start;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(|b| b.is_ascii_digit()) {
            frac_end += 1;
        }
        frac_digits = frac_end - frac_start;
        if int_digits > 0 || frac_digits > 0 {
            end = frac_end;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digit_start = exp_end;
        while bytes.get(exp_end).is_some_and(|b| b.is_ascii_digit()) {
            exp_end += 1;
        }
        if exp_end > exp_digit_start {
            end = exp_end;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}

/// Decode one snapshot body into score records.
pub fn parse_snapshot(body: &str) -> Result<Vec<ScoreRecord>> {
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_snapshot_numeric_and_string_scores() {
        let body = r#"[{"username":"alice","score":100},{"username":"bob","score":"90.5"}]"#;
        let records = parse_snapshot(body).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].username, "alice");
        assert_eq!(records[0].score.as_f64(), 100.0);
        assert_eq!(records[1].score.as_f64(), 90.5);
    }

    #[test]
    fn test_parse_snapshot_preserves_order() {
        let body = r#"[{"username":"c","score":1},{"username":"a","score":3},{"username":"b","score":2}]"#;
        let records = parse_snapshot(body).unwrap();

        let names: Vec<&str> = records.iter().map(|r| r.username.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_parse_snapshot_empty_array() {
        let records = parse_snapshot("[]").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_parse_snapshot_malformed_body() {
        let err = parse_snapshot("<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Data(_)));
    }

    #[test]
    fn test_score_value_unparseable_text_is_nan() {
        let value = ScoreValue::Text("not-a-number".to_string());
        assert!(value.as_f64().is_nan());
    }

    #[test]
    fn test_score_value_trims_whitespace() {
        let value = ScoreValue::Text(" 42 ".to_string());
        assert_eq!(value.as_f64(), 42.0);
    }

    #[test]
    fn test_score_value_numeric_prefix() {
        assert_eq!(ScoreValue::Text("100px".to_string()).as_f64(), 100.0);
        assert_eq!(ScoreValue::Text("-2.5e1abc".to_string()).as_f64(), -25.0);
        assert_eq!(ScoreValue::Text(".5!".to_string()).as_f64(), 0.5);
        assert_eq!(ScoreValue::Text("7.e2".to_string()).as_f64(), 700.0);
    }

    #[test]
    fn test_score_value_no_numeric_prefix_is_nan() {
        assert!(ScoreValue::Text("px100".to_string()).as_f64().is_nan());
        assert!(ScoreValue::Text("-".to_string()).as_f64().is_nan());
        assert!(ScoreValue::Text(".".to_string()).as_f64().is_nan());
        assert!(ScoreValue::Text("e5".to_string()).as_f64().is_nan());
    }
}
