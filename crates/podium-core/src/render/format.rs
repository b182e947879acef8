//! Display formatting helpers.

/// Format a score for display: rounded to zero fractional digits (half away
/// from zero) with comma-grouped thousands, e.g. `1234.7` -> `"1,235"`.
pub fn format_score(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }

    let rounded = value.round();
    let digits = format!("{}", rounded.abs());
    let grouped = group_thousands(&digits);

    if rounded < 0.0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Escape text for interpolation into markup, so usernames always render as
/// literal text.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
