// Output formatting — terminal rendering and structured (JSON) output.

pub mod terminal;

use serde::Serialize;

use crate::error::Result;

/// How results are rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored, unit-annotated text for people
    Human,
    /// Pretty-printed JSON for scripts
    Json,
}

/// Truncate a string to at most `max_chars` characters, appending "…" if truncated.
///
/// Counts characters, not bytes, so multi-byte text never splits mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}…")
    }
}

/// Show a ratio with its scale spelled out, e.g. `0.667 / 1.00`.
pub fn fmt_ratio(x: f64) -> String {
    format!("{x:.3} / 1.00")
}

/// Show a 0..1 fraction as a percentage, e.g. `66.7%`.
pub fn fmt_percent(frac: f64) -> String {
    format!("{:.1}%", frac * 100.0)
}

/// Pretty-print any report as JSON (two-space indent).
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_chars("short", 10), "short");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let text = "é".repeat(5);
        assert_eq!(truncate_chars(&text, 3), "ééé…");
    }

    #[test]
    fn test_fmt_ratio() {
        assert_eq!(fmt_ratio(2.0 / 3.0), "0.667 / 1.00");
        assert_eq!(fmt_ratio(0.0), "0.000 / 1.00");
    }

    #[test]
    fn test_fmt_percent() {
        assert_eq!(fmt_percent(1.0 / 3.0), "33.3%");
    }
}
