//! String parsing utilities

use regex::Regex;
use std::sync::OnceLock;

fn capacity_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)([0-9]+)\s*GB").expect("capacity pattern is valid"))
}

/// Extract the integer immediately preceding "GB" (any case) from free text,
/// e.g. `"16 GB"`, `"32GB DDR5"`, `"2x8gb"`. Only the first match counts.
pub fn parse_capacity_gb(text: &str) -> Option<u32> {
    capacity_pattern()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
}

/// Format a ratio with one decimal place
pub fn format_ratio(ratio: f64) -> String {
    format!("{:.1}", ratio)
}

/// Drop the `**bold**` markers used in report text
pub fn strip_markup(text: &str) -> String {
    text.replace("**", "")
}
