use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Plain decimal number: optional sign, digits with optional fraction
    /// (or a bare fraction), optional exponent.
    /// Examples: "12", "-3.5", "+.25", "1e3", "2.54E-2"
    static ref NUMBER_PATTERN: Regex =
        Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").unwrap();
}

/// Check if a string is a plain decimal number, ignoring surrounding whitespace
pub fn looks_like_number(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }

    NUMBER_PATTERN.is_match(trimmed)
}

/// Parse user input as a finite number using a fixed '.' decimal separator.
/// Returns None for anything else, including text `f64::from_str` would
/// accept such as "inf" or "NaN".
pub fn parse_numeric(s: &str) -> Option<f64> {
    if !looks_like_number(s) {
        return None;
    }

    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
