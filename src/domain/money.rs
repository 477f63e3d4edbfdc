//! Amount parsing for free-form upstream price strings.
//!
//! Totals are stored as raw text ("₹150", "Rs. 100", "$50") and parsed on
//! demand. Parsing never fails: unusable input degrades to `(0.0, "")`.

use std::sync::OnceLock;

use regex::Regex;

/// The Indian Rupee sign; every rupee spelling normalizes to it.
pub const RUPEE: &str = "₹";

/// `[marker] number [marker]`, with markers being runs of non-digit, non-space characters.
/// Digits are ASCII only; other scripts' numerals count as marker text.
fn money_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\s*([^0-9\s]+)?\s*([0-9.,]+)\s*([^0-9\s]+)?\s*$").expect("valid money regex")
    })
}

/// First digit run, allowing one decimal separator.
fn amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[0-9]+(?:[.,][0-9]+)?").expect("valid amount regex"))
}

/// Parse a price string into its numeric value and normalized currency marker.
///
/// The structured form `[marker] number [marker]` is tried first; a prefix
/// marker wins over a suffix marker and `,` thousands separators are removed.
/// Otherwise every non-numeric, non-space character is collected as the marker
/// and the first digit run is taken as the amount.
#[must_use]
pub fn parse_amount(input: &str) -> (f64, String) {
    let input = input.trim();
    if input.is_empty() {
        return (0.0, String::new());
    }

    if let Some(caps) = money_pattern().captures(input) {
        let prefix = caps.get(1).map_or("", |m| m.as_str().trim());
        let suffix = caps.get(3).map_or("", |m| m.as_str().trim());
        let marker = if prefix.is_empty() { suffix } else { prefix };
        return parse_value(&caps[2], marker);
    }

    let marker: String = input
        .chars()
        .filter(|c| !(c.is_ascii_digit() || *c == '.' || *c == ',' || c.is_whitespace()))
        .collect();
    match amount_pattern().find(input) {
        Some(amount) => parse_value(amount.as_str(), &marker),
        None => (0.0, String::new()),
    }
}

fn parse_value(raw: &str, marker: &str) -> (f64, String) {
    let value = raw.replace(',', "").parse::<f64>().unwrap_or(0.0);
    (value, normalize_currency(marker))
}

/// Collapse rupee spellings ("Rs", "Rs.", "INR", anything containing `₹`) to `₹`.
///
/// Every other marker passes through trimmed but otherwise unchanged.
#[must_use]
pub fn normalize_currency(marker: &str) -> String {
    let marker = marker.trim();
    if marker.is_empty() {
        return String::new();
    }
    if marker.contains(RUPEE) {
        return RUPEE.to_string();
    }
    let lowered = marker.to_lowercase();
    match lowered.trim_matches('.') {
        "rs" | "inr" => RUPEE.to_string(),
        _ => marker.to_string(),
    }
}

/// Round to two decimal places, half away from zero.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
