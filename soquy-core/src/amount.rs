//! Free-text amount extraction.
//!
//! Finds the first numeric token in the message, with an optional `k`
//! (thousand) or `tr` (million) suffix: "30k" → 30 000, "8tr" → 8 000 000.

use std::sync::OnceLock;

use regex::Regex;

fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(k|tr)?").expect("amount pattern"))
}

/// Extract a monetary value from free text.
///
/// Returns `None` when no numeric token is found, and also when the
/// truncated result is exactly 0 — a literal "0" is treated the same as no
/// amount at all, so callers never record zero-amount transactions.
pub fn parse_amount(text: &str) -> Option<i64> {
    let lowered = text.to_lowercase();
    let caps = amount_re().captures(&lowered)?;

    let num: f64 = caps[1].parse().ok()?;
    let mult = match caps.get(2).map(|m| m.as_str()) {
        Some("k") => 1_000.0,
        Some("tr") => 1_000_000.0,
        _ => 1.0,
    };

    let value = (num * mult) as i64;
    (value != 0).then_some(value)
}
