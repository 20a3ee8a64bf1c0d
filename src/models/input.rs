use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a whole number typed by the user, tolerating surrounding whitespace.
pub fn parse_int(s: &str, field: &str) -> Result<i32> {
    s.trim()
        .parse()
        .with_context(|| format!("Invalid {field}: '{}' is not a whole number", s.trim()))
}

/// Parse a monetary amount typed by the user.
///
/// Accepts plain and scientific notation (`"250"`, `"99.95"`, `"1e3"`).
/// Currency symbols and thousand separators are stripped first.
pub fn parse_amount(s: &str) -> Result<Decimal> {
    let cleaned = s.replace(['$', ','], "").trim().to_string();
    if cleaned.is_empty() {
        anyhow::bail!("Invalid amount: value is empty");
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .with_context(|| format!("Invalid amount: '{}' is not a number", s.trim()))
}
