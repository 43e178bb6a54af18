//! Monetary amount normalization
//!
//! Filing amounts arrive as display strings like "$125M" or "$1.2B".
//! Internally everything is carried as a single unit: millions of the
//! record's currency.

use crate::error::{AnalysisError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$(\d+(?:\.\d+)?)([MB])?$").expect("valid amount pattern"));

/// Parse an amount string of the form `$<number>[M|B]` into millions.
///
/// No suffix means the value is already in millions; `B` multiplies by
/// 1000. Anything else fails with [`AnalysisError::MalformedAmount`].
pub fn normalize_amount(raw: &str) -> Result<f64> {
    let caps = AMOUNT_RE
        .captures(raw)
        .ok_or_else(|| AnalysisError::MalformedAmount(raw.to_string()))?;

    let value: f64 = caps[1]
        .parse()
        .map_err(|_| AnalysisError::MalformedAmount(raw.to_string()))?;

    let millions = match caps.get(2).map(|m| m.as_str()) {
        Some("B") => value * 1000.0,
        _ => value,
    };

    Ok(millions)
}

/// Format a millions value for display: `$X.YYB` at or above one
/// billion, `$XM` below.
pub fn format_amount(millions: f64) -> String {
    if millions >= 1000.0 {
        format!("${:.2}B", millions / 1000.0)
    } else {
        format!("${:.0}M", millions)
    }
}
