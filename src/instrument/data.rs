//! Core debt instrument record

use super::amount::format_amount;
use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};

/// A single long-term debt instrument parsed from filing text (or
/// generated as a synthetic sample).
///
/// Immutable once created within an analysis pass. The maturity period
/// is never stored on the record: it depends on the evaluation year and
/// is recomputed via [`DebtInstrumentRecord::maturity_period_years`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtInstrumentRecord {
    /// Instrument identifier, e.g. "Note A1.625"
    pub name: String,

    /// Stated coupon, in percent (1.625 = 1.625%)
    pub interest_rate_pct: f64,

    /// Calendar year the instrument matures
    pub due_year: i32,

    /// Outstanding amount normalized to millions
    pub amount_millions: f64,

    /// Display form of the amount, e.g. "$125M" or "$1.20B"
    pub amount_display: String,

    /// Free-text counterparty label
    pub related_entity: String,

    /// ISO-like currency code, "USD" unless stated otherwise
    pub currency: String,
}

impl DebtInstrumentRecord {
    /// Build a record in USD, validating the data invariants:
    /// non-negative rate, positive amount, 4-digit due year.
    pub fn new(
        name: impl Into<String>,
        interest_rate_pct: f64,
        due_year: i32,
        amount_millions: f64,
        related_entity: impl Into<String>,
    ) -> Result<Self> {
        if interest_rate_pct < 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "negative interest rate: {}",
                interest_rate_pct
            )));
        }
        if amount_millions <= 0.0 {
            return Err(AnalysisError::InvalidInput(format!(
                "non-positive amount: {}",
                amount_millions
            )));
        }
        if !(1000..=9999).contains(&due_year) {
            return Err(AnalysisError::InvalidInput(format!(
                "due year is not a 4-digit year: {}",
                due_year
            )));
        }

        Ok(Self {
            name: name.into(),
            interest_rate_pct,
            due_year,
            amount_millions,
            amount_display: format_amount(amount_millions),
            related_entity: related_entity.into(),
            currency: "USD".to_string(),
        })
    }

    /// Years until maturity relative to the caller's evaluation year.
    /// Recomputed on every call, never cached across runs.
    pub fn maturity_period_years(&self, current_year: i32) -> i32 {
        self.due_year - current_year
    }

    /// Annual interest cost in millions: `amount * rate / 100`.
    pub fn annual_interest_millions(&self) -> f64 {
        self.amount_millions * self.interest_rate_pct / 100.0
    }

    /// Lowercased concatenation of every field, the haystack for
    /// free-text search across the whole record.
    pub fn search_text(&self) -> String {
        format!(
            "{} {:.3} {} {} {} {}",
            self.name,
            self.interest_rate_pct,
            self.due_year,
            self.amount_display,
            self.related_entity,
            self.currency
        )
        .to_lowercase()
    }
}
