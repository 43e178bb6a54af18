//! Textual and numeric filtering over the record set

use crate::instrument::DebtInstrumentRecord;

/// Fixed interest-rate buckets offered by the filter UI.
///
/// Boundary values resolve to Medium: exactly 2% and exactly 4% are in
/// the 2-4% bucket, Low is strictly below 2 and High strictly above 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateBand {
    Low,
    Medium,
    High,
}

impl RateBand {
    /// Whether a rate falls into this bucket.
    pub fn contains(self, rate_pct: f64) -> bool {
        match self {
            RateBand::Low => rate_pct < 2.0,
            RateBand::Medium => (2.0..=4.0).contains(&rate_pct),
            RateBand::High => rate_pct > 4.0,
        }
    }

    /// The display label shown in filter dropdowns.
    pub fn label(self) -> &'static str {
        match self {
            RateBand::Low => "Low (<2%)",
            RateBand::Medium => "Medium (2-4%)",
            RateBand::High => "High (>4%)",
        }
    }

    /// Recover a band from its display label.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label {
            "Low (<2%)" => Some(RateBand::Low),
            "Medium (2-4%)" => Some(RateBand::Medium),
            "High (>4%)" => Some(RateBand::High),
            _ => None,
        }
    }
}

/// Apply the optional predicates conjunctively and return the matching
/// records as a new list. Input order is preserved and the input is
/// never mutated.
///
/// The search term matches case-insensitively against the full
/// stringified record, so "usd" or "$100m" hit as well as note names.
pub fn search(
    records: &[DebtInstrumentRecord],
    search_term: Option<&str>,
    year_filter: Option<i32>,
    rate_filter: Option<RateBand>,
) -> Vec<DebtInstrumentRecord> {
    let needle = search_term.map(str::to_lowercase);

    records
        .iter()
        .filter(|record| {
            if let Some(ref term) = needle {
                if !record.search_text().contains(term.as_str()) {
                    return false;
                }
            }
            if let Some(year) = year_filter {
                if record.due_year != year {
                    return false;
                }
            }
            if let Some(band) = rate_filter {
                if !band.contains(record.interest_rate_pct) {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}
