//! Derived portfolio statistics

use crate::instrument::DebtInstrumentRecord;
use serde::Serialize;

/// Aggregate statistics over one record set.
///
/// The empty portfolio is a defined result, not an error: `count` is 0,
/// sums and averages are 0.0, and the year fields are `None`.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    /// Number of instruments
    pub count: usize,

    /// Sum of normalized amounts, in millions
    pub total_amount_millions: f64,

    /// Earliest due year, None for the empty portfolio
    pub min_due_year: Option<i32>,

    /// Latest due year, None for the empty portfolio
    pub max_due_year: Option<i32>,

    /// Arithmetic mean of the stated rates
    pub simple_average_rate: f64,

    /// Amount-weighted mean rate: sum(rate * amount) / sum(amount)
    pub weighted_average_rate: f64,

    /// Due year -> instrument count, in first-encounter order.
    /// The ordering is load-bearing: the peak-year tie-break below
    /// picks the first-encountered year and tests depend on it.
    pub year_histogram: Vec<(i32, usize)>,

    /// Year with the most maturing instruments; ties resolve to the
    /// year encountered first in the histogram
    pub peak_concentration_year: Option<i32>,

    /// Instrument count in the peak year
    pub peak_concentration_count: usize,

    /// Portfolio annual interest cost: sum of amount * rate / 100
    pub annual_interest_cost_millions: f64,

    /// Mean of (due_year - current_year), recomputed per aggregation
    pub average_years_to_maturity: f64,

    /// First three instrument names, for the narrative
    pub leading_names: Vec<String>,
}

impl PortfolioSummary {
    /// The defined zero-value result for an empty record set.
    pub fn empty() -> Self {
        Self {
            count: 0,
            total_amount_millions: 0.0,
            min_due_year: None,
            max_due_year: None,
            simple_average_rate: 0.0,
            weighted_average_rate: 0.0,
            year_histogram: Vec::new(),
            peak_concentration_year: None,
            peak_concentration_count: 0,
            annual_interest_cost_millions: 0.0,
            average_years_to_maturity: 0.0,
            leading_names: Vec::new(),
        }
    }
}

/// Compute portfolio statistics for one analysis pass.
///
/// `current_year` is the caller's evaluation year; maturity periods are
/// derived from it here rather than read from the records.
pub fn aggregate(records: &[DebtInstrumentRecord], current_year: i32) -> PortfolioSummary {
    if records.is_empty() {
        return PortfolioSummary::empty();
    }

    let count = records.len();
    let total_amount_millions: f64 = records.iter().map(|r| r.amount_millions).sum();
    let rate_sum: f64 = records.iter().map(|r| r.interest_rate_pct).sum();
    let weighted_rate_sum: f64 = records
        .iter()
        .map(|r| r.interest_rate_pct * r.amount_millions)
        .sum();
    let annual_interest_cost_millions: f64 =
        records.iter().map(|r| r.annual_interest_millions()).sum();

    let min_due_year = records.iter().map(|r| r.due_year).min();
    let max_due_year = records.iter().map(|r| r.due_year).max();

    let mut year_histogram: Vec<(i32, usize)> = Vec::new();
    for record in records {
        match year_histogram.iter_mut().find(|(y, _)| *y == record.due_year) {
            Some((_, n)) => *n += 1,
            None => year_histogram.push((record.due_year, 1)),
        }
    }

    // Strict comparison keeps the first-encountered year on ties
    let mut peak_concentration_year = None;
    let mut peak_concentration_count = 0;
    for &(year, n) in &year_histogram {
        if n > peak_concentration_count {
            peak_concentration_year = Some(year);
            peak_concentration_count = n;
        }
    }

    let maturity_sum: i32 = records
        .iter()
        .map(|r| r.maturity_period_years(current_year))
        .sum();

    let weighted_average_rate = if total_amount_millions > 0.0 {
        weighted_rate_sum / total_amount_millions
    } else {
        0.0
    };

    PortfolioSummary {
        count,
        total_amount_millions,
        min_due_year,
        max_due_year,
        simple_average_rate: rate_sum / count as f64,
        weighted_average_rate,
        year_histogram,
        peak_concentration_year,
        peak_concentration_count,
        annual_interest_cost_millions,
        average_years_to_maturity: maturity_sum as f64 / count as f64,
        leading_names: records.iter().take(3).map(|r| r.name.clone()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn record(name: &str, rate: f64, year: i32, amount: f64) -> DebtInstrumentRecord {
        DebtInstrumentRecord::new(name, rate, year, amount, "Primary Counterparty").unwrap()
    }

    #[test]
    fn test_empty_portfolio_is_defined_not_an_error() {
        let summary = aggregate(&[], 2024);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.total_amount_millions, 0.0);
        assert_eq!(summary.min_due_year, None);
        assert_eq!(summary.max_due_year, None);
        assert_eq!(summary.peak_concentration_year, None);
        assert_eq!(summary.weighted_average_rate, 0.0);
        assert!(summary.year_histogram.is_empty());
    }

    #[test]
    fn test_basic_aggregation() {
        let records = vec![
            record("Note A1.625", 1.625, 2026, 100.0),
            record("Note A2.125", 2.125, 2028, 115.0),
        ];
        let summary = aggregate(&records, 2024);

        assert_eq!(summary.count, 2);
        assert_relative_eq!(summary.total_amount_millions, 215.0);
        assert_eq!(summary.min_due_year, Some(2026));
        assert_eq!(summary.max_due_year, Some(2028));
        assert_relative_eq!(summary.simple_average_rate, 1.875);

        let expected_weighted = (1.625 * 100.0 + 2.125 * 115.0) / 215.0;
        assert_relative_eq!(summary.weighted_average_rate, expected_weighted);

        let expected_interest = 100.0 * 1.625 / 100.0 + 115.0 * 2.125 / 100.0;
        assert_relative_eq!(
            summary.annual_interest_cost_millions,
            expected_interest,
            epsilon = 1e-9
        );

        // (2026-2024 + 2028-2024) / 2
        assert_relative_eq!(summary.average_years_to_maturity, 3.0);
    }

    #[test]
    fn test_peak_year_tie_resolves_to_first_encountered() {
        let records = vec![
            record("Note A1.625", 1.625, 2026, 100.0),
            record("Note A2.125", 2.125, 2028, 115.0),
        ];
        let summary = aggregate(&records, 2024);

        // Both years have count 1; 2026 appears first in the input
        assert_eq!(summary.peak_concentration_year, Some(2026));
        assert_eq!(summary.peak_concentration_count, 1);
    }

    #[test]
    fn test_peak_year_by_count() {
        let records = vec![
            record("A", 1.0, 2027, 50.0),
            record("B", 2.0, 2030, 60.0),
            record("C", 3.0, 2030, 70.0),
        ];
        let summary = aggregate(&records, 2024);
        assert_eq!(summary.peak_concentration_year, Some(2030));
        assert_eq!(summary.peak_concentration_count, 2);
        assert_eq!(summary.year_histogram, vec![(2027, 1), (2030, 2)]);
    }

    #[test]
    fn test_weighted_rate_bounded_by_rate_range() {
        let records = vec![
            record("A", 0.95, 2025, 40.0),
            record("B", 3.85, 2029, 900.0),
            record("C", 2.40, 2031, 130.0),
        ];
        let summary = aggregate(&records, 2024);
        assert!(summary.weighted_average_rate >= 0.95);
        assert!(summary.weighted_average_rate <= 3.85);
    }

    #[test]
    fn test_leading_names_capped_at_three() {
        let records = vec![
            record("A", 1.0, 2025, 10.0),
            record("B", 1.0, 2026, 10.0),
            record("C", 1.0, 2027, 10.0),
            record("D", 1.0, 2028, 10.0),
        ];
        let summary = aggregate(&records, 2024);
        assert_eq!(summary.leading_names, vec!["A", "B", "C"]);
    }
}
