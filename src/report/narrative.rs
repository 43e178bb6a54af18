//! Fixed-boilerplate narrative summary
//!
//! The text is a deterministic template with interpolated portfolio
//! values. There is no free-form generation here; pluggable question
//! answering lives behind the `NarrativeGenerator` trait instead.

use crate::instrument::format_amount;
use crate::portfolio::PortfolioSummary;

/// Render the multi-sentence portfolio narrative for display.
pub fn render_narrative(summary: &PortfolioSummary, company_name: &str) -> String {
    let (Some(min_year), Some(max_year), Some(peak_year)) = (
        summary.min_due_year,
        summary.max_due_year,
        summary.peak_concentration_year,
    ) else {
        return format!(
            "No long-term debt instruments found for {} in the analyzed filing.",
            company_name
        );
    };

    let total = format_amount(summary.total_amount_millions);
    let names = summary.leading_names.join(", ");

    format!(
        "{company} maintains a sophisticated debt portfolio comprising {count} distinct \
         long-term instruments with total outstanding obligations of {total}. \
         The debt maturity profile spans from {min_year} to {max_year}, featuring a weighted \
         average interest rate of {rate:.3}% across the portfolio. \
         Primary debt instruments include {names}, each structured to align with strategic \
         cash flow requirements and capital investment cycles. \
         This financing architecture optimizes the company's capital cost structure while \
         preserving liquidity management capabilities for operational contingencies. \
         The maturity ladder demonstrates prudent risk management, with peak concentration \
         in {peak_year} representing {peak_count} instruments maturing. \
         Interest rate exposure is diversified through a combination of fixed and floating \
         rate instruments, providing balance across various economic scenarios. \
         Overall, this debt framework supports strategic growth initiatives while maintaining \
         leverage metrics consistent with investment-grade credit parameters.",
        company = company_name,
        count = summary.count,
        total = total,
        min_year = min_year,
        max_year = max_year,
        rate = summary.weighted_average_rate,
        names = names,
        peak_year = peak_year,
        peak_count = summary.peak_concentration_count,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instrument::DebtInstrumentRecord;
    use crate::portfolio::aggregate;

    #[test]
    fn test_narrative_interpolates_portfolio_values() {
        let records = vec![
            DebtInstrumentRecord::new("Note A1.625", 1.625, 2026, 100.0, "Primary Counterparty")
                .unwrap(),
            DebtInstrumentRecord::new("Note A2.125", 2.125, 2028, 115.0, "Primary Counterparty")
                .unwrap(),
        ];
        let summary = aggregate(&records, 2024);
        let narrative = render_narrative(&summary, "Apple Inc.");

        assert!(narrative.starts_with("Apple Inc. maintains a sophisticated debt portfolio"));
        assert!(narrative.contains("comprising 2 distinct"));
        assert!(narrative.contains("$215M"));
        assert!(narrative.contains("from 2026 to 2028"));
        assert!(narrative.contains("Note A1.625, Note A2.125"));
        assert!(narrative.contains("peak concentration in 2026"));
        // Weighted average to three decimals
        let expected = (1.625 * 100.0 + 2.125 * 115.0) / 215.0;
        assert!(narrative.contains(&format!("{:.3}%", expected)));
    }

    #[test]
    fn test_narrative_is_deterministic() {
        let records = vec![DebtInstrumentRecord::new("Note A3.750", 3.75, 2030, 130.0, "X").unwrap()];
        let summary = aggregate(&records, 2024);
        assert_eq!(
            render_narrative(&summary, "Acme"),
            render_narrative(&summary, "Acme")
        );
    }

    #[test]
    fn test_narrative_billion_formatting() {
        let records = vec![
            DebtInstrumentRecord::new("A", 2.0, 2030, 900.0, "X").unwrap(),
            DebtInstrumentRecord::new("B", 3.0, 2031, 600.0, "X").unwrap(),
        ];
        let summary = aggregate(&records, 2024);
        let narrative = render_narrative(&summary, "Acme");
        assert!(narrative.contains("$1.50B"));
    }

    #[test]
    fn test_empty_portfolio_sentence() {
        let summary = aggregate(&[], 2024);
        assert_eq!(
            render_narrative(&summary, "Acme"),
            "No long-term debt instruments found for Acme in the analyzed filing."
        );
    }
}
