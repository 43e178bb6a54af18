//! Per-request analysis session
//!
//! One session per analysis pass: the caller supplies the raw text,
//! company name, evaluation year, and an RNG for the fallback path, and
//! the session holds the extracted records plus their summary for the
//! lifetime of that pass. Nothing is shared across sessions, so
//! concurrent analyses simply build independent sessions.

use crate::error::Result;
use crate::extract::{extract_notes, SampleRng};
use crate::instrument::{export, DebtInstrumentRecord};
use crate::portfolio::{aggregate, PortfolioSummary};
use crate::report::{render_narrative, render_series, ChartSeries};
use crate::search::{search, RateBand};

/// Context and results of one analysis pass.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    pub company_name: String,
    pub current_year: i32,
    pub records: Vec<DebtInstrumentRecord>,
    /// True when the records are fallback samples, not real extraction
    pub synthetic: bool,
    pub summary: PortfolioSummary,
}

impl AnalysisSession {
    /// Run extraction and aggregation over the supplied filing text.
    pub fn analyze(
        raw_text: &str,
        company_name: &str,
        current_year: i32,
        rng: &mut SampleRng,
    ) -> Result<Self> {
        let extraction = extract_notes(raw_text, current_year, rng)?;
        let summary = aggregate(&extraction.records, current_year);

        log::info!(
            "analysis pass for {}: {} records ({}), total ${}M",
            company_name,
            summary.count,
            if extraction.synthetic { "synthetic" } else { "extracted" },
            summary.total_amount_millions
        );

        Ok(Self {
            company_name: company_name.to_string(),
            current_year,
            records: extraction.records,
            synthetic: extraction.synthetic,
            summary,
        })
    }

    /// The portfolio narrative for this session's records.
    pub fn narrative(&self) -> String {
        render_narrative(&self.summary, &self.company_name)
    }

    /// Chart series for this session's records.
    pub fn series(&self) -> ChartSeries {
        render_series(&self.records)
    }

    /// Filtered view of this session's records; the session itself is
    /// left untouched.
    pub fn search(
        &self,
        search_term: Option<&str>,
        year_filter: Option<i32>,
        rate_filter: Option<RateBand>,
    ) -> Vec<DebtInstrumentRecord> {
        search(&self.records, search_term, year_filter, rate_filter)
    }

    /// The instrument table as CSV, maturity periods derived from this
    /// session's evaluation year.
    pub fn to_csv(&self) -> std::result::Result<String, Box<dyn std::error::Error>> {
        export::to_csv_string(&self.records, self.current_year)
    }
}
