//! Debt Analyzer - instrument extraction and portfolio analytics for SEC filing text
//!
//! This library provides:
//! - Identifier extraction from XBRL-style filing snippets
//! - Amount normalization to a single unit (millions)
//! - Portfolio aggregation (totals, weighted rates, maturity concentration)
//! - Narrative and chart-series rendering
//! - Search/filter over the extracted record set

pub mod error;
pub mod extract;
pub mod instrument;
pub mod portfolio;
pub mod qa;
pub mod report;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use error::AnalysisError;
pub use extract::{extract_notes, ExtractionResult, SampleRng};
pub use instrument::{format_amount, normalize_amount, DebtInstrumentRecord};
pub use portfolio::{aggregate, PortfolioSummary};
pub use report::{render_narrative, render_series, ChartSeries};
pub use search::{search, RateBand};
pub use session::AnalysisSession;
