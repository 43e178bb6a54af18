//! Portfolio-level aggregation over extracted instrument records

mod summary;

pub use summary::{aggregate, PortfolioSummary};
