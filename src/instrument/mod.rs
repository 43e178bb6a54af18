//! Debt instrument data model, amount normalization, and CSV export

mod amount;
mod data;
pub mod export;

pub use amount::{format_amount, normalize_amount};
pub use data::DebtInstrumentRecord;
