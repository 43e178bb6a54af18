//! Note extraction from filing/XBRL text
//!
//! Primary path scans for structured instrument identifiers; when
//! nothing matches, a seeded synthetic sample set keeps the downstream
//! pipeline demonstrable. The two cases are distinguished by the
//! `synthetic` flag on the result.

mod notes;
mod synthetic;

pub use notes::{extract_notes, ExtractionResult};
pub use synthetic::{generate_sample_notes, SampleRng};
