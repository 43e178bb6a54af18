//! Identifier extraction from filing text

use super::synthetic::{generate_sample_notes, SampleRng};
use crate::error::{AnalysisError, Result};
use crate::instrument::DebtInstrumentRecord;
use once_cell::sync::Lazy;
use regex::Regex;

/// XBRL-style instrument identifier, e.g. `aapl:A1.625NotesDue2026Member`.
/// The first capture is the rate token digits, the second the due year.
static NOTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z]+:A(\d+(?:\.\d+)?)NotesDue(\d{4})Member").expect("valid note pattern")
});

/// Output of one extraction pass.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    pub records: Vec<DebtInstrumentRecord>,
    /// True when nothing matched and the records are generated samples.
    /// Downstream consumers must surface this so placeholder data is
    /// never mistaken for real extraction.
    pub synthetic: bool,
}

/// Scan `text` for instrument identifiers and build one record per
/// occurrence, in left-to-right order. Duplicate identifiers are kept:
/// each occurrence is a distinct instrument row.
///
/// Known limitation: the identifier pattern does not encode a dollar
/// amount, so matched records carry placeholder amounts of
/// `100 + 15*i` millions (i = 0-based match index). A real amount
/// source is required before production use.
///
/// When zero identifiers match, exactly 15 synthetic sample records are
/// generated from the injected `rng` and the result is flagged
/// `synthetic`. Empty or whitespace-only input is an error, not a
/// fallback trigger.
pub fn extract_notes(
    text: &str,
    current_year: i32,
    rng: &mut SampleRng,
) -> Result<ExtractionResult> {
    if text.trim().is_empty() {
        return Err(AnalysisError::InvalidInput(
            "filing text is empty".to_string(),
        ));
    }

    let mut records = Vec::new();

    for (i, caps) in NOTE_RE.captures_iter(text).enumerate() {
        let rate_token = &caps[1];
        let rate: f64 = rate_token
            .parse()
            .map_err(|_| AnalysisError::InvalidInput(format!("unparseable rate token: {}", rate_token)))?;
        let due_year: i32 = caps[2]
            .parse()
            .map_err(|_| AnalysisError::InvalidInput(format!("unparseable due year: {}", &caps[2])))?;

        let amount = (100 + 15 * i) as f64;
        let record = DebtInstrumentRecord::new(
            format!("Note A{}", rate_token),
            rate,
            due_year,
            amount,
            "Primary Counterparty",
        )?;
        records.push(record);
    }

    if records.is_empty() {
        log::warn!("no instrument identifiers matched; generating synthetic sample data");
        return Ok(ExtractionResult {
            records: generate_sample_notes(current_year, rng),
            synthetic: true,
        });
    }

    log::debug!("extracted {} instrument records", records.len());
    Ok(ExtractionResult {
        records,
        synthetic: false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> SampleRng {
        SampleRng::new(42)
    }

    #[test]
    fn test_extract_single_identifier() {
        let result = extract_notes("aapl:A1.625NotesDue2026Member", 2024, &mut rng()).unwrap();
        assert!(!result.synthetic);
        assert_eq!(result.records.len(), 1);

        let rec = &result.records[0];
        assert_eq!(rec.name, "Note A1.625");
        assert_eq!(rec.interest_rate_pct, 1.625);
        assert_eq!(rec.due_year, 2026);
        assert_eq!(rec.amount_millions, 100.0);
        assert_eq!(rec.related_entity, "Primary Counterparty");
    }

    #[test]
    fn test_extract_three_matches_placeholder_amounts() {
        let text = "msft:A2.400NotesDue2026Member filler \
                    msft:A2.525NotesDue2027Member filler \
                    msft:A3.300NotesDue2028Member";
        let result = extract_notes(text, 2024, &mut rng()).unwrap();
        assert!(!result.synthetic);
        assert_eq!(result.records.len(), 3);

        let amounts: Vec<f64> = result.records.iter().map(|r| r.amount_millions).collect();
        assert_eq!(amounts, vec![100.0, 115.0, 130.0]);
    }

    #[test]
    fn test_extract_preserves_occurrence_order_and_duplicates() {
        let text = "aapl:A2.125NotesDue2028Member aapl:A1.625NotesDue2026Member \
                    aapl:A2.125NotesDue2028Member";
        let result = extract_notes(text, 2024, &mut rng()).unwrap();
        assert_eq!(result.records.len(), 3);
        assert_eq!(result.records[0].name, "Note A2.125");
        assert_eq!(result.records[1].name, "Note A1.625");
        assert_eq!(result.records[2].name, "Note A2.125");
        // Same identifier, different placeholder amounts per occurrence
        assert_eq!(result.records[0].amount_millions, 100.0);
        assert_eq!(result.records[2].amount_millions, 130.0);
    }

    #[test]
    fn test_no_match_generates_fifteen_synthetic_records() {
        let text = "The company discusses liquidity and capital resources at length.";
        let result = extract_notes(text, 2024, &mut rng()).unwrap();
        assert!(result.synthetic);
        assert_eq!(result.records.len(), 15);
    }

    #[test]
    fn test_fallback_never_triggers_when_a_match_exists() {
        let text = "unrelated prose ibm:A4.000NotesDue2042Member more prose";
        let result = extract_notes(text, 2024, &mut rng()).unwrap();
        assert!(!result.synthetic);
        assert_eq!(result.records.len(), 1);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert!(matches!(
            extract_notes("", 2024, &mut rng()),
            Err(AnalysisError::InvalidInput(_))
        ));
        assert!(matches!(
            extract_notes("   \n\t ", 2024, &mut rng()),
            Err(AnalysisError::InvalidInput(_))
        ));
    }
}
