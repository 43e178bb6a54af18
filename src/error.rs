//! Error types for the analysis pipeline

use thiserror::Error;

/// Errors surfaced by the extraction and normalization layers.
///
/// "No identifiers matched" is deliberately not an error: the extractor
/// falls back to synthetic sample data and flags the result instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Input text was empty or a constructed record violated an invariant.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Amount string did not match the `$<number>[M|B]` form.
    #[error("malformed amount string: `{0}`")]
    MalformedAmount(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnalysisError::MalformedAmount("125M".to_string());
        assert_eq!(err.to_string(), "malformed amount string: `125M`");

        let err = AnalysisError::InvalidInput("empty filing text".to_string());
        assert_eq!(err.to_string(), "invalid input: empty filing text");
    }
}
