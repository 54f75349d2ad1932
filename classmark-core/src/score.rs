//! Score entry validation and display formatting.

use crate::numbers::round1;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoreError {
    #[error("Enter a number.")]
    NotANumber,
    #[error("The score must be between 0 and {max}.")]
    OutOfRange { max: f64 },
}

/// Parse and range-check a raw score entry against the category maximum.
/// Runs before any network call; out-of-range values never reach the
/// collaborator.
///
/// # Errors
///
/// Returns an error when the input is not a finite number or falls
/// outside `[0, max_score]`.
pub fn validate_score(raw: &str, max_score: f64) -> Result<f64, ScoreError> {
    let score: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ScoreError::NotANumber)?;
    if !score.is_finite() {
        return Err(ScoreError::NotANumber);
    }
    if score < 0.0 || score > max_score {
        return Err(ScoreError::OutOfRange { max: max_score });
    }
    Ok(score)
}

/// Format a row average for display: one decimal place, or a placeholder
/// when the student has no records.
#[must_use]
pub fn format_average(average: Option<f64>) -> String {
    average.map_or_else(|| "-".to_string(), |avg| format!("{:.1}", round1(avg)))
}
