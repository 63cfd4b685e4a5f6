//! Category aggregation and percentage normalization.

use crate::errors::ScoringError;

/// Sum the raw values of one category. An empty value list is a
/// configuration error, not a data error.
pub fn sum_category(label: &str, values: &[u32]) -> Result<u32, ScoringError> {
    if values.is_empty() {
        return Err(ScoringError::EmptyCategory(label.to_string()));
    }
    Ok(values.iter().sum())
}

/// Normalize a category sum to an integer percentage in 0..=100.
///
/// Rounding is pinned to half-away-from-zero (`f64::round`) so persisted
/// scores are reproducible regardless of the host's default float-to-int
/// conversion. A zero maximum is a configuration defect, never a division
/// fault.
pub fn percentage(sum: u32, max_possible: u32) -> Result<u8, ScoringError> {
    if max_possible == 0 {
        return Err(ScoringError::config(
            "category maximum possible score is zero",
        ));
    }
    let pct = (f64::from(sum) / f64::from(max_possible)) * 100.0;
    Ok(pct.round() as u8)
}
