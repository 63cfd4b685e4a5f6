//! Error types for questionnaire scoring.
//!
//! The first two variants are data errors: a submission that slipped past
//! form validation. The last two are configuration defects that should be
//! caught by [`crate::config::validation`] before any submission is scored.

use thiserror::Error;

/// Failures raised by the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    /// A question required by the instrument has no submitted value.
    #[error("no response submitted for question {question}")]
    MissingResponse { question: u32 },

    /// A submitted value falls outside the instrument's declared scale.
    #[error("response {value} for question {question} is outside the {min}-{max} scale")]
    OutOfRangeResponse {
        question: u32,
        value: u32,
        min: u32,
        max: u32,
    },

    /// The instrument's category map violates a structural invariant.
    /// Deployment-blocking, never retryable.
    #[error("invalid instrument configuration: {0}")]
    InvalidInstrumentConfig(String),

    /// A category with zero configured questions.
    #[error("category '{0}' has no questions")]
    EmptyCategory(String),
}

impl ScoringError {
    pub fn missing(question: u32) -> Self {
        Self::MissingResponse { question }
    }

    pub fn out_of_range(question: u32, value: u32, min: u32, max: u32) -> Self {
        Self::OutOfRangeResponse {
            question,
            value,
            min,
            max,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidInstrumentConfig(message.into())
    }

    /// True for the configuration-defect variants that must block deployment
    /// rather than surface as a form error.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInstrumentConfig(_) | Self::EmptyCategory(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_errors_are_classified() {
        assert!(ScoringError::config("bad map").is_config_error());
        assert!(ScoringError::EmptyCategory("R".into()).is_config_error());
        assert!(!ScoringError::missing(3).is_config_error());
        assert!(!ScoringError::out_of_range(1, 9, 1, 5).is_config_error());
    }

    #[test]
    fn messages_name_the_offending_detail() {
        let err = ScoringError::out_of_range(12, 7, 1, 5);
        assert_eq!(
            err.to_string(),
            "response 7 for question 12 is outside the 1-5 scale"
        );
        assert_eq!(
            ScoringError::missing(41).to_string(),
            "no response submitted for question 41"
        );
    }
}
