//! Question-to-category mapping: the first pipeline stage.

use crate::core::{Category, Instrument, RawResponseSet};
use crate::errors::ScoringError;

/// Responses grouped under the category they belong to, in the category's
/// declared question order.
#[derive(Debug, PartialEq, Eq)]
pub struct GroupedResponses<'a> {
    pub category: &'a Category,
    pub values: Vec<u32>,
}

/// Check that every question the instrument references has a present,
/// in-range value. Form validation should have rejected incomplete
/// submissions already; the scorer defends against them anyway.
pub fn validate_responses(
    instrument: &Instrument,
    responses: &RawResponseSet,
) -> Result<(), ScoringError> {
    for category in &instrument.categories {
        for &question in &category.questions {
            let value = responses
                .get(&question)
                .copied()
                .ok_or(ScoringError::MissingResponse { question })?;
            if !instrument.scale.contains(value) {
                return Err(ScoringError::out_of_range(
                    question,
                    value,
                    instrument.scale.min,
                    instrument.scale.max,
                ));
            }
        }
    }
    Ok(())
}

/// Group raw response values by category. Pure over its inputs; fails with
/// [`ScoringError::MissingResponse`] naming the first absent index.
pub fn group_responses<'a>(
    instrument: &'a Instrument,
    responses: &RawResponseSet,
) -> Result<Vec<GroupedResponses<'a>>, ScoringError> {
    instrument
        .categories
        .iter()
        .map(|category| {
            let values = category
                .questions
                .iter()
                .map(|&question| {
                    responses
                        .get(&question)
                        .copied()
                        .ok_or(ScoringError::MissingResponse { question })
                })
                .collect::<Result<Vec<u32>, _>>()?;
            Ok(GroupedResponses { category, values })
        })
        .collect()
}
