//! The scoring pipeline: map responses to categories, aggregate, normalize,
//! and rank. Stateless and synchronous; one call per submission.

pub mod aggregate;
pub mod mapper;
pub mod rank;

use crate::config;
use crate::core::{CategoryScore, Instrument, RawResponseSet, ScoreResult};
use crate::errors::ScoringError;

pub use aggregate::{percentage, sum_category};
pub use mapper::{group_responses, validate_responses, GroupedResponses};
pub use rank::{rank, select_top_two};

/// Score one submission against an instrument.
///
/// Validates presence and range of every required response, then runs the
/// pure pipeline. Deterministic: identical inputs yield an identical
/// [`ScoreResult`].
pub fn score(instrument: &Instrument, responses: &RawResponseSet) -> Result<ScoreResult, ScoringError> {
    mapper::validate_responses(instrument, responses)?;

    let grouped = mapper::group_responses(instrument, responses)?;

    let mut scores = Vec::with_capacity(grouped.len());
    for group in &grouped {
        let raw_sum = aggregate::sum_category(&group.category.label, &group.values)?;
        let max_possible = instrument.max_possible(group.category);
        scores.push(CategoryScore {
            label: group.category.label.clone(),
            raw_sum,
            max_possible,
            percentage: aggregate::percentage(raw_sum, max_possible)?,
        });
    }

    let ranked = rank::rank(scores);
    let (primary, secondary) = rank::select_top_two(instrument, &ranked)?;

    log::debug!(
        "scored {} submission: primary={} secondary={}",
        instrument.id,
        primary,
        secondary
    );

    Ok(ScoreResult {
        instrument: instrument.id.clone(),
        categories: ranked,
        primary,
        secondary,
    })
}

/// Boundary operation for callers that identify instruments by id: resolves a
/// built-in instrument and scores the submission against it.
pub fn submit(instrument_id: &str, responses: &RawResponseSet) -> Result<ScoreResult, ScoringError> {
    let instrument = config::builtin(instrument_id).ok_or_else(|| {
        ScoringError::config(format!("unknown instrument '{}'", instrument_id))
    })?;
    score(instrument, responses)
}
