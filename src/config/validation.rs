//! Structural validation of instrument definitions.
//!
//! Run at startup (and on any loaded definition file) so that configuration
//! defects surface before the first submission is scored.

use crate::core::Instrument;
use crate::errors::ScoringError;
use std::collections::{BTreeMap, BTreeSet};

/// Check every structural invariant of an instrument's category map:
/// a sane scale, no empty categories, and question indices covering
/// exactly 1..=N with no overlap and no gap.
pub fn validate(instrument: &Instrument) -> Result<(), ScoringError> {
    validate_scale(instrument)?;
    validate_categories(instrument)?;
    validate_question_cover(instrument)?;
    validate_fallback(instrument)?;
    Ok(())
}

fn validate_scale(instrument: &Instrument) -> Result<(), ScoringError> {
    if instrument.scale.min >= instrument.scale.max {
        return Err(ScoringError::config(format!(
            "instrument '{}' declares an empty scale {}-{}",
            instrument.id, instrument.scale.min, instrument.scale.max
        )));
    }
    Ok(())
}

fn validate_categories(instrument: &Instrument) -> Result<(), ScoringError> {
    if instrument.categories.is_empty() {
        return Err(ScoringError::config(format!(
            "instrument '{}' declares no categories",
            instrument.id
        )));
    }
    for category in &instrument.categories {
        if category.questions.is_empty() {
            return Err(ScoringError::EmptyCategory(category.label.clone()));
        }
    }
    let mut seen = BTreeSet::new();
    for category in &instrument.categories {
        if !seen.insert(category.label.as_str()) {
            return Err(ScoringError::config(format!(
                "instrument '{}' declares category '{}' more than once",
                instrument.id, category.label
            )));
        }
    }
    Ok(())
}

/// Every question index 1..=N must appear in exactly one category.
fn validate_question_cover(instrument: &Instrument) -> Result<(), ScoringError> {
    let total = instrument.question_count() as u32;
    let mut owner: BTreeMap<u32, &str> = BTreeMap::new();

    for category in &instrument.categories {
        for &question in &category.questions {
            if question == 0 || question > total {
                return Err(ScoringError::config(format!(
                    "instrument '{}': category '{}' references question {} outside 1..={}",
                    instrument.id, category.label, question, total
                )));
            }
            if let Some(previous) = owner.insert(question, &category.label) {
                return Err(ScoringError::config(format!(
                    "instrument '{}': question {} appears in both '{}' and '{}'",
                    instrument.id, question, previous, category.label
                )));
            }
        }
    }

    // Overlap-free and in-bounds with the right total means full cover, but
    // report the first gap explicitly for a usable message.
    for question in 1..=total {
        if !owner.contains_key(&question) {
            return Err(ScoringError::config(format!(
                "instrument '{}': question {} is not assigned to any category",
                instrument.id, question
            )));
        }
    }
    Ok(())
}

fn validate_fallback(instrument: &Instrument) -> Result<(), ScoringError> {
    if instrument.categories.len() < 2 && instrument.secondary_fallback.is_none() {
        return Err(ScoringError::config(format!(
            "instrument '{}' has a single category and no secondary_fallback",
            instrument.id
        )));
    }
    Ok(())
}
