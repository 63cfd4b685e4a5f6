//! Core domain types shared by the scoring pipeline and the storage layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw questionnaire submission: question index (1-based) to response value.
///
/// A `BTreeMap` keeps serialization order deterministic, which matters because
/// response sets are persisted as an immutable audit trail.
pub type RawResponseSet = BTreeMap<u32, u32>;

/// Inclusive response scale for one instrument, e.g. 1-5 for Likert items or
/// 0-3 for the 41-question career discovery variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseScale {
    pub min: u32,
    pub max: u32,
}

impl ResponseScale {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// One named trait dimension and the question indices that measure it.
/// Declaration order across an instrument's categories is significant: it is
/// the tie-break order when two categories score identically.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub questions: Vec<u32>,
}

impl Category {
    pub fn new(label: impl Into<String>, questions: Vec<u32>) -> Self {
        Self {
            label: label.into(),
            questions,
        }
    }
}

/// A questionnaire definition: category map, response scale, and the policy
/// for the degenerate single-category case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Stable identifier used by the CLI and persisted records.
    pub id: String,
    /// Human-readable name for reports.
    pub name: String,
    pub scale: ResponseScale,
    /// Categories in declaration (tie-break) order.
    pub categories: Vec<Category>,
    /// Secondary label to report when fewer than two categories are ranked.
    /// Instruments with a single category must set this explicitly.
    #[serde(default)]
    pub secondary_fallback: Option<String>,
}

impl Instrument {
    /// Total number of questions across all categories.
    pub fn question_count(&self) -> usize {
        self.categories.iter().map(|c| c.questions.len()).sum()
    }

    /// Maximum achievable raw sum for one category under this scale.
    pub fn max_possible(&self, category: &Category) -> u32 {
        category.questions.len() as u32 * self.scale.max
    }
}

/// Scored state of one category: raw sum plus its 0-100 percentage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub label: String,
    pub raw_sum: u32,
    pub max_possible: u32,
    pub percentage: u8,
}

/// Complete outcome of scoring one submission. Categories are stored in rank
/// order (highest percentage first, declaration order on ties).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub instrument: String,
    pub categories: Vec<CategoryScore>,
    pub primary: String,
    pub secondary: String,
}

impl ScoreResult {
    /// Percentages keyed by category label.
    pub fn percentages(&self) -> BTreeMap<String, u8> {
        self.categories
            .iter()
            .map(|c| (c.label.clone(), c.percentage))
            .collect()
    }

    pub fn percentage_of(&self, label: &str) -> Option<u8> {
        self.categories
            .iter()
            .find(|c| c.label == label)
            .map(|c| c.percentage)
    }

    /// Concatenation of the top `len` category labels in rank order, e.g. the
    /// three-letter Holland code "RIA".
    pub fn code(&self, len: usize) -> String {
        self.categories
            .iter()
            .take(len)
            .map(|c| c.label.as_str())
            .collect()
    }
}

/// Timestamped scoring report handed to output writers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ScoreReport {
    pub student: Option<String>,
    pub result: ScoreResult,
    pub generated_at: DateTime<Utc>,
}

impl ScoreReport {
    pub fn new(student: Option<String>, result: ScoreResult) -> Self {
        Self {
            student,
            result,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked_result() -> ScoreResult {
        ScoreResult {
            instrument: "holland36".to_string(),
            categories: vec![
                CategoryScore {
                    label: "R".to_string(),
                    raw_sum: 30,
                    max_possible: 30,
                    percentage: 100,
                },
                CategoryScore {
                    label: "I".to_string(),
                    raw_sum: 15,
                    max_possible: 30,
                    percentage: 50,
                },
                CategoryScore {
                    label: "A".to_string(),
                    raw_sum: 6,
                    max_possible: 30,
                    percentage: 20,
                },
            ],
            primary: "R".to_string(),
            secondary: "I".to_string(),
        }
    }

    #[test]
    fn scale_contains_bounds() {
        let scale = ResponseScale::new(1, 5);
        assert!(scale.contains(1));
        assert!(scale.contains(5));
        assert!(!scale.contains(0));
        assert!(!scale.contains(6));
    }

    #[test]
    fn code_joins_top_labels_in_rank_order() {
        assert_eq!(ranked_result().code(3), "RIA");
        assert_eq!(ranked_result().code(2), "RI");
    }

    #[test]
    fn percentages_keyed_by_label() {
        let pct = ranked_result().percentages();
        assert_eq!(pct.get("R"), Some(&100));
        assert_eq!(pct.get("A"), Some(&20));
    }
}
