//! Rank selection: ordering category scores and picking primary/secondary.

use crate::core::{CategoryScore, Instrument};
use crate::errors::ScoringError;

/// Sort category scores descending by percentage. The input must be in
/// category declaration order; the sort is stable, so ties keep that order
/// (first-declared wins) rather than any arbitrary map iteration order.
pub fn rank(mut scores: Vec<CategoryScore>) -> Vec<CategoryScore> {
    scores.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    scores
}

/// Pick the primary and secondary labels from ranked scores. With fewer than
/// two categories the secondary comes from the instrument's declared
/// fallback; a single-category instrument without one is misconfigured.
pub fn select_top_two(
    instrument: &Instrument,
    ranked: &[CategoryScore],
) -> Result<(String, String), ScoringError> {
    let primary = ranked
        .first()
        .map(|s| s.label.clone())
        .ok_or_else(|| ScoringError::config("no categories to rank"))?;

    let secondary = match ranked.get(1) {
        Some(second) => second.label.clone(),
        None => instrument.secondary_fallback.clone().ok_or_else(|| {
            ScoringError::config(format!(
                "instrument '{}' has a single category and no secondary_fallback",
                instrument.id
            ))
        })?,
    };

    Ok((primary, secondary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Category, ResponseScale};

    fn score(label: &str, percentage: u8) -> CategoryScore {
        CategoryScore {
            label: label.to_string(),
            raw_sum: 0,
            max_possible: 100,
            percentage,
        }
    }

    fn instrument_with_fallback(fallback: Option<&str>) -> Instrument {
        Instrument {
            id: "mini".to_string(),
            name: "Mini".to_string(),
            scale: ResponseScale::new(1, 5),
            categories: vec![Category::new("only", vec![1])],
            secondary_fallback: fallback.map(str::to_string),
        }
    }

    #[test]
    fn ranks_descending_by_percentage() {
        let ranked = rank(vec![score("a", 20), score("b", 80), score("c", 50)]);
        let labels: Vec<&str> = ranked.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "c", "a"]);
    }

    #[test]
    fn ties_resolve_by_declaration_order() {
        let ranked = rank(vec![
            score("first", 40),
            score("second", 40),
            score("third", 40),
        ]);
        let labels: Vec<&str> = ranked.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn top_two_from_ranked_scores() {
        let instrument = instrument_with_fallback(None);
        let ranked = vec![score("b", 80), score("a", 20)];
        assert_eq!(
            select_top_two(&instrument, &ranked).unwrap(),
            ("b".to_string(), "a".to_string())
        );
    }

    #[test]
    fn single_category_uses_declared_fallback() {
        let instrument = instrument_with_fallback(Some("other"));
        let ranked = vec![score("only", 60)];
        assert_eq!(
            select_top_two(&instrument, &ranked).unwrap(),
            ("only".to_string(), "other".to_string())
        );
    }

    #[test]
    fn single_category_without_fallback_is_a_config_error() {
        let instrument = instrument_with_fallback(None);
        let ranked = vec![score("only", 60)];
        assert!(select_top_two(&instrument, &ranked)
            .unwrap_err()
            .is_config_error());
    }
}
