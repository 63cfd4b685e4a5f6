use traitmap::core::RawResponseSet;
use traitmap::scoring::score;
use traitmap::{GARDNER24, GARDNER41};

fn uniform(count: u32, value: u32) -> RawResponseSet {
    (1..=count).map(|q| (q, value)).collect()
}

#[test]
fn gardner24_all_minimum_gives_twenty_percent() {
    let result = score(&GARDNER24, &uniform(24, 1)).unwrap();
    for category in &result.categories {
        assert_eq!(category.percentage, 20);
        assert_eq!(category.max_possible, 15);
    }
}

#[test]
fn gardner24_all_maximum_gives_one_hundred_percent() {
    let result = score(&GARDNER24, &uniform(24, 5)).unwrap();
    assert!(result.categories.iter().all(|c| c.percentage == 100));
}

#[test]
fn gardner24_full_tie_resolves_by_declaration_order() {
    let result = score(&GARDNER24, &uniform(24, 3)).unwrap();
    assert_eq!(result.primary, "linguistic");
    assert_eq!(result.secondary, "logical");
}

#[test]
fn gardner24_musical_block_wins() {
    // Questions 13-15 carry the musical intelligence.
    let mut responses = uniform(24, 2);
    for q in 13..=15 {
        responses.insert(q, 5);
    }
    let result = score(&GARDNER24, &responses).unwrap();
    assert_eq!(result.primary, "musical");
    assert_eq!(result.percentage_of("musical"), Some(100));
    assert_eq!(result.percentage_of("linguistic"), Some(40));
}

#[test]
fn gardner41_maxed_linguistic_questions_score_one_hundred() {
    // Linguistic questions [1, 10, 17, 25, 34] all = 3, everything else = 0.
    let mut responses = uniform(41, 0);
    for q in [1, 10, 17, 25, 34] {
        responses.insert(q, 3);
    }
    let result = score(&GARDNER41, &responses).unwrap();

    assert_eq!(result.percentage_of("linguistic"), Some(100));
    for label in [
        "musical",
        "bodily",
        "interpersonal",
        "logical",
        "naturalist",
        "spatial",
        "intrapersonal",
    ] {
        assert_eq!(result.percentage_of(label), Some(0), "category {label}");
    }
    assert_eq!(result.primary, "linguistic");
    // The remaining seven tie at zero; musical is declared next.
    assert_eq!(result.secondary, "musical");
}

#[test]
fn gardner41_uneven_category_maxima() {
    let result = score(&GARDNER41, &uniform(41, 3)).unwrap();
    let maxima = result.percentages();
    assert_eq!(maxima.len(), 8);
    assert!(result.categories.iter().all(|c| c.percentage == 100));

    // Per-category max = size x 3: logical has 4 questions, intrapersonal 6.
    assert_eq!(
        result
            .categories
            .iter()
            .find(|c| c.label == "logical")
            .map(|c| c.max_possible),
        Some(12)
    );
    assert_eq!(
        result
            .categories
            .iter()
            .find(|c| c.label == "intrapersonal")
            .map(|c| c.max_possible),
        Some(18)
    );
}

#[test]
fn gardner41_zero_scale_minimum_is_valid() {
    let result = score(&GARDNER41, &uniform(41, 0)).unwrap();
    assert!(result.categories.iter().all(|c| c.percentage == 0));
}

#[test]
fn gardner41_logical_rounding_fixtures() {
    // logical = [5, 15, 22, 32], max 12. A sum of 2 is 16.67 -> 17,
    // a sum of 10 is 83.33 -> 83.
    let mut responses = uniform(41, 0);
    responses.insert(5, 1);
    responses.insert(15, 1);
    let result = score(&GARDNER41, &responses).unwrap();
    assert_eq!(result.percentage_of("logical"), Some(17));

    for q in [5, 15, 22] {
        responses.insert(q, 3);
    }
    responses.insert(32, 1);
    let result = score(&GARDNER41, &responses).unwrap();
    assert_eq!(result.percentage_of("logical"), Some(83));
}
