use indoc::indoc;
use pretty_assertions::assert_eq;
use traitmap::config::{builtins, parse_instruments, validate};
use traitmap::core::{Category, Instrument, ResponseScale};
use traitmap::errors::ScoringError;

#[test]
fn builtin_instruments_pass_validation() {
    for instrument in builtins() {
        validate(instrument).unwrap();
    }
}

#[test]
fn builtin_question_counts() {
    let counts: Vec<(String, usize)> = builtins()
        .iter()
        .map(|i| (i.id.clone(), i.question_count()))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("holland36".to_string(), 36),
            ("gardner24".to_string(), 24),
            ("gardner41".to_string(), 41),
        ]
    );
}

#[test]
fn parses_a_custom_instrument_file() {
    let toml = indoc! {r#"
        [[instrument]]
        id = "pair"
        name = "Two-category demo"
        scale = { min = 1, max = 4 }
        categories = [
            { label = "left", questions = [1, 3] },
            { label = "right", questions = [2, 4] },
        ]

        [[instrument]]
        id = "solo"
        name = "Single-category demo"
        scale = { min = 0, max = 2 }
        categories = [
            { label = "only", questions = [1, 2, 3] },
        ]
        secondary_fallback = "only"
    "#};

    let instruments = parse_instruments(toml).unwrap();
    assert_eq!(instruments.len(), 2);
    assert_eq!(instruments[0].question_count(), 4);
    assert_eq!(
        instruments[1].secondary_fallback,
        Some("only".to_string())
    );
}

#[test]
fn file_with_a_gap_in_question_cover_is_rejected() {
    let toml = indoc! {r#"
        [[instrument]]
        id = "gappy"
        name = "Gap"
        scale = { min = 1, max = 5 }
        categories = [
            { label = "a", questions = [1, 2] },
            { label = "b", questions = [4, 5] },
        ]
    "#};
    assert!(parse_instruments(toml).is_err());
}

#[test]
fn file_with_duplicate_category_labels_is_rejected() {
    let toml = indoc! {r#"
        [[instrument]]
        id = "dupes"
        name = "Dupes"
        scale = { min = 1, max = 5 }
        categories = [
            { label = "a", questions = [1] },
            { label = "a", questions = [2] },
        ]
    "#};
    assert!(parse_instruments(toml).is_err());
}

#[test]
fn single_category_without_fallback_fails_validation() {
    let instrument = Instrument {
        id: "solo".to_string(),
        name: "Solo".to_string(),
        scale: ResponseScale::new(1, 5),
        categories: vec![Category::new("only", vec![1, 2])],
        secondary_fallback: None,
    };
    let err = validate(&instrument).unwrap_err();
    assert!(err.is_config_error());
}

#[test]
fn empty_category_reports_its_label() {
    let instrument = Instrument {
        id: "broken".to_string(),
        name: "Broken".to_string(),
        scale: ResponseScale::new(1, 5),
        categories: vec![
            Category::new("fine", vec![1, 2]),
            Category::new("hollow", vec![]),
        ],
        secondary_fallback: None,
    };
    assert_eq!(
        validate(&instrument),
        Err(ScoringError::EmptyCategory("hollow".to_string()))
    );
}
