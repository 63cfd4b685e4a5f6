//! Built-in instrument definitions.
//!
//! Three fixed question-to-category maps, declared once as process-wide
//! read-only statics. Category declaration order doubles as the tie-break
//! order, so the vectors below are ordered deliberately.

use crate::core::{Category, Instrument, ResponseScale};
use once_cell::sync::Lazy;

pub const HOLLAND_ID: &str = "holland36";
pub const GARDNER24_ID: &str = "gardner24";
pub const GARDNER41_ID: &str = "gardner41";

/// Holland RIASEC career-interest inventory: 36 questions on a 1-5 scale,
/// six questions per type in questionnaire order.
pub static HOLLAND: Lazy<Instrument> = Lazy::new(|| Instrument {
    id: HOLLAND_ID.to_string(),
    name: "Holland Career Interest Inventory".to_string(),
    scale: ResponseScale::new(1, 5),
    categories: vec![
        Category::new("R", (1..=6).collect()),
        Category::new("I", (7..=12).collect()),
        Category::new("A", (13..=18).collect()),
        Category::new("S", (19..=24).collect()),
        Category::new("E", (25..=30).collect()),
        Category::new("C", (31..=36).collect()),
    ],
    secondary_fallback: Some("I".to_string()),
});

/// Gardner multiple-intelligence inventory, 24-question form: three
/// consecutive questions per intelligence on a 1-5 scale.
pub static GARDNER24: Lazy<Instrument> = Lazy::new(|| Instrument {
    id: GARDNER24_ID.to_string(),
    name: "Gardner Multiple Intelligence Inventory".to_string(),
    scale: ResponseScale::new(1, 5),
    categories: vec![
        Category::new("linguistic", vec![1, 2, 3]),
        Category::new("logical", vec![4, 5, 6]),
        Category::new("spatial", vec![7, 8, 9]),
        Category::new("bodily", vec![10, 11, 12]),
        Category::new("musical", vec![13, 14, 15]),
        Category::new("interpersonal", vec![16, 17, 18]),
        Category::new("intrapersonal", vec![19, 20, 21]),
        Category::new("naturalist", vec![22, 23, 24]),
    ],
    secondary_fallback: Some("logical".to_string()),
});

/// Gardner 41-question career-discovery variant: uneven category sizes
/// (4 to 6 questions) on a 0-3 scale, so per-category maxima differ.
pub static GARDNER41: Lazy<Instrument> = Lazy::new(|| Instrument {
    id: GARDNER41_ID.to_string(),
    name: "Career Discovery Assessment (41-question Gardner variant)".to_string(),
    scale: ResponseScale::new(0, 3),
    categories: vec![
        Category::new("linguistic", vec![1, 10, 17, 25, 34]),
        Category::new("musical", vec![2, 11, 20, 30, 40]),
        Category::new("bodily", vec![3, 9, 26, 27, 31, 37]),
        Category::new("interpersonal", vec![4, 12, 18, 35, 39]),
        Category::new("logical", vec![5, 15, 22, 32]),
        Category::new("naturalist", vec![6, 13, 16, 23, 38]),
        Category::new("spatial", vec![7, 19, 24, 29, 33]),
        Category::new("intrapersonal", vec![8, 14, 21, 28, 36, 41]),
    ],
    secondary_fallback: Some("logical".to_string()),
});

/// All built-in instruments in a stable listing order.
pub fn builtins() -> [&'static Instrument; 3] {
    [&HOLLAND, &GARDNER24, &GARDNER41]
}

/// Look up a built-in instrument by its identifier.
pub fn builtin(id: &str) -> Option<&'static Instrument> {
    builtins().into_iter().find(|i| i.id == id)
}
