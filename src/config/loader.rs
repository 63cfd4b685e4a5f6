//! Loading instrument definitions from TOML files.
//!
//! The built-in tables cover the three shipped questionnaires; schools that
//! run their own inventories describe them in a definition file:
//!
//! ```toml
//! [[instrument]]
//! id = "mini4"
//! name = "Four-question demo"
//! scale = { min = 1, max = 5 }
//! categories = [
//!     { label = "a", questions = [1, 2] },
//!     { label = "b", questions = [3, 4] },
//! ]
//! ```

use crate::config::validation;
use crate::core::Instrument;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct InstrumentFile {
    #[serde(default, rename = "instrument")]
    instruments: Vec<Instrument>,
}

/// Parse instrument definitions from TOML and validate every one of them.
pub fn parse_instruments(contents: &str) -> Result<Vec<Instrument>> {
    let file: InstrumentFile =
        toml::from_str(contents).context("failed to parse instrument definition file")?;
    for instrument in &file.instruments {
        validation::validate(instrument)
            .with_context(|| format!("instrument '{}' failed validation", instrument.id))?;
    }
    Ok(file.instruments)
}

/// Load and validate instrument definitions from a file.
pub fn load_instruments(path: &Path) -> Result<Vec<Instrument>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read instrument file {}", path.display()))?;
    let instruments = parse_instruments(&contents)?;
    log::debug!(
        "loaded {} instrument definition(s) from {}",
        instruments.len(),
        path.display()
    );
    Ok(instruments)
}

/// Resolve an instrument id against an optional definition file, falling back
/// to the built-ins. File definitions shadow built-ins with the same id.
pub fn resolve_instrument(id: &str, file: Option<&Path>) -> Result<Instrument> {
    if let Some(path) = file {
        let instruments = load_instruments(path)?;
        if let Some(found) = instruments.into_iter().find(|i| i.id == id) {
            return Ok(found);
        }
    }
    crate::config::instruments::builtin(id)
        .cloned()
        .with_context(|| format!("unknown instrument '{}'", id))
}
