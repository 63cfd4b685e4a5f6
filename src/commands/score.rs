//! The `score` subcommand: score a submission file, optionally recording the
//! result against a student in the roster.

use crate::config;
use crate::core::{RawResponseSet, ScoreReport};
use crate::io::{create_writer, OutputFormat};
use crate::storage::RosterStore;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct ScoreConfig {
    pub instrument: String,
    pub responses: PathBuf,
    pub instrument_file: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub student: Option<String>,
    pub roster: PathBuf,
}

pub fn score_submission(config: ScoreConfig) -> Result<()> {
    let instrument =
        config::resolve_instrument(&config.instrument, config.instrument_file.as_deref())?;
    let responses = read_responses(&config.responses)?;

    let result = match &config.student {
        // Recording path: the store scores and persists the test/response
        // pair together, then the roster file is rewritten.
        Some(student_id) => {
            let mut store = RosterStore::load(&config.roster)?;
            let record = store.record_submission(student_id, &instrument, responses)?;
            store.save(&config.roster)?;
            record.result
        }
        None => crate::scoring::score(&instrument, &responses)?,
    };

    let report = ScoreReport::new(config.student.clone(), result);
    let writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(fs::File::create(path).with_context(|| {
            format!("failed to create output file {}", path.display())
        })?),
        None => Box::new(std::io::stdout()),
    };
    create_writer(writer, config.format).write_report(&report)?;
    Ok(())
}

/// Read a submission file: a JSON object mapping question index to value,
/// e.g. `{"1": 4, "2": 5}`.
fn read_responses(path: &Path) -> Result<RawResponseSet> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read responses file {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse responses file {}", path.display()))
}
