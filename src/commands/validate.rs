//! The `validate` subcommand: check instrument configurations before any
//! submission is scored. Configuration defects are deployment-blocking.

use crate::config;
use anyhow::{bail, Result};
use colored::*;
use std::path::Path;

pub fn validate_instruments(instrument_file: Option<&Path>) -> Result<()> {
    let mut failures = 0;

    for instrument in config::builtins() {
        report(&instrument.id, config::validate(instrument), &mut failures);
    }

    if let Some(path) = instrument_file {
        match config::load_instruments(path) {
            Ok(instruments) => {
                // Loader already validated; report each as passing.
                for instrument in &instruments {
                    report(&instrument.id, Ok(()), &mut failures);
                }
            }
            Err(err) => {
                println!("{} {}: {:#}", "FAIL".red().bold(), path.display(), err);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{failures} instrument configuration(s) failed validation");
    }
    println!("{}", "All instrument configurations are valid.".green());
    Ok(())
}

fn report(id: &str, outcome: Result<(), crate::errors::ScoringError>, failures: &mut u32) {
    match outcome {
        Ok(()) => println!("{} {}", "OK".green().bold(), id),
        Err(err) => {
            println!("{} {}: {}", "FAIL".red().bold(), id, err);
            *failures += 1;
        }
    }
}
