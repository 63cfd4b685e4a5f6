// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod roster;
pub mod scoring;
pub mod storage;

// Re-export commonly used types
pub use crate::core::{
    Category, CategoryScore, Instrument, RawResponseSet, ResponseScale, ScoreReport, ScoreResult,
};

pub use crate::errors::ScoringError;

pub use crate::config::{builtin, builtins, GARDNER24, GARDNER41, HOLLAND};

pub use crate::scoring::{score, submit};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::roster::{RosterError, Sex, Student};

pub use crate::storage::{ResponseRecord, RosterStore, StorageError, TestRecord};
