use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "traitmap")]
#[command(about = "Student career-interest and multiple-intelligence questionnaire scorer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a questionnaire submission
    Score {
        /// Instrument id (holland36, gardner24, gardner41, or one defined in --instrument-file)
        instrument: String,

        /// JSON file mapping question index to response value
        responses: PathBuf,

        /// TOML file with additional instrument definitions
        #[arg(long = "instrument-file")]
        instrument_file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Record the result for this student id in the roster file
        #[arg(long)]
        student: Option<String>,

        /// Roster file to record into (required with --student)
        #[arg(long, default_value = "roster.json")]
        roster: PathBuf,
    },

    /// Validate instrument configurations
    Validate {
        /// TOML file with additional instrument definitions to check
        #[arg(long = "instrument-file")]
        instrument_file: Option<PathBuf>,
    },

    /// Create sample student data for testing
    Seed {
        /// Number of students to create
        #[arg(long, default_value = "20")]
        count: usize,

        /// Roster file to write
        #[arg(long, default_value = "roster.json")]
        roster: PathBuf,

        /// Overwrite an existing roster file
        #[arg(long)]
        force: bool,
    },

    /// List enrolled students
    Roster {
        /// Roster file to read
        #[arg(long, default_value = "roster.json")]
        roster: PathBuf,
    },
}
