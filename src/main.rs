use anyhow::Result;
use clap::Parser;
use traitmap::cli::{Cli, Commands};
use traitmap::commands;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            instrument,
            responses,
            instrument_file,
            format,
            output,
            student,
            roster,
        } => {
            let config = commands::score::ScoreConfig {
                instrument,
                responses,
                instrument_file,
                format,
                output,
                student,
                roster,
            };
            commands::score::score_submission(config)
        }
        Commands::Validate { instrument_file } => {
            commands::validate::validate_instruments(instrument_file.as_deref())
        }
        Commands::Seed {
            count,
            roster,
            force,
        } => commands::seed::seed_roster(count, &roster, force),
        Commands::Roster { roster } => commands::roster::list_students(&roster),
    }
}
