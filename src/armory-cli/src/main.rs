mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Demo { fielded_year } => {
            commands::demo::run(fielded_year)?;
        }

        Commands::Catalog { json } => {
            commands::catalog::run(json)?;
        }

        Commands::Value { entries, json } => {
            commands::value::run(&entries, json)?;
        }

        Commands::Depreciate {
            entries,
            fielded_year,
            as_of,
            json,
        } => {
            commands::depreciate::run(&entries, fielded_year, as_of, json)?;
        }

        Commands::Configure { fielded_year, show } => {
            commands::configure::run(fielded_year, show)?;
        }
    }

    Ok(())
}
