//! Core CLI definitions

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "armory")]
#[command(about = "Armory valuation and depreciation reports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the reference scenario (three weapons, two fittings, full report)
    #[command(visible_alias = "d")]
    Demo {
        /// Fielded year used for the depreciation report
        #[arg(long, default_value_t = 2010)]
        fielded_year: i32,
    },

    /// List the weapon and accessory catalogs with their stats
    #[command(visible_alias = "c")]
    Catalog {
        /// Emit the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Value a rack of weapons (entries like "rifle" or "machine-gun+optics")
    #[command(visible_alias = "v")]
    Value {
        /// Weapons to rack; base kinds with optional `+accessory` fittings
        #[arg(required = true)]
        entries: Vec<String>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report depreciation for a rack of weapons
    #[command(visible_alias = "dep")]
    Depreciate {
        /// Weapons to rack; base kinds with optional `+accessory` fittings
        #[arg(required = true)]
        entries: Vec<String>,

        /// Year the weapons entered service (configured default if not provided)
        #[arg(long)]
        fielded_year: Option<i32>,

        /// Year to value against (current wall-clock year if not provided)
        #[arg(long)]
        as_of: Option<i32>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configure default settings
    Configure {
        /// Set the default fielded year
        #[arg(long)]
        fielded_year: Option<i32>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
