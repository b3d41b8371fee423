//! Configuration command handler
//!
//! Handles the `configure` subcommand for setting up armory CLI defaults.

use crate::config::Config;
use anyhow::Result;

/// Handle the configure command
///
/// # Arguments
/// * `fielded_year` - Optional default fielded year to set
/// * `show` - If true, show current configuration
pub fn run(fielded_year: Option<i32>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config)?;
        return Ok(());
    }

    if let Some(year) = fielded_year {
        set_fielded_year(&mut config, year)?;
    } else {
        show_usage();
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) -> Result<()> {
    if let Some(year) = config.fielded_year {
        println!("Default fielded year: {}", year);
    } else {
        println!("No default fielded year configured");
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }

    Ok(())
}

/// Set the default fielded year in configuration
fn set_fielded_year(config: &mut Config, year: i32) -> Result<()> {
    config.fielded_year = Some(year);
    config.save()?;

    println!("Default fielded year configured: {}", year);
    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: armory configure --fielded-year YEAR");
    println!("   or: armory configure --show");
    println!();
    println!("Note: the fielded year is the default base year used by");
    println!("      `armory depreciate` when --fielded-year is not passed.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_usage_does_not_panic() {
        show_usage();
    }

    #[test]
    fn test_config_path_exists() {
        let result = Config::config_path();
        assert!(result.is_ok());
    }
}
