//! Command handlers for the armory CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod catalog;
pub mod configure;
pub mod demo;
pub mod depreciate;
pub mod value;

use anyhow::{Context, Result};
use armory::{Armory, Weapon};

/// Build an armory from command-line rack entries.
///
/// Each entry is a base kind with optional `+accessory` fittings,
/// e.g. `rifle` or `machine-gun+optics+silencer`.
pub fn build_rack(entries: &[String]) -> Result<Armory> {
    let mut armory = Armory::new();
    for entry in entries {
        let weapon: Weapon = entry
            .parse()
            .with_context(|| format!("Invalid rack entry: {}", entry))?;
        armory.add_weapon(weapon);
    }
    Ok(armory)
}
