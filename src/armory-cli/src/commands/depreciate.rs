//! Depreciation report command handler

use anyhow::{Context, Result};
use armory::DepreciationEntry;
use chrono::Datelike;
use serde::Serialize;

use crate::config::Config;

#[derive(Serialize)]
struct DepreciationReport {
    fielded_year: i32,
    as_of_year: i32,
    entries: Vec<DepreciationEntry>,
}

pub fn run(
    entries: &[String],
    fielded_year: Option<i32>,
    as_of: Option<i32>,
    json: bool,
) -> Result<()> {
    let armory = super::build_rack(entries)?;

    let fielded_year = match fielded_year {
        Some(year) => year,
        None => Config::load()?.fielded_year.context(
            "No fielded year given; pass --fielded-year or set one with `armory configure`",
        )?,
    };

    // The wall clock is read here at the boundary; the report itself
    // works on explicit years.
    let as_of_year = as_of.unwrap_or_else(|| chrono::Local::now().year());

    let report = DepreciationReport {
        fielded_year,
        as_of_year,
        entries: armory.depreciation_report(fielded_year, as_of_year),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for entry in &report.entries {
        println!("{}", entry);
    }

    Ok(())
}
