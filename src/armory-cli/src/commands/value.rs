//! Rack valuation command handler

use anyhow::Result;
use armory::Armory;
use serde::Serialize;

#[derive(Serialize)]
struct EntryRow {
    name: String,
    range: u32,
    power: u32,
    weight: u32,
    cost: i64,
}

#[derive(Serialize)]
struct ValueReport {
    entries: Vec<EntryRow>,
    total_cost: i64,
    most_expensive: Option<String>,
}

fn build_report(armory: &Armory) -> ValueReport {
    let entries = armory
        .weapons()
        .iter()
        .map(|weapon| EntryRow {
            name: weapon.to_string(),
            range: weapon.range(),
            power: weapon.power(),
            weight: weapon.weight(),
            cost: weapon.cost(),
        })
        .collect();

    ValueReport {
        entries,
        total_cost: armory.total_cost(),
        most_expensive: armory.most_expensive().map(ToString::to_string),
    }
}

pub fn run(entries: &[String], json: bool) -> Result<()> {
    let armory = super::build_rack(entries)?;
    let report = build_report(&armory);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for row in &report.entries {
        println!(
            "{:<40} range {:>4}m  power {:>3}  weight {:>3}kg  cost {:>6}$",
            row.name, row.range, row.power, row.weight, row.cost
        );
    }

    println!();
    println!("Total cost of the armory: {}$", report.total_cost);
    if let Some(name) = &report.most_expensive {
        println!("Most expensive weapon: {}", name);
    }

    Ok(())
}
