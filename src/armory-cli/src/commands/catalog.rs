//! Catalog listing command handler

use anyhow::Result;
use armory::{Accessory, Weapon};
use serde::Serialize;

/// A catalog row ready for display.
#[derive(Serialize)]
struct WeaponRow {
    name: String,
    range: u32,
    power: u32,
    weight: u32,
    cost: i64,
}

#[derive(Serialize)]
struct AccessoryRow {
    name: &'static str,
    price: u32,
    power: u32,
    weight: u32,
}

#[derive(Serialize)]
struct CatalogReport {
    weapons: Vec<WeaponRow>,
    accessories: Vec<AccessoryRow>,
}

fn build_report() -> CatalogReport {
    let weapons = Weapon::BASE_KINDS
        .iter()
        .map(|weapon| WeaponRow {
            name: weapon.to_string(),
            range: weapon.range(),
            power: weapon.power(),
            weight: weapon.weight(),
            cost: weapon.cost(),
        })
        .collect();

    let accessories = Accessory::ALL
        .iter()
        .map(|accessory| AccessoryRow {
            name: accessory.name(),
            price: accessory.price(),
            power: accessory.power(),
            weight: accessory.weight(),
        })
        .collect();

    CatalogReport {
        weapons,
        accessories,
    }
}

pub fn run(json: bool) -> Result<()> {
    let report = build_report();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Weapons:");
    for row in &report.weapons {
        println!(
            "  {:<12} range {:>4}m  power {:>3}  weight {:>3}kg  cost {:>6}$",
            row.name, row.range, row.power, row.weight, row.cost
        );
    }

    println!();
    println!("Accessories:");
    for row in &report.accessories {
        println!(
            "  {:<12} price {:>4}$  power +{}  weight +{}kg",
            row.name, row.price, row.power, row.weight
        );
    }

    Ok(())
}
