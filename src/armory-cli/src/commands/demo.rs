//! Reference scenario command handler

use anyhow::{Context, Result};
use armory::{Accessory, Armory, Weapon};
use chrono::Datelike;

/// Run the reference scenario: rack the three base weapons, fit optics
/// and then a silencer onto whichever entry is most expensive at each
/// step, and print the valuation and depreciation reports.
pub fn run(fielded_year: i32) -> Result<()> {
    let mut armory = Armory::new();

    armory.add_weapon(Weapon::Rifle);
    armory.add_weapon(Weapon::Pistol);
    armory.add_weapon(Weapon::MachineGun);

    // The second fit targets the entry fitted first, since that entry
    // has become the most expensive one itself.
    let best = armory
        .most_expensive()
        .cloned()
        .context("Armory is empty")?;
    armory.add_accessory_to_weapon(best, Accessory::Optics);

    let best = armory
        .most_expensive()
        .cloned()
        .context("Armory is empty")?;
    armory.add_accessory_to_weapon(best, Accessory::Silencer);

    println!("Total cost of the armory: {}$", armory.total_cost());
    println!(
        "Most expensive weapon: {}",
        armory.most_expensive().context("Armory is empty")?
    );

    let as_of_year = chrono::Local::now().year();
    for entry in armory.depreciation_report(fielded_year, as_of_year) {
        println!("{}", entry);
    }

    Ok(())
}
