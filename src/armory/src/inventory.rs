//! Armory aggregate
//!
//! Owns the weapon rack and computes valuation metrics over it: total
//! cost, most expensive entry, and per-weapon depreciation reports.

use serde::{Deserialize, Serialize};

use crate::accessory::Accessory;
use crate::weapon::Weapon;

/// Flat depreciation applied per year of use, in percent of cost
pub const DEPRECIATION_RATE_PCT: i64 = 10;

/// The armory: an ordered rack of weapons, bare or fitted.
///
/// Entries keep insertion order and duplicates are allowed. The rack
/// only grows; no operation removes or replaces an entry.
#[derive(Debug, Default)]
pub struct Armory {
    weapons: Vec<Weapon>,
}

impl Armory {
    /// Create an empty armory
    pub fn new() -> Self {
        Self::default()
    }

    /// Rack a weapon
    pub fn add_weapon(&mut self, weapon: Weapon) {
        self.weapons.push(weapon);
    }

    /// Fit `accessory` onto `weapon` and rack the fitted result.
    ///
    /// A bare entry already racked stays listed alongside the fitted
    /// one, and both count toward totals. Callers wanting replace
    /// semantics must manage the rack themselves.
    pub fn add_accessory_to_weapon(&mut self, weapon: Weapon, accessory: Accessory) {
        self.weapons.push(weapon.with_accessory(accessory));
    }

    /// Sum of cost over every racked entry; 0 for an empty armory
    pub fn total_cost(&self) -> i64 {
        self.weapons.iter().map(Weapon::cost).sum()
    }

    /// The racked entry with maximal cost, or `None` when empty.
    ///
    /// Strict greater-than against a running best, so on equal costs
    /// the earliest racked entry wins.
    pub fn most_expensive(&self) -> Option<&Weapon> {
        let (first, rest) = self.weapons.split_first()?;
        let mut best = first;
        for weapon in rest {
            if weapon.cost() > best.cost() {
                best = weapon;
            }
        }
        Some(best)
    }

    /// Estimate value lost per entry over the span from `fielded_year`
    /// to `as_of_year`.
    ///
    /// Reporting only: racked values are never mutated, so repeated
    /// calls do not compound.
    pub fn depreciation_report(
        &self,
        fielded_year: i32,
        as_of_year: i32,
    ) -> Vec<DepreciationEntry> {
        let years_in_use = i64::from(as_of_year) - i64::from(fielded_year);
        self.weapons
            .iter()
            .map(|weapon| DepreciationEntry {
                weapon: weapon.to_string(),
                amount: depreciation(weapon.cost(), years_in_use),
                years_in_use,
            })
            .collect()
    }

    /// Number of racked entries
    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    /// Whether the rack is empty
    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// The racked entries, in insertion order
    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }
}

/// One line of a depreciation report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepreciationEntry {
    pub weapon: String,
    pub amount: i64,
    pub years_in_use: i64,
}

impl std::fmt::Display for DepreciationEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Depreciating {} by {}$ due to {} years of use.",
            self.weapon, self.amount, self.years_in_use
        )
    }
}

/// Value lost by a weapon of the given cost after `years_in_use` years.
///
/// The float intermediate and truncating cast make negative spans
/// mirror positive ones around zero.
fn depreciation(cost: i64, years_in_use: i64) -> i64 {
    (cost as f64 * (years_in_use * DEPRECIATION_RATE_PCT) as f64 / 100.0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_armory() {
        let armory = Armory::new();

        assert!(armory.is_empty());
        assert_eq!(armory.total_cost(), 0);
        assert!(armory.most_expensive().is_none());
        assert!(armory.depreciation_report(2010, 2020).is_empty());
    }

    #[test]
    fn test_total_cost_counts_duplicates() {
        let mut armory = Armory::new();
        armory.add_weapon(Weapon::Rifle);
        armory.add_weapon(Weapon::Rifle);
        armory.add_weapon(Weapon::Pistol);

        assert_eq!(armory.len(), 3);
        assert_eq!(armory.total_cost(), 15000 + 15000 + 1500);
    }

    #[test]
    fn test_fitting_keeps_bare_entry_racked() {
        let mut armory = Armory::new();
        armory.add_weapon(Weapon::Pistol);
        armory.add_accessory_to_weapon(Weapon::Pistol, Accessory::Silencer);

        // Both the bare and the fitted pistol are racked and priced
        assert_eq!(armory.len(), 2);
        assert_eq!(armory.weapons()[0], Weapon::Pistol);
        assert_eq!(
            armory.weapons()[1].to_string(),
            "Pistol with Silencer"
        );
        assert_eq!(armory.total_cost(), 1500 + 1700);
    }

    #[test]
    fn test_most_expensive_picks_maximum() {
        let mut armory = Armory::new();
        armory.add_weapon(Weapon::Pistol);
        armory.add_weapon(Weapon::MachineGun);
        armory.add_weapon(Weapon::Rifle);

        assert_eq!(armory.most_expensive(), Some(&Weapon::MachineGun));
    }

    #[test]
    fn test_most_expensive_tie_goes_to_first_racked() {
        let mut armory = Armory::new();
        armory.add_weapon(Weapon::Rifle);
        armory.add_weapon(Weapon::Rifle);

        let best = armory.most_expensive().unwrap();
        assert!(std::ptr::eq(best, &armory.weapons()[0]));
    }

    #[test]
    fn test_depreciation_report() {
        let mut armory = Armory::new();
        armory.add_weapon(Weapon::Rifle);

        let report = armory.depreciation_report(2010, 2013);
        assert_eq!(
            report,
            vec![DepreciationEntry {
                weapon: "Rifle".to_string(),
                amount: 4500, // 15000 * 3 * 10%
                years_in_use: 3,
            }]
        );
        assert_eq!(
            report[0].to_string(),
            "Depreciating Rifle by 4500$ due to 3 years of use."
        );
    }

    #[test]
    fn test_depreciation_zero_and_negative_spans() {
        let mut armory = Armory::new();
        armory.add_weapon(Weapon::Rifle);

        let same_year = armory.depreciation_report(2010, 2010);
        assert_eq!(same_year[0].amount, 0);
        assert_eq!(same_year[0].years_in_use, 0);

        // Fielded year in the future truncates toward zero, mirroring
        // the positive span
        let future = armory.depreciation_report(2010, 2009);
        assert_eq!(future[0].amount, -1500);
        assert_eq!(future[0].years_in_use, -1);
    }

    #[test]
    fn test_depreciation_does_not_compound() {
        let mut armory = Armory::new();
        armory.add_weapon(Weapon::MachineGun);

        let first = armory.depreciation_report(2010, 2015);
        let second = armory.depreciation_report(2010, 2015);
        assert_eq!(first, second);
        assert_eq!(armory.total_cost(), 32000);
    }

    #[test]
    fn test_reference_scenario() {
        let mut armory = Armory::new();
        armory.add_weapon(Weapon::Rifle);
        armory.add_weapon(Weapon::Pistol);
        armory.add_weapon(Weapon::MachineGun);

        assert_eq!(armory.total_cost(), 48500);
        assert_eq!(armory.most_expensive(), Some(&Weapon::MachineGun));

        // Optics go onto the machine gun, the most expensive entry
        let best = armory.most_expensive().cloned().unwrap();
        armory.add_accessory_to_weapon(best, Accessory::Optics);

        let fitted = armory.most_expensive().unwrap();
        assert_eq!(fitted.to_string(), "Machine Gun with Optics");
        assert_eq!(fitted.power(), 45);
        assert_eq!(fitted.range(), 800);
        assert_eq!(fitted.cost(), 36000);
        assert_eq!(armory.total_cost(), 84500);

        // The silencer then lands on the freshly fitted machine gun,
        // which has become the most expensive entry itself
        let best = armory.most_expensive().cloned().unwrap();
        armory.add_accessory_to_weapon(best, Accessory::Silencer);

        let fitted = armory.most_expensive().unwrap();
        assert_eq!(fitted.to_string(), "Machine Gun with Optics with Silencer");
        assert_eq!(fitted.cost(), 37600);
        assert_eq!(armory.total_cost(), 122100);
        assert_eq!(armory.len(), 5);
    }
}
