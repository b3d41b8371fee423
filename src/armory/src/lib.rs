//! # armory
//!
//! Armory valuation library - weapon catalog, accessory fitting, and
//! cost reporting.
//!
//! This library provides functionality to:
//! - Describe the fixed weapon catalog (rifle, pistol, machine gun)
//! - Fit accessories (optics, silencer) onto weapons, including stacked fits
//! - Rack weapons in an [`Armory`] and compute valuation metrics
//! - Produce per-weapon depreciation reports over an explicit year span
//!
//! ## Example
//!
//! ```
//! use armory::{Accessory, Armory, Weapon};
//!
//! let mut armory = Armory::new();
//! armory.add_weapon(Weapon::Rifle);
//! armory.add_weapon(Weapon::MachineGun);
//!
//! // Fit optics onto whichever entry is currently most expensive
//! let best = armory.most_expensive().cloned().unwrap();
//! armory.add_accessory_to_weapon(best, Accessory::Optics);
//!
//! assert_eq!(armory.total_cost(), 15000 + 32000 + 36000);
//!
//! for line in armory.depreciation_report(2010, 2013) {
//!     println!("{}", line);
//! }
//! ```

pub mod accessory;
pub mod inventory;
pub mod weapon;

// Re-export commonly used items
pub use accessory::{Accessory, AccessoryError};
pub use inventory::{Armory, DepreciationEntry, DEPRECIATION_RATE_PCT};
pub use weapon::{Weapon, WeaponError};
