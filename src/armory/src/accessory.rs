//! Accessory catalog
//!
//! Accessories are fitted onto weapons and shift the stats of whatever
//! they are mounted on. The catalog is closed; no new kinds are expected.

use serde::{Deserialize, Serialize};

/// Weapon accessory kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessory {
    Optics,
    Silencer,
}

#[derive(Debug, thiserror::Error)]
pub enum AccessoryError {
    #[error("Unknown accessory: {0}")]
    UnknownKind(String),
}

impl Accessory {
    /// Every accessory in the catalog, in display order
    pub const ALL: &'static [Self] = &[Self::Optics, Self::Silencer];

    /// Get accessory name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Optics => "Optics",
            Self::Silencer => "Silencer",
        }
    }

    /// Listed price in dollars.
    ///
    /// Informational only: valuation is derived from power and range,
    /// so the price of a fitted accessory never enters cost totals.
    pub fn price(&self) -> u32 {
        match self {
            Self::Optics => 100,
            Self::Silencer => 50,
        }
    }

    /// Power added to the weapon this accessory is fitted on
    pub fn power(&self) -> u32 {
        match self {
            Self::Optics => 5,
            Self::Silencer => 2,
        }
    }

    /// Weight added to the weapon this accessory is fitted on
    pub fn weight(&self) -> u32 {
        match self {
            Self::Optics => 2,
            Self::Silencer => 1,
        }
    }
}

impl std::fmt::Display for Accessory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Accessory {
    type Err = AccessoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optics" => Ok(Self::Optics),
            "silencer" => Ok(Self::Silencer),
            _ => Err(AccessoryError::UnknownKind(s.trim().to_string())),
        }
    }
}
