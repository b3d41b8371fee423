//! Weapon catalog and accessory fitting
//!
//! The base catalog is a closed set of three kinds. Fitting an accessory
//! produces a new `Weapon` value that wraps its base, so fitted weapons
//! stack: a rifle with optics can take a silencer on top.

use serde::{Deserialize, Serialize};

use crate::accessory::{Accessory, AccessoryError};

/// A weapon: one of the fixed base kinds, or a base with an accessory
/// fitted on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weapon {
    Rifle,
    Pistol,
    MachineGun,
    /// A weapon with an accessory mounted on it. The fitted result is a
    /// first-class weapon and can be fitted again.
    Fitted {
        base: Box<Weapon>,
        accessory: Accessory,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum WeaponError {
    #[error("Unknown weapon kind: {0}")]
    UnknownKind(String),

    #[error(transparent)]
    Accessory(#[from] AccessoryError),
}

impl Weapon {
    /// The base weapon kinds, in display order
    pub const BASE_KINDS: &'static [Self] = &[Self::Rifle, Self::Pistol, Self::MachineGun];

    /// Effective range in meters. Accessories never change range.
    pub fn range(&self) -> u32 {
        match self {
            Self::Rifle => 500,
            Self::Pistol => 100,
            Self::MachineGun => 800,
            Self::Fitted { base, .. } => base.range(),
        }
    }

    /// Power rating, including every fitted accessory
    pub fn power(&self) -> u32 {
        match self {
            Self::Rifle => 30,
            Self::Pistol => 15,
            Self::MachineGun => 40,
            Self::Fitted { base, accessory } => base.power() + accessory.power(),
        }
    }

    /// Weight in kilograms, including every fitted accessory
    pub fn weight(&self) -> u32 {
        match self {
            Self::Rifle => 5,
            Self::Pistol => 2,
            Self::MachineGun => 10,
            Self::Fitted { base, accessory } => base.weight() + accessory.weight(),
        }
    }

    /// Valuation cost in dollars: power times range
    pub fn cost(&self) -> i64 {
        i64::from(self.power()) * i64::from(self.range())
    }

    /// Fit `accessory` onto this weapon, producing the fitted weapon
    pub fn with_accessory(self, accessory: Accessory) -> Self {
        Self::Fitted {
            base: Box::new(self),
            accessory,
        }
    }

    /// Parse a base kind name. Case-insensitive; spaces, hyphens and
    /// underscores are interchangeable ("machine gun" == "machine-gun").
    fn parse_kind(s: &str) -> Result<Self, WeaponError> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "rifle" => Ok(Self::Rifle),
            "pistol" => Ok(Self::Pistol),
            "machinegun" => Ok(Self::MachineGun),
            _ => Err(WeaponError::UnknownKind(s.trim().to_string())),
        }
    }
}

impl std::fmt::Display for Weapon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rifle => f.write_str("Rifle"),
            Self::Pistol => f.write_str("Pistol"),
            Self::MachineGun => f.write_str("Machine Gun"),
            Self::Fitted { base, accessory } => write!(f, "{} with {}", base, accessory),
        }
    }
}

impl std::str::FromStr for Weapon {
    type Err = WeaponError;

    /// Parse a rack entry: a base kind followed by zero or more
    /// `+accessory` fittings, e.g. `rifle+optics+silencer`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('+');
        // split always yields at least one piece
        let mut weapon = Self::parse_kind(parts.next().unwrap_or_default())?;
        for part in parts {
            weapon = weapon.with_accessory(part.parse::<Accessory>()?);
        }
        Ok(weapon)
    }
}
