//! Measures and solute families.
//!
//! Every value handled by the crate is a plain `f64` tagged with a
//! [`Measure`].  Intensive measures (density, ABV, Brix, fractions,
//! concentration) describe a solution; quantity measures (L, mL, US fl oz,
//! g, kg) describe how much of it there is.
//!
//! | Measure             | Unit      | Alcohol        | Sugar          |
//! |---------------------|-----------|----------------|----------------|
//! | `Density`           | g/mL      | 0.78816–0.998  | 0.998–1.5859   |
//! | `Abv`               | % v/v     | 0–100          | —              |
//! | `Brix`              | °Bx       | —              | 0–100          |
//! | `MassFraction`      | w/w       | 0–1            | 0–1            |
//! | `MassConcentration` | g/mL      | 0–0.78816      | 0–1.5859       |
//! | `VolumeFraction`    | v/v       | 0–1            | 0–1            |

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::backend::{Table, data};

// ── Reference densities at 20 °C (g/mL) ─────────────────────────────

/// Pure water.
pub const DENSITY_WATER: f64 = 0.998;
/// Pure ethanol.
pub const DENSITY_ETHANOL: f64 = 0.78816;
/// Pure sucrose.
pub const DENSITY_SUCROSE: f64 = 1.5859;

/// Millilitres in one US fluid ounce.
pub const US_FL_OZ_ML: f64 = 29.5735295625;

// ────────────────────────────────────────────────────────────────────
//  Measure
// ────────────────────────────────────────────────────────────────────

/// A physical quantity or display unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    /// Density, g/mL
    Density,
    /// Alcohol by volume, % v/v
    #[serde(rename = "alcohol_by_volume")]
    Abv,
    /// Degrees Brix, % w/w sucrose
    Brix,
    /// Solute mass ÷ solution mass
    MassFraction,
    /// Solute mass ÷ solution volume, g/mL
    MassConcentration,
    /// Solute volume ÷ solution volume
    VolumeFraction,
    /// Litre
    #[serde(rename = "volume_liter")]
    Liter,
    /// Millilitre
    #[serde(rename = "volume_milliliter")]
    Milliliter,
    /// US fluid ounce
    #[serde(rename = "volume_ounce")]
    Ounce,
    /// Gram
    #[serde(rename = "mass_gram")]
    Gram,
    /// Kilogram
    #[serde(rename = "mass_kilogram")]
    Kilogram,
}

impl Measure {
    pub const ALL: [Measure; 11] = [
        Measure::Density,
        Measure::Abv,
        Measure::Brix,
        Measure::MassFraction,
        Measure::MassConcentration,
        Measure::VolumeFraction,
        Measure::Liter,
        Measure::Milliliter,
        Measure::Ounce,
        Measure::Gram,
        Measure::Kilogram,
    ];

    /// Symbolic key, also used to build message codes.
    pub fn key(self) -> &'static str {
        match self {
            Measure::Density => "density",
            Measure::Abv => "alcohol_by_volume",
            Measure::Brix => "brix",
            Measure::MassFraction => "mass_fraction",
            Measure::MassConcentration => "mass_concentration",
            Measure::VolumeFraction => "volume_fraction",
            Measure::Liter => "volume_liter",
            Measure::Milliliter => "volume_milliliter",
            Measure::Ounce => "volume_ounce",
            Measure::Gram => "mass_gram",
            Measure::Kilogram => "mass_kilogram",
        }
    }

    /// Millilitres per unit for volume units.
    pub fn milliliters(self) -> Option<f64> {
        match self {
            Measure::Liter => Some(1000.0),
            Measure::Milliliter => Some(1.0),
            Measure::Ounce => Some(US_FL_OZ_ML),
            _ => None,
        }
    }

    /// Grams per unit for mass units.
    pub fn grams(self) -> Option<f64> {
        match self {
            Measure::Gram => Some(1.0),
            Measure::Kilogram => Some(1000.0),
            _ => None,
        }
    }

    pub fn is_volume(self) -> bool {
        self.milliliters().is_some()
    }

    pub fn is_mass(self) -> bool {
        self.grams().is_some()
    }

    /// Extensive measure (how much), as opposed to an intensive property.
    pub fn is_quantity(self) -> bool {
        self.is_volume() || self.is_mass()
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ────────────────────────────────────────────────────────────────────
//  Family
// ────────────────────────────────────────────────────────────────────

/// Binary aqueous solution backed by a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Ethanol–water
    Alcohol,
    /// Sucrose–water
    Sugar,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::Alcohol, Family::Sugar];

    /// Intensive measures this family can be expressed in.
    pub fn measures(self) -> &'static [Measure] {
        match self {
            Family::Alcohol => &[
                Measure::Density,
                Measure::Abv,
                Measure::MassFraction,
                Measure::MassConcentration,
                Measure::VolumeFraction,
            ],
            Family::Sugar => &[
                Measure::Density,
                Measure::Brix,
                Measure::MassFraction,
                Measure::MassConcentration,
                Measure::VolumeFraction,
            ],
        }
    }

    /// Density of the pure solute.
    pub fn solute_density(self) -> f64 {
        match self {
            Family::Alcohol => DENSITY_ETHANOL,
            Family::Sugar => DENSITY_SUCROSE,
        }
    }

    /// Reference table rows, sorted by ascending density.
    pub fn table(self) -> &'static Table {
        match self {
            Family::Alcohol => &data::ALCOHOL,
            Family::Sugar => &data::SUGAR,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Family::Alcohol => "alcohol",
            Family::Sugar => "sugar",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
