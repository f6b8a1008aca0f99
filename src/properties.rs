use serde::{Deserialize, Serialize};

use crate::format::{Message, round};

// ── Composition summary ─────────────────────────────────────────────

/// Aggregate state of a composition.
///
/// | Field       | Unit                                  |
/// |-------------|---------------------------------------|
/// | volume      | mL                                    |
/// | weight      | g                                     |
/// | density     | g/mL                                  |
/// | abs_spirit  | mL of pure ethanol                    |
/// | abv         | % v/v                                 |
/// | sugar       | g of sucrose                          |
///
/// Virtual components contribute to none of the fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CompositionInfo {
    pub volume: f64,
    pub weight: f64,
    pub density: f64,
    pub abs_spirit: f64,
    pub abv: f64,
    pub sugar: f64,
}

impl CompositionInfo {
    /// Sucrose per litre of the whole composition (g/L).
    pub fn sugar_concentration(&self) -> f64 {
        if self.volume > 0.0 { self.sugar / self.volume * 1000.0 } else { 0.0 }
    }

    /// Every field rounded to `precision`.
    pub fn rounded(self, precision: f64) -> Self {
        Self {
            volume: round(self.volume, precision),
            weight: round(self.weight, precision),
            density: round(self.density, precision),
            abs_spirit: round(self.abs_spirit, precision),
            abv: round(self.abv, precision),
            sugar: round(self.sugar, precision),
        }
    }
}

impl std::fmt::Display for CompositionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "V     = {:.2} mL", self.volume)?;
        writeln!(f, "m     = {:.2} g", self.weight)?;
        writeln!(f, "D     = {:.5} g/mL", self.density)?;
        writeln!(f, "EtOH  = {:.2} mL", self.abs_spirit)?;
        writeln!(f, "ABV   = {:.2} %", self.abv)?;
        write!(f, "Sugar = {:.2} g", self.sugar)
    }
}

// ── Liqueur summary ─────────────────────────────────────────────────

/// Display descriptors of a liqueur's target profile.
///
/// `sugar` and `abv` are `None` when the liqueur has no target on that
/// axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiqueurInfo {
    pub sugar: Option<Message>,
    pub abv: Option<Message>,
    pub density: Message,
}

impl std::fmt::Display for LiqueurInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(sugar) = &self.sugar {
            writeln!(f, "{sugar}")?;
        }
        if let Some(abv) = &self.abv {
            writeln!(f, "{abv}")?;
        }
        write!(f, "{}", self.density)
    }
}
