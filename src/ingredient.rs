use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::converter;
use crate::error::{LiqueurError, Result};
use crate::format::{Message, round};
use crate::measure::{DENSITY_WATER, Family, Measure};

/// What an ingredient is, as far as the math is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Plain water (or anything treated like it, e.g. juice as a buffer)
    Water,
    /// Ethanol–water solution
    Alcohol,
    /// Sucrose–water solution
    Syrup,
    /// Zero-contribution marker: scales with the batch, counts for nothing
    Virtual,
}

impl Kind {
    /// Solute family backing this kind, if it has one.
    pub fn family(self) -> Option<Family> {
        match self {
            Kind::Alcohol => Some(Family::Alcohol),
            Kind::Syrup => Some(Family::Sugar),
            Kind::Water | Kind::Virtual => None,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Water => "water",
            Kind::Alcohol => "alcohol",
            Kind::Syrup => "syrup",
            Kind::Virtual => "virtual",
        })
    }
}

/// An immutable solution identified by its kind and density.
///
/// Solutions are built from one `(value, measure)` pair and store only the
/// resulting density; every other measure is derived on demand.
///
/// ```
/// use liqueur::{Ingredient, Measure};
///
/// let cognac = Ingredient::alcohol(40.0, Measure::Abv)?.with_attr("name", "Cognac");
/// let vv = cognac.get(Measure::VolumeFraction)?;
/// assert!((vv - 0.4).abs() < 1e-9);
/// # Ok::<(), liqueur::LiqueurError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Ingredient {
    kind: Kind,
    density: f64,
    /// Display metadata only; never read by the solver and not part of
    /// the ingredient's identity.
    attributes: BTreeMap<String, String>,
}

impl Ingredient {
    // ── Constructors ─────────────────────────────────────────────────

    pub fn water() -> Self {
        Self::with_density(Kind::Water, DENSITY_WATER)
    }

    /// Ethanol–water solution from any alcohol measure.
    pub fn alcohol(value: f64, measure: Measure) -> Result<Self> {
        let density = solution_density(Family::Alcohol, measure, value)?;
        Ok(Self::with_density(Kind::Alcohol, density))
    }

    /// Sucrose–water solution from any sugar measure.
    pub fn syrup(value: f64, measure: Measure) -> Result<Self> {
        let density = solution_density(Family::Sugar, measure, value)?;
        Ok(Self::with_density(Kind::Syrup, density))
    }

    /// Virtual ingredient (spices, fruit left to infuse, …).
    pub fn inert() -> Self {
        Self::with_density(Kind::Virtual, 1.0)
    }

    fn with_density(kind: Kind, density: f64) -> Self {
        Self { kind, density, attributes: BTreeMap::new() }
    }

    // ── Measures ─────────────────────────────────────────────────────

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn is(&self, kind: Kind) -> bool {
        self.kind == kind
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    /// Intensive measure of this ingredient.
    ///
    /// Water knows only its density; a virtual ingredient reports density
    /// 1 and zero for everything else.
    pub fn get(&self, measure: Measure) -> Result<f64> {
        match self.kind {
            Kind::Alcohol => {
                converter::convert(Family::Alcohol, Measure::Density, measure, self.density)
            }
            Kind::Syrup => {
                converter::convert(Family::Sugar, Measure::Density, measure, self.density)
            }
            Kind::Water if measure == Measure::Density => Ok(self.density),
            Kind::Water => Err(LiqueurError::ConversionUnavailable {
                subject: "water",
                from: Measure::Density,
                to: measure,
            }),
            Kind::Virtual if measure == Measure::Density => Ok(1.0),
            Kind::Virtual => Ok(0.0),
        }
    }

    /// `{code: "ingredient_<measure>", data: {value}}`, default precision 0.01.
    pub fn fget(&self, measure: Measure, precision: Option<f64>) -> Result<Message> {
        let value = round(self.get(measure)?, precision.unwrap_or(0.01));
        Ok(Message::value(format!("ingredient_{}", measure.key()), value))
    }

    /// Fail unless this ingredient is of `kind`.
    pub(crate) fn expect_kind(&self, kind: Kind) -> Result<&Self> {
        if self.kind == kind {
            Ok(self)
        } else {
            Err(LiqueurError::IngredientMismatch { expected: kind, found: self.kind })
        }
    }

    // ── Attributes ───────────────────────────────────────────────────

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Shorthand for the `name` attribute.
    pub fn name(&self) -> Option<&str> {
        self.attr("name")
    }

    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }
}

/// Density of a solution given in `measure`, held to the family's range.
///
/// A density input skips the converter entirely, so it is checked here.
fn solution_density(family: Family, measure: Measure, value: f64) -> Result<f64> {
    let density = converter::convert(family, measure, Measure::Density, value)?;
    match converter::domain(family, Measure::Density) {
        Some(range) if range.contains(&density) => Ok(density),
        _ => Err(LiqueurError::InvalidValue(density)),
    }
}

impl PartialEq for Ingredient {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.density == other.density
    }
}
