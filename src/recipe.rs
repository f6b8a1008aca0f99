//! What [`Liqueur::make`](crate::Liqueur::make) is allowed to use.

use serde::{Deserialize, Serialize};

use crate::ingredient::Ingredient;
use crate::measure::Measure;

/// Which axis gets first pick of the reference volume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Alcohol,
    Syrup,
}

/// What the batch size refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasisSource {
    /// The primary alcohol component
    Alcohol,
    /// The primary syrup component
    Syrup,
    /// The whole composition (virtual components excluded)
    #[default]
    Total,
}

/// Batch size: `value` of `measure` for `source`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Basis {
    pub source: BasisSource,
    pub value: f64,
    pub measure: Measure,
}

impl Default for Basis {
    /// One litre of finished liqueur.
    fn default() -> Self {
        Self::total(1000.0, Measure::Milliliter)
    }
}

impl Basis {
    pub fn total(value: f64, measure: Measure) -> Self {
        Self { source: BasisSource::Total, value, measure }
    }

    /// "Use the whole 0.7 L bottle of vodka."
    pub fn alcohol(value: f64, measure: Measure) -> Self {
        Self { source: BasisSource::Alcohol, value, measure }
    }

    pub fn syrup(value: f64, measure: Measure) -> Self {
        Self { source: BasisSource::Syrup, value, measure }
    }
}

/// Secondary ingredients blended in when a primary alone falls short.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fallback {
    pub alcohol: Option<Ingredient>,
    pub syrup: Option<Ingredient>,
}

/// Ingredients on hand plus the batch size.
///
/// ```
/// use liqueur::{Basis, Ingredient, Measure, Priority, Recipe};
///
/// let recipe = Recipe::new()
///     .alcohol(Ingredient::alcohol(40.0, Measure::Abv)?)
///     .syrup(Ingredient::syrup(66.67, Measure::Brix)?)
///     .priority(Priority::Syrup)
///     .basis(Basis::total(0.5, Measure::Liter));
/// assert!(recipe.fallback.alcohol.is_none());
/// # Ok::<(), liqueur::LiqueurError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recipe {
    pub alcohol: Option<Ingredient>,
    pub syrup: Option<Ingredient>,
    pub priority: Priority,
    pub fallback: Fallback,
    /// Fills whatever volume is left; water when unset
    pub buffer: Option<Ingredient>,
    pub basis: Basis,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alcohol(mut self, ingredient: Ingredient) -> Self {
        self.alcohol = Some(ingredient);
        self
    }

    pub fn syrup(mut self, ingredient: Ingredient) -> Self {
        self.syrup = Some(ingredient);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn fallback_alcohol(mut self, ingredient: Ingredient) -> Self {
        self.fallback.alcohol = Some(ingredient);
        self
    }

    pub fn fallback_syrup(mut self, ingredient: Ingredient) -> Self {
        self.fallback.syrup = Some(ingredient);
        self
    }

    pub fn buffer(mut self, ingredient: Ingredient) -> Self {
        self.buffer = Some(ingredient);
        self
    }

    pub fn basis(mut self, basis: Basis) -> Self {
        self.basis = basis;
        self
    }
}
