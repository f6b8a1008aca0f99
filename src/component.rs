use std::sync::Arc;

use crate::error::{LiqueurError, Result};
use crate::format::{Message, round};
use crate::ingredient::{Ingredient, Kind};
use crate::measure::Measure;

/// A quantity of one ingredient.
///
/// The amount is stored as weight in grams; volumes are derived from the
/// ingredient's density.  Intensive measures (ABV, Brix, …) are read
/// straight from the ingredient.
///
/// ```
/// use liqueur::{Component, Ingredient, Measure};
///
/// let vodka = Component::new(Ingredient::alcohol(40.0, Measure::Abv)?, 0.5, Measure::Liter)?;
/// assert!((vodka.get(Measure::Milliliter)? - 500.0).abs() < 1e-9);
/// # Ok::<(), liqueur::LiqueurError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    ingredient: Arc<Ingredient>,
    weight: f64,
}

impl Component {
    /// `quantity` must be finite and non-negative, `measure` a mass or
    /// volume unit.
    pub fn new(ingredient: impl Into<Arc<Ingredient>>, quantity: f64, measure: Measure) -> Result<Self> {
        let ingredient = ingredient.into();
        if !(quantity >= 0.0 && quantity.is_finite()) {
            return Err(LiqueurError::InvalidValue(quantity));
        }
        let weight = if let Some(g) = measure.grams() {
            quantity * g
        } else if let Some(ml) = measure.milliliters() {
            quantity * ml * ingredient.density()
        } else {
            return Err(LiqueurError::ConversionUnavailable {
                subject: "component",
                from: measure,
                to: Measure::Gram,
            });
        };
        Ok(Self { ingredient, weight })
    }

    pub fn ingredient(&self) -> &Ingredient {
        &self.ingredient
    }

    pub fn kind(&self) -> Kind {
        self.ingredient.kind()
    }

    pub fn is(&self, kind: Kind) -> bool {
        self.ingredient.is(kind)
    }

    /// Grams.
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Millilitres.
    pub fn volume(&self) -> f64 {
        self.weight / self.ingredient.density()
    }

    pub fn get(&self, measure: Measure) -> Result<f64> {
        if let Some(g) = measure.grams() {
            Ok(self.weight / g)
        } else if let Some(ml) = measure.milliliters() {
            Ok(self.volume() / ml)
        } else {
            self.ingredient.get(measure)
        }
    }

    /// Multiply the amount by `k` (finite, positive).
    pub fn scale(&mut self, k: f64) -> Result<()> {
        if !(k > 0.0 && k.is_finite()) {
            return Err(LiqueurError::InvalidValue(k));
        }
        self.weight *= k;
        Ok(())
    }

    /// `{code: "format_<measure>", data: {value}}`, default precision 0.01.
    pub fn fget(&self, measure: Measure, precision: Option<f64>) -> Result<Message> {
        let value = round(self.get(measure)?, precision.unwrap_or(0.01));
        Ok(Message::value(format!("format_{}", measure.key()), value))
    }
}
