//! Target profiles and the blend solver.
//!
//! A [`Liqueur`] is what you want to end up with: an alcohol content, a
//! sugar content, or both.  [`Liqueur::make`] turns it into a
//! [`Composition`] of the ingredients a [`Recipe`] has on hand.
//!
//! The solver works on a one-litre reference volume.  Each axis (alcohol,
//! sugar) claims the share of that litre its primary ingredient needs; if
//! the share does not fit the axis's budget, the primary is blended with
//! the fallback into the largest share the budget allows.  Whatever is
//! left over is buffer, and the result is scaled to the recipe's basis.

use tracing::debug;

use crate::component::Component;
use crate::composition::{Composition, REFERENCE_VOLUME};
use crate::config::Settings;
use crate::error::{LiqueurError, Result};
use crate::format::{Message, round};
use crate::ingredient::{Ingredient, Kind};
use crate::measure::Measure;
use crate::properties::LiqueurInfo;
use crate::recipe::{BasisSource, Priority, Recipe};
use crate::search::BinarySearch;

/// Slack in mL when a reference-volume budget is checked.
const VOLUME_TOLERANCE: f64 = 1e-9;

/// Compensated volume fraction slack above pure ethanol.
const FRACTION_TOLERANCE: f64 = 1e-9;

/// Concentration of `k` parts `main` plus `1 - k` parts `fallback`.
pub fn blend(k: f64, main: f64, fallback: f64) -> f64 {
    k * main + (1.0 - k) * fallback
}

/// Subtract `used` from `left`, tolerating floating noise at zero.
fn take(left: f64, used: f64) -> Result<f64> {
    let rest = left - used;
    if rest < -VOLUME_TOLERANCE {
        return Err(LiqueurError::ImpossibleCombination);
    }
    Ok(rest.max(0.0))
}

// ────────────────────────────────────────────────────────────────────
//  Liqueur
// ────────────────────────────────────────────────────────────────────

/// Immutable target profile.
///
/// One litre of it is pure sucrose, pure ethanol and water in amounts that
/// reproduce the requested sugar concentration and ABV.
///
/// ```
/// use liqueur::{Ingredient, Liqueur, Measure};
///
/// let cassis = Liqueur::new(
///     Some(Ingredient::alcohol(20.0, Measure::Abv)?),
///     Some(Ingredient::syrup(0.4, Measure::MassConcentration)?),
/// )?;
/// assert!((cassis.sugar().weight() - 400.0).abs() < 1e-6);
/// # Ok::<(), liqueur::LiqueurError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Liqueur {
    alcohol: Option<Ingredient>,
    syrup: Option<Ingredient>,
    sugar: Component,
    spirit: Component,
    water: Component,
    density: f64,
}

impl Liqueur {
    /// Fails with `IMPOSSIBLE_COMBINATION` when the sugar and the spirit
    /// do not fit into one litre together.
    pub fn new(alcohol: Option<Ingredient>, syrup: Option<Ingredient>) -> Result<Self> {
        if let Some(a) = &alcohol {
            a.expect_kind(Kind::Alcohol)?;
        }
        if let Some(s) = &syrup {
            s.expect_kind(Kind::Syrup)?;
        }
        let mut left = REFERENCE_VOLUME;

        let grams = match &syrup {
            Some(s) => s.get(Measure::MassConcentration)? * REFERENCE_VOLUME,
            None => 0.0,
        };
        let sucrose = Ingredient::syrup(1.0, Measure::MassFraction)?;
        let sugar = Component::new(sucrose, grams, Measure::Gram)?;
        left = take(left, sugar.volume())?;

        // The spirit only has what the sugar left over, so its fraction
        // of that remainder goes up accordingly.
        let vv = match &alcohol {
            Some(a) => a.get(Measure::VolumeFraction)?,
            None => 0.0,
        };
        let fraction = if vv > 0.0 { vv * REFERENCE_VOLUME / left } else { 0.0 };
        if !(fraction <= 1.0 + FRACTION_TOLERANCE) {
            return Err(LiqueurError::ImpossibleCombination);
        }
        let ethanol = Ingredient::alcohol(1.0, Measure::VolumeFraction)?;
        let spirit = Component::new(ethanol, left * fraction.min(1.0), Measure::Milliliter)?;
        left = take(left, spirit.volume())?;

        let water = Component::new(Ingredient::water(), left, Measure::Milliliter)?;
        let density = (water.weight() + sugar.weight() + spirit.weight()) / REFERENCE_VOLUME;
        debug!(
            sugar_g = sugar.weight(),
            spirit_ml = spirit.volume(),
            water_ml = left,
            density,
            "liqueur target built"
        );

        Ok(Self { alcohol, syrup, sugar, spirit, water, density })
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Target alcohol, as given.
    pub fn alcohol(&self) -> Option<&Ingredient> {
        self.alcohol.as_ref()
    }

    /// Target sugar solution, as given.
    pub fn syrup(&self) -> Option<&Ingredient> {
        self.syrup.as_ref()
    }

    /// Pure sucrose per litre.
    pub fn sugar(&self) -> &Component {
        &self.sugar
    }

    /// Pure ethanol per litre.
    pub fn spirit(&self) -> &Component {
        &self.spirit
    }

    /// Water per litre.
    pub fn water(&self) -> &Component {
        &self.water
    }

    /// g/mL
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Display descriptors, default precision 0.01 (density at a
    /// hundredth of that).
    pub fn info(&self, precision: Option<f64>) -> Result<LiqueurInfo> {
        let p = precision.unwrap_or(0.01);
        let sugar = match &self.syrup {
            Some(s) => Some(Message::value(
                format!("syrup_format_{}", Measure::MassConcentration.key()),
                round(s.get(Measure::MassConcentration)?, p),
            )),
            None => None,
        };
        let abv = match &self.alcohol {
            Some(a) => Some(Message::value(
                format!("format_{}", Measure::Abv.key()),
                round(a.get(Measure::Abv)?, p),
            )),
            None => None,
        };
        let density = Message::value(
            format!("format_{}", Measure::Density.key()),
            round(self.density, p * 0.01),
        );
        Ok(LiqueurInfo { sugar, abv, density })
    }

    // ── Solver ───────────────────────────────────────────────────────

    /// [`make_with`](Self::make_with) using default [`Settings`].
    pub fn make(&self, recipe: &Recipe) -> Result<Composition> {
        self.make_with(recipe, &Settings::default())
    }

    /// Composition of the recipe's ingredients matching this profile.
    ///
    /// Component ids: `alcohol`, `fallback_alcohol`, `syrup`,
    /// `fallback_syrup`, `buffer`.
    pub fn make_with(&self, recipe: &Recipe, settings: &Settings) -> Result<Composition> {
        settings.validate()?;

        let alcohol = Axis::new(
            Kind::Alcohol,
            self.target(Kind::Alcohol)?,
            recipe.alcohol.as_ref(),
            recipe.fallback.alcohol.as_ref(),
            settings.alcohol_precision,
        )?;
        let sugar = Axis::new(
            Kind::Syrup,
            self.target(Kind::Syrup)?,
            recipe.syrup.as_ref(),
            recipe.fallback.syrup.as_ref(),
            settings.sugar_precision,
        )?;
        let mut axes = [alcohol, sugar];
        let order = match recipe.priority {
            Priority::Alcohol => [0, 1],
            Priority::Syrup => [1, 0],
        };

        for i in order {
            axes[i].check()?;
        }
        if axes[0].min + axes[1].min > 1.0 {
            return Err(LiqueurError::ImpossibleCombination);
        }
        axes[0].max = 1.0 - axes[1].min;
        axes[1].max = 1.0 - axes[0].min;

        let mut composition = Composition::new();
        for i in order {
            if let Some(consumed) = axes[i].compose(settings.correction, &mut composition)? {
                axes[1 - i].max = 1.0 - consumed;
            }
        }

        let left = take(REFERENCE_VOLUME, composition.total(Measure::Milliliter)?)?;
        let buffer = recipe.buffer.clone().unwrap_or_else(Ingredient::water);
        debug!(volume_ml = left, kind = %buffer.kind(), "buffer");
        composition.add("buffer", Component::new(buffer, left, Measure::Milliliter)?)?;

        let basis = recipe.basis;
        if !basis.measure.is_quantity() {
            return Err(LiqueurError::ConversionUnavailable {
                subject: "basis",
                from: basis.measure,
                to: Measure::Milliliter,
            });
        }
        let current = match basis.source {
            BasisSource::Alcohol => composition
                .component("alcohol")
                .ok_or(LiqueurError::BasisAlcoholWithoutAlcohol)?
                .get(basis.measure)?,
            BasisSource::Syrup => composition
                .component("syrup")
                .ok_or(LiqueurError::BasisSugarWithoutSugar)?
                .get(basis.measure)?,
            BasisSource::Total => composition.total(basis.measure)?,
        };
        let k = basis.value / current;
        debug!(k, source = ?basis.source, "scaling to basis");
        composition.scale(k)?;

        Ok(composition)
    }

    /// Per-litre concentration the solver must hit on one axis.
    fn target(&self, kind: Kind) -> Result<f64> {
        match kind {
            Kind::Alcohol if self.spirit.weight() > 0.0 => match &self.alcohol {
                Some(a) => a.get(Measure::VolumeFraction),
                None => Ok(0.0),
            },
            Kind::Syrup if self.sugar.weight() > 0.0 => match &self.syrup {
                Some(s) => s.get(Measure::MassConcentration),
                None => Ok(0.0),
            },
            _ => Ok(0.0),
        }
    }
}

// ────────────────────────────────────────────────────────────────────
//  Axis allocation
// ────────────────────────────────────────────────────────────────────

/// One solute axis of a `make` run.
///
/// Shares are fractions of the reference volume.
struct Axis<'a> {
    kind: Kind,
    /// Measure whose per-litre amount is conserved
    measure: Measure,
    target: f64,
    main: Option<&'a Ingredient>,
    fallback: Option<&'a Ingredient>,
    /// Share the primary needs on its own
    share: f64,
    /// Smallest share any single available ingredient needs
    min: f64,
    /// Share this axis may still claim
    max: f64,
    precision: f64,
}

impl<'a> Axis<'a> {
    fn new(
        kind: Kind,
        target: f64,
        main: Option<&'a Ingredient>,
        fallback: Option<&'a Ingredient>,
        precision: f64,
    ) -> Result<Self> {
        // A lone fallback is promoted to primary.
        let (main, fallback) = match (main, fallback) {
            (None, Some(f)) => (Some(f), None),
            pair => pair,
        };
        for ingredient in main.iter().chain(fallback.iter()) {
            ingredient.expect_kind(kind)?;
        }
        let measure = match kind {
            Kind::Alcohol => Measure::VolumeFraction,
            _ => Measure::MassConcentration,
        };

        let mut axis = Self {
            kind,
            measure,
            target,
            main,
            fallback,
            share: 0.0,
            min: 0.0,
            max: 0.0,
            precision,
        };
        if axis.is_active() {
            let main_share = match main {
                Some(i) => target / i.get(measure)?,
                None => 0.0,
            };
            let fallback_share = match fallback {
                Some(i) => target / i.get(measure)?,
                None => 0.0,
            };
            axis.share = main_share;
            axis.min = if fallback_share > 0.0 { main_share.min(fallback_share) } else { main_share };
        }
        Ok(axis)
    }

    fn is_active(&self) -> bool {
        self.target > 0.0
    }

    fn insufficient(&self) -> LiqueurError {
        match self.kind {
            Kind::Alcohol => LiqueurError::InsufficientAlcohol,
            _ => LiqueurError::InsufficientSugar,
        }
    }

    fn ids(&self) -> [&'static str; 2] {
        match self.kind {
            Kind::Alcohol => ["alcohol", "fallback_alcohol"],
            _ => ["syrup", "fallback_syrup"],
        }
    }

    /// An active axis needs an ingredient that reaches the target at all.
    fn check(&self) -> Result<()> {
        if self.is_active() && (self.main.is_none() || !self.min.is_finite()) {
            return Err(self.insufficient());
        }
        Ok(())
    }

    /// Add this axis's components; the consumed share, if any.
    fn compose(&self, correction: f64, composition: &mut Composition) -> Result<Option<f64>> {
        if !self.is_active() {
            return Ok(None);
        }
        let [main_id, fallback_id] = self.ids();
        let main = self.main.ok_or_else(|| self.insufficient())?;

        if self.share <= self.max {
            debug!(axis = %self.kind, share = self.share, budget = self.max, "primary fits");
            let volume = self.share * REFERENCE_VOLUME;
            composition.add(main_id, Component::new(main.clone(), volume, Measure::Milliliter)?)?;
            return Ok(Some(self.share));
        }

        let fallback = self.fallback.ok_or_else(|| self.insufficient())?;
        let share = self.min.max(self.max * correction);
        let (m, f) = (main.get(self.measure)?, fallback.get(self.measure)?);
        let ratio = BinarySearch::new()
            .precision(self.precision)
            .inverse(m < f)
            .solve(|k| blend(k, m, f), self.target / share, 0.0, 1.0)?;
        let main_share = share * ratio;
        debug!(axis = %self.kind, share, ratio, budget = self.max, "blending with fallback");

        composition.add(
            main_id,
            Component::new(main.clone(), main_share * REFERENCE_VOLUME, Measure::Milliliter)?,
        )?;
        composition.add(
            fallback_id,
            Component::new(
                fallback.clone(),
                (share - main_share).max(0.0) * REFERENCE_VOLUME,
                Measure::Milliliter,
            )?,
        )?;
        Ok(Some(share))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::{DENSITY_SUCROSE, DENSITY_WATER};

    #[test]
    fn blend_is_linear() {
        assert_eq!(blend(1.0, 0.12, 0.40), 0.12);
        assert_eq!(blend(0.0, 0.12, 0.40), 0.40);
        assert!((blend(0.5, 0.12, 0.40) - 0.26).abs() < 1e-12);
    }

    #[test]
    fn plain_water_profile() {
        let l = Liqueur::new(None, None).unwrap();
        assert_eq!(l.sugar().weight(), 0.0);
        assert_eq!(l.spirit().weight(), 0.0);
        assert!((l.density() - DENSITY_WATER).abs() < 1e-12);
        let info = l.info(None).unwrap();
        assert!(info.sugar.is_none() && info.abv.is_none());
        assert_eq!(info.density.code, "format_density");
    }

    #[test]
    fn sugar_displaces_spirit_volume() {
        let l = Liqueur::new(
            Some(Ingredient::alcohol(20.0, Measure::Abv).unwrap()),
            Some(Ingredient::syrup(0.4, Measure::MassConcentration).unwrap()),
        )
        .unwrap();
        assert!((l.spirit().volume() - 200.0).abs() < 1e-6);
        let total = l.sugar().volume() + l.spirit().volume() + l.water().volume();
        assert!((total - REFERENCE_VOLUME).abs() < 1e-9);
    }

    #[test]
    fn exactly_full_litre_is_allowed() {
        let sucrose = Ingredient::syrup(DENSITY_SUCROSE, Measure::MassConcentration).unwrap();
        let l = Liqueur::new(None, Some(sucrose.clone())).unwrap();
        assert!(l.water().volume().abs() < 1e-9);

        let ethanol = Ingredient::alcohol(100.0, Measure::Abv).unwrap();
        assert!(Liqueur::new(Some(ethanol), None).is_ok());

        let dash = Ingredient::alcohol(0.5, Measure::Abv).unwrap();
        assert_eq!(
            Liqueur::new(Some(dash), Some(sucrose)).unwrap_err(),
            LiqueurError::ImpossibleCombination
        );
    }

    #[test]
    fn wrong_kinds_are_rejected() {
        let syrup = Ingredient::syrup(50.0, Measure::Brix).unwrap();
        assert!(matches!(
            Liqueur::new(Some(syrup), None),
            Err(LiqueurError::IngredientMismatch { expected: Kind::Alcohol, found: Kind::Syrup })
        ));
    }

    #[test]
    fn info_descriptors() {
        let l = Liqueur::new(
            Some(Ingredient::alcohol(24.0, Measure::Abv).unwrap()),
            Some(Ingredient::syrup(0.25, Measure::MassConcentration).unwrap()),
        )
        .unwrap();
        let info = l.info(None).unwrap();
        let abv = info.abv.unwrap();
        assert_eq!(abv.code, "format_alcohol_by_volume");
        assert!((abv.data["value"] - 24.0).abs() < 1e-9);
        let sugar = info.sugar.unwrap();
        assert_eq!(sugar.code, "syrup_format_mass_concentration");
        assert!((sugar.data["value"] - 0.25).abs() < 1e-9);
    }
}
