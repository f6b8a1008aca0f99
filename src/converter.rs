//! Conversions between the intensive measures of one solute family.
//!
//! Every ordered pair of a family's measures resolves to a [`Route`]:
//!
//! | Route    | Used for                                   |
//! |----------|--------------------------------------------|
//! | `Scale`  | ABV ↔ volume fraction, Brix ↔ mass fraction |
//! | `Lookup` | any two table columns                       |
//! | `Via`    | percent scales to/from the other columns    |
//!
//! The registry is built once, checked for completeness, and is read-only
//! afterwards.
//!
//! ```
//! use liqueur::{convert, Family, Measure};
//!
//! let vv = convert(Family::Alcohol, Measure::Abv, Measure::VolumeFraction, 40.0)?;
//! assert!((vv - 0.4).abs() < 1e-12);
//! # Ok::<(), liqueur::LiqueurError>(())
//! ```

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

use tracing::{debug, error};

use crate::backend::Column as C;
use crate::error::{LiqueurError, Result};
use crate::measure::Measure as M;
use crate::measure::{DENSITY_ETHANOL, DENSITY_SUCROSE, DENSITY_WATER, Family, Measure};

/// Routed conversions may nest at most this deep.
const MAX_DEPTH: u8 = 4;

// ────────────────────────────────────────────────────────────────────
//  Routes
// ────────────────────────────────────────────────────────────────────

/// How one measure becomes another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Route {
    /// Multiply by a constant.
    Scale(f64),
    /// Interpolate between two reference table columns.
    Lookup { from: C, to: C },
    /// Convert to an intermediate measure first.
    Via(Measure),
}

const fn lookup(from: C, to: C) -> Route {
    Route::Lookup { from, to }
}

const ALCOHOL_ROUTES: &[(Measure, Measure, Route)] = &[
    (M::Density, M::Abv, Route::Via(M::VolumeFraction)),
    (M::Density, M::MassFraction, lookup(C::Density, C::MassFraction)),
    (M::Density, M::MassConcentration, lookup(C::Density, C::MassConcentration)),
    (M::Density, M::VolumeFraction, lookup(C::Density, C::VolumeFraction)),
    (M::Abv, M::Density, Route::Via(M::VolumeFraction)),
    (M::Abv, M::MassFraction, Route::Via(M::VolumeFraction)),
    (M::Abv, M::MassConcentration, Route::Via(M::VolumeFraction)),
    (M::Abv, M::VolumeFraction, Route::Scale(0.01)),
    (M::MassFraction, M::Density, lookup(C::MassFraction, C::Density)),
    (M::MassFraction, M::Abv, Route::Via(M::VolumeFraction)),
    (M::MassFraction, M::MassConcentration, lookup(C::MassFraction, C::MassConcentration)),
    (M::MassFraction, M::VolumeFraction, lookup(C::MassFraction, C::VolumeFraction)),
    (M::MassConcentration, M::Density, lookup(C::MassConcentration, C::Density)),
    (M::MassConcentration, M::Abv, Route::Via(M::VolumeFraction)),
    (M::MassConcentration, M::MassFraction, lookup(C::MassConcentration, C::MassFraction)),
    (M::MassConcentration, M::VolumeFraction, lookup(C::MassConcentration, C::VolumeFraction)),
    (M::VolumeFraction, M::Density, lookup(C::VolumeFraction, C::Density)),
    (M::VolumeFraction, M::Abv, Route::Scale(100.0)),
    (M::VolumeFraction, M::MassFraction, lookup(C::VolumeFraction, C::MassFraction)),
    (M::VolumeFraction, M::MassConcentration, lookup(C::VolumeFraction, C::MassConcentration)),
];

const SUGAR_ROUTES: &[(Measure, Measure, Route)] = &[
    (M::Density, M::Brix, Route::Via(M::MassFraction)),
    (M::Density, M::MassFraction, lookup(C::Density, C::MassFraction)),
    (M::Density, M::MassConcentration, lookup(C::Density, C::MassConcentration)),
    (M::Density, M::VolumeFraction, lookup(C::Density, C::VolumeFraction)),
    (M::Brix, M::Density, Route::Via(M::MassFraction)),
    (M::Brix, M::MassFraction, Route::Scale(0.01)),
    (M::Brix, M::MassConcentration, Route::Via(M::MassFraction)),
    (M::Brix, M::VolumeFraction, Route::Via(M::MassFraction)),
    (M::MassFraction, M::Density, lookup(C::MassFraction, C::Density)),
    (M::MassFraction, M::Brix, Route::Scale(100.0)),
    (M::MassFraction, M::MassConcentration, lookup(C::MassFraction, C::MassConcentration)),
    (M::MassFraction, M::VolumeFraction, lookup(C::MassFraction, C::VolumeFraction)),
    (M::MassConcentration, M::Density, lookup(C::MassConcentration, C::Density)),
    (M::MassConcentration, M::Brix, Route::Via(M::MassFraction)),
    (M::MassConcentration, M::MassFraction, lookup(C::MassConcentration, C::MassFraction)),
    (M::MassConcentration, M::VolumeFraction, lookup(C::MassConcentration, C::VolumeFraction)),
    (M::VolumeFraction, M::Density, lookup(C::VolumeFraction, C::Density)),
    (M::VolumeFraction, M::Brix, Route::Via(M::MassFraction)),
    (M::VolumeFraction, M::MassFraction, lookup(C::VolumeFraction, C::MassFraction)),
    (M::VolumeFraction, M::MassConcentration, lookup(C::VolumeFraction, C::MassConcentration)),
];

// ────────────────────────────────────────────────────────────────────
//  Domains
// ────────────────────────────────────────────────────────────────────

/// Physically valid input range of `measure` for `family`.
pub fn domain(family: Family, measure: Measure) -> Option<RangeInclusive<f64>> {
    match (family, measure) {
        (Family::Alcohol, M::Density) => Some(DENSITY_ETHANOL..=DENSITY_WATER),
        (Family::Sugar, M::Density) => Some(DENSITY_WATER..=DENSITY_SUCROSE),
        (Family::Alcohol, M::Abv) | (Family::Sugar, M::Brix) => Some(0.0..=100.0),
        (_, M::MassFraction) | (_, M::VolumeFraction) => Some(0.0..=1.0),
        (_, M::MassConcentration) => Some(0.0..=family.solute_density()),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────
//  Converter
// ────────────────────────────────────────────────────────────────────

static REGISTRY: LazyLock<Converter> = LazyLock::new(|| {
    let conv = Converter::standard();
    match conv.verify() {
        Ok(()) => debug!(routes = conv.len(), "conversion registry ready"),
        Err(e) => error!(error = %e, "conversion registry incomplete"),
    }
    conv
});

/// Finite map `(family, from, to) → Route`.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    routes: HashMap<(Family, Measure, Measure), Route>,
}

impl Converter {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every route of both families.
    pub fn standard() -> Self {
        let mut conv = Self::new();
        for (family, routes) in [(Family::Alcohol, ALCOHOL_ROUTES), (Family::Sugar, SUGAR_ROUTES)] {
            for &(from, to, route) in routes {
                conv.register(family, from, to, route);
            }
        }
        conv
    }

    /// Shared read-only registry used by [`convert`].
    pub fn global() -> &'static Converter {
        &REGISTRY
    }

    pub fn register(&mut self, family: Family, from: Measure, to: Measure, route: Route) -> &mut Self {
        self.routes.insert((family, from, to), route);
        self
    }

    pub fn route(&self, family: Family, from: Measure, to: Measure) -> Option<Route> {
        self.routes.get(&(family, from, to)).copied()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Pairs of a family's measures with no registered route.
    pub fn missing(&self) -> Vec<(Family, Measure, Measure)> {
        let mut out = Vec::new();
        for family in Family::ALL {
            for &from in family.measures() {
                for &to in family.measures() {
                    if from != to && self.route(family, from, to).is_none() {
                        out.push((family, from, to));
                    }
                }
            }
        }
        out
    }

    /// Check that every pair is routed and every `Via` resolves in one
    /// hop on each side.
    pub fn verify(&self) -> Result<()> {
        if let Some(&(family, from, to)) = self.missing().first() {
            return Err(LiqueurError::ConversionUnavailable { subject: family.key(), from, to });
        }
        for (&(family, from, to), route) in &self.routes {
            if let Route::Via(mid) = *route {
                let hops_ok = mid != from
                    && mid != to
                    && [(from, mid), (mid, to)].iter().all(|&(a, b)| {
                        matches!(
                            self.route(family, a, b),
                            Some(Route::Scale(_)) | Some(Route::Lookup { .. })
                        )
                    });
                if !hops_ok {
                    return Err(LiqueurError::ConversionUnavailable { subject: family.key(), from, to });
                }
            }
        }
        Ok(())
    }

    /// Convert `value` from one measure to another.
    ///
    /// Identical measures return `value` untouched without validation.
    /// Otherwise the route must exist and `value` must lie in the domain
    /// of `from`; intermediate hops are not re-validated.
    pub fn convert(&self, family: Family, from: Measure, to: Measure, value: f64) -> Result<f64> {
        if from == to {
            return Ok(value);
        }
        let route = self.route(family, from, to).ok_or(LiqueurError::ConversionUnavailable {
            subject: family.key(),
            from,
            to,
        })?;
        if let Some(range) = domain(family, from) {
            if !range.contains(&value) {
                return Err(LiqueurError::InvalidValue(value));
            }
        }
        self.apply(family, from, to, route, value, 0)
    }

    fn apply(
        &self,
        family: Family,
        from: Measure,
        to: Measure,
        route: Route,
        value: f64,
        depth: u8,
    ) -> Result<f64> {
        match route {
            Route::Scale(k) => Ok(value * k),
            Route::Lookup { from, to } => {
                let table = family.table();
                table.lookup(value, from, to, table.is_descending(from))
            }
            Route::Via(mid) => {
                if depth >= MAX_DEPTH {
                    return Err(LiqueurError::ConversionUnavailable { subject: family.key(), from, to });
                }
                let partial = self.apply(family, from, mid, self.hop(family, from, mid)?, value, depth + 1)?;
                self.apply(family, mid, to, self.hop(family, mid, to)?, partial, depth + 1)
            }
        }
    }

    fn hop(&self, family: Family, from: Measure, to: Measure) -> Result<Route> {
        self.route(family, from, to).ok_or(LiqueurError::ConversionUnavailable {
            subject: family.key(),
            from,
            to,
        })
    }
}

/// Convert with the shared registry.
pub fn convert(family: Family, from: Measure, to: Measure, value: f64) -> Result<f64> {
    Converter::global().convert(family, from, to, value)
}
