use crate::error::{LiqueurError, Result};
use crate::measure::Family;

/// Inputs this close outside the tabulated span snap to the edge row.
const EDGE_TOLERANCE: f64 = 1e-9;

// ── Columns and rows ────────────────────────────────────────────────

/// A column of a reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    /// Solution density, g/mL
    Density,
    /// Solute mass ÷ solution mass
    MassFraction,
    /// Solute mass ÷ solution volume, g/mL
    MassConcentration,
    /// Solute volume ÷ solution volume
    VolumeFraction,
}

impl Column {
    pub const ALL: [Column; 4] = [
        Column::Density,
        Column::MassFraction,
        Column::MassConcentration,
        Column::VolumeFraction,
    ];
}

/// One tabulated state of a binary solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub density: f64,
    pub mass_fraction: f64,
    pub mass_concentration: f64,
    pub volume_fraction: f64,
}

impl Row {
    pub const fn new(
        density: f64,
        mass_fraction: f64,
        mass_concentration: f64,
        volume_fraction: f64,
    ) -> Self {
        Self { density, mass_fraction, mass_concentration, volume_fraction }
    }

    pub fn get(&self, column: Column) -> f64 {
        match column {
            Column::Density => self.density,
            Column::MassFraction => self.mass_fraction,
            Column::MassConcentration => self.mass_concentration,
            Column::VolumeFraction => self.volume_fraction,
        }
    }
}

// ── Table ───────────────────────────────────────────────────────────

/// Reference table for one family, rows sorted by ascending density.
///
/// Every column is strictly monotonic along the rows, either increasing
/// or decreasing, so any column can serve as the lookup key.
#[derive(Debug)]
pub struct Table {
    family: Family,
    rows: &'static [Row],
}

impl Table {
    pub const fn new(family: Family, rows: &'static [Row]) -> Self {
        Self { family, rows }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn rows(&self) -> &'static [Row] {
        self.rows
    }

    /// `true` when `column` decreases along the row order.
    pub fn is_descending(&self, column: Column) -> bool {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => first.get(column) > last.get(column),
            _ => false,
        }
    }

    /// `true` when `column` is strictly monotonic along the rows.
    pub fn is_monotonic(&self, column: Column) -> bool {
        let descending = self.is_descending(column);
        self.rows.windows(2).all(|w| {
            let (a, b) = (w[0].get(column), w[1].get(column));
            if descending { a > b } else { a < b }
        })
    }

    /// Smallest and largest tabulated value of `column`.
    pub fn span(&self, column: Column) -> (f64, f64) {
        self.rows.iter().map(|r| r.get(column)).fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), v| (lo.min(v), hi.max(v)),
        )
    }

    /// Linear interpolation of `to` at `x` in the `from` column.
    ///
    /// `inverse` must be set when `from` decreases along the row order
    /// (see [`is_descending`](Self::is_descending)).  Inputs outside the
    /// tabulated span fail with [`LiqueurError::OutOfRange`]; nothing is
    /// extrapolated.
    pub fn lookup(&self, x: f64, from: Column, to: Column, inverse: bool) -> Result<f64> {
        let (lo, hi) = self.span(from);
        if !(x >= lo - EDGE_TOLERANCE && x <= hi + EDGE_TOLERANCE) {
            return Err(LiqueurError::OutOfRange(x));
        }
        let x = x.clamp(lo, hi);

        for w in self.rows.windows(2) {
            let (x_lo, x_hi) = (w[0].get(from), w[1].get(from));
            let inside = if inverse {
                x <= x_lo && x >= x_hi
            } else {
                x >= x_lo && x <= x_hi
            };
            if !inside {
                continue;
            }
            let (y_lo, y_hi) = (w[0].get(to), w[1].get(to));
            if x == x_lo || x_hi == x_lo {
                return Ok(y_lo);
            }
            if x == x_hi {
                return Ok(y_hi);
            }
            let y = y_lo + (y_hi - y_lo) * (x - x_lo) / (x_hi - x_lo);
            // Never step past the bracketing rows through rounding.
            return Ok(y.clamp(y_lo.min(y_hi), y_lo.max(y_hi)));
        }

        // Direction flag disagrees with the column.
        Err(LiqueurError::OutOfRange(x))
    }
}
