//! Bisection on a monotonic function.

use tracing::warn;

use crate::error::{LiqueurError, Result};

/// Bisection settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinarySearch {
    /// Accepted distance from the target, also the result's quantum
    pub precision: f64,
    /// `f` decreases as its argument grows
    pub inverse: bool,
    /// Hard cap on midpoint evaluations
    pub max_iterations: usize,
}

impl Default for BinarySearch {
    fn default() -> Self {
        Self {
            precision: 1e-5,
            inverse: false,
            max_iterations: 100,
        }
    }
}

impl BinarySearch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    pub fn inverse(mut self, inverse: bool) -> Self {
        self.inverse = inverse;
        self
    }

    /// Find `x` in `[min, max]` with `|f(x) - target| < precision`.
    ///
    /// The midpoint moves toward whichever half still brackets `target`.
    /// When it collapses onto one of the original bounds the root was never
    /// bracketed and the search fails, as it does once the iteration cap is
    /// hit.  The returned `x` is snapped to a multiple of `precision`.
    pub fn solve<F>(&self, f: F, target: f64, min: f64, max: f64) -> Result<f64>
    where
        F: Fn(f64) -> f64,
    {
        let precision = self.precision;
        let sign = if self.inverse { -1.0 } else { 1.0 };
        let (mut lo, mut hi) = (min, max);

        for _ in 0..self.max_iterations {
            let mid = (lo + hi) * 0.5;
            let now = f(mid);
            let diff = (now - target).abs();
            if diff < precision {
                return Ok((mid / precision).round() * precision);
            }
            if (mid - min).abs() < precision || (mid - max).abs() < precision {
                warn!(now, target, result = mid, diff, precision, "binary search hit its bounds");
                return Err(LiqueurError::BinarySearchOutOfBounds { target });
            }
            if sign * now > sign * target {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        warn!(target, min, max, precision, "binary search ran out of iterations");
        Err(LiqueurError::BinarySearchOutOfBounds { target })
    }
}

/// [`BinarySearch::solve`] with the given precision and direction.
pub fn solve<F>(f: F, target: f64, min: f64, max: f64, precision: f64, inverse: bool) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    BinarySearch::new().precision(precision).inverse(inverse).solve(f, target, min, max)
}
