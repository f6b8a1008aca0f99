//! Rounding and `{code, data}` message descriptors.
//!
//! The crate never produces human-readable text itself.  Anything meant
//! for display is a [`Message`]: a symbolic code plus named numbers that a
//! translator substitutes into `{field}` placeholders of its template.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Round `value` to the nearest multiple of `precision`.
///
/// The result is also cut to `ceil(log10(precision) / log10(0.1))`
/// decimals so that `round(9.5317, 0.1)` is exactly `9.5`, not
/// `9.500000000000002`.  A non-positive precision returns `value`.
///
/// ```
/// use liqueur::round;
///
/// assert_eq!(round(9.5317, 1.0), 10.0);
/// assert_eq!(round(9.5317, 0.1), 9.5);
/// assert_eq!(round(9.5317, 0.2), 9.6);
/// ```
pub fn round(value: f64, precision: f64) -> f64 {
    if !(precision > 0.0) || !value.is_finite() {
        return value;
    }
    let snapped = (value / precision).round() * precision;
    let decimals = decimals(precision);
    let factor = 10f64.powi(decimals);
    (snapped * factor).round() / factor
}

/// Decimal places implied by a rounding precision.
fn decimals(precision: f64) -> i32 {
    let n = (precision.ln() / 0.1f64.ln()).ceil();
    n.max(0.0) as i32
}

// ── Message ─────────────────────────────────────────────────────────

/// Symbolic message: a code plus named numeric payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub code: String,
    pub data: BTreeMap<String, f64>,
}

impl Message {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into(), data: BTreeMap::new() }
    }

    /// Message with a single `value` field.
    pub fn value(code: impl Into<String>, value: f64) -> Self {
        Self::new(code).with("value", value)
    }

    pub fn with(mut self, field: impl Into<String>, value: f64) -> Self {
        self.data.insert(field.into(), value);
        self
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code)?;
        for (k, v) in &self.data {
            write!(f, " {k}={v}")?;
        }
        Ok(())
    }
}
