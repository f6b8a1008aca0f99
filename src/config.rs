//! Solver tunables.
//!
//! Defaults suit every recipe tried so far; overrides come from the
//! environment (or a `.env` file) for experiments with tighter searches.
//!
//! | Variable                    | Field               | Default  |
//! |-----------------------------|---------------------|----------|
//! | `LIQUEUR_CORRECTION`        | `correction`        | `0.9999` |
//! | `LIQUEUR_ALCOHOL_PRECISION` | `alcohol_precision` | `1e-6`   |
//! | `LIQUEUR_SUGAR_PRECISION`   | `sugar_precision`   | `1e-7`   |

use serde::{Deserialize, Serialize};
use std::env;
use std::sync::Once;

use crate::error::{LiqueurError, Result};

pub const ENV_CORRECTION: &str = "LIQUEUR_CORRECTION";
pub const ENV_ALCOHOL_PRECISION: &str = "LIQUEUR_ALCOHOL_PRECISION";
pub const ENV_SUGAR_PRECISION: &str = "LIQUEUR_SUGAR_PRECISION";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Multiplier on a blended share's budget so that two allocations
    /// never overshoot the reference volume through rounding.
    pub correction: f64,
    /// Bisection precision for the alcohol blend ratio.
    pub alcohol_precision: f64,
    /// Bisection precision for the syrup blend ratio.
    pub sugar_precision: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            correction: 0.9999,
            alcohol_precision: 1e-6,
            sugar_precision: 1e-7,
        }
    }
}

impl Settings {
    // ── Builder ──────────────────────────────────────────────────────

    pub fn correction(mut self, correction: f64) -> Self {
        self.correction = correction;
        self
    }

    pub fn alcohol_precision(mut self, precision: f64) -> Self {
        self.alcohol_precision = precision;
        self
    }

    pub fn sugar_precision(mut self, precision: f64) -> Self {
        self.sugar_precision = precision;
        self
    }

    // ── Environment ──────────────────────────────────────────────────

    /// Defaults overridden by `LIQUEUR_*` variables.
    ///
    /// A `.env` file is loaded once per process, from the working
    /// directory or next to the executable.  Variables already set in the
    /// environment win over the file.
    pub fn from_env() -> Result<Self> {
        Self::load_dotenv();
        let mut settings = Self::default();
        if let Some(v) = read(ENV_CORRECTION)? {
            settings.correction = v;
        }
        if let Some(v) = read(ENV_ALCOHOL_PRECISION)? {
            settings.alcohol_precision = v;
        }
        if let Some(v) = read(ENV_SUGAR_PRECISION)? {
            settings.sugar_precision = v;
        }
        settings.validate()?;
        Ok(settings)
    }

    fn load_dotenv() {
        static DOTENV_INIT: Once = Once::new();
        DOTENV_INIT.call_once(|| {
            if dotenvy::dotenv().is_ok() { return; }
            if let Ok(exe) = env::current_exe() {
                if let Some(dir) = exe.parent() {
                    let p = dir.join(".env");
                    if p.exists() { let _ = dotenvy::from_path(&p); }
                }
            }
        });
    }

    /// `0 < correction <= 1`, both precisions finite and positive.
    pub fn validate(&self) -> Result<()> {
        if !(self.correction > 0.0 && self.correction <= 1.0) {
            return Err(invalid(ENV_CORRECTION, self.correction));
        }
        for (key, p) in [
            (ENV_ALCOHOL_PRECISION, self.alcohol_precision),
            (ENV_SUGAR_PRECISION, self.sugar_precision),
        ] {
            if !(p > 0.0 && p.is_finite()) {
                return Err(invalid(key, p));
            }
        }
        Ok(())
    }
}

fn read(key: &str) -> Result<Option<f64>> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| LiqueurError::InvalidConfig { key: key.to_string(), value: raw }),
        Err(_) => Ok(None),
    }
}

fn invalid(key: &str, value: f64) -> LiqueurError {
    LiqueurError::InvalidConfig { key: key.to_string(), value: value.to_string() }
}
