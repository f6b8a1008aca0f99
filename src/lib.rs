//! # liqueur
//!
//! Conversions between the measures of ethanol–water and sucrose–water
//! solutions, and a solver that blends real ingredients into a liqueur
//! with a given alcohol and sugar content.
//!
//! ## Highlights
//!
//! * **Any measure to any measure**: `convert(Family::Sugar, Measure::Brix, Measure::Density, 50.0)`
//! * **Ingredients**: `Ingredient::alcohol(40.0, Measure::Abv)`, `Ingredient::syrup(66.67, Measure::Brix)`
//! * **Compositions**: weights in grams, volumes via density, totals and scaling
//! * **Blend solver**: primary + fallback per axis, priority, buffer, batch basis
//! * **Translator-ready output**: every displayable value is a `{code, data}` [`Message`]
//!
//! ## Quick example
//!
//! ```
//! use liqueur::{Basis, Ingredient, Liqueur, Measure, Priority, Recipe};
//!
//! // 24 % ABV, 250 g/L sugar
//! let target = Liqueur::new(
//!     Some(Ingredient::alcohol(24.0, Measure::Abv)?),
//!     Some(Ingredient::syrup(0.25, Measure::MassConcentration)?),
//! )?;
//!
//! let recipe = Recipe::new()
//!     .alcohol(Ingredient::alcohol(12.0, Measure::Abv)?)
//!     .syrup(Ingredient::syrup(66.67, Measure::Brix)?)
//!     .fallback_alcohol(Ingredient::alcohol(40.0, Measure::Abv)?)
//!     .fallback_syrup(Ingredient::syrup(100.0, Measure::Brix)?)
//!     .priority(Priority::Syrup)
//!     .basis(Basis::total(1.0, Measure::Liter));
//!
//! let batch = target.make(&recipe)?;
//! let info = batch.info(None)?;
//! assert!((info.abv - 24.0).abs() < 0.1);
//! for (id, c) in batch.iter() {
//!     println!("{id:>16}: {:.1} mL", c.volume());
//! }
//! # Ok::<(), liqueur::LiqueurError>(())
//! ```
//!
//! ## Settings
//!
//! Solver tunables live in [`Settings`]; [`Settings::from_env`] picks up
//! `LIQUEUR_*` overrides from the environment or a `.env` file.
//!
//! ```
//! use liqueur::Settings;
//!
//! let tight = Settings::default().alcohol_precision(1e-8);
//! assert!(tight.validate().is_ok());
//! ```

// ── Internal modules ─────────────────────────────────────────────────
pub mod backend;
pub mod component;
pub mod composition;
pub mod config;
pub mod converter;
pub mod error;
pub mod format;
pub mod ingredient;
pub mod liqueur;
pub mod measure;
pub mod properties;
pub mod recipe;
pub mod search;

// ── Public re-exports ────────────────────────────────────────────────
pub use component::Component;
pub use composition::Composition;
pub use config::Settings;
pub use converter::{Converter, Route, convert};
pub use error::{LiqueurError, Result};
pub use format::{Message, round};
pub use ingredient::{Ingredient, Kind};
pub use liqueur::{Liqueur, blend};
pub use measure::{
    DENSITY_ETHANOL, DENSITY_SUCROSE, DENSITY_WATER, Family, Measure, US_FL_OZ_ML,
};
pub use properties::{CompositionInfo, LiqueurInfo};
pub use recipe::{Basis, BasisSource, Fallback, Priority, Recipe};
pub use search::{BinarySearch, solve};
