use thiserror::Error;

use crate::format::Message;
use crate::ingredient::Kind;
use crate::measure::Measure;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LiqueurError {
    /// No registered conversion between the two measures for this family.
    #[error("no conversion from {from} to {to} for {subject}")]
    ConversionUnavailable { subject: &'static str, from: Measure, to: Measure },

    /// Value outside the physical domain of its measure.
    #[error("invalid value: {0}")]
    InvalidValue(f64),

    /// Value outside the span of a reference table column.
    #[error("value {0} lies outside the reference table")]
    OutOfRange(f64),

    /// Bisection converged onto a bound (or ran out of iterations)
    /// without meeting the target.
    #[error("binary search out of bounds while looking for {target}")]
    BinarySearchOutOfBounds { target: f64 },

    /// The requested alcohol and sugar do not fit into one volume.
    #[error("impossible combination")]
    ImpossibleCombination,

    #[error("not enough alcohol in the available ingredients")]
    InsufficientAlcohol,

    #[error("not enough sugar in the available ingredients")]
    InsufficientSugar,

    #[error("scaling basis refers to alcohol but the composition has none")]
    BasisAlcoholWithoutAlcohol,

    #[error("scaling basis refers to syrup but the composition has none")]
    BasisSugarWithoutSugar,

    /// `Composition::add` with an id that is already present.
    #[error("component id '{0}' is already in the composition")]
    DuplicateId(String),

    /// An ingredient of the wrong kind in a slot that needs a specific one.
    #[error("expected a {expected} ingredient, got {found}")]
    IngredientMismatch { expected: Kind, found: Kind },

    /// Unparseable or out-of-domain setting.
    #[error("invalid configuration {key}={value}")]
    InvalidConfig { key: String, value: String },
}

impl LiqueurError {
    /// Symbolic code handed to the message formatter.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConversionUnavailable { .. } => "CONVERSION_UNAVAILABLE",
            Self::InvalidValue(_) => "INVALID_VALUE",
            Self::OutOfRange(_) => "OUT_OF_RANGE",
            Self::BinarySearchOutOfBounds { .. } => "ERROR_BINARY_SEARCH_OUT_OF_BOUNDS",
            Self::ImpossibleCombination => "IMPOSSIBLE_COMBINATION",
            Self::InsufficientAlcohol => "INSUFFICIENT_ALCOHOL",
            Self::InsufficientSugar => "INSUFFICIENT_SUGAR",
            Self::BasisAlcoholWithoutAlcohol => "BASIS_ALCOHOL_WITHOUT_ALCOHOL",
            Self::BasisSugarWithoutSugar => "BASIS_SUGAR_WITHOUT_SUGAR",
            Self::DuplicateId(_) => "DUPLICATE_ID",
            Self::IngredientMismatch { .. } => "INGREDIENT_MISMATCH",
            Self::InvalidConfig { .. } => "INVALID_CONFIG",
        }
    }

    /// The offending number, when there is one.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::InvalidValue(v) | Self::OutOfRange(v) => Some(*v),
            Self::BinarySearchOutOfBounds { target } => Some(*target),
            _ => None,
        }
    }

    /// `{code: "ERROR_<CODE>", data: {info}}` descriptor for a translator.
    pub fn message(&self) -> Message {
        let message = Message::new(format!("ERROR_{}", self.code()));
        match self.value() {
            Some(v) => message.with("info", v),
            None => message,
        }
    }
}

pub type Result<T> = std::result::Result<T, LiqueurError>;
