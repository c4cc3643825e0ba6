use sui_contract::{PropKind, TargetError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Configuration errors raised while building shorthand factories or resolving render targets.
pub enum ShorthandError {
    /// The requested target is neither a tag name nor a component.
    #[error("shorthand target must be a tag name or component: {0}")]
    InvalidTarget(#[from] TargetError),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Numeral conversions outside the supported vocabulary.
pub enum NumeralError {
    /// The number is outside `1..=max` or not integral.
    #[error("{value} is outside the supported numeral range 1..={max}")]
    OutOfRange {
        /// Offending value as written.
        value: String,
        /// Largest supported numeral.
        max: u8,
    },
    /// The word is not one of the supported numeral words.
    #[error("`{0}` is not a supported numeral word")]
    UnknownWord(String),
    /// The value is not a number or string.
    #[error("expected a number or numeral string, found {0}")]
    UnsupportedKind(PropKind),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Malformed validator configuration. These are programmer errors and surface at construction.
pub enum ValidatorConfigError {
    /// A prop-name list was empty.
    #[error("invalid argument supplied to {validator}, expected at least one prop name")]
    EmptyPropList {
        /// Validator constructor name.
        validator: &'static str,
    },
    /// A validator list was empty.
    #[error("invalid argument supplied to {validator}, expected at least one validator")]
    EmptyValidatorList {
        /// Validator constructor name.
        validator: &'static str,
    },
    /// A declared value list was empty.
    #[error("invalid argument supplied to {validator}, expected at least one allowed value")]
    EmptyValueList {
        /// Validator constructor name.
        validator: &'static str,
    },
    /// A props shape had no entries.
    #[error("invalid argument supplied to only_when, expected a non-empty props shape")]
    EmptyShape,
    /// A deprecation explanation was blank.
    #[error("invalid argument supplied to deprecated_with, expected a non-empty message")]
    EmptyDeprecationMessage,
}
