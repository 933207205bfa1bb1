use thiserror::Error;

/// Errors raised while parsing or combining physical units
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    #[error("Unknown unit symbol: '{0}'")]
    UnknownUnit(String),
    #[error("Invalid unit exponent in '{0}'")]
    InvalidExponent(String),
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
    #[error("Unit exponent out of range")]
    ExponentOverflow,
}
