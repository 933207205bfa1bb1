use thiserror::Error;

use crate::units::{Unit, UnitError};

/// Errors raised by dimensioned arithmetic.
///
/// These are local to the candidate being evaluated: the search rejects the
/// candidate and carries on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    #[error("Cannot add or subtract values of different dimension: [{lhs}] and [{rhs}]")]
    DimensionMismatch { lhs: Unit, rhs: Unit },
    #[error("Exponent must be dimensionless, got [{unit}]")]
    NonDimensionlessExponent { unit: Unit },
    #[error("Non-integer exponent on a base with dimension [{base}]")]
    NonIntegerExponentOnDimensionedBase { base: Unit },
    #[error("Non-integer exponent on a negative base")]
    NegativeBaseNonIntegerExponent,
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Power result exceeds the representable range")]
    ExponentOverflow,
    #[error(transparent)]
    Unit(#[from] UnitError),
}
