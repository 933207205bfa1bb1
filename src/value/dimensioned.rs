use std::fmt;
use std::str::FromStr;

use dashu::base::Abs;
use dashu::float::DBig;
use dashu::integer::IBig;
use log::debug;

use crate::units::{Unit, UnitError, parse_unit, split_quantity};
use crate::value::errors::ValueError;
use crate::value::precision::{
    format_decimal, integer, is_integer, is_negative, is_zero,
};

/// Largest decimal order a power may produce before it is rejected
const MAX_POWER_ORDER: i64 = 1_000_000;

/// Digits used when estimating the order of a power
const LOG_DIGITS: usize = 20;

/// An arbitrary-precision magnitude in SI coherent units with its dimension.
///
/// Equality is exact: same magnitude and same unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionedValue {
    magnitude: DBig,
    unit: Unit,
}

impl DimensionedValue {
    pub fn new(magnitude: DBig, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    pub fn dimensionless(magnitude: DBig) -> Self {
        Self::new(magnitude, Unit::DIMENSIONLESS)
    }

    /// An exact integer carrying `unit`, at the given decimal precision
    pub fn from_integer(n: i64, unit: Unit, precision: usize) -> Self {
        Self::new(integer(n, precision), unit)
    }

    /// Parse text such as `6`, `5 m`, `3e8 m/s` or `1.2 keV` at `precision` digits.
    ///
    /// The magnitude is converted to SI coherent units.
    ///
    /// # Errors
    ///
    /// Returns an error if the number or the unit text cannot be parsed.
    pub fn parse(text: &str, precision: usize) -> Result<Self, UnitError> {
        let (number, unit_text) = split_quantity(text)?;
        let magnitude = DBig::from_str(number)
            .map_err(|_| UnitError::InvalidNumber(number.to_string()))?
            .with_precision(precision)
            .value();
        let (unit, scale) = parse_unit(unit_text)?;
        let magnitude = scale.apply(magnitude);
        debug!("Parsed '{}' as {} [{}]", text, magnitude, unit);
        Ok(Self::new(magnitude, unit))
    }

    pub fn magnitude(&self) -> &DBig {
        &self.magnitude
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn precision(&self) -> usize {
        self.magnitude.precision()
    }

    pub fn is_zero(&self) -> bool {
        is_zero(&self.magnitude)
    }

    pub fn is_negative(&self) -> bool {
        is_negative(&self.magnitude)
    }

    pub fn is_positive(&self) -> bool {
        !self.is_zero() && !self.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        is_integer(&self.magnitude)
    }

    pub fn is_dimensionless(&self) -> bool {
        self.unit.is_dimensionless()
    }

    pub fn same_dimension(&self, other: &Self) -> bool {
        self.unit.same_dimension(&other.unit)
    }

    /// Dimensionless and exactly equal to `n`
    pub fn is_exactly(&self, n: i64) -> bool {
        self.unit.is_dimensionless() && self.magnitude == DBig::from(IBig::from(n))
    }

    /// `|self - other|` on magnitudes alone
    pub fn abs_diff(&self, other: &Self) -> DBig {
        (&self.magnitude - &other.magnitude).abs()
    }

    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] unless both units have the same dimension.
    pub fn add(&self, other: &Self) -> Result<Self, ValueError> {
        self.check_additive(other)?;
        Ok(Self::new(&self.magnitude + &other.magnitude, self.unit))
    }

    /// # Errors
    ///
    /// Returns [`ValueError::DimensionMismatch`] unless both units have the same dimension.
    pub fn sub(&self, other: &Self) -> Result<Self, ValueError> {
        self.check_additive(other)?;
        Ok(Self::new(&self.magnitude - &other.magnitude, self.unit))
    }

    /// # Errors
    ///
    /// Only fails if a unit exponent overflows.
    pub fn mul(&self, other: &Self) -> Result<Self, ValueError> {
        let unit = self.unit.multiply(&other.unit)?;
        Ok(Self::new(&self.magnitude * &other.magnitude, unit))
    }

    /// # Errors
    ///
    /// Returns [`ValueError::DivisionByZero`] for an exact zero divisor.
    pub fn div(&self, other: &Self) -> Result<Self, ValueError> {
        if other.is_zero() {
            return Err(ValueError::DivisionByZero);
        }
        let unit = self.unit.divide(&other.unit)?;
        Ok(Self::new(&self.magnitude / &other.magnitude, unit))
    }

    /// Raise `self` to `exponent`.
    ///
    /// # Errors
    ///
    /// - [`ValueError::NonDimensionlessExponent`] if the exponent carries a unit
    /// - [`ValueError::NonIntegerExponentOnDimensionedBase`] for a fractional power of a dimensioned base
    /// - [`ValueError::NegativeBaseNonIntegerExponent`] for a fractional power of a negative base
    /// - [`ValueError::DivisionByZero`] for zero raised to a negative power
    /// - [`ValueError::ExponentOverflow`] if the result would be astronomically large or small
    pub fn pow(&self, exponent: &Self) -> Result<Self, ValueError> {
        if !exponent.unit.is_dimensionless() {
            return Err(ValueError::NonDimensionlessExponent {
                unit: exponent.unit,
            });
        }
        let integral = exponent.is_integer();
        if !self.unit.is_dimensionless() && !integral {
            return Err(ValueError::NonIntegerExponentOnDimensionedBase { base: self.unit });
        }
        if self.unit.is_dimensionless() && self.is_negative() && !integral {
            return Err(ValueError::NegativeBaseNonIntegerExponent);
        }

        let magnitude = if integral {
            let n = exponent.magnitude.to_int().value();
            self.powi_magnitude(&n)?
        } else {
            self.powf_magnitude(&exponent.magnitude)?
        };

        let unit = if self.unit.is_dimensionless() {
            self.unit
        } else {
            let n = exponent.magnitude.to_int().value();
            let power = i32::try_from(n).map_err(|_| ValueError::ExponentOverflow)?;
            self.unit.powi(power)?
        };

        Ok(Self::new(magnitude, unit))
    }

    fn check_additive(&self, other: &Self) -> Result<(), ValueError> {
        if self.unit.same_dimension(&other.unit) {
            Ok(())
        } else {
            Err(ValueError::DimensionMismatch {
                lhs: self.unit,
                rhs: other.unit,
            })
        }
    }

    fn one(&self) -> DBig {
        integer(1, self.precision().max(1))
    }

    fn powi_magnitude(&self, n: &IBig) -> Result<DBig, ValueError> {
        if *n == IBig::ZERO {
            return Ok(self.one());
        }
        if self.is_zero() {
            return if *n < IBig::ZERO {
                Err(ValueError::DivisionByZero)
            } else {
                Ok(self.magnitude.clone())
            };
        }
        if self.magnitude == DBig::ONE {
            return Ok(self.magnitude.clone());
        }

        check_power_order(&self.magnitude, &DBig::from(n.clone()))?;

        let raised = self.magnitude.powi(n.clone().abs());
        if *n < IBig::ZERO {
            Ok(self.one() / raised)
        } else {
            Ok(raised)
        }
    }

    fn powf_magnitude(&self, exponent: &DBig) -> Result<DBig, ValueError> {
        if self.is_zero() {
            return if is_negative(exponent) {
                Err(ValueError::DivisionByZero)
            } else {
                Ok(self.magnitude.clone())
            };
        }
        if self.magnitude == DBig::ONE {
            return Ok(self.magnitude.clone());
        }
        check_power_order(&self.magnitude, exponent)?;
        Ok(self.magnitude.powf(exponent))
    }
}

/// Reject powers whose result order `exponent * log10(|base|)` exceeds
/// [`MAX_POWER_ORDER`] in either direction. `base` must be nonzero.
fn check_power_order(base: &DBig, exponent: &DBig) -> Result<(), ValueError> {
    let ln_base = base.clone().with_precision(LOG_DIGITS).value().abs().ln();
    let exponent = exponent.clone().with_precision(LOG_DIGITS).value();
    let ln_ten = integer(10, LOG_DIGITS).ln();

    let order = (ln_base * exponent / ln_ten).abs();
    if order > integer(MAX_POWER_ORDER, LOG_DIGITS) {
        debug!("Power rejected: result order {} is out of range", order);
        Err(ValueError::ExponentOverflow)
    } else {
        Ok(())
    }
}

/// Renders the magnitude followed by the unit suffix, e.g. `9.81 m s^-2`.
/// The formatter precision selects significant digits: `format!("{:.5}", v)`.
impl fmt::Display for DimensionedValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format_decimal(&self.magnitude, f.precision()))?;
        if !self.unit.is_dimensionless() {
            write!(f, " {}", self.unit)?;
        }
        Ok(())
    }
}
