use crate::units::errors::UnitError;

/// Number of SI base quantities tracked by a [`Unit`]
pub const BASE_COUNT: usize = 7;

/// Symbols of the SI base units, in the order exponents are stored
pub const BASE_SYMBOLS: [&str; BASE_COUNT] = ["kg", "m", "s", "A", "K", "mol", "cd"];

const MASS: usize = 0;
const LENGTH: usize = 1;
const TIME: usize = 2;
const CURRENT: usize = 3;
const TEMPERATURE: usize = 4;
const AMOUNT: usize = 5;
const LUMINOSITY: usize = 6;

/// A physical dimension: one integer exponent per SI base quantity.
///
/// Magnitudes are always normalised to SI coherent units when they are
/// parsed, so two values are dimensionally compatible exactly when their
/// units compare equal. The dimensionless unit is the identity of the
/// multiplicative unit algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unit {
    exponents: [i32; BASE_COUNT],
}

impl Unit {
    pub const DIMENSIONLESS: Unit = Unit {
        exponents: [0; BASE_COUNT],
    };
    pub const KILOGRAM: Unit = Unit::base(MASS);
    pub const METER: Unit = Unit::base(LENGTH);
    pub const SECOND: Unit = Unit::base(TIME);
    pub const AMPERE: Unit = Unit::base(CURRENT);
    pub const KELVIN: Unit = Unit::base(TEMPERATURE);
    pub const MOLE: Unit = Unit::base(AMOUNT);
    pub const CANDELA: Unit = Unit::base(LUMINOSITY);

    const fn base(index: usize) -> Unit {
        let mut exponents = [0; BASE_COUNT];
        exponents[index] = 1;
        Unit { exponents }
    }

    /// Build a unit from exponents in `kg m s A K mol cd` order
    pub const fn from_exponents(exponents: [i32; BASE_COUNT]) -> Unit {
        Unit { exponents }
    }

    pub fn exponents(&self) -> &[i32; BASE_COUNT] {
        &self.exponents
    }

    pub fn is_dimensionless(&self) -> bool {
        self.exponents.iter().all(|&e| e == 0)
    }

    /// Two units describe the same physical dimension
    pub fn same_dimension(&self, other: &Unit) -> bool {
        self.exponents == other.exponents
    }

    /// # Errors
    ///
    /// Returns [`UnitError::ExponentOverflow`] if an exponent leaves the `i32` range.
    pub fn multiply(&self, other: &Unit) -> Result<Unit, UnitError> {
        self.zip_with(other, i32::checked_add)
    }

    /// # Errors
    ///
    /// Returns [`UnitError::ExponentOverflow`] if an exponent leaves the `i32` range.
    pub fn divide(&self, other: &Unit) -> Result<Unit, UnitError> {
        self.zip_with(other, i32::checked_sub)
    }

    /// Raise the unit to an integer power
    ///
    /// # Errors
    ///
    /// Returns [`UnitError::ExponentOverflow`] if an exponent leaves the `i32` range.
    pub fn powi(&self, power: i32) -> Result<Unit, UnitError> {
        let mut exponents = [0; BASE_COUNT];
        for (out, &e) in exponents.iter_mut().zip(self.exponents.iter()) {
            *out = e.checked_mul(power).ok_or(UnitError::ExponentOverflow)?;
        }
        Ok(Unit { exponents })
    }

    fn zip_with(
        &self,
        other: &Unit,
        op: impl Fn(i32, i32) -> Option<i32>,
    ) -> Result<Unit, UnitError> {
        let mut exponents = [0; BASE_COUNT];
        for ((out, &a), &b) in exponents
            .iter_mut()
            .zip(self.exponents.iter())
            .zip(other.exponents.iter())
        {
            *out = op(a, b).ok_or(UnitError::ExponentOverflow)?;
        }
        Ok(Unit { exponents })
    }
}
