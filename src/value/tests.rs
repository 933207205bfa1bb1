use dashu::float::DBig;
use dashu::integer::IBig;
use proptest::prelude::*;

use crate::units::{Unit, UnitError};
use crate::value::precision::{format_decimal, working_precision};
use crate::value::{DimensionedValue, ValueError};

const PRECISION: usize = 20;

fn value(text: &str) -> DimensionedValue {
    match DimensionedValue::parse(text, PRECISION) {
        Ok(value) => value,
        Err(e) => panic!("invalid test quantity '{}': {}", text, e),
    }
}

#[test]
fn test_parse_normalises_to_si() {
    let result = DimensionedValue::parse("1.2 km", PRECISION);
    assert!(result.is_ok());
    if let Ok(v) = result {
        assert_eq!(*v.unit(), Unit::METER);
        assert_eq!(format!("{}", v), "1200 m");
    }

    let result = DimensionedValue::parse("3e8 m/s", PRECISION);
    assert!(result.is_ok());
    if let Ok(v) = result {
        assert_eq!(format!("{:.5}", v), "3e8 m s^-1");
    }

    let result = DimensionedValue::parse("-6", PRECISION);
    assert!(result.is_ok());
    if let Ok(v) = result {
        assert!(v.is_dimensionless());
        assert!(v.is_negative());
        assert!(v.is_exactly(-6));
    }
}

#[test]
fn test_parse_errors() {
    assert!(matches!(
        DimensionedValue::parse("five m", PRECISION),
        Err(UnitError::InvalidNumber(_))
    ));
    assert!(matches!(
        DimensionedValue::parse("5 parsec", PRECISION),
        Err(UnitError::UnknownUnit(_))
    ));
}

#[test]
fn test_predicates() {
    let zero = DimensionedValue::from_integer(0, Unit::METER, PRECISION);
    assert!(zero.is_zero());
    assert!(!zero.is_positive());
    assert!(!zero.is_negative());
    assert!(zero.is_integer());
    // Identity checks only match dimensionless values
    assert!(!zero.is_exactly(0));

    let half = value("0.5");
    assert!(half.is_positive());
    assert!(!half.is_integer());
    assert!(!half.is_exactly(0));

    let three = value("3.000");
    assert!(three.is_integer());
    assert!(three.is_exactly(3));
    assert_eq!(three.precision(), PRECISION);
}

#[test]
fn test_additive_operators_require_same_dimension() {
    let (a, b) = (value("5 m"), value("2 m"));
    let sum = a.add(&b);
    assert!(sum.is_ok());
    if let Ok(sum) = sum {
        assert_eq!(format!("{}", sum), "7 m");
    }
    let diff = a.sub(&b);
    assert!(diff.is_ok());
    if let Ok(diff) = diff {
        assert_eq!(format!("{}", diff), "3 m");
    }

    let time = value("2 s");
    assert_eq!(
        a.add(&time),
        Err(ValueError::DimensionMismatch {
            lhs: Unit::METER,
            rhs: Unit::SECOND,
        })
    );
    assert!(matches!(
        time.sub(&value("1")),
        Err(ValueError::DimensionMismatch { .. })
    ));
}

#[test]
fn test_multiplicative_operators_combine_units() {
    let force = value("3 kg").mul(&value("2 m/s^2"));
    assert!(force.is_ok());
    if let Ok(force) = force {
        assert_eq!(format!("{}", force), "6 N");
    }

    let speed = value("100 m").div(&value("8 s"));
    assert!(speed.is_ok());
    if let Ok(speed) = speed {
        assert_eq!(format!("{:.6}", speed), "12.5 m s^-1");
    }

    assert_eq!(
        value("1 m").div(&value("0 s")),
        Err(ValueError::DivisionByZero)
    );
}

#[test]
fn test_pow_rules() {
    let squared = value("3 m").pow(&value("2"));
    assert!(squared.is_ok());
    if let Ok(squared) = squared {
        assert_eq!(*squared.unit(), Unit::from_exponents([0, 2, 0, 0, 0, 0, 0]));
        assert_eq!(format!("{}", squared), "9 m^2");
    }

    let inverse = value("4 s").pow(&value("-1"));
    assert!(inverse.is_ok());
    if let Ok(inverse) = inverse {
        assert_eq!(format!("{}", inverse), "0.25 Hz");
    }

    let root = value("2").pow(&value("0.5"));
    assert!(root.is_ok());
    if let Ok(root) = root {
        assert_eq!(format!("{:.10}", root), "1.414213562");
    }

    let cube = value("-2").pow(&value("3"));
    assert!(cube.is_ok());
    if let Ok(cube) = cube {
        assert!(cube.is_exactly(-8));
    }

    assert_eq!(
        value("2").pow(&value("1 s")),
        Err(ValueError::NonDimensionlessExponent {
            unit: Unit::SECOND
        })
    );
    assert_eq!(
        value("2 m").pow(&value("1.5")),
        Err(ValueError::NonIntegerExponentOnDimensionedBase { base: Unit::METER })
    );
    assert_eq!(
        value("-2").pow(&value("1.5")),
        Err(ValueError::NegativeBaseNonIntegerExponent)
    );
    assert_eq!(
        value("0").pow(&value("-2")),
        Err(ValueError::DivisionByZero)
    );
}

#[test]
fn test_pow_edge_cases() {
    let one = value("7").pow(&value("0"));
    assert!(one.is_ok());
    if let Ok(one) = one {
        assert!(one.is_exactly(1));
    }

    let zero = value("0").pow(&value("2.5"));
    assert!(zero.is_ok());
    if let Ok(zero) = zero {
        assert!(zero.is_zero());
    }

    assert_eq!(
        value("10").pow(&value("100000000")),
        Err(ValueError::ExponentOverflow)
    );
    assert_eq!(
        value("1e300").pow(&value("10000")),
        Err(ValueError::ExponentOverflow)
    );

    assert_eq!(
        value("1e-300").pow(&value("-10000")),
        Err(ValueError::ExponentOverflow)
    );

    let ones = value("1").pow(&value("123456789012"));
    assert!(ones.is_ok());
    if let Ok(ones) = ones {
        assert!(ones.is_exactly(1));
    }
}

#[test]
fn test_pow_near_one_with_large_exponent() {
    let result = value("0.999999").pow(&value("123456.5"));
    assert!(result.is_ok());
    if let Ok(v) = result {
        assert_eq!(format!("{:.6}", v), "0.88386");
    }

    let result = value("1.000001").pow(&value("-2000000"));
    assert!(result.is_ok());
    if let Ok(v) = result {
        assert!(v.magnitude() < &DBig::from(IBig::from(1)));
    }
}

#[test]
fn test_abs_diff_ignores_sign() {
    let (a, b) = (value("2.5 m"), value("4 m"));
    assert_eq!(a.abs_diff(&b), b.abs_diff(&a));
    assert_eq!(format_decimal(&a.abs_diff(&b), Some(5)), "1.5");
}

#[test]
fn test_working_precision_adds_guard_digits() {
    assert_eq!(working_precision(10), 20);
    assert_eq!(working_precision(1), 11);
}

fn arb_unit() -> impl Strategy<Value = Unit> {
    prop::array::uniform7(-3i32..=3).prop_map(Unit::from_exponents)
}

fn arb_magnitude() -> impl Strategy<Value = DBig> {
    (-1_000_000i64..1_000_000, -6isize..6)
        .prop_map(|(significand, exponent)| DBig::from_parts(IBig::from(significand), exponent))
}

proptest! {
    #[test]
    fn prop_add_then_sub_round_trips(
        a in arb_magnitude(),
        b in arb_magnitude(),
        unit in arb_unit(),
    ) {
        let a = DimensionedValue::new(a.with_precision(PRECISION).value(), unit);
        let b = DimensionedValue::new(b.with_precision(PRECISION).value(), unit);

        let sum = a.add(&b);
        prop_assert!(sum.is_ok());
        if let Ok(sum) = sum {
            let back = sum.sub(&b);
            prop_assert_eq!(back, Ok(a));
        }
    }

    #[test]
    fn prop_dimensioned_exponent_is_rejected(
        base in arb_magnitude(),
        base_unit in arb_unit(),
        exponent in arb_magnitude(),
        exponent_unit in arb_unit(),
    ) {
        prop_assume!(!exponent_unit.is_dimensionless());
        let base = DimensionedValue::new(base, base_unit);
        let exponent = DimensionedValue::new(exponent, exponent_unit);
        prop_assert_eq!(
            base.pow(&exponent),
            Err(ValueError::NonDimensionlessExponent { unit: exponent_unit })
        );
    }

    #[test]
    fn prop_negative_base_needs_integer_exponent(
        base in 1i64..1_000_000,
        whole in -50i64..50,
        tenths in 1i64..10,
    ) {
        let base = DimensionedValue::dimensionless(DBig::from(IBig::from(-base)));
        let exponent =
            DimensionedValue::dimensionless(DBig::from_parts(IBig::from(whole * 10 + tenths), -1));
        prop_assert_eq!(
            base.pow(&exponent),
            Err(ValueError::NegativeBaseNonIntegerExponent)
        );
    }
}
