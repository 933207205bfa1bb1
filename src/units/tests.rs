use std::str::FromStr;

use dashu::float::DBig;

use crate::units::{BASE_SYMBOLS, Unit, UnitError, parse_unit, split_quantity};

const NEWTON: Unit = Unit::from_exponents([1, 1, -2, 0, 0, 0, 0]);
const JOULE: Unit = Unit::from_exponents([1, 2, -2, 0, 0, 0, 0]);
const VELOCITY: Unit = Unit::from_exponents([0, 1, -1, 0, 0, 0, 0]);
const ACCELERATION: Unit = Unit::from_exponents([0, 1, -2, 0, 0, 0, 0]);

fn dec(text: &str) -> DBig {
    DBig::from_str(text).unwrap_or(DBig::ZERO)
}

/// SI magnitude of `1 <unit text>`
fn si_value(text: &str) -> Option<DBig> {
    parse_unit(text).ok().map(|(_, scale)| scale.apply(dec("1")))
}

#[test]
fn test_unit_algebra() {
    let velocity = Unit::METER.divide(&Unit::SECOND);
    assert_eq!(velocity, Ok(VELOCITY));

    let force = Unit::KILOGRAM
        .multiply(&ACCELERATION)
        .and_then(|u| u.multiply(&Unit::DIMENSIONLESS));
    assert_eq!(force, Ok(NEWTON));

    let energy = NEWTON.multiply(&Unit::METER);
    assert_eq!(energy, Ok(JOULE));

    assert_eq!(
        Unit::SECOND.powi(-2),
        Ok(Unit::from_exponents([0, 0, -2, 0, 0, 0, 0]))
    );
    assert_eq!(JOULE.powi(0), Ok(Unit::DIMENSIONLESS));
    assert!(Unit::DIMENSIONLESS.is_dimensionless());
    assert!(!Unit::MOLE.is_dimensionless());
    assert_eq!(BASE_SYMBOLS.len(), 7);
}

#[test]
fn test_parse_compound_units() {
    let result = parse_unit("m/s^2");
    assert!(result.is_ok());
    if let Ok((unit, scale)) = result {
        assert_eq!(unit, ACCELERATION);
        assert!(scale.is_identity());
    }

    let result = parse_unit("kg*m^2 s^-2");
    assert!(result.is_ok());
    if let Ok((unit, _)) = result {
        assert_eq!(unit, JOULE);
    }

    let result = parse_unit("kg·m/s/s");
    assert!(result.is_ok());
    if let Ok((unit, _)) = result {
        assert_eq!(unit, NEWTON);
    }

    let result = parse_unit("");
    assert!(result.is_ok());
    if let Ok((unit, scale)) = result {
        assert!(unit.is_dimensionless());
        assert!(scale.is_identity());
    }
}

#[test]
fn test_parse_derived_and_alias_units() {
    let (ohm, omega) = (parse_unit("ohm"), parse_unit("Ω"));
    assert!(ohm.is_ok() && omega.is_ok());
    if let (Ok((ohm, _)), Ok((omega, _))) = (ohm, omega) {
        assert_eq!(ohm, omega);
        assert_eq!(ohm.derived_symbol(), Some("ohm"));
    }

    let result = parse_unit("N m");
    assert!(result.is_ok());
    if let Ok((unit, _)) = result {
        assert_eq!(unit, JOULE);
    }

    let result = parse_unit("Hz");
    assert!(result.is_ok());
    if let Ok((unit, _)) = result {
        assert_eq!(unit, Unit::from_exponents([0, 0, -1, 0, 0, 0, 0]));
    }
}

#[test]
fn test_prefixes_and_scales() {
    assert_eq!(si_value("km"), Some(dec("1000")));
    assert_eq!(si_value("mm"), Some(dec("0.001")));
    assert_eq!(si_value("g"), Some(dec("0.001")));
    assert_eq!(si_value("kg"), Some(dec("1")));
    assert_eq!(si_value("us"), Some(dec("0.000001")));
    assert_eq!(si_value("dam"), Some(dec("10")));
    assert_eq!(si_value("min"), Some(dec("60")));
    assert_eq!(si_value("h"), Some(dec("3600")));
    assert_eq!(si_value("hm"), Some(dec("100")));
    assert_eq!(si_value("L"), Some(dec("0.001")));
    assert_eq!(si_value("km^2"), Some(dec("1000000")));
    assert_eq!(si_value("/ms"), Some(dec("1000")));
    assert_eq!(si_value("keV"), Some(dec("1.602176634e-16")));
}

#[test]
fn test_time_units_do_not_take_prefixes() {
    assert_eq!(
        parse_unit("kmin").err(),
        Some(UnitError::UnknownUnit(String::from("kmin")))
    );
}

#[test]
fn test_parse_unit_errors() {
    assert_eq!(
        parse_unit("furlong").err(),
        Some(UnitError::UnknownUnit(String::from("furlong")))
    );
    assert!(matches!(
        parse_unit("m^x").err(),
        Some(UnitError::InvalidExponent(_))
    ));
    assert!(matches!(parse_unit("m/").err(), Some(UnitError::UnknownUnit(_))));
    assert!(matches!(parse_unit("m//s").err(), Some(UnitError::UnknownUnit(_))));
    assert!(matches!(parse_unit("m+s").err(), Some(UnitError::UnknownUnit(_))));
    assert_eq!(
        parse_unit("m^99999999999").err(),
        Some(UnitError::InvalidExponent(String::from("m^99999999999")))
    );
}

#[test]
fn test_split_quantity() {
    assert_eq!(split_quantity("5 m"), Ok(("5", "m")));
    assert_eq!(split_quantity("  6  "), Ok(("6", "")));
    assert_eq!(split_quantity("3e8m/s"), Ok(("3e8", "m/s")));
    assert_eq!(split_quantity("-1.5e-3 s"), Ok(("-1.5e-3", "s")));
    // `e` starts a unit unless digits follow it
    assert_eq!(split_quantity("2eV"), Ok(("2", "eV")));
    assert_eq!(split_quantity("9.81 m/s^2"), Ok(("9.81", "m/s^2")));

    assert_eq!(
        split_quantity("m"),
        Err(UnitError::InvalidNumber(String::from("m")))
    );
    assert!(split_quantity("").is_err());
    assert!(split_quantity("-.").is_err());
}

#[test]
fn test_unit_display() {
    assert_eq!(Unit::DIMENSIONLESS.to_string(), "");
    assert_eq!(VELOCITY.to_string(), "m s^-1");
    assert_eq!(NEWTON.to_string(), "N");
    assert_eq!(
        Unit::from_exponents([1, 2, 0, 0, 0, 0, 0]).to_string(),
        "kg m^2"
    );
    assert_eq!(
        Unit::from_exponents([0, 0, 0, 0, 1, -1, 0]).to_string(),
        "K mol^-1"
    );
}

#[test]
fn test_unit_latex() {
    assert_eq!(Unit::DIMENSIONLESS.to_latex(), "");
    assert_eq!(NEWTON.to_latex(), "\\mathrm{N}");
    assert_eq!(
        Unit::from_exponents([1, 2, -3, -2, 0, 0, 0]).to_latex(),
        "\\Omega"
    );
    assert_eq!(
        Unit::from_exponents([1, 2, 0, 0, 0, 0, 0]).to_latex(),
        "\\mathrm{kg}\\,\\mathrm{m}^{2}"
    );
}
