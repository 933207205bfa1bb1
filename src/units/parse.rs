use std::str::FromStr;

use dashu::float::DBig;
use dashu::integer::IBig;
use log::debug;

use crate::units::dimension::Unit;
use crate::units::display::DERIVED_UNITS;
use crate::units::errors::UnitError;

/// Non-derived symbols: (symbol, dimension, scale to SI coherent, accepts a prefix)
const BASE_TABLE: &[(&str, Unit, &str, bool)] = &[
    ("m", Unit::METER, "1", true),
    ("g", Unit::KILOGRAM, "0.001", true),
    ("s", Unit::SECOND, "1", true),
    ("A", Unit::AMPERE, "1", true),
    ("K", Unit::KELVIN, "1", true),
    ("mol", Unit::MOLE, "1", true),
    ("cd", Unit::CANDELA, "1", true),
    ("Ω", Unit::from_exponents([1, 2, -3, -2, 0, 0, 0]), "1", true),
    ("L", Unit::from_exponents([0, 3, 0, 0, 0, 0, 0]), "0.001", true),
    ("min", Unit::SECOND, "60", false),
    ("h", Unit::SECOND, "3600", false),
    ("eV", Unit::from_exponents([1, 2, -2, 0, 0, 0, 0]), "1.602176634e-19", true),
];

/// SI prefixes as powers of ten; `da` must be tried before `d`
const PREFIXES: &[(&str, isize)] = &[
    ("da", 1),
    ("Y", 24),
    ("Z", 21),
    ("E", 18),
    ("P", 15),
    ("T", 12),
    ("G", 9),
    ("M", 6),
    ("k", 3),
    ("h", 2),
    ("d", -1),
    ("c", -2),
    ("m", -3),
    ("u", -6),
    ("µ", -6),
    ("μ", -6),
    ("n", -9),
    ("p", -12),
    ("f", -15),
    ("a", -18),
    ("z", -21),
    ("y", -24),
];

/// Multiplicative factors taking a magnitude from written units to SI coherent units
#[derive(Debug, Clone, Default)]
pub struct UnitScale {
    factors: Vec<(DBig, i32)>,
}

impl UnitScale {
    pub fn is_identity(&self) -> bool {
        self.factors.is_empty()
    }

    /// Convert `magnitude` to SI coherent units, keeping its precision
    pub fn apply(&self, magnitude: DBig) -> DBig {
        let mut out = magnitude;
        for (factor, power) in &self.factors {
            for _ in 0..power.unsigned_abs() {
                out = if *power > 0 { out * factor } else { out / factor };
            }
        }
        out
    }

    fn push(&mut self, factor: DBig, power: i32) {
        if factor != DBig::ONE && power != 0 {
            self.factors.push((factor, power));
        }
    }
}

/// Split `"9.81 m/s^2"` into its number and unit text
///
/// # Errors
///
/// Returns [`UnitError::InvalidNumber`] if the text does not start with a number.
pub fn split_quantity(text: &str) -> Result<(&str, &str), UnitError> {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digit_count = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        let frac_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        digit_count += end - frac_start;
    }
    if digit_count == 0 {
        return Err(UnitError::InvalidNumber(trimmed.to_string()));
    }

    // Only treat `e` as an exponent marker when digits follow it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut probe = end + 1;
        if probe < bytes.len() && (bytes[probe] == b'+' || bytes[probe] == b'-') {
            probe += 1;
        }
        let exp_start = probe;
        while probe < bytes.len() && bytes[probe].is_ascii_digit() {
            probe += 1;
        }
        if probe > exp_start {
            end = probe;
        }
    }

    let (number, unit) = trimmed.split_at(end);
    Ok((number, unit.trim()))
}

/// Parse unit text such as `m/s^2`, `kg*m^2 s^-2` or `keV`
///
/// # Errors
///
/// Returns an error for unknown symbols, malformed exponents or exponent overflow.
pub fn parse_unit(text: &str) -> Result<(Unit, UnitScale), UnitError> {
    debug!("Parsing unit text: '{}'", text);

    let chars: Vec<char> = text.chars().collect();
    let mut unit = Unit::DIMENSIONLESS;
    let mut scale = UnitScale::default();
    let mut invert_next = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() || c == '*' || c == '·' {
            i += 1;
            continue;
        }
        if c == '/' {
            if invert_next {
                return Err(UnitError::UnknownUnit(text.to_string()));
            }
            invert_next = true;
            i += 1;
            continue;
        }
        if !c.is_alphabetic() {
            return Err(UnitError::UnknownUnit(chars[i..].iter().collect()));
        }

        let start = i;
        while i < chars.len() && chars[i].is_alphabetic() {
            i += 1;
        }
        let symbol: String = chars[start..i].iter().collect();

        let mut power = 1;
        if i < chars.len() && chars[i] == '^' {
            i += 1;
            let exp_start = i;
            if i < chars.len() && (chars[i] == '-' || chars[i] == '+') {
                i += 1;
            }
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let exponent: String = chars[exp_start..i].iter().collect();
            power = exponent
                .parse::<i32>()
                .map_err(|_| UnitError::InvalidExponent(format!("{}^{}", symbol, exponent)))?;
        }
        if invert_next {
            power = power.checked_neg().ok_or(UnitError::ExponentOverflow)?;
            invert_next = false;
        }

        let (factor_unit, factors) = resolve_symbol(&symbol)?;
        unit = unit.multiply(&factor_unit.powi(power)?)?;
        for factor in factors {
            scale.push(factor, power);
        }
    }

    if invert_next {
        return Err(UnitError::UnknownUnit(text.to_string()));
    }

    Ok((unit, scale))
}

fn resolve_symbol(symbol: &str) -> Result<(Unit, Vec<DBig>), UnitError> {
    if let Some(found) = lookup(symbol, false)? {
        return Ok(found);
    }

    for (prefix, pow10) in PREFIXES {
        if let Some(rest) = symbol.strip_prefix(prefix)
            && !rest.is_empty()
            && let Some((unit, mut factors)) = lookup(rest, true)?
        {
            factors.push(DBig::from_parts(IBig::ONE, *pow10));
            return Ok((unit, factors));
        }
    }

    Err(UnitError::UnknownUnit(symbol.to_string()))
}

fn lookup(symbol: &str, prefixed: bool) -> Result<Option<(Unit, Vec<DBig>)>, UnitError> {
    if let Some((_, unit)) = DERIVED_UNITS.iter().find(|(s, _)| *s == symbol) {
        return Ok(Some((*unit, Vec::new())));
    }

    if let Some((_, unit, scale, prefixable)) = BASE_TABLE.iter().find(|(s, ..)| *s == symbol) {
        if prefixed && !prefixable {
            return Ok(None);
        }
        let factor =
            DBig::from_str(scale).map_err(|_| UnitError::InvalidNumber(scale.to_string()))?;
        return Ok(Some((*unit, vec![factor])));
    }

    Ok(None)
}
