use dashu::float::DBig;
use dashu::integer::IBig;

/// Extra significant digits carried by arithmetic beyond the display precision
pub const GUARD_DIGITS: usize = 10;

/// Decimal working precision used for a given display precision
pub fn working_precision(display_digits: usize) -> usize {
    display_digits + GUARD_DIGITS
}

/// An integer as a decimal float rounded to `precision` digits
pub fn integer(n: i64, precision: usize) -> DBig {
    DBig::from(IBig::from(n)).with_precision(precision).value()
}

pub fn is_zero(x: &DBig) -> bool {
    x.repr().is_zero()
}

pub fn is_negative(x: &DBig) -> bool {
    *x < DBig::ZERO
}

/// Exact integrality test on the decimal representation
pub fn is_integer(x: &DBig) -> bool {
    let repr = x.repr();
    if repr.is_zero() || repr.exponent() >= 0 {
        return true;
    }
    let shift = repr.exponent().unsigned_abs();
    let divisor = IBig::from(10u8).pow(shift);
    (repr.significand() % &divisor) == IBig::ZERO
}

/// Render `x` with at most `significant` significant digits (all digits when `None`).
///
/// Positional notation is used for moderate magnitudes and scientific
/// notation (`1.5e-12`) otherwise; trailing zeros are dropped.
pub fn format_decimal(x: &DBig, significant: Option<usize>) -> String {
    let rounded = match significant {
        Some(digits) if digits > 0 => x.clone().with_precision(digits).value(),
        _ => x.clone(),
    };
    let repr = rounded.repr();
    if repr.is_zero() {
        return String::from("0");
    }

    let text = repr.significand().to_string();
    let (sign, body) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let trimmed = body.trim_end_matches('0');
    let exponent = repr.exponent() + (body.len() - trimmed.len()) as isize;
    let body = trimmed;
    let len = body.len() as isize;
    let order = exponent + len - 1;
    let positional_limit = significant.map_or(21, |d| d.max(1) as isize);

    if (-5..positional_limit).contains(&order) {
        if exponent >= 0 {
            format!("{}{}{}", sign, body, "0".repeat(exponent as usize))
        } else {
            let int_len = len + exponent;
            if int_len > 0 {
                let (int_part, frac_part) = body.split_at(int_len as usize);
                format!("{}{}.{}", sign, int_part, frac_part)
            } else {
                format!("{}0.{}{}", sign, "0".repeat((-int_len) as usize), body)
            }
        }
    } else {
        let (lead, rest) = body.split_at(1);
        if rest.is_empty() {
            format!("{}{}e{}", sign, lead, order)
        } else {
            format!("{}{}.{}e{}", sign, lead, rest, order)
        }
    }
}
