use std::f64::consts::LN_10;
use std::str::FromStr;

use dashu::base::{Abs, SquareRoot};
use dashu::float::DBig;
use dashu::integer::IBig;
use log::debug;

use crate::constants::registry::Constant;
use crate::value::DimensionedValue;
use crate::value::precision::integer;

/// Names of the built-in constants, in registration order
pub const DEFAULT_CONSTANT_NAMES: [&str; 7] = [
    "pi",
    "e",
    "euler",
    "ln2",
    "catalan",
    "phi",
    "fine-structure",
];

const FINE_STRUCTURE: &str = "0.0072973525693";

/// Digits computed beyond the requested precision before the final rounding
const SERIES_GUARD_DIGITS: usize = 5;

/// All built-in constants at `precision` digits
pub fn default_constants(precision: usize) -> Vec<Constant> {
    DEFAULT_CONSTANT_NAMES
        .iter()
        .filter_map(|name| default_constant(name, precision))
        .collect()
}

/// The built-in constant called `name`, if there is one
pub fn default_constant(name: &str, precision: usize) -> Option<Constant> {
    let work = precision + SERIES_GUARD_DIGITS;
    let magnitude = match name {
        "pi" => pi(work),
        "e" => integer(1, work).exp(),
        "euler" => euler_gamma(work),
        "ln2" => integer(2, work).ln(),
        "catalan" => catalan(work),
        "phi" => (integer(1, work) + integer(5, work).sqrt()) / integer(2, work),
        "fine-structure" => DBig::from_str(FINE_STRUCTURE).ok()?,
        _ => return None,
    };
    let magnitude = magnitude.with_precision(precision).value();
    debug!("Computed default constant {} = {}", name, magnitude);
    Some(Constant::builtin(
        name,
        DimensionedValue::dimensionless(magnitude),
    ))
}

/// `10^-(precision + 2)`, the cutoff for series terms
fn series_epsilon(precision: usize) -> DBig {
    DBig::from_parts(IBig::ONE, -(precision as isize) - 2)
}

/// `atan(1 / k)` by its Taylor series
fn arctan_inverse(k: i64, precision: usize) -> DBig {
    let epsilon = series_epsilon(precision);
    let k = integer(k, precision);
    let k_squared = &k * &k;
    let mut power = integer(1, precision) / &k;
    let mut sum = integer(0, precision);
    let mut n = 0i64;

    while power > epsilon {
        let term = &power / &integer(2 * n + 1, precision);
        sum = if n % 2 == 0 { sum + term } else { sum - term };
        power = power / &k_squared;
        n += 1;
    }
    sum
}

/// Machin's formula: `pi = 16 atan(1/5) - 4 atan(1/239)`
fn pi(precision: usize) -> DBig {
    integer(16, precision) * arctan_inverse(5, precision)
        - integer(4, precision) * arctan_inverse(239, precision)
}

/// Euler–Mascheroni constant by the Brent–McMillan algorithm
fn euler_gamma(precision: usize) -> DBig {
    let epsilon = series_epsilon(precision);
    let n = (precision as f64 * LN_10 / 4.0).ceil() as i64 + 1;
    let big_n = integer(n, precision);
    let n_squared = &big_n * &big_n;

    let mut a = -big_n.ln();
    let mut b = integer(1, precision);
    let mut u = a.clone();
    let mut v = b.clone();
    let mut k = 1i64;

    loop {
        let big_k = integer(k, precision);
        b = &b * &n_squared / (&big_k * &big_k);
        a = (&a * &n_squared / &big_k + &b) / &big_k;
        u = u + &a;
        v = v + &b;
        if k > n && a.clone().abs() < &epsilon * u.clone().abs() && b < &epsilon * &v {
            break;
        }
        k += 1;
    }
    u / v
}

/// Catalan's constant by Ramanujan's series:
/// `G = pi/8 ln(2 + sqrt 3) + 3/8 sum (n!)^2 / ((2n)! (2n+1)^2)`
fn catalan(precision: usize) -> DBig {
    let epsilon = series_epsilon(precision);
    let mut ratio = integer(1, precision);
    let mut sum = integer(0, precision);
    let mut m = 0i64;

    loop {
        let odd = 2 * m + 1;
        let term = &ratio / &integer(odd * odd, precision);
        let done = term < epsilon;
        sum = sum + term;
        if done {
            break;
        }
        ratio = ratio * integer(m + 1, precision) / integer(2 * odd, precision);
        m += 1;
    }

    let log_term = (integer(2, precision) + integer(3, precision).sqrt()).ln();
    pi(precision) / integer(8, precision) * log_term
        + integer(3, precision) * sum / integer(8, precision)
}
