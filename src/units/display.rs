use std::fmt;

use crate::units::dimension::{BASE_SYMBOLS, Unit};

/// Named coherent SI derived units, preferred over base-unit products when rendering
pub(crate) const DERIVED_UNITS: &[(&str, Unit)] = &[
    ("Hz", Unit::from_exponents([0, 0, -1, 0, 0, 0, 0])),
    ("N", Unit::from_exponents([1, 1, -2, 0, 0, 0, 0])),
    ("Pa", Unit::from_exponents([1, -1, -2, 0, 0, 0, 0])),
    ("J", Unit::from_exponents([1, 2, -2, 0, 0, 0, 0])),
    ("W", Unit::from_exponents([1, 2, -3, 0, 0, 0, 0])),
    ("C", Unit::from_exponents([0, 0, 1, 1, 0, 0, 0])),
    ("V", Unit::from_exponents([1, 2, -3, -1, 0, 0, 0])),
    ("F", Unit::from_exponents([-1, -2, 4, 2, 0, 0, 0])),
    ("ohm", Unit::from_exponents([1, 2, -3, -2, 0, 0, 0])),
    ("S", Unit::from_exponents([-1, -2, 3, 2, 0, 0, 0])),
    ("Wb", Unit::from_exponents([1, 2, -2, -1, 0, 0, 0])),
    ("T", Unit::from_exponents([1, 0, -2, -1, 0, 0, 0])),
    ("H", Unit::from_exponents([1, 2, -2, -2, 0, 0, 0])),
];

impl Unit {
    /// Symbol of the named derived unit with exactly this dimension, if any
    pub fn derived_symbol(&self) -> Option<&'static str> {
        DERIVED_UNITS
            .iter()
            .find(|(_, unit)| unit == self)
            .map(|(symbol, _)| *symbol)
    }

    /// LaTeX form, e.g. `\mathrm{kg}\,\mathrm{m}^{2}`; empty when dimensionless
    pub fn to_latex(&self) -> String {
        if let Some(symbol) = self.derived_symbol() {
            return match symbol {
                "ohm" => String::from("\\Omega"),
                other => format!("\\mathrm{{{}}}", other),
            };
        }
        self.exponents()
            .iter()
            .zip(BASE_SYMBOLS.iter())
            .filter(|(e, _)| **e != 0)
            .map(|(e, symbol)| {
                if *e == 1 {
                    format!("\\mathrm{{{}}}", symbol)
                } else {
                    format!("\\mathrm{{{}}}^{{{}}}", symbol, e)
                }
            })
            .collect::<Vec<_>>()
            .join("\\,")
    }
}

/// Engineering rendering: `""` when dimensionless, a derived symbol such as
/// `N` when one matches exactly, otherwise base units like `m s^-2`.
impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(symbol) = self.derived_symbol() {
            return write!(f, "{}", symbol);
        }

        let mut first = true;
        for (e, symbol) in self.exponents().iter().zip(BASE_SYMBOLS.iter()) {
            if *e == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if *e == 1 {
                write!(f, "{}", symbol)?;
            } else {
                write!(f, "{}^{}", symbol, e)?;
            }
        }
        Ok(())
    }
}
