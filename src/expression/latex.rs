use crate::expression::ast::{Expression, Node};
use crate::value::DimensionedValue;
use crate::value::precision::format_decimal;

impl Expression {
    /// Render the expression as LaTeX with literals at `digits` significant digits.
    /// - Uses \cdot for multiplication and \frac for division
    /// - Parenthesizes only where precedence requires it
    /// - Maps well-known constant names to their usual symbols
    pub fn to_latex(&self, digits: usize) -> String {
        fn precedence(expr: &Expression) -> u8 {
            match expr.node() {
                Node::Add(_, _) | Node::Sub(_, _) => 1,
                Node::Mul(_, _) | Node::Div(_, _) => 2,
                Node::Pow(_, _) => 4,
                Node::Literal(_) | Node::Constant(_) => 5,
            }
        }

        fn wrap_parens(s: String) -> String {
            format!("\\left({}\\right)", s)
        }

        fn constant_symbol(name: &str) -> String {
            match name {
                "pi" => String::from("\\pi"),
                "e" => String::from("e"),
                "phi" => String::from("\\varphi"),
                "euler" => String::from("\\gamma"),
                "fine-structure" => String::from("\\alpha"),
                "catalan" => String::from("G"),
                "ln2" => String::from("\\ln 2"),
                other => format!("\\mathrm{{{}}}", other),
            }
        }

        fn literal(value: &DimensionedValue, digits: usize) -> String {
            let number = format_decimal(value.magnitude(), Some(digits));
            let number = match number.split_once('e') {
                Some((mantissa, exponent)) => {
                    format!("{} \\times 10^{{{}}}", mantissa, exponent)
                }
                None => number,
            };
            if value.is_dimensionless() {
                number
            } else {
                format!("{}\\,{}", number, value.unit().to_latex())
            }
        }

        fn fmt(expr: &Expression, digits: usize) -> String {
            match expr.node() {
                Node::Literal(value) => literal(value, digits),
                Node::Constant(constant) => constant_symbol(constant.name()),
                Node::Add(l, r) => {
                    let mut ls = fmt(l, digits);
                    let mut rs = fmt(r, digits);
                    if precedence(l) < 1 {
                        ls = wrap_parens(ls);
                    }
                    if precedence(r) < 1 {
                        rs = wrap_parens(rs);
                    }
                    format!("{} + {}", ls, rs)
                }
                Node::Sub(l, r) => {
                    let mut ls = fmt(l, digits);
                    let mut rs = fmt(r, digits);
                    if precedence(l) < 1 {
                        ls = wrap_parens(ls);
                    }
                    if precedence(r) <= 1 {
                        rs = wrap_parens(rs);
                    }
                    format!("{} - {}", ls, rs)
                }
                Node::Mul(l, r) => {
                    let mut ls = fmt(l, digits);
                    let mut rs = fmt(r, digits);
                    if precedence(l) < 2 {
                        ls = wrap_parens(ls);
                    }
                    if precedence(r) < 2 {
                        rs = wrap_parens(rs);
                    }
                    format!("{} \\cdot {}", ls, rs)
                }
                Node::Div(l, r) => {
                    format!("\\frac{{{}}}{{{}}}", fmt(l, digits), fmt(r, digits))
                }
                Node::Pow(l, r) => {
                    let mut base = fmt(l, digits);
                    let exp = fmt(r, digits);
                    let bare = match l.node() {
                        Node::Literal(value) => value.is_dimensionless() && !value.is_negative(),
                        Node::Constant(constant) => constant.name() != "ln2",
                        _ => false,
                    };
                    if !bare {
                        base = wrap_parens(base);
                    }
                    format!("{}^{{{}}}", base, exp)
                }
            }
        }

        fmt(self, digits)
    }
}
