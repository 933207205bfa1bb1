use std::fmt;

use crate::expression::ast::{Expression, Node};

/// Fully parenthesized infix form: `((pi * 2) - e)`.
///
/// Constants print their registered name and literals their value with a
/// unit suffix. The formatter precision selects the significant digits of
/// literals, so `format!("{:.8}", expr)` matches [`Expression::render`].
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn write_expression(
            f: &mut fmt::Formatter,
            expr: &Expression,
            digits: Option<usize>,
        ) -> fmt::Result {
            match expr.node() {
                Node::Literal(value) => match digits {
                    Some(digits) => write!(f, "{:.*}", digits, value),
                    None => write!(f, "{}", value),
                },
                Node::Constant(constant) => write!(f, "{}", constant.name()),
                node => {
                    if let (Some((lhs, rhs)), Some(symbol)) = (node.operands(), node.symbol()) {
                        write!(f, "(")?;
                        write_expression(f, lhs, digits)?;
                        write!(f, " {} ", symbol)?;
                        write_expression(f, rhs, digits)?;
                        write!(f, ")")
                    } else {
                        Ok(())
                    }
                }
            }
        }

        write_expression(f, self, f.precision())
    }
}

impl Expression {
    /// Render with literals shown to `digits` significant digits
    pub fn render(&self, digits: usize) -> String {
        format!("{:.*}", digits, self)
    }
}
