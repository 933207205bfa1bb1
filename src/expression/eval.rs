use log::debug;

use crate::expression::ast::{Expression, Node};
use crate::value::{DimensionedValue, ValueError};

impl Expression {
    /// Value of the expression, computed at most once per node.
    ///
    /// Both operands of a binary node are evaluated before the operator is
    /// applied.
    ///
    /// # Errors
    ///
    /// Returns the dimensional or domain error raised by the first illegal
    /// operation, e.g. adding metres to seconds or raising a negative base
    /// to a fractional power.
    pub fn evaluate(&self) -> Result<&DimensionedValue, ValueError> {
        match self.node() {
            Node::Literal(value) => Ok(value),
            Node::Constant(constant) => Ok(constant.value()),
            _ => self
                .cache
                .get_or_init(|| self.compute())
                .as_ref()
                .map_err(Clone::clone),
        }
    }

    /// Whether a binary node already holds its memoized value
    pub fn is_evaluated(&self) -> bool {
        match self.node() {
            Node::Literal(_) | Node::Constant(_) => true,
            _ => self.cache.get().is_some(),
        }
    }

    fn compute(&self) -> Result<DimensionedValue, ValueError> {
        let result = match self.node() {
            Node::Literal(value) => Ok(value.clone()),
            Node::Constant(constant) => Ok(constant.value().clone()),
            Node::Add(l, r) => {
                let (left, right) = (l.evaluate(), r.evaluate());
                left?.add(right?)
            }
            Node::Sub(l, r) => {
                let (left, right) = (l.evaluate(), r.evaluate());
                left?.sub(right?)
            }
            Node::Mul(l, r) => {
                let (left, right) = (l.evaluate(), r.evaluate());
                left?.mul(right?)
            }
            Node::Div(l, r) => {
                let (left, right) = (l.evaluate(), r.evaluate());
                left?.div(right?)
            }
            Node::Pow(l, r) => {
                let (base, exponent) = (l.evaluate(), r.evaluate());
                base?.pow(exponent?)
            }
        };

        if let Err(e) = &result {
            debug!("Expression {} failed to evaluate: {}", self, e);
        }
        result
    }
}
