use log::trace;

use crate::expression::ast::{Expression, Node};

/// Remove syntactically evident identities from an expression.
///
/// Rules, tried in order at each node until none applies:
///
/// | Pattern         | Rewrite   |
/// |-----------------|-----------|
/// | `0 + x`         | `x`       |
/// | `x + 0`         | `x`       |
/// | `x - 0`         | `x`       |
/// | `1 * x`         | `x`       |
/// | `x * 1`         | `x`       |
/// | `x / 1`         | `x`       |
/// | `1 / (a / b)`   | `b / a`   |
///
/// `0` and `1` match any operand that evaluates to exactly that
/// dimensionless value. After a node settles its children are simplified,
/// and the node is rechecked, so a second pass never changes the result.
pub fn simplify(expr: Expression) -> Expression {
    let expr = rewrite_to_fixed_point(expr);
    let expr = simplify_children(expr);
    match rewrite(expr) {
        Ok(rewritten) => simplify(rewritten),
        Err(settled) => settled,
    }
}

fn rewrite_to_fixed_point(mut expr: Expression) -> Expression {
    loop {
        match rewrite(expr) {
            Ok(rewritten) => expr = rewritten,
            Err(settled) => return settled,
        }
    }
}

fn simplify_children(expr: Expression) -> Expression {
    if expr.children().is_none() {
        return expr;
    }
    match expr.into_node() {
        Node::Add(l, r) => Expression::add(simplify(*l), simplify(*r)),
        Node::Sub(l, r) => Expression::sub(simplify(*l), simplify(*r)),
        Node::Mul(l, r) => Expression::mul(simplify(*l), simplify(*r)),
        Node::Div(l, r) => Expression::div(simplify(*l), simplify(*r)),
        Node::Pow(l, r) => Expression::pow(simplify(*l), simplify(*r)),
        leaf => Expression::new(leaf),
    }
}

fn is_value(expr: &Expression, n: i64) -> bool {
    expr.evaluate().is_ok_and(|value| value.is_exactly(n))
}

/// Apply the first matching rule at the root: `Ok` with the rewritten
/// expression, or `Err` handing back the unchanged one.
fn rewrite(expr: Expression) -> Result<Expression, Expression> {
    let fires = match expr.node() {
        Node::Add(l, r) => is_value(l, 0) || is_value(r, 0),
        Node::Sub(_, r) => is_value(r, 0),
        Node::Mul(l, r) => is_value(l, 1) || is_value(r, 1),
        Node::Div(l, r) => {
            is_value(r, 1) || (is_value(l, 1) && matches!(r.node(), Node::Div(_, _)))
        }
        Node::Literal(_) | Node::Constant(_) | Node::Pow(_, _) => false,
    };
    if !fires {
        return Err(expr);
    }

    trace!("Simplifying {}", expr);
    let rewritten = match expr.into_node() {
        Node::Add(l, r) => {
            if is_value(&l, 0) {
                *r
            } else {
                *l
            }
        }
        Node::Sub(l, _) => *l,
        Node::Mul(l, r) => {
            if is_value(&l, 1) {
                *r
            } else {
                *l
            }
        }
        Node::Div(l, r) => {
            if is_value(&r, 1) {
                *l
            } else {
                match r.into_node() {
                    Node::Div(a, b) => Expression::div(*b, *a),
                    other => Expression::div(*l, Expression::new(other)),
                }
            }
        }
        other => Expression::new(other),
    };
    Ok(rewritten)
}
