use std::cell::OnceCell;
use std::sync::Arc;

use crate::constants::Constant;
use crate::value::{DimensionedValue, ValueError};

/// The closed set of expression node kinds
#[derive(Debug, Clone)]
pub enum Node {
    Literal(DimensionedValue),
    Constant(Arc<Constant>),
    Add(Box<Expression>, Box<Expression>),
    Sub(Box<Expression>, Box<Expression>),
    Mul(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Pow(Box<Expression>, Box<Expression>),
}

/// An expression tree over constants and literals.
///
/// Each node exclusively owns its children. The value of a binary node is
/// computed on first evaluation and memoized; nodes are never mutated in
/// place, so the cache never needs invalidating. Rewrites build new nodes.
#[derive(Debug, Clone)]
pub struct Expression {
    node: Node,
    pub(crate) cache: OnceCell<Result<DimensionedValue, ValueError>>,
}

impl Expression {
    pub fn new(node: Node) -> Self {
        Self {
            node,
            cache: OnceCell::new(),
        }
    }

    pub fn literal(value: DimensionedValue) -> Self {
        Self::new(Node::Literal(value))
    }

    pub fn constant(constant: Arc<Constant>) -> Self {
        Self::new(Node::Constant(constant))
    }

    pub fn add(lhs: Expression, rhs: Expression) -> Self {
        Self::new(Node::Add(Box::new(lhs), Box::new(rhs)))
    }

    pub fn sub(lhs: Expression, rhs: Expression) -> Self {
        Self::new(Node::Sub(Box::new(lhs), Box::new(rhs)))
    }

    pub fn mul(lhs: Expression, rhs: Expression) -> Self {
        Self::new(Node::Mul(Box::new(lhs), Box::new(rhs)))
    }

    pub fn div(lhs: Expression, rhs: Expression) -> Self {
        Self::new(Node::Div(Box::new(lhs), Box::new(rhs)))
    }

    pub fn pow(base: Expression, exponent: Expression) -> Self {
        Self::new(Node::Pow(Box::new(base), Box::new(exponent)))
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn into_node(self) -> Node {
        self.node
    }

    /// Operands of a binary node
    pub fn children(&self) -> Option<(&Expression, &Expression)> {
        self.node.operands()
    }

    /// Node count; the tie-break metric between equally good candidates
    pub fn size(&self) -> usize {
        match self.children() {
            Some((lhs, rhs)) => 1 + lhs.size() + rhs.size(),
            None => 1,
        }
    }
}

impl Node {
    pub fn operands(&self) -> Option<(&Expression, &Expression)> {
        match self {
            Node::Literal(_) | Node::Constant(_) => None,
            Node::Add(l, r)
            | Node::Sub(l, r)
            | Node::Mul(l, r)
            | Node::Div(l, r)
            | Node::Pow(l, r) => Some((l.as_ref(), r.as_ref())),
        }
    }

    /// Infix symbol of a binary node
    pub fn symbol(&self) -> Option<&'static str> {
        match self {
            Node::Literal(_) | Node::Constant(_) => None,
            Node::Add(_, _) => Some("+"),
            Node::Sub(_, _) => Some("-"),
            Node::Mul(_, _) => Some("*"),
            Node::Div(_, _) => Some("/"),
            Node::Pow(_, _) => Some("^"),
        }
    }
}
