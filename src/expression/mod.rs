//! Expression trees: construction, memoized evaluation, rendering and simplification

mod ast;
mod display;
mod eval;
mod latex;
mod simplify;

pub use ast::{Expression, Node};
pub use simplify::simplify;
