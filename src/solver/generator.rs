use std::sync::Arc;

use dashu::float::DBig;
use log::trace;

use crate::constants::Constant;
use crate::expression::Expression;
use crate::solver::config::SearchContext;
use crate::units::Unit;
use crate::value::DimensionedValue;

/// A dimensionally admissible candidate and its distance from the target
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub error: DBig,
    pub expression: Expression,
}

/// Counters describing one generator's traversal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorStats {
    pub evaluated: u64,
    pub admissible: u64,
    pub rejected: u64,
    pub timed_out: bool,
}

impl GeneratorStats {
    pub fn merge(self, other: GeneratorStats) -> GeneratorStats {
        GeneratorStats {
            evaluated: self.evaluated + other.evaluated,
            admissible: self.admissible + other.admissible,
            rejected: self.rejected + other.rejected,
            timed_out: self.timed_out || other.timed_out,
        }
    }
}

/// Depth-bounded enumeration of expressions grown from a seed.
///
/// Every candidate is evaluated as soon as it is built. Candidates whose
/// unit matches the target are recorded with their error; every candidate
/// that evaluates is expanded further while the size budget allows, since a
/// dimensionally wrong intermediate can still combine into a right answer.
pub struct Generator<'a> {
    ctx: &'a SearchContext,
    constants: &'a [Arc<Constant>],
    results: Vec<SearchResult>,
    stats: GeneratorStats,
}

impl<'a> Generator<'a> {
    pub fn new(ctx: &'a SearchContext, constants: &'a [Arc<Constant>]) -> Self {
        Self {
            ctx,
            constants,
            results: Vec::new(),
            stats: GeneratorStats::default(),
        }
    }

    /// Size-1 starting points: every constant, then the integers
    /// `1..=max_int_literal` carrying the target's unit
    pub fn seeds(ctx: &SearchContext, constants: &[Arc<Constant>]) -> Vec<Expression> {
        let target_unit = *ctx.target().unit();
        constants
            .iter()
            .map(|c| Expression::constant(Arc::clone(c)))
            .chain((1..=ctx.max_int_literal()).map(|i| ctx.literal(i, target_unit)))
            .collect()
    }

    /// Score `seed` and everything reachable from it
    pub fn explore(&mut self, seed: Expression) {
        self.test(seed, 1);
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn stats(&self) -> GeneratorStats {
        self.stats
    }

    pub fn into_parts(self) -> (Vec<SearchResult>, GeneratorStats) {
        (self.results, self.stats)
    }

    fn test(&mut self, candidate: Expression, size: usize) {
        self.stats.evaluated += 1;
        let target = self.ctx.target();
        let error = match candidate.evaluate() {
            Ok(value) => value
                .same_dimension(target)
                .then(|| value.abs_diff(target)),
            Err(e) => {
                self.stats.rejected += 1;
                trace!("Rejected {}: {}", candidate, e);
                return;
            }
        };

        self.expand(&candidate, size + 1);

        // Recorded after its descendants; those are strictly larger, so the
        // selector's size tie-break sees the same order as a pre-order walk.
        if let Some(error) = error {
            self.stats.admissible += 1;
            self.results.push(SearchResult {
                error,
                expression: candidate,
            });
        }
    }

    fn expand(&mut self, b: &Expression, size: usize) {
        if size > self.ctx.max_expr_size() {
            return;
        }
        if self.ctx.expired() {
            self.stats.timed_out = true;
            return;
        }
        let Ok(value) = b.evaluate() else {
            return;
        };

        let constants = self.constants;
        for constant in constants {
            self.combine_with_constant(b, value, constant, size);
        }
        self.combine_with_integers(b, value, size);

        // Sign flip stays available even when no further step fits the budget
        let zero = self.ctx.literal(0, *value.unit());
        self.test(Expression::sub(zero, b.clone()), size);
    }

    fn combine_with_constant(
        &mut self,
        b: &Expression,
        value: &DimensionedValue,
        constant: &Arc<Constant>,
        size: usize,
    ) {
        let c = constant.value();
        let leaf = || Expression::constant(Arc::clone(constant));

        self.test(Expression::mul(b.clone(), leaf()), size);
        if !c.is_zero() {
            self.test(Expression::div(b.clone(), leaf()), size);
        }
        if !value.is_zero() {
            self.test(Expression::div(leaf(), b.clone()), size);
        }

        if c.same_dimension(value) {
            self.test(Expression::add(b.clone(), leaf()), size);
            self.test(Expression::sub(b.clone(), leaf()), size);
            self.test(Expression::sub(leaf(), b.clone()), size);
        }

        if value.is_dimensionless() {
            if c.is_dimensionless() {
                if c.is_positive() || (c.is_negative() && value.is_integer()) {
                    self.test(Expression::pow(leaf(), b.clone()), size);
                }
                if value.is_positive() || (value.is_negative() && c.is_integer()) {
                    self.test(Expression::pow(b.clone(), leaf()), size);
                }
                if c.is_integer() {
                    self.test(Expression::pow(b.clone(), leaf()), size);
                }
            }
            if value.is_integer() {
                self.test(Expression::pow(leaf(), b.clone()), size);
            }
        }
    }

    fn combine_with_integers(&mut self, b: &Expression, value: &DimensionedValue, size: usize) {
        let target_unit = *self.ctx.target().unit();
        let unit = *value.unit();
        let max = self.ctx.max_int_literal();

        // Scaling literals carry whatever unit moves `b` onto the target's unit
        let toward_target = target_unit.divide(&unit).ok();
        let away_from_target = unit.divide(&target_unit).ok();
        let reciprocal = unit.multiply(&target_unit).ok();

        for i in 2..=max {
            if let Some(scale) = toward_target {
                self.test(Expression::mul(b.clone(), self.ctx.literal(i, scale)), size);
            }
            if let Some(scale) = away_from_target {
                self.test(Expression::div(b.clone(), self.ctx.literal(i, scale)), size);
            }
            if value.is_dimensionless() {
                if value.is_integer() {
                    let base = self.ctx.literal(i, Unit::DIMENSIONLESS);
                    self.test(Expression::pow(base, b.clone()), size);
                }
                let exponent = self.ctx.literal(i, Unit::DIMENSIONLESS);
                self.test(Expression::pow(b.clone(), exponent), size);
            }
        }

        for i in 1..=max {
            if !value.is_zero()
                && let Some(scale) = reciprocal
            {
                self.test(Expression::div(self.ctx.literal(i, scale), b.clone()), size);
            }
            self.test(Expression::add(b.clone(), self.ctx.literal(i, unit)), size);
            self.test(Expression::sub(b.clone(), self.ctx.literal(i, unit)), size);
            self.test(Expression::sub(self.ctx.literal(i, unit), b.clone()), size);
        }
    }
}
