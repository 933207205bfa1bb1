use std::time::Instant;

use crate::expression::Expression;
use crate::solver::errors::SolverError;
use crate::units::Unit;
use crate::value::DimensionedValue;
use crate::value::precision::working_precision;

/// Parameters of a single search run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Significant digits shown in results
    pub precision_digits: usize,
    /// Quantity the expressions should approximate
    pub target: DimensionedValue,
    /// Number of combination steps applied to a seed expression
    pub max_expr_size: usize,
    /// Largest integer literal used in expressions
    pub max_int_literal: u32,
}

impl RunConfig {
    /// Build a configuration, parsing the target text (e.g. `5 m`) at the
    /// working precision for `precision_digits`.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Target`] if the target text is not a quantity.
    pub fn parse(
        precision_digits: usize,
        target: &str,
        max_expr_size: usize,
        max_int_literal: u32,
    ) -> Result<Self, SolverError> {
        let target = DimensionedValue::parse(target, working_precision(precision_digits))?;
        Ok(Self {
            precision_digits,
            target,
            max_expr_size,
            max_int_literal,
        })
    }

    /// Decimal digits carried by arithmetic during the search
    pub fn working_precision(&self) -> usize {
        working_precision(self.precision_digits)
    }
}

/// Read-only state shared by every generator of a run
#[derive(Debug, Clone)]
pub struct SearchContext {
    target: DimensionedValue,
    precision: usize,
    max_expr_size: usize,
    max_int_literal: u32,
    deadline: Option<Instant>,
}

impl SearchContext {
    pub fn new(config: &RunConfig, deadline: Option<Instant>) -> Self {
        Self {
            target: config.target.clone(),
            precision: config.working_precision(),
            max_expr_size: config.max_expr_size,
            max_int_literal: config.max_int_literal,
            deadline,
        }
    }

    pub fn target(&self) -> &DimensionedValue {
        &self.target
    }

    pub fn precision(&self) -> usize {
        self.precision
    }

    pub fn max_expr_size(&self) -> usize {
        self.max_expr_size
    }

    pub fn max_int_literal(&self) -> u32 {
        self.max_int_literal
    }

    pub fn expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Integer literal `n` carrying `unit`
    pub fn literal(&self, n: u32, unit: Unit) -> Expression {
        Expression::literal(DimensionedValue::from_integer(
            i64::from(n),
            unit,
            self.precision,
        ))
    }
}
