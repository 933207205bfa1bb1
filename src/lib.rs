//! closedform - A library for finding closed-form expressions for a measured quantity
//!
//! This library enumerates expressions built from named constants, small
//! integers and the operators `+ - * / ^`, evaluates them with
//! arbitrary-precision arithmetic while tracking physical units, and ranks
//! the dimensionally correct ones by their distance from a target value.

pub mod constants;
pub mod expression;
pub mod solver;
pub mod units;
pub mod utils;
pub mod value;

// Re-export the main public API
pub use constants::{Constant, ConstantError, ConstantRegistry};
pub use expression::{Expression, simplify};
pub use solver::{ExpressionSolver, RunConfig, SearchResult, SolverError, SolverOptions};
pub use units::{Unit, UnitError};
pub use utils::UtilsError;
pub use value::{DimensionedValue, ValueError};

/// Search for expressions approximating the configured target
///
/// This is a convenience function that runs a solver with default options:
/// the best 30 results, simplified, without a time limit.
///
/// # Arguments
///
/// * `config` - Target, display precision and search bounds
/// * `constants` - Constants the expressions may use
///
/// # Returns
///
/// * `Ok(results)` - At most 30 results, ascending by error, no two with the same error
/// * `Err(SolverError)` - If the run parameters are invalid
///
/// # Errors
///
/// This function will return an error if:
/// * The precision is zero digits
/// * The maximum expression size is zero
///
/// # Examples
///
/// ```
/// use closedform::value::precision::format_decimal;
/// use closedform::{ConstantRegistry, RunConfig, search};
///
/// let config = RunConfig::parse(10, "6", 2, 2)?;
/// let constants = ConstantRegistry::with_defaults(config.working_precision());
///
/// for result in search(&config, &constants)? {
///     println!(
///         "{} | err: {}",
///         result.expression.render(10),
///         format_decimal(&result.error, Some(10))
///     );
/// }
/// # Ok::<(), closedform::SolverError>(())
/// ```
pub fn search(
    config: &RunConfig,
    constants: &ConstantRegistry,
) -> Result<Vec<SearchResult>, SolverError> {
    let solver = ExpressionSolver::default();
    Ok(solver.search(config, constants)?.results)
}
