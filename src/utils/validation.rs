use log::{debug, warn};

use crate::solver::RunConfig;
use crate::utils::errors::UtilsError;

/// # Errors
///
/// Returns an error if the precision or the maximum expression size is zero.
pub fn validate_run_config(config: &RunConfig) -> Result<(), UtilsError> {
    debug!(
        "Validating run config: digits={}, max_expr_size={}, max_int={}",
        config.precision_digits, config.max_expr_size, config.max_int_literal
    );

    if config.precision_digits == 0 {
        warn!("Precision of zero digits requested");
        return Err(UtilsError::ZeroPrecision);
    }

    if config.max_expr_size == 0 {
        warn!("Maximum expression size of zero requested");
        return Err(UtilsError::ZeroExpressionSize);
    }

    debug!("Run config validation successful");
    Ok(())
}
