use thiserror::Error;

use crate::units::UnitError;
use crate::utils::UtilsError;

/// Errors that abort a search before it starts
#[derive(Error, Debug)]
pub enum SolverError {
    #[error("Invalid run configuration: {0}")]
    Config(#[from] UtilsError),
    #[error("Invalid target: {0}")]
    Target(#[from] UnitError),
}
