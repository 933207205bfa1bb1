use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by run validation and run-record persistence
#[derive(Error, Debug)]
pub enum UtilsError {
    #[error("Precision must be at least one significant digit")]
    ZeroPrecision,
    #[error("Maximum expression size must be at least 1")]
    ZeroExpressionSize,
    #[error("Failed to create save directory '{}': {source}", path.display())]
    CreateSaveDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write run record '{}': {source}", path.display())]
    WriteRecord {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
