use thiserror::Error;

/// Errors raised while building the constant registry; all are fatal to a run
#[derive(Error, Debug)]
pub enum ConstantError {
    #[error("Constant '{0}' is already defined")]
    DuplicateConstantName(String),
    #[error("Failed to read constants file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
