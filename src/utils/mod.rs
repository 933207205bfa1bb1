//! Run validation and run-record persistence

mod errors;
mod record;
mod validation;

pub use errors::UtilsError;
pub use record::{SAVE_DIR, run_file_name, run_seed, write_run_record};
pub use validation::validate_run_config;
