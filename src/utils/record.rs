use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use sha2::{Digest, Sha256};

use crate::constants::ConstantRegistry;
use crate::solver::RunConfig;
use crate::utils::errors::UtilsError;

/// Directory run records are written to by default
pub const SAVE_DIR: &str = "save";

/// Text identifying a run: its bounds followed by every constant in
/// registration order. Built-in constants appear by name, user constants as
/// `%<ordinal>=<value>`.
///
/// ```text
/// max_expr=3,max_int=5;pi,e,%0=9.81 m s^-2
/// ```
pub fn run_seed(config: &RunConfig, registry: &ConstantRegistry) -> String {
    let mut user_ordinal = 0usize;
    let entries: Vec<String> = registry
        .iter()
        .map(|constant| {
            if constant.is_default() {
                constant.name().to_string()
            } else {
                let entry = format!(
                    "%{}={:.*}",
                    user_ordinal,
                    config.precision_digits,
                    constant.value()
                );
                user_ordinal += 1;
                entry
            }
        })
        .collect();

    format!(
        "max_expr={},max_int={};{}",
        config.max_expr_size,
        config.max_int_literal,
        entries.join(",")
    )
}

/// Lowercase hex SHA-256 of the seed
pub fn run_file_name(seed: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Write the seed line and one line per reported result into `dir`,
/// creating the directory if needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the file cannot
/// be written.
pub fn write_run_record(dir: &Path, seed: &str, lines: &[String]) -> Result<PathBuf, UtilsError> {
    if !dir.is_dir() {
        debug!("Creating save directory '{}'", dir.display());
        fs::create_dir_all(dir).map_err(|source| UtilsError::CreateSaveDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let path = dir.join(run_file_name(seed));
    let mut contents = String::with_capacity(seed.len() + 1);
    contents.push_str(seed);
    contents.push('\n');
    for line in lines {
        contents.push_str(line);
        contents.push('\n');
    }

    fs::write(&path, contents).map_err(|source| UtilsError::WriteRecord {
        path: path.clone(),
        source,
    })?;
    info!("Wrote run record to '{}'", path.display());
    Ok(path)
}
