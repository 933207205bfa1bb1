use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::constants::defaults::{DEFAULT_CONSTANT_NAMES, default_constant};
use crate::constants::errors::ConstantError;
use crate::constants::registry::{Constant, ConstantRegistry};
use crate::value::DimensionedValue;

/// Constants file looked up in the working directory by default
pub const CONSTANTS_FILENAME: &str = "constants.conf";

/// Load the constant registry from a `name = value` file.
///
/// A missing file yields every built-in constant.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or if it
/// defines a name twice.
pub fn load_constants(path: &Path, precision: usize) -> Result<ConstantRegistry, ConstantError> {
    if !path.exists() {
        warn!(
            "Constants file '{}' not found, using all default constants",
            path.display()
        );
        return Ok(ConstantRegistry::with_defaults(precision));
    }

    let text = fs::read_to_string(path).map_err(|source| ConstantError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_constants(&text, precision)
}

/// Parse constant definitions, one per line.
///
/// `name = value` defines a constant; a lone `name` selects a built-in
/// constant. Malformed lines are reported and skipped.
///
/// # Errors
///
/// Returns [`ConstantError::DuplicateConstantName`] when a name is defined
/// twice or a built-in name is given a value.
pub fn parse_constants(text: &str, precision: usize) -> Result<ConstantRegistry, ConstantError> {
    let mut registry = ConstantRegistry::new();
    let mut entry = 0usize;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        entry += 1;

        let fields: Vec<&str> = line.split('=').map(str::trim).collect();
        let (name, value) = match fields.as_slice() {
            [name] => {
                match default_constant(name, precision) {
                    Some(constant) => registry.register(constant)?,
                    None => warn!(
                        "Constants entry #{} names '{}', which is not one of {{{}}}; a definition looks like \"{} = 1.0 s\", skipping",
                        entry,
                        name,
                        DEFAULT_CONSTANT_NAMES.join(", "),
                        name
                    ),
                }
                continue;
            }
            [name, value] => (*name, *value),
            [name, value, ..] => {
                warn!(
                    "Constants entry #{} has {} fields, using the first two",
                    entry,
                    fields.len()
                );
                (*name, *value)
            }
            [] => continue,
        };

        if name.is_empty() || value.is_empty() {
            warn!("Constants entry #{} has an empty name or value, skipping", entry);
            continue;
        }
        if DEFAULT_CONSTANT_NAMES.iter().any(|builtin| *builtin == name) {
            return Err(ConstantError::DuplicateConstantName(name.to_string()));
        }

        let value = match DimensionedValue::parse(value, precision) {
            Ok(value) => value,
            Err(e) => {
                warn!("Constants entry #{} value '{}' is invalid ({}), skipping", entry, value, e);
                continue;
            }
        };
        debug!("Constants entry #{}: {} = {}", entry, name, value);
        registry.register(Constant::new(name, value))?;
    }

    Ok(registry)
}
