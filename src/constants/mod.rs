//! Named constants available to the search

mod defaults;
mod errors;
mod loader;
mod registry;

pub use defaults::{DEFAULT_CONSTANT_NAMES, default_constant, default_constants};
pub use errors::ConstantError;
pub use loader::{CONSTANTS_FILENAME, load_constants, parse_constants};
pub use registry::{Constant, ConstantRegistry};
