//! Physical dimensions and unit text handling

mod dimension;
mod display;
mod errors;
mod parse;

pub use dimension::{BASE_SYMBOLS, Unit};
pub use errors::UnitError;
pub use parse::{UnitScale, parse_unit, split_quantity};

#[cfg(test)]
mod tests;
