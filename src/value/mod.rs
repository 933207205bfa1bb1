//! Arbitrary-precision magnitudes paired with a physical unit

mod dimensioned;
mod errors;
pub mod precision;

pub use dimensioned::DimensionedValue;
pub use errors::ValueError;

#[cfg(test)]
mod tests;
