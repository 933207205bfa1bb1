mod config;
mod core;
mod errors;
mod generator;
mod selector;

pub use config::{RunConfig, SearchContext};
pub use self::core::{ExpressionSolver, SearchOutcome, SolverOptions};
pub use errors::SolverError;
pub use generator::{Generator, GeneratorStats, SearchResult};
pub use selector::{DEFAULT_TOP_K, Selector};
