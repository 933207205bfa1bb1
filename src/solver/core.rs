use std::time::{Duration, Instant};

use log::{info, warn};
use rayon::prelude::*;

use crate::constants::ConstantRegistry;
use crate::expression::simplify;
use crate::solver::config::{RunConfig, SearchContext};
use crate::solver::errors::SolverError;
use crate::solver::generator::{Generator, GeneratorStats, SearchResult};
use crate::solver::selector::{DEFAULT_TOP_K, Selector};
use crate::utils::validate_run_config;

/// Knobs that shape a search without changing what counts as a match
#[derive(Debug, Clone)]
pub struct SolverOptions {
    /// Maximum number of results reported
    pub top_k: usize,
    /// Simplify the reported expressions
    pub simplify: bool,
    /// Stop expanding candidates once this much time has passed
    pub timeout: Option<Duration>,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            simplify: true,
            timeout: None,
        }
    }
}

/// Selected results of a search with the merged traversal counters
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub results: Vec<SearchResult>,
    pub stats: GeneratorStats,
}

/// Main solver for finding closed-form expressions that approximate a target
#[derive(Debug, Clone, Default)]
pub struct ExpressionSolver {
    options: SolverOptions,
}

impl ExpressionSolver {
    pub fn new(options: SolverOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SolverOptions {
        &self.options
    }

    /// Enumerate every expression within the configured size and integer
    /// bounds and return the best ones, ascending by error.
    ///
    /// Each seed is explored on the rayon pool by its own [`Generator`];
    /// working sets are concatenated in seed order before selection, so the
    /// outcome does not depend on the number of threads.
    ///
    /// # Errors
    ///
    /// Returns an error if the run parameters are invalid. Failures while
    /// evaluating individual candidates only drop those candidates.
    pub fn search(
        &self,
        config: &RunConfig,
        registry: &ConstantRegistry,
    ) -> Result<SearchOutcome, SolverError> {
        validate_run_config(config)?;

        let deadline = self.options.timeout.map(|timeout| Instant::now() + timeout);
        let ctx = SearchContext::new(config, deadline);
        let constants = registry.as_slice();
        let seeds = Generator::seeds(&ctx, constants);

        info!(
            "Searching for {} with {} constants, {} seeds, max size {}, integers up to {}",
            ctx.target(),
            constants.len(),
            seeds.len(),
            ctx.max_expr_size(),
            ctx.max_int_literal()
        );

        let per_seed: Vec<(Vec<SearchResult>, GeneratorStats)> = seeds
            .into_par_iter()
            .map(|seed| {
                let mut generator = Generator::new(&ctx, constants);
                generator.explore(seed);
                generator.into_parts()
            })
            .collect();

        let mut stats = GeneratorStats::default();
        let mut working_set = Vec::new();
        for (results, seed_stats) in per_seed {
            stats = stats.merge(seed_stats);
            working_set.extend(results);
        }

        info!(
            "Evaluated {} candidates: {} admissible, {} rejected",
            stats.evaluated, stats.admissible, stats.rejected
        );
        if stats.timed_out {
            warn!("Search timed out, reporting the partial working set");
        }

        let mut results = Selector::new(self.options.top_k).select(working_set);
        if self.options.simplify {
            results = results
                .into_iter()
                .map(|result| SearchResult {
                    error: result.error,
                    expression: simplify(result.expression),
                })
                .collect();
        }

        Ok(SearchOutcome { results, stats })
    }
}
