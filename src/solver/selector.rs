use log::debug;

use crate::solver::generator::SearchResult;

/// Number of results reported when no other limit is configured
pub const DEFAULT_TOP_K: usize = 30;

/// Reduces a working set to the best distinct results
#[derive(Debug, Clone, Copy)]
pub struct Selector {
    limit: usize,
}

impl Selector {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Keep one result per distinct error, preferring the smallest expression
    /// and, among equally small ones, the earliest. The survivors are returned
    /// in ascending error order, at most `limit` of them.
    pub fn select(&self, mut results: Vec<SearchResult>) -> Vec<SearchResult> {
        let total = results.len();

        // Stable: equal keys keep insertion order
        results.sort_by(|a, b| {
            a.error
                .cmp(&b.error)
                .then_with(|| a.expression.size().cmp(&b.expression.size()))
        });
        results.dedup_by(|later, kept| later.error == kept.error);
        results.truncate(self.limit);

        debug!(
            "Selected {} of {} admissible results (limit {})",
            results.len(),
            total,
            self.limit
        );
        results
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_K)
    }
}
