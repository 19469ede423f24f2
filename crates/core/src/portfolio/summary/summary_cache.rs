//! Caller-side cache for the live portfolio summary.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};

use super::summary_model::PortfolioSummary;

struct CachedSummary {
    summary: PortfolioSummary,
    computed_at: Instant,
}

/// Single-entry cache with a staleness window.
///
/// Every invalidation bumps a generation counter. A writer records the
/// generation before computing and `store` discards the result if an
/// invalidation happened in between.
#[derive(Default)]
pub struct SummaryCache {
    entry: RwLock<Option<CachedSummary>>,
    generation: AtomicU64,
}

impl SummaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached summary if it is younger than `ttl`.
    pub fn get(&self, ttl: Duration) -> Option<PortfolioSummary> {
        let guard = self.entry.read().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_ref()
            .filter(|cached| cached.computed_at.elapsed() < ttl)
            .map(|cached| cached.summary.clone())
    }

    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Store a summary computed under `generation`. Returns false when the
    /// cache was invalidated since.
    pub fn store(&self, generation: u64, summary: PortfolioSummary) -> bool {
        let mut guard = self.entry.write().unwrap_or_else(PoisonError::into_inner);
        if self.generation.load(Ordering::Acquire) != generation {
            return false;
        }
        *guard = Some(CachedSummary {
            summary,
            computed_at: Instant::now(),
        });
        true
    }

    pub fn invalidate(&self) {
        let mut guard = self.entry.write().unwrap_or_else(PoisonError::into_inner);
        self.generation.fetch_add(1, Ordering::AcqRel);
        *guard = None;
    }
}
