//! Balance summary caching using Moka.
//!
//! Summaries are memoized per `(customer, company)` with a short TTL
//! so dashboards and list views do not recompute the balance on every
//! render. The cache is injected into the resolver behind a trait so
//! a multi-instance deployment can swap in a distributed cache.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

use khata_shared::EngineConfig;
use khata_shared::types::{CompanyId, CustomerId};

use super::types::LedgerSummary;

/// Cache key: the tenant-scoped customer.
pub type CacheKey = (CustomerId, CompanyId);

/// Injected cache seam for balance summaries.
///
/// All methods are non-blocking; a put racing a concurrent resolve is
/// resolved as last write wins. Staleness is bounded by the TTL and
/// by explicit invalidation after mutations.
pub trait BalanceCache: Send + Sync {
    /// Returns a cached summary, or `None` on absence or expiry.
    fn get(&self, key: &CacheKey) -> Option<LedgerSummary>;

    /// Stores a summary, overwriting unconditionally.
    fn put(&self, key: CacheKey, summary: LedgerSummary);

    /// Drops the entry for one customer.
    ///
    /// Mutation call sites (invoice create/update/delete, payment
    /// recorded, opening-balance edit) must call this after commit.
    fn invalidate(&self, key: &CacheKey);

    /// Drops every entry. Administrative escape hatch.
    fn invalidate_all(&self);
}

/// Default TTL for cached summaries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

/// Default cache capacity (number of entries).
const DEFAULT_CAPACITY: u64 = 10_000;

/// In-memory TTL cache for balance summaries.
///
/// Thread-safe and suitable for concurrent access; entries are never
/// persisted across process restarts.
#[derive(Clone)]
pub struct MokaBalanceCache {
    cache: Cache<CacheKey, Arc<LedgerSummary>>,
}

impl MokaBalanceCache {
    /// Creates a cache with default settings (10k entries, 5 minute TTL).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache sized from the engine configuration.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::with_config(config.cache_capacity, config.cache_ttl_secs)
    }

    /// Creates a cache with explicit capacity and TTL.
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    ///
    /// Moka handles expiry in the background; calling this explicitly
    /// makes `entry_count` exact in tests.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for MokaBalanceCache {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceCache for MokaBalanceCache {
    fn get(&self, key: &CacheKey) -> Option<LedgerSummary> {
        self.cache.get(key).map(|summary| (*summary).clone())
    }

    fn put(&self, key: CacheKey, summary: LedgerSummary) {
        self.cache.insert(key, Arc::new(summary));
    }

    fn invalidate(&self, key: &CacheKey) {
        self.cache.invalidate(key);
    }

    fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}
