//! Balance resolution across the ledger and invoice paths.
//!
//! `BalanceResolver` is the engine's single entry point. Each call is
//! independent and idempotent; the summary cache is the only mutable
//! shared state, and cache writes never block the authoritative read
//! path.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use khata_shared::EngineConfig;
use khata_shared::types::{CompanyId, CustomerId};

use super::aggregator::outstanding_total;
use super::cache::{BalanceCache, MokaBalanceCache};
use super::error::BalanceError;
use super::readers::{CustomerReader, InvoiceReader, LedgerEntryReader};
use super::types::{BalancePath, DateRange, LedgerSummary};

/// Resolves customer balances from the ledger log, falling back to
/// invoice aggregation for customers without ledger entries.
///
/// Once a customer has at least one ledger entry, the fast path is
/// used permanently; the two paths are never blended for a single
/// balance figure.
pub struct BalanceResolver<C, L, I, K = MokaBalanceCache> {
    customers: Arc<C>,
    ledger: Arc<L>,
    invoices: Arc<I>,
    cache: Arc<K>,
    store_timeout: Duration,
}

impl<C, L, I, K> BalanceResolver<C, L, I, K>
where
    C: CustomerReader,
    L: LedgerEntryReader,
    I: InvoiceReader,
    K: BalanceCache,
{
    /// Creates a resolver over the given readers and cache.
    #[must_use]
    pub fn new(
        customers: Arc<C>,
        ledger: Arc<L>,
        invoices: Arc<I>,
        cache: Arc<K>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            customers,
            ledger,
            invoices,
            cache,
            store_timeout: Duration::from_secs(config.store_timeout_secs),
        }
    }

    /// Resolves the customer's balance summary.
    ///
    /// With an empty `filters` this is the current balance, served
    /// from the cache when fresh. A non-empty range is a point-in-time
    /// historical query: it bypasses the cache in both directions and
    /// bounds the ledger/invoice reads at `filters.to`.
    ///
    /// # Errors
    ///
    /// - `InvalidFilter` for a malformed range, before any I/O
    /// - `CustomerNotFound` when the pair does not resolve to an
    ///   active customer in the company scope
    /// - `StoreUnavailable` / `AggregationTimeout` on backend failure;
    ///   these are never masked as a zero or stale balance
    pub async fn resolve_balance(
        &self,
        customer_id: CustomerId,
        company_id: CompanyId,
        filters: DateRange,
    ) -> Result<LedgerSummary, BalanceError> {
        filters.validate()?;
        let started = Instant::now();

        let profile = self
            .with_timeout(
                self.customers.customer_profile(customer_id, company_id),
                || BalanceError::StoreUnavailable("customer lookup timed out".into()),
            )
            .await?
            .filter(|p| p.is_active)
            .ok_or(BalanceError::CustomerNotFound {
                customer_id,
                company_id,
            })?;

        let signed_opening = profile.signed_opening_balance();
        let key = (customer_id, company_id);

        if filters.is_empty()
            && let Some(hit) = self.cache.get(&key)
        {
            debug!(
                customer_id = %customer_id,
                company_id = %company_id,
                path = "cache",
                latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                "balance served from cache"
            );
            return Ok(hit);
        }

        let latest = self
            .with_timeout(
                self.ledger.latest_entry(customer_id, company_id, filters.to),
                || BalanceError::StoreUnavailable("ledger store query timed out".into()),
            )
            .await?;

        let (current_balance, path) = match latest {
            // The stored running balance already encodes the opening
            // balance and every entry; it is authoritative on its own.
            Some(entry) => (entry.balance, BalancePath::Ledger),
            None => {
                let invoices = self
                    .with_timeout(
                        self.invoices
                            .invoices_for_customer(customer_id, company_id, filters.to),
                        || BalanceError::AggregationTimeout("invoice scan timed out".into()),
                    )
                    .await?;
                (
                    signed_opening + outstanding_total(&invoices),
                    BalancePath::InvoiceFallback,
                )
            }
        };

        let summary = LedgerSummary::new(
            customer_id,
            company_id,
            signed_opening,
            current_balance,
            profile.credit_limit,
            path,
        );

        if filters.is_empty() {
            self.cache.put(key, summary.clone());
        }

        debug!(
            customer_id = %customer_id,
            company_id = %company_id,
            path = ?path,
            latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
            "balance resolved"
        );

        Ok(summary)
    }

    /// Drops the cached summary for one customer.
    ///
    /// Every external mutation path (invoice create/update/delete,
    /// payment recorded, opening-balance edit) must call this after
    /// its write commits.
    pub fn invalidate(&self, customer_id: CustomerId, company_id: CompanyId) {
        self.cache.invalidate(&(customer_id, company_id));
    }

    /// Drops every cached summary. Administrative escape hatch.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    async fn with_timeout<T>(
        &self,
        fut: impl Future<Output = Result<T, BalanceError>> + Send,
        on_timeout: impl FnOnce() -> BalanceError,
    ) -> Result<T, BalanceError> {
        match tokio::time::timeout(self.store_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(on_timeout()),
        }
    }
}
