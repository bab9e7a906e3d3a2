//! Customer running-balance engine.
//!
//! Answers "what does this customer currently owe us" from two
//! computation paths:
//! - the ledger fast path: the stored running balance on the latest
//!   ledger entry, which is authoritative on its own, and
//! - the invoice fallback: signed opening balance plus the sum of
//!   outstanding invoice balances, used only while a customer has no
//!   ledger entries yet (legacy data, first document not yet posted).
//!
//! The two paths are never blended for a single figure. Results are
//! memoized per `(customer, company)` with a short TTL and invalidated
//! explicitly by the mutation call sites.

pub mod aggregator;
pub mod cache;
pub mod credit;
pub mod error;
pub mod readers;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod resolver_props;

pub use aggregator::outstanding_total;
pub use cache::{BalanceCache, CacheKey, MokaBalanceCache};
pub use credit::{CreditPolicy, CreditStatus};
pub use error::BalanceError;
pub use readers::{CustomerReader, InvoiceReader, LedgerEntryReader};
pub use resolver::BalanceResolver;
pub use types::{
    AvailableCredit, BalancePath, CustomerProfile, DateRange, InvoiceBalance, InvoiceStatus,
    LedgerEntry, LedgerSummary, OpeningBalanceType,
};
