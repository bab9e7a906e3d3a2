//! Reader traits the engine consumes.
//!
//! These traits are implemented by the db crate (and by in-memory
//! fakes in tests). The engine only ever reads through them; writes
//! to the ledger log and sales documents belong to the sales/payment
//! subsystems.

use chrono::NaiveDate;

use khata_shared::types::{CompanyId, CustomerId};

use super::error::BalanceError;
use super::types::{CustomerProfile, InvoiceBalance, LedgerEntry};

/// Customer master lookup.
pub trait CustomerReader: Send + Sync {
    /// Loads the balance-relevant projection of a customer.
    ///
    /// Returns `None` when the pair does not resolve within the
    /// company scope. Soft-deleted customers are returned with
    /// `is_active == false`; the resolver treats them as not found.
    fn customer_profile(
        &self,
        customer_id: CustomerId,
        company_id: CompanyId,
    ) -> impl std::future::Future<Output = Result<Option<CustomerProfile>, BalanceError>> + Send;
}

/// Latest-entry query against the ledger log.
pub trait LedgerEntryReader: Send + Sync {
    /// Returns the most recent ledger entry for the customer, ordered
    /// by `(entry_date desc, created_at desc)`, or `None` when the
    /// customer has no entries yet.
    ///
    /// `as_of` bounds the query at a date (inclusive) for
    /// point-in-time reads.
    ///
    /// A store failure must surface as `StoreUnavailable`, never as
    /// `Ok(None)` - "no entries" and "store down" are different
    /// answers.
    fn latest_entry(
        &self,
        customer_id: CustomerId,
        company_id: CompanyId,
        as_of: Option<NaiveDate>,
    ) -> impl std::future::Future<Output = Result<Option<LedgerEntry>, BalanceError>> + Send;
}

/// Invoice listing for the fallback aggregation.
pub trait InvoiceReader: Send + Sync {
    /// Lists the customer's invoice-type documents.
    ///
    /// `as_of` bounds the listing at an invoice date (inclusive).
    /// Implementations should exclude cancelled/voided documents, but
    /// the aggregator re-filters by status regardless.
    fn invoices_for_customer(
        &self,
        customer_id: CustomerId,
        company_id: CompanyId,
        as_of: Option<NaiveDate>,
    ) -> impl std::future::Future<Output = Result<Vec<InvoiceBalance>, BalanceError>> + Send;
}
