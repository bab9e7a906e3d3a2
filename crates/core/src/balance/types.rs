//! Domain types for balance resolution.
//!
//! These are narrow read projections of the customer master, ledger
//! log, and sales documents - just the fields the engine needs.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use khata_shared::types::{CompanyId, CustomerId, InvoiceId, LedgerEntryId};

use super::error::BalanceError;

/// Direction of a customer's opening balance.
///
/// Debit means the customer owes the business; credit means the
/// business owes the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningBalanceType {
    /// Customer owes the business.
    Debit,
    /// Business owes the customer.
    Credit,
}

impl OpeningBalanceType {
    /// Applies the sign convention to a non-negative opening amount.
    ///
    /// Positive means the customer owes the business.
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Debit => amount,
            Self::Credit => -amount,
        }
    }
}

/// Customer master projection read by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    /// The customer ID.
    pub customer_id: CustomerId,
    /// The company (tenant) the customer belongs to.
    pub company_id: CompanyId,
    /// Opening balance amount (non-negative).
    pub opening_balance: Decimal,
    /// Direction of the opening balance.
    pub opening_balance_type: OpeningBalanceType,
    /// Credit limit; zero is the "unlimited" sentinel.
    pub credit_limit: Decimal,
    /// False once the customer is soft-deleted.
    pub is_active: bool,
}

impl CustomerProfile {
    /// Returns the signed opening balance.
    #[must_use]
    pub fn signed_opening_balance(&self) -> Decimal {
        self.opening_balance_type.signed(self.opening_balance)
    }
}

/// One immutable record of a balance-affecting event for a customer.
///
/// Entries are append-mostly and voided only by a compensating entry.
/// For entries ordered by `(entry_date, created_at)` ascending,
/// `balance[i] = balance[i-1] + debit_amount[i] - credit_amount[i]`,
/// seeded from the signed opening balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The entry ID.
    pub id: LedgerEntryId,
    /// The customer this entry belongs to.
    pub customer_id: CustomerId,
    /// The company (tenant) scope.
    pub company_id: CompanyId,
    /// Date of the financial event.
    pub entry_date: NaiveDate,
    /// Amount owed to the business by this event.
    pub debit_amount: Decimal,
    /// Amount owed to the customer by this event.
    pub credit_amount: Decimal,
    /// Running signed balance after this entry.
    pub balance: Decimal,
    /// Insertion timestamp; tiebreaker for same-date ordering.
    pub created_at: DateTime<Utc>,
}

/// Lifecycle status of a sales document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// Not yet issued.
    Draft,
    /// Issued and unpaid.
    Issued,
    /// Issued with partial payment recorded.
    PartiallyPaid,
    /// Fully paid.
    Paid,
    /// Cancelled before payment.
    Cancelled,
    /// Voided after issue.
    Void,
}

impl InvoiceStatus {
    /// Whether a document in this status counts toward the
    /// outstanding balance.
    ///
    /// Upstream is expected to exclude cancelled/voided documents
    /// already; the aggregator re-filters them since that guarantee
    /// cannot be confirmed at this seam.
    #[must_use]
    pub const fn counts_toward_balance(self) -> bool {
        !matches!(self, Self::Cancelled | Self::Void)
    }
}

/// Invoice projection used by the fallback aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceBalance {
    /// The document ID.
    pub id: InvoiceId,
    /// Document lifecycle status.
    pub status: InvoiceStatus,
    /// Invoice total.
    pub total_amount: Decimal,
    /// Amount paid so far.
    pub paid_amount: Decimal,
    /// Stored outstanding balance; authoritative when present.
    pub balance_amount: Option<Decimal>,
}

impl InvoiceBalance {
    /// Outstanding amount on this document.
    ///
    /// The stored `balance_amount` wins when present; otherwise the
    /// balance is derived as `total - paid`.
    #[must_use]
    pub fn outstanding(&self) -> Decimal {
        self.balance_amount
            .unwrap_or(self.total_amount - self.paid_amount)
    }
}

/// Optional date bounds for point-in-time balance queries.
///
/// A non-empty range makes the query historical: it bypasses the
/// summary cache entirely and bounds the ledger/invoice reads at
/// `to` (inclusive).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Start date (inclusive).
    pub from: Option<NaiveDate>,
    /// End date (inclusive).
    pub to: Option<NaiveDate>,
}

impl DateRange {
    /// An empty range, meaning "current balance".
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            from: None,
            to: None,
        }
    }

    /// True when no bound is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Rejects malformed ranges before any I/O happens.
    ///
    /// # Errors
    ///
    /// Returns `BalanceError::InvalidFilter` when `from > to`.
    pub fn validate(&self) -> Result<(), BalanceError> {
        if let (Some(from), Some(to)) = (self.from, self.to)
            && from > to
        {
            return Err(BalanceError::InvalidFilter(format!(
                "date range start {from} is after end {to}"
            )));
        }
        Ok(())
    }
}

/// Remaining headroom between current exposure and the credit limit.
///
/// A zero credit limit means "unlimited" and must never be reported
/// as zero headroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "amount")]
pub enum AvailableCredit {
    /// No credit limit is configured.
    Unlimited,
    /// Remaining headroom; never negative.
    Amount(Decimal),
}

impl AvailableCredit {
    /// Computes headroom from a credit limit and a signed balance.
    #[must_use]
    pub fn compute(credit_limit: Decimal, current_balance: Decimal) -> Self {
        if credit_limit.is_zero() {
            Self::Unlimited
        } else {
            Self::Amount((credit_limit - current_balance.abs()).max(Decimal::ZERO))
        }
    }
}

/// Which computation path produced a summary.
///
/// Modeled as an explicit variant so callers and tests can assert the
/// path taken without call-count side channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalancePath {
    /// Stored running balance on the latest ledger entry.
    Ledger,
    /// Signed opening balance plus outstanding invoice totals.
    InvoiceFallback,
}

/// The engine's primary output: a normalized balance summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// The customer this summary describes.
    pub customer_id: CustomerId,
    /// The company (tenant) scope.
    pub company_id: CompanyId,
    /// Signed opening balance.
    pub opening_balance: Decimal,
    /// Signed current balance; positive means the customer owes the business.
    pub current_balance: Decimal,
    /// Configured credit limit; zero means unlimited.
    pub credit_limit: Decimal,
    /// Remaining credit headroom.
    pub available_credit: AvailableCredit,
    /// Which computation path produced this summary.
    pub path: BalancePath,
}

impl LedgerSummary {
    /// Builds a summary, deriving `available_credit` from the limit
    /// and balance.
    #[must_use]
    pub fn new(
        customer_id: CustomerId,
        company_id: CompanyId,
        opening_balance: Decimal,
        current_balance: Decimal,
        credit_limit: Decimal,
        path: BalancePath,
    ) -> Self {
        Self {
            customer_id,
            company_id,
            opening_balance,
            current_balance,
            credit_limit,
            available_credit: AvailableCredit::compute(credit_limit, current_balance),
            path,
        }
    }
}
